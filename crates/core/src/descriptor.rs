//! The persisted per-application descriptor
//!
//! A fixed-name YAML file inside the application directory naming the
//! platform and application metadata. Immutable once read within a single
//! invocation; read failures and parse failures stay distinct error kinds.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed descriptor file name inside the application directory
pub const DESCRIPTOR_FILE: &str = "app.yaml";

const API_VERSION: &str = "appstrap.dev/v1alpha1";
const KIND: &str = "Application";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDescriptor {
    pub api_version: String,
    pub kind: String,
    pub metadata: AppMetadata,
    pub spec: AppSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSpec {
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,
}

impl AppDescriptor {
    pub fn new(name: &str, platform: &str) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata: AppMetadata {
                name: name.to_string(),
                namespace: None,
            },
            spec: AppSpec {
                platform: platform.to_string(),
                version: None,
                components: Vec::new(),
            },
        }
    }

    /// Read and parse the descriptor stored in `app_dir`
    pub fn load(app_dir: &Path) -> Result<Self> {
        let path = app_dir.join(DESCRIPTOR_FILE);
        let contents = fs::read_to_string(&path).map_err(|e| Error::DescriptorRead {
            path: path.clone(),
            source: e,
        })?;
        serde_yaml::from_str(&contents).map_err(|e| Error::DescriptorParse { path, source: e })
    }

    /// Write the descriptor into `app_dir` under its fixed file name
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| Error::Other(format!("could not serialize descriptor: {e}")))?;
        fs::write(app_dir.join(DESCRIPTOR_FILE), contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let mut descriptor = AppDescriptor::new("my-app", "local-cluster");
        descriptor.spec.components = vec!["core".to_string(), "web".to_string()];

        descriptor.save(temp_dir.path()).unwrap();
        let loaded = AppDescriptor::load(temp_dir.path()).unwrap();

        assert_eq!(loaded, descriptor);
        assert_eq!(loaded.spec.platform, "local-cluster");
        assert_eq!(loaded.metadata.name, "my-app");
    }

    #[test]
    fn test_missing_descriptor_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = AppDescriptor::load(temp_dir.path()).unwrap_err();
        match err {
            Error::DescriptorRead { path, .. } => {
                assert_eq!(path, temp_dir.path().join(DESCRIPTOR_FILE));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_descriptor_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(DESCRIPTOR_FILE),
            "apiVersion: [not, a, descriptor",
        )
        .unwrap();

        let err = AppDescriptor::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::DescriptorParse { .. }));
    }
}
