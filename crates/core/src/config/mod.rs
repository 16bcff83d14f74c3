//! The nested application-config store
//!
//! A fixed-name subdirectory inside the application directory holding the
//! application's own configuration: a base `store.toml` plus any number of
//! overlay files under `overlays/`. Overlays merge over the base settings,
//! later overlay names winning, so one application directory can carry
//! several environment variants of the same configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Fixed subdirectory name of the config store inside the application directory
pub const STORE_DIR: &str = ".appstrap";

const STORE_FILE: &str = "store.toml";
const OVERLAY_DIR: &str = "overlays";

/// Settings carried by the base store file and each overlay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreSettings {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

/// Loaded view of an application's nested config store
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
    settings: StoreSettings,
    overlays: Vec<(String, StoreSettings)>,
}

impl ConfigStore {
    /// Load the store rooted at `<app_dir>/.appstrap`
    pub fn load(app_dir: &Path) -> Result<Self> {
        let root = app_dir.join(STORE_DIR);
        if !root.is_dir() {
            return Err(Error::ConfigStoreLoad {
                path: root,
                reason: "store directory does not exist".to_string(),
            });
        }

        let settings = Self::read_settings(&root.join(STORE_FILE))?;

        let mut overlays = Vec::new();
        let overlay_root = root.join(OVERLAY_DIR);
        if overlay_root.is_dir() {
            for entry in WalkDir::new(&overlay_root)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                    continue;
                }
                let name = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default()
                    .to_string();
                debug!("Loading overlay {} from {}", name, path.display());
                overlays.push((name, Self::read_settings(path)?));
            }
        }

        Ok(Self {
            root,
            settings,
            overlays,
        })
    }

    /// Scaffold an empty store for a freshly created application
    pub fn init(app_dir: &Path) -> Result<Self> {
        let root = app_dir.join(STORE_DIR);
        fs::create_dir_all(root.join(OVERLAY_DIR))?;

        let store_file = root.join(STORE_FILE);
        if !store_file.exists() {
            fs::write(
                &store_file,
                "# appstrap application config store\ncomponents = []\n\n[params]\n",
            )?;
        }

        Ok(Self {
            root,
            settings: StoreSettings::default(),
            overlays: Vec::new(),
        })
    }

    fn read_settings(path: &Path) -> Result<StoreSettings> {
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigStoreLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| Error::ConfigStoreLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    pub fn overlays(&self) -> &[(String, StoreSettings)] {
        &self.overlays
    }

    /// Components from the base settings plus every overlay, deduplicated
    pub fn components(&self) -> Vec<String> {
        let mut components = self.settings.components.clone();
        for (_, overlay) in &self.overlays {
            for component in &overlay.components {
                if !components.contains(component) {
                    components.push(component.clone());
                }
            }
        }
        components
    }

    /// Effective parameters: base settings merged with overlays in order
    pub fn merged_params(&self) -> BTreeMap<String, String> {
        let mut params = self.settings.params.clone();
        for (_, overlay) in &self.overlays {
            for (key, value) in &overlay.params {
                params.insert(key.clone(), value.clone());
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_store_is_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = ConfigStore::load(temp_dir.path()).unwrap_err();
        match err {
            Error::ConfigStoreLoad { path, .. } => {
                assert_eq!(path, temp_dir.path().join(STORE_DIR));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_init_then_load() {
        let temp_dir = TempDir::new().unwrap();
        ConfigStore::init(temp_dir.path()).unwrap();

        let store = ConfigStore::load(temp_dir.path()).unwrap();
        assert!(store.settings().components.is_empty());
        assert!(store.overlays().is_empty());
    }

    #[test]
    fn test_overlays_merge_over_base() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(STORE_DIR);
        fs::create_dir_all(root.join(OVERLAY_DIR)).unwrap();

        fs::write(
            root.join(STORE_FILE),
            "components = [\"core\"]\n\n[params]\nreplicas = \"1\"\nregion = \"local\"\n",
        )
        .unwrap();
        fs::write(
            root.join(OVERLAY_DIR).join("prod.toml"),
            "components = [\"web\"]\n\n[params]\nreplicas = \"3\"\n",
        )
        .unwrap();

        let store = ConfigStore::load(temp_dir.path()).unwrap();
        assert_eq!(store.components(), vec!["core", "web"]);

        let params = store.merged_params();
        assert_eq!(params.get("replicas").map(String::as_str), Some("3"));
        assert_eq!(params.get("region").map(String::as_str), Some("local"));
    }

    #[test]
    fn test_malformed_store_file_is_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(STORE_DIR);
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join(STORE_FILE), "components = not-a-list").unwrap();

        let err = ConfigStore::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigStoreLoad { .. }));
    }
}
