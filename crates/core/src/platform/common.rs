//! Helpers shared by the built-in backends

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::config::ConfigStore;
use crate::descriptor::AppDescriptor;
use crate::error::{Error, Result};

/// Directory the built-in backends render resource manifests into
pub(crate) const MANIFEST_DIR: &str = "manifests";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentManifest {
    api_version: String,
    kind: String,
    metadata: ComponentMetadata,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    params: BTreeMap<String, String>,
}

#[derive(Serialize)]
struct ComponentMetadata {
    name: String,
    application: String,
    platform: String,
}

/// Render one manifest per component (plus the application manifest itself)
/// into `<app_dir>/manifests`, returning the written paths.
pub(crate) fn render_manifests(
    app_dir: &Path,
    descriptor: &AppDescriptor,
    store: Option<&ConfigStore>,
) -> Result<Vec<PathBuf>> {
    let manifest_dir = app_dir.join(MANIFEST_DIR);
    fs::create_dir_all(&manifest_dir)?;

    let params = store.map(|s| s.merged_params()).unwrap_or_default();
    let mut components = descriptor.spec.components.clone();
    if let Some(store) = store {
        for component in store.components() {
            if !components.contains(&component) {
                components.push(component);
            }
        }
    }

    let mut written = Vec::new();
    let application = &descriptor.metadata.name;
    let platform = &descriptor.spec.platform;

    let mut targets = vec![("application".to_string(), "Application")];
    targets.extend(components.into_iter().map(|c| (c, "Component")));

    for (name, kind) in targets {
        let manifest = ComponentManifest {
            api_version: descriptor.api_version.clone(),
            kind: kind.to_string(),
            metadata: ComponentMetadata {
                name: name.clone(),
                application: application.clone(),
                platform: platform.clone(),
            },
            params: params.clone(),
        };
        let contents =
            serde_yaml::to_string(&manifest).map_err(|e| Error::Other(e.to_string()))?;
        let path = manifest_dir.join(format!("{name}.yaml"));
        debug!("Writing manifest {}", path.display());
        fs::write(&path, contents)?;
        written.push(path);
    }

    Ok(written)
}

/// Remove everything `render_manifests` produced, if present
pub(crate) fn remove_manifests(app_dir: &Path) -> Result<()> {
    let manifest_dir = app_dir.join(MANIFEST_DIR);
    if manifest_dir.is_dir() {
        debug!("Removing {}", manifest_dir.display());
        fs::remove_dir_all(&manifest_dir)?;
    }
    Ok(())
}
