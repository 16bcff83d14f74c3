//! The local-cluster backend
//!
//! Targets a single-node cluster on the developer machine. The platform
//! slice keeps a cluster context record inside the config store directory;
//! the k8s slice renders manifests the same way the "none" backend does.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::common::{remove_manifests, render_manifests};
use super::{Application, PLATFORM_LOCAL_CLUSTER};
use crate::config::{ConfigStore, STORE_DIR};
use crate::descriptor::AppDescriptor;
use crate::error::{Error, Result};
use crate::options::AppOptions;
use crate::scope::ResourceScope;

const CLUSTER_STATE_FILE: &str = "cluster.toml";

/// Bookkeeping record for the provisioned local cluster context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ClusterState {
    context: String,
    provisioned: bool,
}

pub struct LocalClusterApp {
    name: String,
    dir: PathBuf,
    descriptor: AppDescriptor,
    store: Option<ConfigStore>,
}

impl LocalClusterApp {
    pub fn from_options(options: &AppOptions) -> Self {
        let descriptor = options
            .descriptor()
            .cloned()
            .unwrap_or_else(|| AppDescriptor::new(options.app_name(), PLATFORM_LOCAL_CLUSTER));
        Self {
            name: options.app_name().to_string(),
            dir: options.app_dir().to_path_buf(),
            descriptor,
            store: options.config_store().cloned(),
        }
    }

    fn cluster_state_path(&self) -> PathBuf {
        self.dir.join(STORE_DIR).join(CLUSTER_STATE_FILE)
    }

    fn record_cluster(&self) -> Result<()> {
        let state = ClusterState {
            context: format!("local-{}", self.name),
            provisioned: true,
        };
        let contents = toml::to_string_pretty(&state).map_err(|e| Error::Other(e.to_string()))?;
        fs::write(self.cluster_state_path(), contents)?;
        Ok(())
    }
}

impl Application for LocalClusterApp {
    fn name(&self) -> &str {
        &self.name
    }

    fn platform(&self) -> &str {
        PLATFORM_LOCAL_CLUSTER
    }

    fn app_dir(&self) -> &Path {
        &self.dir
    }

    fn create(&mut self, _scope: ResourceScope) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        self.descriptor.save(&self.dir)?;
        if self.store.is_none() {
            self.store = Some(ConfigStore::init(&self.dir)?);
        }
        info!("Created application {} in {}", self.name, self.dir.display());
        Ok(())
    }

    fn apply(&mut self, scope: ResourceScope) -> Result<()> {
        if scope.includes_platform() {
            self.record_cluster()?;
            info!("Recorded local cluster context for {}", self.name);
        }
        if scope.includes_k8s() {
            let written = render_manifests(&self.dir, &self.descriptor, self.store.as_ref())?;
            info!("Rendered {} manifest(s) for {}", written.len(), self.name);
        }
        Ok(())
    }

    fn delete(&mut self, scope: ResourceScope) -> Result<()> {
        if scope.includes_k8s() {
            remove_manifests(&self.dir)?;
        }
        if scope.includes_platform() {
            let state_path = self.cluster_state_path();
            if state_path.exists() {
                fs::remove_file(&state_path)?;
                info!("Removed local cluster context for {}", self.name);
            }
        }
        Ok(())
    }
}
