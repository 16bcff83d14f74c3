//! Per-invocation options threaded from bootstrap into platform resolution
//!
//! One well-defined field per known key; required fields are constructor
//! parameters so a half-built options value cannot reach the resolver.

use std::path::{Path, PathBuf};

use crate::config::ConfigStore;
use crate::descriptor::AppDescriptor;

/// The accumulated configuration consumed once by the platform resolver
#[derive(Debug, Clone)]
pub struct AppOptions {
    platform: String,
    app_name: String,
    app_dir: PathBuf,
    config_store: Option<ConfigStore>,
    descriptor: Option<AppDescriptor>,
}

impl AppOptions {
    pub fn new(platform: &str, app_name: &str, app_dir: PathBuf) -> Self {
        Self {
            platform: platform.to_string(),
            app_name: app_name.to_string(),
            app_dir,
            config_store: None,
            descriptor: None,
        }
    }

    pub fn with_config_store(mut self, store: ConfigStore) -> Self {
        self.config_store = Some(store);
        self
    }

    pub fn with_descriptor(mut self, descriptor: AppDescriptor) -> Self {
        self.descriptor = Some(descriptor);
        self
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    pub fn config_store(&self) -> Option<&ConfigStore> {
        self.config_store.as_ref()
    }

    pub fn descriptor(&self) -> Option<&AppDescriptor> {
        self.descriptor.as_ref()
    }
}
