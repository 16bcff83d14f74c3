//! The "no infrastructure" backend
//!
//! Provisions nothing: `create` scaffolds the application directory and
//! `apply` renders resource manifests locally so they can be submitted by
//! other tooling. There is no platform slice to manage.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::common::{remove_manifests, render_manifests};
use super::{Application, PLATFORM_NONE};
use crate::config::ConfigStore;
use crate::descriptor::AppDescriptor;
use crate::error::Result;
use crate::options::AppOptions;
use crate::scope::ResourceScope;

pub struct NoneApp {
    name: String,
    dir: PathBuf,
    descriptor: AppDescriptor,
    store: Option<ConfigStore>,
}

impl NoneApp {
    pub fn from_options(options: &AppOptions) -> Self {
        let descriptor = options
            .descriptor()
            .cloned()
            .unwrap_or_else(|| AppDescriptor::new(options.app_name(), PLATFORM_NONE));
        Self {
            name: options.app_name().to_string(),
            dir: options.app_dir().to_path_buf(),
            descriptor,
            store: options.config_store().cloned(),
        }
    }
}

impl Application for NoneApp {
    fn name(&self) -> &str {
        &self.name
    }

    fn platform(&self) -> &str {
        PLATFORM_NONE
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
        if scope.includes_k8s() {
            let written = render_manifests(&self.dir, &self.descriptor, self.store.as_ref())?;
            info!("Rendered {} manifest(s) for {}", written.len(), self.name);
        }
        // No platform infrastructure exists for this backend.
        Ok(())
    }

    fn delete(&mut self, scope: ResourceScope) -> Result<()> {
        if scope.includes_k8s() {
            remove_manifests(&self.dir)?;
            info!("Deleted manifests for {}", self.name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options_in(dir: &Path) -> AppOptions {
        AppOptions::new(PLATFORM_NONE, "my-app", dir.join("my-app"))
    }

    #[test]
    fn test_create_scaffolds_descriptor_and_store() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = NoneApp::from_options(&options_in(temp_dir.path()));
        app.create(ResourceScope::All).unwrap();

        let app_dir = temp_dir.path().join("my-app");
        let descriptor = AppDescriptor::load(&app_dir).unwrap();
        assert_eq!(descriptor.spec.platform, PLATFORM_NONE);
        assert!(ConfigStore::load(&app_dir).is_ok());
    }

    #[test]
    fn test_apply_and_delete_manifests() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = NoneApp::from_options(&options_in(temp_dir.path()));
        app.create(ResourceScope::All).unwrap();
        app.apply(ResourceScope::K8s).unwrap();

        let manifest = temp_dir.path().join("my-app/manifests/application.yaml");
        assert!(manifest.exists());

        app.delete(ResourceScope::All).unwrap();
        assert!(!manifest.exists());
    }

    #[test]
    fn test_platform_scope_renders_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = NoneApp::from_options(&options_in(temp_dir.path()));
        app.create(ResourceScope::All).unwrap();
        app.apply(ResourceScope::Platform).unwrap();

        assert!(!temp_dir.path().join("my-app/manifests").exists());
    }
}
