//! Bootstrap paths: create a new application or load an existing one
//!
//! Two linear pipelines that converge on the platform resolver. The
//! new-application path normalizes a requested name/path and validates the
//! name; the existing-application path rehydrates name, platform and
//! configuration from the application directory itself.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::config::ConfigStore;
use crate::descriptor::AppDescriptor;
use crate::error::{Error, Result};
use crate::options::AppOptions;
use crate::platform::{Application, ExtensionRegistry, resolve_platform};

static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn name_pattern() -> &'static Regex {
    NAME_PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
            .expect("name pattern is a valid regex")
    })
}

/// Validate a derived application name against the slug grammar:
/// dot-separated segments of lower case alphanumerics and hyphens, each
/// segment starting and ending with an alphanumeric character.
pub fn validate_app_name(name: &str) -> Result<()> {
    if name_pattern().is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidAppName(name.to_string()))
    }
}

/// Compute the validated application name and effective directory for a
/// requested name, which may carry a relative or home-relative path.
pub fn resolve_app_target(requested: &str) -> Result<(String, PathBuf)> {
    let (dir_part, base) = match requested.rsplit_once('/') {
        Some((dir, base)) => (Some(dir), base),
        None => (None, requested),
    };

    let app_dir = match dir_part {
        None => {
            let cwd = env::current_dir().map_err(|e| {
                Error::PathResolution(format!("current working directory: {e}"))
            })?;
            cwd.join(base)
        }
        Some("~") => {
            let home = dirs::home_dir()
                .ok_or_else(|| Error::PathResolution("home directory".to_string()))?;
            home.join(base)
        }
        // "/my-app" splits into an empty directory part and the base name
        Some("") => PathBuf::from("/").join(base),
        Some(dir) => PathBuf::from(dir).join(base),
    };

    validate_app_name(base)?;
    Ok((base.to_string(), app_dir))
}

/// Bootstrap a brand new application and resolve its platform handle
pub fn new_application(
    registry: &mut ExtensionRegistry,
    requested: &str,
    platform: &str,
) -> Result<Box<dyn Application>> {
    let (app_name, app_dir) = resolve_app_target(requested)?;
    debug!(
        "Bootstrapping {} for platform {} in {}",
        app_name,
        platform,
        app_dir.display()
    );

    let options = AppOptions::new(platform, &app_name, app_dir);
    resolve_platform(registry, &options)
}

/// Load the application rooted at the current working directory
pub fn load_application(registry: &mut ExtensionRegistry) -> Result<Box<dyn Application>> {
    let app_dir = env::current_dir()
        .map_err(|e| Error::PathResolution(format!("current working directory: {e}")))?;
    load_application_from(registry, &app_dir)
}

/// Load the application rooted at `app_dir`
pub fn load_application_from(
    registry: &mut ExtensionRegistry,
    app_dir: &Path,
) -> Result<Box<dyn Application>> {
    let app_name = app_dir
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            Error::PathResolution(format!(
                "application name from directory {}",
                app_dir.display()
            ))
        })?
        .to_string();
    info!("AppName {} AppDir {}", app_name, app_dir.display());

    let store = ConfigStore::load(app_dir)?;
    let descriptor = AppDescriptor::load(app_dir)?;
    let platform = descriptor.spec.platform.clone();
    debug!("Descriptor names platform {platform}");

    let options = AppOptions::new(&platform, &app_name, app_dir.to_path_buf())
        .with_config_store(store)
        .with_descriptor(descriptor);
    resolve_platform(registry, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["my-app", "my-app.v1", "app0", "a", "a.b.c"] {
            assert!(validate_app_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_names_are_named_in_error() {
        for name in ["My_App", "-app", "app-", "app..v1", "APP", "my app", ""] {
            let err = validate_app_name(name).unwrap_err();
            match err {
                Error::InvalidAppName(rejected) => assert_eq!(rejected, name),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_bare_name_lands_in_cwd() {
        let (name, dir) = resolve_app_target("my-app").unwrap();
        assert_eq!(name, "my-app");
        assert_eq!(dir, env::current_dir().unwrap().join("my-app"));
    }

    #[test]
    fn test_home_shorthand_expands() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let (name, dir) = resolve_app_target("~/foo").unwrap();
        assert_eq!(name, "foo");
        assert_eq!(dir, home.join("foo"));
    }

    #[test]
    fn test_explicit_directory_is_joined() {
        let (name, dir) = resolve_app_target("/work/deploy/my-app").unwrap();
        assert_eq!(name, "my-app");
        assert_eq!(dir, PathBuf::from("/work/deploy/my-app"));
    }

    #[test]
    fn test_invalid_requested_name_fails() {
        let err = resolve_app_target("~/My_App").unwrap_err();
        match err {
            Error::InvalidAppName(rejected) => assert_eq!(rejected, "My_App"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
