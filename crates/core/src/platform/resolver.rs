//! Platform dispatch
//!
//! Both bootstrap paths converge here: a platform identifier plus the
//! accumulated options become exactly one application handle, either from
//! the closed built-in set or from a runtime-loaded extension.

use tracing::debug;

use super::{
    Application, ExtensionRegistry, LocalClusterApp, NoneApp, PLATFORM_LOCAL_CLUSTER,
    PLATFORM_NONE,
};
use crate::error::Result;
use crate::options::AppOptions;

/// Resolve the platform named in `options` to a concrete application handle.
///
/// Built-in identifiers are constructed directly; no filesystem or
/// environment access happens on that path. Anything else is treated as an
/// extension name and resolved through `registry`.
pub fn resolve_platform(
    registry: &mut ExtensionRegistry,
    options: &AppOptions,
) -> Result<Box<dyn Application>> {
    let platform = options.platform();
    debug!("Resolving platform {platform}");
    match platform {
        PLATFORM_NONE => Ok(Box::new(NoneApp::from_options(options))),
        PLATFORM_LOCAL_CLUSTER => Ok(Box::new(LocalClusterApp::from_options(options))),
        _ => registry.resolve(platform, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_builtin_none_resolves_without_registry_or_env() {
        // A disabled registry proves the built-in path never consults it,
        // and no extension directory needs to exist.
        let mut registry = ExtensionRegistry::disabled();
        let options = AppOptions::new(PLATFORM_NONE, "my-app", PathBuf::from("/tmp/my-app"));

        let app = resolve_platform(&mut registry, &options).unwrap();
        assert_eq!(app.platform(), PLATFORM_NONE);
        assert_eq!(app.name(), "my-app");
    }

    #[test]
    fn test_builtin_local_cluster_resolves() {
        let mut registry = ExtensionRegistry::disabled();
        let options = AppOptions::new(
            PLATFORM_LOCAL_CLUSTER,
            "my-app",
            PathBuf::from("/tmp/my-app"),
        );

        let app = resolve_platform(&mut registry, &options).unwrap();
        assert_eq!(app.platform(), PLATFORM_LOCAL_CLUSTER);
    }
}
