//! Platform backends and the application-handle contract
//!
//! A platform is a named backend capable of producing an application
//! handle. Two backends are built in; any other identifier is resolved
//! through the runtime extension registry.

mod common;
mod extension;
mod local_cluster;
mod none_backend;
mod resolver;

pub use extension::{
    EXTENSION_ABI_VERSION, EXTENSION_DECL_SYMBOL, EXTENSIONS_DIR_ENV, ExtensionDecl,
    ExtensionRegistry, NewAppFn,
};
pub use local_cluster::LocalClusterApp;
pub use none_backend::NoneApp;
pub use resolver::resolve_platform;

use crate::error::Result;
use crate::scope::ResourceScope;
use std::path::Path;

/// Platform identifier handled by [`NoneApp`]
pub const PLATFORM_NONE: &str = "none";

/// Platform identifier handled by [`LocalClusterApp`]
pub const PLATFORM_LOCAL_CLUSTER: &str = "local-cluster";

/// Lifecycle contract every platform backend satisfies
///
/// Exactly one boxed handle is produced per invocation; once produced it is
/// the sole object through which the caller drives the target platform.
pub trait Application: Send {
    /// Application name, as validated at bootstrap time
    fn name(&self) -> &str;

    /// Identifier of the platform backing this handle
    fn platform(&self) -> &str;

    /// On-disk application directory
    fn app_dir(&self) -> &Path;

    /// Scaffold the application and prepare platform resources
    fn create(&mut self, scope: ResourceScope) -> Result<()>;

    /// Apply the application's resources within `scope`
    fn apply(&mut self, scope: ResourceScope) -> Result<()>;

    /// Delete the application's resources within `scope`
    fn delete(&mut self, scope: ResourceScope) -> Result<()>;
}

impl std::fmt::Debug for dyn Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("name", &self.name())
            .field("platform", &self.platform())
            .field("app_dir", &self.app_dir())
            .finish()
    }
}
