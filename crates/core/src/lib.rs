//! appstrap - application bootstrap and platform dispatch
//!
//! This crate provides functionality to:
//! - Validate application names and resolve on-disk application directories
//! - Read the persisted application descriptor and the nested config store
//! - Resolve a platform identifier to a concrete application handle, from
//!   the built-in backends or from a runtime-loaded extension
pub mod bootstrap;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod options;
pub mod platform;
pub mod scope;

// Re-export commonly used types and traits
pub use error::{Error, Result};

// Re-export main API components
pub use bootstrap::{load_application, load_application_from, new_application};
pub use config::ConfigStore;
pub use descriptor::AppDescriptor;
pub use options::AppOptions;
pub use platform::{Application, ExtensionRegistry, resolve_platform};
pub use scope::ResourceScope;
