//! Runtime-loaded platform extensions
//!
//! An extension is a separately built shared library named
//! `<platform>app` plus the platform-native suffix, located in the
//! directory named by [`EXTENSIONS_DIR_ENV`]. It exports a single
//! [`ExtensionDecl`] static under [`EXTENSION_DECL_SYMBOL`]; the declared
//! ABI revision is checked at registration time, so a mismatched
//! constructor surfaces as an error instead of a call through a wrong
//! signature. Loaded libraries stay resident for the life of the process.

use std::env;
use std::path::PathBuf;

use libloading::Library;
use tracing::{debug, info};

use super::Application;
use crate::error::{Error, Result};
use crate::options::AppOptions;

/// Environment variable naming the directory that holds extension binaries
pub const EXTENSIONS_DIR_ENV: &str = "APPSTRAP_EXTENSIONS_DIR";

/// Exported declaration symbol every extension must provide
pub const EXTENSION_DECL_SYMBOL: &str = "appstrap_extension_decl";

/// ABI revision this host expects extensions to declare
pub const EXTENSION_ABI_VERSION: u32 = 1;

/// Constructor signature each extension exposes through its declaration
pub type NewAppFn = fn(&AppOptions) -> Box<dyn Application>;

/// Static declaration an extension exports under [`EXTENSION_DECL_SYMBOL`]
///
/// ```ignore
/// #[unsafe(no_mangle)]
/// pub static appstrap_extension_decl: ExtensionDecl = ExtensionDecl {
///     abi_version: EXTENSION_ABI_VERSION,
///     new_app: AcmeApp::boxed_from_options,
/// };
/// ```
#[repr(C)]
pub struct ExtensionDecl {
    pub abi_version: u32,
    pub new_app: NewAppFn,
}

struct LoadedExtension {
    platform: String,
    path: PathBuf,
    new_app: NewAppFn,
    // Keeps the constructor's code resident; never dropped before the
    // registry itself.
    _library: Library,
}

/// Append-only registry of extensions loaded into this process
///
/// Populated on first use per platform; nothing is ever unloaded within a
/// process. Owned by the caller and threaded into resolution rather than
/// living in ambient global state.
pub struct ExtensionRegistry {
    enabled: bool,
    loaded: Vec<LoadedExtension>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self {
            enabled: true,
            loaded: Vec::new(),
        }
    }

    /// Registry that refuses to load extensions entirely; every
    /// non-built-in platform becomes [`Error::UnknownPlatform`].
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            loaded: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Platforms loaded so far, in load order
    pub fn loaded_platforms(&self) -> Vec<&str> {
        self.loaded.iter().map(|e| e.platform.as_str()).collect()
    }

    /// Conventioned on-disk location of the extension for `platform`
    pub fn extension_path(platform: &str) -> PathBuf {
        let dir = env::var_os(EXTENSIONS_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_default();
        dir.join(format!("{platform}app{}", env::consts::DLL_SUFFIX))
    }

    /// Resolve `platform` to an application handle, loading its extension
    /// on first use.
    pub fn resolve(&mut self, platform: &str, options: &AppOptions) -> Result<Box<dyn Application>> {
        if !self.enabled {
            return Err(Error::UnknownPlatform(platform.to_string()));
        }

        if let Some(extension) = self.loaded.iter().find(|e| e.platform == platform) {
            debug!("Reusing loaded extension for platform {platform}");
            return Ok((extension.new_app)(options));
        }

        let extension = Self::load(platform)?;
        info!(
            "Loaded extension for platform {platform} from {}",
            extension.path.display()
        );
        let new_app = extension.new_app;
        self.loaded.push(extension);
        Ok(new_app(options))
    }

    fn load(platform: &str) -> Result<LoadedExtension> {
        let path = Self::extension_path(platform);
        debug!("Opening extension {}", path.display());

        // SAFETY: loading a library runs its initializers; the extension
        // directory is operator-controlled, which is the trust boundary
        // this mechanism is specified to have.
        let library = unsafe { Library::new(&path) }.map_err(|e| Error::ExtensionLoad {
            platform: platform.to_string(),
            path: path.clone(),
            source: e,
        })?;

        // SAFETY: the symbol is only read as `*const ExtensionDecl`; the
        // ABI revision is checked before the constructor is ever kept.
        let decl = unsafe {
            let symbol = library
                .get::<*const ExtensionDecl>(EXTENSION_DECL_SYMBOL.as_bytes())
                .map_err(|e| Error::SymbolLookup {
                    platform: platform.to_string(),
                    symbol: EXTENSION_DECL_SYMBOL,
                    source: e,
                })?;
            &**symbol
        };

        if decl.abi_version != EXTENSION_ABI_VERSION {
            return Err(Error::ExtensionAbi {
                platform: platform.to_string(),
                found: decl.abi_version,
                expected: EXTENSION_ABI_VERSION,
            });
        }

        Ok(LoadedExtension {
            platform: platform.to_string(),
            path,
            new_app: decl.new_app,
            _library: library,
        })
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
