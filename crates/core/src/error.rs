use std::io;
use std::path::PathBuf;

/// Errors that can occur during appstrap operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown extra arguments {0:?}")]
    UnexpectedArguments(Vec<String>),

    #[error("unrecognized resource scope \"{0}\" (expected one of: all, k8s, platform)")]
    UnrecognizedScope(String),

    #[error(
        "invalid application name \"{0}\": must consist of lower case alphanumeric characters, \
         '-' or '.', and must start and end with an alphanumeric character"
    )]
    InvalidAppName(String),

    #[error("could not determine {0}")]
    PathResolution(String),

    #[error("could not load extension {} for platform {platform}: {source}", .path.display())]
    ExtensionLoad {
        platform: String,
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("could not find symbol {symbol} for platform {platform}: {source}")]
    SymbolLookup {
        platform: String,
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },

    #[error(
        "extension for platform {platform} declares ABI revision {found}, expected {expected}"
    )]
    ExtensionAbi {
        platform: String,
        found: u32,
        expected: u32,
    },

    #[error("could not read descriptor {}: {source}", .path.display())]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse descriptor {}: {source}", .path.display())]
    DescriptorParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("could not load config store at {}: {reason}", .path.display())]
    ConfigStoreLoad { path: PathBuf, reason: String },

    #[error("unknown platform {0}")]
    UnknownPlatform(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for appstrap operations
pub type Result<T> = std::result::Result<T, Error>;
