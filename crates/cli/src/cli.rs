use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{apply_command, delete_command, init_command};

#[derive(Parser, Debug)]
#[command(name = "appstrap")]
#[command(version, about = "A client tool to create and manage platform applications")]
#[command(
    after_help = "ENVIRONMENT:\n    RUST_LOG=debug               Enable debug logging\n    APPSTRAP_EXTENSIONS_DIR=DIR  Directory searched for platform extensions"
)]
pub struct Appstrap {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new application directory for a platform
    #[command(visible_alias = "i")]
    Init {
        /// Application name, optionally with a path (e.g. ~/my-app or deploy/my-app)
        name: String,

        /// Target platform: "none", "local-cluster", or an installed extension
        #[arg(short, long, default_value = "none")]
        platform: String,
    },
    /// Apply the application's resources from the current directory
    #[command(visible_alias = "a")]
    Apply {
        /// Optional resource scope: all, k8s or platform (defaults to all)
        scope: Vec<String>,
    },
    /// Delete the application's resources from the current directory
    #[command(visible_alias = "d")]
    Delete {
        /// Optional resource scope: all, k8s or platform (defaults to all)
        scope: Vec<String>,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Init { name, platform } => init_command(&name, &platform),
            Commands::Apply { scope } => apply_command(&scope),
            Commands::Delete { scope } => delete_command(&scope),
        }
    }
}
