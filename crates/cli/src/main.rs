use anyhow::Result;
use clap::Parser;

use appstrap::Appstrap;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Appstrap::parse();
    cli.command.execute()
}
