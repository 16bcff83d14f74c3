use anyhow::{Context, Result};
use tracing::debug;

use appstrap_core::{ExtensionRegistry, ResourceScope, load_application};

pub fn apply_command(scope_args: &[String]) -> Result<()> {
    // Scope problems are rejected before any platform work begins.
    let scope = ResourceScope::from_args(scope_args)?;
    debug!("Applying {scope} resources");

    let mut registry = ExtensionRegistry::new();
    let mut app = load_application(&mut registry).context("unable to load application")?;

    app.apply(scope)
        .with_context(|| format!("unable to apply {} resources for {}", scope, app.name()))?;

    println!("✅ Applied {} resources for '{}'", scope, app.name());
    Ok(())
}
