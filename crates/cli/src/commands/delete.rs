use anyhow::{Context, Result};
use tracing::debug;

use appstrap_core::{ExtensionRegistry, ResourceScope, load_application};

pub fn delete_command(scope_args: &[String]) -> Result<()> {
    let scope = ResourceScope::from_args(scope_args)?;
    debug!("Deleting {scope} resources");

    let mut registry = ExtensionRegistry::new();
    let mut app = load_application(&mut registry).context("unable to load application")?;

    app.delete(scope)
        .with_context(|| format!("unable to delete {} resources for {}", scope, app.name()))?;

    println!("✅ Deleted {} resources for '{}'", scope, app.name());
    Ok(())
}
