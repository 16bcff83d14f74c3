use anyhow::{Context, Result};
use tracing::debug;

use appstrap_core::{ExtensionRegistry, ResourceScope, new_application};

pub fn init_command(name: &str, platform: &str) -> Result<()> {
    debug!("Bootstrapping application {} for platform {}", name, platform);

    let mut registry = ExtensionRegistry::new();
    let mut app = new_application(&mut registry, name, platform)
        .with_context(|| format!("unable to load platform {platform}"))?;

    app.create(ResourceScope::All)
        .with_context(|| format!("unable to create application {}", app.name()))?;

    println!(
        "✅ Created application '{}' for platform '{}' in {}",
        app.name(),
        app.platform(),
        app.app_dir().display()
    );
    println!("\n📌 Next steps:");
    println!("   cd {}", app.app_dir().display());
    println!("   appstrap apply");

    Ok(())
}
