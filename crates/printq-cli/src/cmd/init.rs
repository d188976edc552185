use crate::output::print_json;
use anyhow::Context;
use printq_core::auth::AuthConfig;
use printq_core::{io, paths};
use std::path::Path;

/// Scaffold `.printq/` with the default identity registry. Does not
/// overwrite an existing config.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    io::ensure_dir(&paths::printq_dir(root)).context("failed to create .printq directory")?;

    let config_path = paths::config_path(root);
    let created = if config_path.exists() {
        false
    } else {
        AuthConfig::default()
            .save(root)
            .context("failed to write default config")?;
        true
    };

    if json {
        print_json(&serde_json::json!({
            "root": root.display().to_string(),
            "config_created": created,
        }))?;
    } else if created {
        println!("Initialized print queue at {}", root.display());
    } else {
        println!("Print queue already initialized at {}", root.display());
    }
    Ok(())
}
