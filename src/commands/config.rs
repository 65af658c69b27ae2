//! Inspect and initialize the interaction config

use std::path::Path;

use kanban_dnd::config::InteractionConfig;
use kanban_dnd::output::{ConfigShowResult, ConfigWriteResult, OutputMode};
use kanban_dnd::paths;

/// Print the effective configuration and its source
pub fn config_show(config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let source = InteractionConfig::locate(config);
    let config = InteractionConfig::resolve(config)?;
    ConfigShowResult {
        source: source.map(|p| p.display().to_string()),
        config,
    }
    .render(mode);
    Ok(())
}

/// Write the defaults to the user config file
pub fn config_init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = paths::env_config().unwrap_or_else(paths::global_config);
    let display = path.display().to_string();

    if path.exists() && !force {
        ConfigWriteResult {
            written: false,
            message: format!("Config already exists at {display}. Use --force to overwrite."),
            path: display,
        }
        .render(mode);
        return Ok(());
    }

    InteractionConfig::default().save(&path)?;
    log::debug!("Wrote default config to {display}");
    ConfigWriteResult {
        written: true,
        message: "Default configuration written".to_string(),
        path: display,
    }
    .render(mode);
    Ok(())
}
