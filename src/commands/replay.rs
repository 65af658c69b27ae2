//! Replay a scripted interaction

use std::path::Path;

use anyhow::Context;
use kanban_dnd::config::InteractionConfig;
use kanban_dnd::output::OutputMode;
use kanban_dnd::scenario::Scenario;

/// Load `file`, run it against the resolved config and print the report
pub fn replay(file: &Path, config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = InteractionConfig::resolve(config)?;
    let scenario = Scenario::load(file)?;
    log::debug!(
        "Replaying {} event(s) on {} column(s) and {} card(s)",
        scenario.events.len(),
        scenario.columns.len(),
        scenario.cards.len()
    );

    let report = scenario
        .replay(&config)
        .with_context(|| format!("replay of {} failed", file.display()))?;
    report.render(mode);
    Ok(())
}
