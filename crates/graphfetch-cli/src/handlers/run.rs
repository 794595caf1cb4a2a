//! Run command handler.
//!
//! Runs the download handler once per dataset and reports failures.

use anyhow::Result;
use tracing::info;

use crate::bootstrap::CliContext;
use crate::presentation::{OutputMode, print_line};
use graphfetch_core::TaskId;

/// Execute the run command.
///
/// `tasks` empty means every enabled catalog entry. Individual dataset
/// failures are reported and never turn into an error here; the only
/// error path is failing to serialize the JSON summary.
pub async fn execute(ctx: &CliContext, tasks: Vec<TaskId>) -> Result<()> {
    let tasks = if tasks.is_empty() {
        ctx.catalog.default_tasks()
    } else {
        for task in &tasks {
            if ctx.catalog.get(task.as_str()).is_some_and(|entry| !entry.enabled) {
                info!(%task, "Running dataset that is disabled by default");
            }
        }
        tasks
    };

    info!(
        handler = %ctx.handler_path.display(),
        datasets = tasks.len(),
        "Running download handler"
    );

    let summary = ctx.runner.run(&tasks).await;

    if ctx.output == OutputMode::Json {
        print_line(&serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
