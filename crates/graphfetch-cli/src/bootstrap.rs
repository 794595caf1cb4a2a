//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Handler path resolution and the script handler (via graphfetch-runtime)
//! - The batch runner (via graphfetch-core)
//! - The console presenter
//!
//! Command handlers receive the composed `CliContext`.

use std::path::PathBuf;
use std::sync::Arc;

use graphfetch_core::{BatchRunner, DatasetCatalog};
use graphfetch_runtime::{ScriptHandler, resolve_handler};

use crate::commands::{DEFAULT_HANDLER, RunArgs};
use crate::presentation::{ConsoleEmitter, OutputMode};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Handler executable as requested on the command line.
    pub handler_path: PathBuf,
    /// Directory to run the handler from.
    pub working_dir: Option<PathBuf>,
    /// How batch progress is rendered.
    pub output: OutputMode,
}

impl CliConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            handler_path: PathBuf::from(DEFAULT_HANDLER),
            working_dir: None,
            output: OutputMode::Text,
        }
    }

    /// Build config from `run` arguments.
    pub fn from_run_args(args: &RunArgs) -> Self {
        Self {
            handler_path: args.handler.clone(),
            working_dir: args.workdir.clone(),
            output: if args.json {
                OutputMode::Json
            } else {
                OutputMode::Text
            },
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The batch runner wired to the script handler and console.
    pub runner: BatchRunner,
    /// Built-in dataset catalog.
    pub catalog: DatasetCatalog,
    /// Handler path after resolution.
    pub handler_path: PathBuf,
    /// How batch progress is rendered.
    pub output: OutputMode,
}

/// Wire the runner for a batch run.
pub fn bootstrap(config: CliConfig) -> CliContext {
    let handler_path = resolve_handler(&config.handler_path);

    let mut handler = ScriptHandler::new(&handler_path);
    if let Some(dir) = config.working_dir {
        handler = handler.with_working_dir(dir);
    }

    let runner = BatchRunner::new(Arc::new(handler))
        .with_emitter(Arc::new(ConsoleEmitter::new(config.output)));

    CliContext {
        runner,
        catalog: DatasetCatalog::builtin(),
        handler_path,
        output: config.output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_run_args() {
        let args = RunArgs {
            handler: PathBuf::from("/opt/fetch.sh"),
            workdir: Some(PathBuf::from("/data")),
            json: true,
            tasks: Vec::new(),
        };
        let config = CliConfig::from_run_args(&args);
        assert_eq!(config.handler_path, PathBuf::from("/opt/fetch.sh"));
        assert_eq!(config.working_dir, Some(PathBuf::from("/data")));
        assert_eq!(config.output, OutputMode::Json);
    }

    #[test]
    fn test_default_args_give_default_config() {
        assert_eq!(
            CliConfig::from_run_args(&RunArgs::default()),
            CliConfig::with_defaults()
        );
    }

    #[test]
    fn test_bootstrap_keeps_unresolvable_handler() {
        let config = CliConfig {
            handler_path: PathBuf::from("/nonexistent/download_script.sh"),
            ..CliConfig::with_defaults()
        };
        let ctx = bootstrap(config);
        assert_eq!(
            ctx.handler_path,
            PathBuf::from("/nonexistent/download_script.sh")
        );
    }
}
