//! Main commands enum and subcommand arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use graphfetch_core::TaskId;

/// Handler used when `--handler` is not given, relative to the working directory.
pub const DEFAULT_HANDLER: &str = "dataset/download_script.sh";

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the download handler once per dataset and report failures
    Run(RunArgs),

    /// List the built-in dataset catalog
    List {
        /// Include datasets that are skipped by default
        #[arg(long)]
        all: bool,
    },
}

/// Arguments for `graphfetch run`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    /// Executable invoked as `<handler> <dataset>`
    #[arg(long, default_value = DEFAULT_HANDLER)]
    pub handler: PathBuf,

    /// Directory to run the handler from
    #[arg(long)]
    pub workdir: Option<PathBuf>,

    /// Print the final summary as JSON instead of per-dataset lines
    #[arg(long)]
    pub json: bool,

    /// Datasets to fetch (defaults to every enabled catalog entry; disabled
    /// entries such as clueweb12 run only when named here)
    pub tasks: Vec<TaskId>,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            handler: PathBuf::from(DEFAULT_HANDLER),
            workdir: None,
            json: false,
            tasks: Vec::new(),
        }
    }
}
