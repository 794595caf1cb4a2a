//! CLI entry point.
//!
//! Parses arguments, installs logging and dispatches to handlers. A batch
//! run exits 0 even when datasets fail; failures are listed on stdout.

use clap::Parser;

use graphfetch_cli::{Cli, CliConfig, Commands, RunArgs, bootstrap, handlers, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // No command behaves like a plain `run`
    let command = cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default()));

    match command {
        Commands::Run(args) => {
            let ctx = bootstrap(CliConfig::from_run_args(&args));
            handlers::run::execute(&ctx, args.tasks).await?;
        }
        Commands::List { all } => {
            handlers::list::execute(all);
        }
    }

    Ok(())
}
