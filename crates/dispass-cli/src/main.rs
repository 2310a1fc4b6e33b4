//! DisPass CLI - Generate passphrases from a master password and a label
//!
//! This is the command-line interface for DisPass. It resolves label specs,
//! asks for the master password and prints the derived passphrases.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ConfigSubcommand};
use crate::commands::{config as config_cmd, generate, inspect, misc};
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        if let Some(cli_error) = e.downcast_ref::<CliError>() {
            cli_error.exit();
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate(args) => generate::handle_generate(ctx, args),
        Commands::Inspect(args) => inspect::handle_inspect(ctx, args),
        Commands::Algorithms(args) => misc::handle_algorithms(ctx, args),
        Commands::Config { command } => match command {
            ConfigSubcommand::Init { force } => config_cmd::handle_config_init(ctx, *force),
            ConfigSubcommand::Show { json } => config_cmd::handle_config_show(ctx, *json),
        },
        Commands::Completions(args) => misc::handle_completions(args.shell),
    }
}
