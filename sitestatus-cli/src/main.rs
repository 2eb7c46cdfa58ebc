mod cli;
mod config;
mod header;
mod workbook;

use anyhow::Result;
use clap::Parser;

use cli::commands::{column::handle_column_command, infer::handle_infer_command};
use cli::{Cli, Commands};
use config::Config;

fn main() {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        log::debug!("{:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Infer(args) => {
            let config = Config::load(cli.config.as_deref())?;
            handle_infer_command(args, &config)
        }
        Commands::Column(args) => handle_column_command(args),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
