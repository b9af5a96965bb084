//! mr-review: print the lines of a unified diff as numbered JSON records.

mod app;
mod cli;
mod logger;

use anyhow::Result;
use cli::Cli;
use mr_review_config::AppConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    // .env may carry RUST_LOG, so load it before the logger
    let dotenv = dotenvy::dotenv();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    logger::init(&config.log_level);

    match dotenv {
        Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
        Err(_) => log::debug!(".env file not found, will rely on environment variables"),
    }
    log::debug!("Effective config: {:?}", config);

    let options = app::Options::resolve(cli, &config);
    app::run(&options, std::io::stdin().lock(), std::io::stdout().lock())
}
