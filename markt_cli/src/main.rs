use clap::Parser;
use log::debug;
use std::process::ExitCode;

mod cli;
mod commands;
mod errors;
mod files;
mod ui;

use cli::{MarktCli, MarktCliCommand};

fn main() -> ExitCode {
    let cli = MarktCli::parse();
    initialize_logging(cli.verbose);
    debug!("Using catalog at {}", cli.catalog.display());

    let result = match cli.command {
        MarktCliCommand::Home { listing } => commands::home(&cli.catalog, &listing, cli.format),
        MarktCliCommand::Subcategory {
            subcategory_uri,
            brands,
            listing,
        } => commands::subcategory(
            &cli.catalog,
            &subcategory_uri,
            brands.as_deref(),
            &listing,
            cli.format,
        ),
        MarktCliCommand::Fields => commands::list_fields(cli.format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// Library logs go to stderr. `RUST_LOG` overrides the level.
fn initialize_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .init();
}
