//! opsdash library root.
//! Exposes the CLI parser, the high-level run() function and the pipeline
//! modules (normalize → filter → dedupe → aggregate).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod source;
pub mod state;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg),
        Commands::Logout => cli::commands::login::handle_logout(cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Dashboard { .. } => cli::commands::dashboard::handle(&cli.command, cfg),
        Commands::Feed { .. } => cli::commands::dashboard::handle_feed(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Prefs { .. } => cli::commands::prefs::handle(&cli.command),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Default log filter for a given `-v` count.
fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.verbose)),
    )
    .format_timestamp(None)
    .try_init()
    .ok();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
