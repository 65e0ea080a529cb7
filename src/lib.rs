//! rattendance library root.
//! Exposes the attendance store, the CSV import/export layer, the CLI
//! parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

pub use store::{AttendanceStore, ImportSummary};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    let colors = cfg.colors && !cli.no_color;
    ui::messages::set_colors(colors);
    let seed_demo = cfg.seed_demo_data && !cli.no_seed;

    match &cli.command {
        Some(Commands::Init { force }) => cli::commands::init::handle(config_path, *force),
        Some(Commands::Config {
            print_config,
            edit_config,
            editor,
        }) => cli::commands::config::handle(cfg, config_path, *print_config, *edit_config, editor),
        Some(Commands::Shell { script }) => {
            cli::commands::shell::handle(cfg, seed_demo, colors, script.as_deref())
        }
        None => cli::commands::shell::handle(cfg, seed_demo, colors, None),
    }
}

/// Install the diagnostics subscriber (stderr, `warn` unless RUST_LOG says otherwise).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE (path may be overridden on the command line)
    let config_path = cli.config.clone().unwrap_or_else(Config::config_file);
    let cfg = match &cli.command {
        // `init` must work even when the existing file is broken
        Some(Commands::Init { .. }) => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
