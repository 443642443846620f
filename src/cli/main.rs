//! Command-line interface entry point for `unirecords`

mod args;
mod commands;
mod terminal;

use args::{Cli, Command};
use clap::Parser;
use uni_records::config::Config;
use uni_records::core::database::Database;
use uni_records::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use uni_records::{error, info};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Into::into)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command.unwrap_or(Command::Menu) {
        Command::Config { subcommand } => {
            if let Err(e) = commands::config::run(subcommand, &mut config, &defaults) {
                error!("Config command failed: {e}");
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
        Command::Menu => {
            let db = open_store(&config);
            if let Err(e) = commands::menu::run(&db) {
                error!("Interactive session aborted: {e}");
                eprintln!("\n✗ An unexpected error occurred: {e}");
                std::process::exit(1);
            }
        }
        Command::Students { subcommand } => {
            let db = open_store(&config);
            match commands::students::run(subcommand, &db) {
                Ok(true) => {}
                Ok(false) => std::process::exit(1),
                Err(e) => {
                    error!("Students command failed: {e}");
                    eprintln!("✗ {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn open_store(config: &Config) -> Database {
    let path = config.storage.data_path();
    match Database::open(&path, config.storage.on_corrupt) {
        Ok(db) => {
            info!("Using student store at {}", path.display());
            db
        }
        Err(e) => {
            error!("Failed to open student store: {e}");
            eprintln!("✗ Failed to open student store at {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}
