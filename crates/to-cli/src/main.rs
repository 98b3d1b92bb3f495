//! to CLI
//!
//! Command-line interface for `to` - directory bookmarks.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use to_core::{Config, StorageError, Store};

mod commands;
mod completion;
mod display;
mod output;
mod validation;

use completion::JumpShell;
use display::PathDisplay;
use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "to")]
#[command(about = "A dir bookmark tool")]
#[command(
    long_about = "Remember directories under short names and jump back to them by name or prefix."
)]
#[command(version)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to config.toml (default: ~/.config/to/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save current dir as given keyword
    #[command(alias = "add")]
    Save {
        /// Bookmark name (lowercase letters and digits)
        name: String,
    },
    /// Delete given bookmark
    #[command(aliases = ["rm", "del"])]
    Delete {
        /// Bookmark name
        name: String,
    },
    /// Find the bookmarked dir matching the given name or prefix
    Find {
        /// Bookmark name or prefix
        name: String,
    },
    /// List saved bookmarks
    #[command(alias = "ls")]
    List {
        /// Only list bookmarks under current dir
        #[arg(short, long)]
        curr: bool,
        /// List bookmarks with given prefix
        #[arg(short, long, value_name = "PREFIX")]
        filter: Option<String>,
    },
    /// Generate completion for the `j` jump function
    Genj {
        #[arg(value_enum)]
        shell: JumpShell,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Generate shell completion for `to` itself
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, home_dir, color, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() {
    if let Err(e) = run() {
        report_error(&e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_with_cli_override(cli.config.as_ref())
        .context("Failed to load configuration")?;
    init_logging(&config);

    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet), config.color);
    let display = PathDisplay::new(config.home_dir.as_deref(), output.color());

    // Commands that don't need the store
    match &cli.command {
        Commands::Config { command } => {
            return handle_config_command(command.clone(), cli.config.as_ref(), &output);
        }
        Commands::Completions { shell } => {
            return commands::completions::generate(*shell, Cli::command());
        }
        _ => {}
    }

    debug!("Opening bookmarks at {:?}", config.db_path());
    let mut store = Store::open_with_config(&config)?;

    match cli.command {
        Commands::Save { name } => commands::bookmark::save(&mut store, name, &display, &output),
        Commands::Delete { name } => {
            commands::bookmark::delete(&mut store, name, &display, &output)
        }
        Commands::Find { name } => commands::bookmark::find(&store, name, &display, &output),
        Commands::List { curr, filter } => {
            commands::bookmark::list(&store, curr, filter, &display, &output)
        }
        Commands::Genj { shell } => commands::genj::generate(&store, shell, &display),
        Commands::Config { .. } => unreachable!(),      // Handled above
        Commands::Completions { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

/// Print an error chain to stderr, with a hint for storage failures
fn report_error(e: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), e);

    let hint = e
        .chain()
        .find_map(|cause| cause.downcast_ref::<StorageError>())
        .and_then(StorageError::recovery_suggestion);
    if let Some(hint) = hint {
        eprintln!("{} {}", "Hint:".yellow().bold(), hint);
    }
}

/// Initialize logging
///
/// Only initializes if TO_LOG environment variable is set (its value is the
/// level). Logs to config.log_file when set, stderr otherwise.
fn init_logging(config: &Config) {
    let Ok(log_level) = std::env::var("TO_LOG") else {
        return;
    };

    let env_filter = EnvFilter::new(format!("to_core={},to={}", log_level, log_level));

    match &config.log_file {
        Some(log_path) => {
            let log_file = match File::create(log_path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
                    return;
                }
            };
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }

    debug!("Logging initialized at level {}", log_level);
}
