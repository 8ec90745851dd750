mod commands;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meetbook_core::config::MeetbookConfig;
use meetbook_core::storage::JsonStorage;
use meetbook_core::LogicManager;
use mockable::DefaultClock;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "meetbook")]
#[command(about = "Keep your contacts and schedule meetings with them")]
struct Cli {
    /// Config file to use instead of ~/.config/meetbook/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Address book file to use instead of the configured data_file
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands interactively (the default)
    Repl,
    /// Run a single command, e.g. `meetbook exec find name:alice`
    Exec {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Print the path of the config file
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Config) => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => MeetbookConfig::config_path()?,
            };
            println!("{}", path.display());
            Ok(())
        }
        Some(Commands::Exec { ref words }) => commands::exec::run(open(&cli)?, &words.join(" ")),
        Some(Commands::Repl) | None => commands::repl::run(open(&cli)?),
    }
}

/// Logs go to stderr so they never mix with command output.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn open(cli: &Cli) -> Result<LogicManager> {
    let config = match &cli.config {
        Some(path) => MeetbookConfig::load_from(path),
        None => MeetbookConfig::load(),
    }
    .context("Failed to load config")?;

    let data_path = cli.data.clone().unwrap_or_else(|| config.data_path());
    let window = config.reminder_window()?;

    LogicManager::open(JsonStorage::new(&data_path), Arc::new(DefaultClock))
        .with_context(|| format!("Failed to open address book at {}", data_path.display()))?
        .with_reminder_window(window)
        .context("Invalid reminder_window")
}
