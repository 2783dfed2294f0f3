use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

mod cli;
mod clipboard;
mod commands;
mod config;
mod content;
mod error;
mod input;
mod output;
mod session;
mod style;
mod transcript;
mod tui;

use commands::{CommandTable, StatusTimestamp};
use config::{load_or_create_config, TerminalConfig};

#[derive(Parser)]
#[command(name = "orisys")]
#[command(about = "OrisysLabs privacy terminal", version, long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.orisys/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override one config value for this run (repeatable)
    #[arg(long = "set", global = true, value_name = "KEY=VALUE", value_parser = config::parse_override)]
    overrides: Vec<(String, String)>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-oriented terminal (default)
    Repl,
    /// Full-screen terminal
    Tui,
    /// Submit each input in order and print the final transcript
    Run {
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available commands
    Commands,
    /// Browse the documentation
    Docs {
        /// Section id, e.g. zk-proofs
        section: Option<String>,
    },
    /// Whitepaper overview
    Whitepaper,
    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCmd,
    },
}

#[derive(Subcommand)]
enum ConfigCmd {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => TerminalConfig::default_path()?,
    };
    let mut config = load_or_create_config(Some(config_path.as_path()))?;
    config
        .merge_overrides(cli.overrides)
        .context("Invalid --set override")?;
    if cli.no_color {
        config.terminal.theme = config::Theme::Plain;
    }

    let command = cli.command.unwrap_or(Commands::Repl);
    init_logging(&config, matches!(command, Commands::Tui), !cli.no_color)?;
    debug!(path = %config_path.display(), "configuration loaded");

    let theme = config.terminal.theme;
    match command {
        Commands::Repl => cli::run_repl(&config)?,
        Commands::Tui => tui::run_tui(&config).await?,
        Commands::Run { inputs, json } => cli::run_inputs(&config, &inputs, json)?,
        Commands::Commands => {
            let table = CommandTable::new(StatusTimestamp::Session);
            output::print_command_list(table.specs(), theme);
        }
        Commands::Docs { section: None } => output::print_docs_index(theme),
        Commands::Docs { section: Some(id) } => output::print_docs_section(&id, theme)?,
        Commands::Whitepaper => output::print_whitepaper(theme),
        Commands::Config { command } => match command {
            ConfigCmd::Show => output::print_config(&config)?,
            ConfigCmd::Path => output::print_config_path(&config_path),
        },
    }

    Ok(())
}

/// Installs the fmt subscriber. The TUI owns the screen, so it only logs to
/// `general.log_file` and stays silent without one.
fn init_logging(config: &TerminalConfig, tui_mode: bool, ansi: bool) -> Result<()> {
    let level = config.level_filter()?;

    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time();

    match (&config.general.log_file, tui_mode) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        (None, true) => {}
        (None, false) => builder.with_ansi(ansi).with_writer(std::io::stderr).init(),
    }
    Ok(())
}
