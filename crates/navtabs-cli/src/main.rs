use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use navtabs_core::{AppConfig, TabDescriptor, TabId};

mod commands;

#[derive(Parser)]
#[command(name = "navtabs")]
#[command(author, version, about = "A horizontally scrolling tab strip with an animated underline")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ~/.config/navtabs/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive tab strip
    Run {
        /// Comma separated tab names, replacing the configured tabs
        #[arg(short, long, value_delimiter = ',')]
        tabs: Vec<String>,
        /// Id of the initially active tab
        #[arg(short, long)]
        active: Option<String>,
        /// Scroll on press but never forward the selection
        #[arg(short, long)]
        disabled: bool,
    },
    /// Drive the strip headlessly with equal-width tabs and print the trace
    Simulate {
        /// Number of tabs
        #[arg(short, long, default_value_t = 5)]
        tabs: usize,
        /// Width of the tab row
        #[arg(short, long, default_value_t = 500.0)]
        row: f64,
        /// Width of the viewport
        #[arg(short, long, default_value_t = 300.0)]
        viewport: f64,
        /// Tab indices to press, in order
        #[arg(short, long = "select")]
        select: Vec<usize>,
        /// Milliseconds between presses
        #[arg(long, default_value_t = 600)]
        interval_ms: u64,
        /// Print the trace as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the configuration as TOML
    Config {
        /// Print the built-in defaults instead of the effective configuration
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => AppConfig::load()?,
    };

    let interactive = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, interactive)?;

    // Handle commands
    match cli.command {
        Some(Commands::Run {
            tabs,
            active,
            disabled,
        }) => {
            apply_run_overrides(&mut config, tabs, active, disabled);
            commands::run::run(Arc::new(config)).await
        }
        None => commands::run::run(Arc::new(config)).await,
        Some(Commands::Simulate {
            tabs,
            row,
            viewport,
            select,
            interval_ms,
            json,
        }) => commands::simulate::run(
            &config,
            commands::simulate::SimulateArgs {
                tabs,
                row,
                viewport,
                select,
                interval_ms,
                json,
            },
        ),
        Some(Commands::Config { default }) => commands::config::run(&config, default),
    }
}

/// Log to a file while the terminal UI owns the screen, to stderr otherwise
fn init_logging(config: &AppConfig, interactive: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if interactive {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}

fn apply_run_overrides(
    config: &mut AppConfig,
    tabs: Vec<String>,
    active: Option<String>,
    disabled: bool,
) {
    if !tabs.is_empty() {
        config.tabs = tabs
            .into_iter()
            .enumerate()
            .map(|(i, name)| TabDescriptor::new(i as i64 + 1, name))
            .collect();
        config.active_tab = None;
    }
    if let Some(active) = active {
        config.active_tab = Some(parse_tab_id(&active));
    }
    if disabled {
        config.strip.disabled = true;
    }
}

/// Numeric ids on the command line match numeric ids in the config
fn parse_tab_id(s: &str) -> TabId {
    s.parse::<i64>()
        .map(TabId::Number)
        .unwrap_or_else(|_| TabId::from(s))
}
