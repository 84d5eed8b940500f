//! # Agora - Three-persona debate simulator
//!
//! Usage:
//!   agora debate <topic> [--rounds N] [--seed S] [--fast] [--export PATH]
//!   agora docs add --title T --content C
//!   agora docs list
//!   agora docs remove <id> [--yes]
//!   agora personas
//!
//! ## Wiring
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Loads: AppConfig (agora.yaml)                            │
//! │    ├── Creates: KeyValueDocumentRepository (adapter)            │
//! │    ├── Creates: StdRandom (adapter)                             │
//! │    ├── Creates: DebateScheduler (usecase)                       │
//! │    └── Streams: messages to the terminal                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use agora_app::commands::{DebateCommand, DocsCommand, PersonasCommand};
use agora_app::AppConfig;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "agora")]
#[command(about = "Agora - Engineer, Visionary and Ethicist debate any topic")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./agora.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the knowledge base store file
    #[arg(long, global = true)]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a debate and stream it to the terminal
    Debate(DebateCommand),
    /// Manage the knowledge base
    Docs(DocsCommand),
    /// Show the three personas
    Personas(PersonasCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Debate(cmd) => cmd.run(&config).await,
        Commands::Docs(cmd) => cmd.run(&config),
        Commands::Personas(cmd) => cmd.run(),
    }
}
