use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A portfolio page viewer for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Portfolio page file (defaults to the configured file, then the
    /// built-in sample)
    #[arg(short = 'f', long = "file")]
    page_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the viewer
    Run {
        /// Portfolio page file
        #[arg(short = 'f', long = "file")]
        page_file: Option<PathBuf>,
    },
    /// Inspect or change the persisted theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Validate a portfolio page file
    Check {
        /// Page file to validate
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the stored preference
    Get,
    /// Set the stored preference to dark or light
    Set { mode: String },
    /// Flip the stored preference
    Toggle,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Some(Commands::Run { page_file }) => {
            commands::run::run(config, page_file.or(cli.page_file))
        }
        None => commands::run::run(config, cli.page_file),
        Some(Commands::Theme { action }) => match action {
            ThemeAction::Get => commands::theme::get(),
            ThemeAction::Set { mode } => commands::theme::set(&mode),
            ThemeAction::Toggle => commands::theme::toggle(),
        },
        Some(Commands::Check { file }) => commands::check::run(&file),
    }
}
