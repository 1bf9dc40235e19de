//! garden CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::SiteArgs;

#[derive(Parser)]
#[command(name = "garden")]
#[command(version)]
#[command(about = "Resolve transclusions in rendered garden documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the transclusions of one document
    Resolve {
        /// JSON content index holding every rendered document
        store: PathBuf,

        /// Slug of the document to resolve
        slug: String,

        #[command(flatten)]
        site: SiteArgs,

        /// Write output to FILE instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Print a compact outline instead of JSON
        #[arg(long)]
        outline: bool,
    },

    /// Resolve every document and report circular transclusions
    Check {
        /// JSON content index holding every rendered document
        store: PathBuf,

        #[command(flatten)]
        site: SiteArgs,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "garden=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            store,
            slug,
            site,
            output,
            outline,
        } => commands::resolve::execute(commands::resolve::ResolveArgs {
            store,
            slug,
            site,
            output,
            outline,
        }),
        Commands::Check { store, site } => {
            commands::check::execute(commands::check::CheckArgs { store, site })
        }
    }
}
