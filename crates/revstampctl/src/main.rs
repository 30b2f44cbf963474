use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use revstampctl::commands;

#[derive(Parser)]
#[command(name = "revstampctl")]
#[command(about = "Source-revision annotation for documentation builds", long_about = None)]
#[command(version)]
struct Cli {
    /// Repository root (defaults to the current directory)
    #[arg(long, global = true)]
    repo: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the buildsha display string for the head commit
    Stamp {
        /// Render the commit time in this UTC offset (e.g. "+08:00")
        #[arg(long)]
        timezone: Option<String>,
    },

    /// Run the environment-hook path and print the mutated context as JSON
    Annotate,

    /// Verify the working tree can be annotated
    Check,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only command output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let repo = match cli.repo {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Stamp { timezone } => commands::stamp(&repo, timezone.as_deref()),
        Commands::Annotate => commands::annotate(&repo),
        Commands::Check => commands::check(&repo),
    }
}
