//! Session Creator CLI - main entry point

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use session_creator::commands::{create, CreateArgs};
use session_creator::Error;

#[derive(Parser)]
#[command(name = "session_creator")]
#[command(about = "Interactive Telegram session creator", long_about = None)]
#[command(version)]
struct Cli {
    /// Session file base name, without .session (skips the name prompt)
    #[arg(short, long)]
    name: Option<String>,

    /// Directory to store the session in (skips the directory prompt)
    #[arg(short, long)]
    dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("session_creator=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match create::run(CreateArgs {
        name: cli.name,
        dir: cli.dir,
    })
    .await
    {
        Ok(()) => Ok(()),
        // A broken storage backend is the one fatal startup condition
        Err(err @ Error::StorageUnavailable(_)) => {
            eprintln!("❌ {}", err);
            eprintln!("📦 The session storage (SQLite) could not be initialized.");
            std::process::exit(1);
        }
        // Everything else is reported but still exits normally
        Err(err) => {
            eprintln!("💥 Unexpected error: {}", err);
            Ok(())
        }
    }
}
