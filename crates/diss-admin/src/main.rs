//! Administrative tool for the `valid_identifiers` allow-list.
//!
//! Operates directly on the same document store the simulation reads;
//! identifiers are matched exactly, never by pattern.

use clap::{Parser, Subcommand};
use eyre::Result;

use diss_storage::{client, identifiers};

#[derive(Parser)]
#[command(name = "diss-admin", about = "Manage the DiSS interview allow-list")]
struct Cli {
    /// AWS region of the document store.
    #[arg(long, env = "DISS_REGION")]
    region: String,

    /// Bucket holding the valid_identifiers collection.
    #[arg(long, env = "DISS_BUCKET")]
    bucket: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add one or more identifiers to the allow-list.
    Add {
        #[arg(required = true)]
        identifiers: Vec<String>,
    },
    /// List every identifier currently on the allow-list.
    List,
    /// Remove an identifier by exact match.
    Remove { identifier: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let s3 = client::build_client(&cli.region).await;

    match cli.command {
        Command::Add { identifiers: ids } => {
            let mut added = 0;
            for identifier in &ids {
                let identifier = identifier.trim();
                if identifier.is_empty() {
                    continue;
                }
                if identifiers::add_identifier(&s3, &cli.bucket, identifier).await? {
                    added += 1;
                } else {
                    println!("already present: {identifier}");
                }
            }
            println!("added {added} identifier(s)");
        }
        Command::List => {
            let ids = identifiers::list_identifiers(&s3, &cli.bucket).await?;
            if ids.is_empty() {
                println!("no identifiers on the allow-list");
            } else {
                println!("{} identifier(s):", ids.len());
                for identifier in ids {
                    println!("  - {identifier}");
                }
            }
        }
        Command::Remove { identifier } => {
            if identifiers::remove_identifier(&s3, &cli.bucket, &identifier).await? {
                println!("removed: {identifier}");
            } else {
                println!("not found: {identifier}");
            }
        }
    }

    Ok(())
}
