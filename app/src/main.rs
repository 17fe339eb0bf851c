#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CommandStrategy, InfoStrategy, InitStrategy, ListInput, ListStrategy, ShowInput, ShowStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "dsconf")]
#[command(about = "Read HTTP servlet extensions from a directory server configuration API", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/dsconf/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level, including raw API responses
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List extensions as `{id, filter, objects}` state
    List {
        /// SCIM filter expression
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Show a single extension by name
    Show { name: String },
    /// Initialize configuration
    Init,
    /// Show configuration and test the connection
    Info,
    /// Show version
    Version,
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config_path = cli.config;
    match cli.command {
        Commands::List { filter } => {
            ListStrategy
                .execute(ListInput {
                    config_path,
                    filter,
                })
                .await
        }
        Commands::Show { name } => {
            ShowStrategy
                .execute(ShowInput { config_path, name })
                .await
        }
        Commands::Init => InitStrategy.execute(config_path).await,
        Commands::Info => InfoStrategy.execute(config_path).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
