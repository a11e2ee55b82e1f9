use clap::{Parser, Subcommand};
use friends_script::pipeline::{run_download, run_process, run_upload};
use friends_script::{PipelineConfig, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Instrument;

#[derive(Parser, Debug)]
#[command(name = "friends-script", version, about = "Friends transcript parsing and episode reconciliation")]
struct Cli {
    /// Config file (default: ./friends-script.yaml, then the user config dir)
    #[arg(short, long, global = true, env = "FRIENDS_SCRIPT_CONFIG")]
    config: Option<PathBuf>,

    /// Override the data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the transcript from the dataset host
    Download,
    /// Parse, reconcile and score the transcript, then export the tables
    Process {
        /// Read the episode list from saved wikitext instead of the wiki
        #[arg(long)]
        season_source: Option<PathBuf>,
    },
    /// Replace the store's relations with the exported tables
    Upload {
        /// SQLite database to write
        #[arg(long)]
        database: Option<PathBuf>,
    },
    /// Download, process and upload in one go
    Run,
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = PipelineConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    match cli.command {
        Command::Download => {
            run_download(&config).instrument(tracing::info_span!("download")).await?;
        }
        Command::Process { season_source } => {
            if season_source.is_some() {
                config.season_source_file = season_source;
            }
            run_process(&config).instrument(tracing::info_span!("process")).await?;
        }
        Command::Upload { database } => {
            if database.is_some() {
                config.database_path = database;
            }
            run_upload(&config).instrument(tracing::info_span!("upload")).await?;
        }
        Command::Run => {
            run_download(&config).instrument(tracing::info_span!("download")).await?;
            run_process(&config).instrument(tracing::info_span!("process")).await?;
            run_upload(&config).instrument(tracing::info_span!("upload")).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
