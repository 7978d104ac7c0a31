mod cmd;
mod modules;

use crate::cmd::{archive, edit, init};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::{env, process::ExitCode, str::FromStr};
use time::{format_description::well_known::Rfc3339, UtcOffset};
use tokio::runtime::Builder;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::{self, time::OffsetTime},
};

#[derive(Debug, Parser)]
#[command(name = "procon-gardener")]
#[command(about = "archive your AC submissions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// archive your AC submissions
    #[command(alias = "a")]
    Archive,
    /// initialize your config
    #[command(alias = "i")]
    Init,
    /// edit your config file
    #[command(alias = "e")]
    Edit,
}

fn main() -> ExitCode {
    dotenv().ok();

    let log_level = env::var("RUST_LOG").unwrap_or(String::from("info"));
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_str(&log_level).unwrap_or(LevelFilter::INFO).into())
        .from_env_lossy();
    let format = fmt::format()
        .with_level(true)
        .with_target(true)
        .with_ansi(false)
        .with_timer(
            OffsetTime::local_rfc_3339().unwrap_or_else(|_| OffsetTime::new(UtcOffset::UTC, Rfc3339)),
        );
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(format)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    let result = match Cli::parse().command {
        Commands::Archive => Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(anyhow::Error::from)
            .and_then(|runtime| runtime.block_on(archive::run())),
        Commands::Init => init::run(),
        Commands::Edit => edit::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}
