mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use chrono::Utc;
use clap::Parser;
use log::info;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::message::DATETIME_FORMAT;
use crate::error::AppResult;
use crate::infra::git::GitCli;

#[derive(Parser)]
#[command(
    name = "autosave",
    author,
    version,
    about = "Stage and commit pending changes with a generated message"
)]
struct Cli {
    /// Check for pending changes without staging or committing anything.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    initialize_logger();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn initialize_logger() {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .unwrap();
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.dry_run)?;

    info!(
        "{} autosaving notes at: {}",
        Utc::now().format(DATETIME_FORMAT),
        config.notes_dir.display()
    );

    let git = Arc::new(GitCli::new(config.notes_dir.clone()));
    let context = AppContext::new(config, git);

    workflow::autosave::run(&context).await?;

    Ok(())
}
