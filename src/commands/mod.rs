pub mod export;
pub mod init;
pub mod stats;
pub mod task;

use crate::db::db::Db;
use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Daily counter and statistics chart")]
    Stats(stats::StatsArgs),
    #[command(about = "Export statistics or tasks")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Task(args) => task::cmd(args).await,
            Commands::Stats(args) => stats::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}

/// Reads the configuration and opens the store it points to.
pub(crate) fn open_store() -> Result<(Config, Db)> {
    let config = Config::read()?;
    let db = Db::new(&config)?;
    Ok((config, db))
}
