pub mod export;
pub mod init;
pub mod profile;
pub mod report;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the data source and report settings")]
    Init(init::InitArgs),
    #[command(about = "Show the off-hours report")]
    Report(report::ReportArgs),
    #[command(about = "Show the report and refresh it periodically")]
    Watch(watch::WatchArgs),
    #[command(about = "Export report views to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[command(about = "Show a data profile of the loaded records")]
    Profile(profile::ProfileArgs),
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
            Commands::Report(args) => report::cmd(args).await,
            Commands::Watch(args) => watch::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Profile(args) => profile::cmd(args).await,
        }
    }
}
