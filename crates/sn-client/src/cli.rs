use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sn")]
#[command(about = "Social network client: feed, chat, groups and profile")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Keep every resource in the local store instead of the remote endpoints
    #[arg(long, global = true)]
    pub(crate) local: bool,

    /// Print JSON instead of rendered text
    #[arg(long, global = true)]
    pub(crate) json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
