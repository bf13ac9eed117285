pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "studio")]
#[command(about = "Studio CLI - inspection tools for the local team-calls database")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Inspect the local team-calls database file")]
    Inspect {
        #[command(subcommand)]
        cmd: commands::inspect::InspectCommands,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Inspect { cmd } => commands::inspect::run(cmd).await,
    }
}
