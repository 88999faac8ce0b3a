use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{simplify::SimplifyArgs, stats::StatsArgs};

mod file_utils;
mod parsers;
mod simplify;
mod stats;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge pass-through nodes, drop rarely visited edges and dead ends
    #[command(visible_alias = "s")]
    Simplify {
        #[command(flatten)]
        args: SimplifyArgs,
    },
    /// Print the size and shape of a network
    Stats {
        #[command(flatten)]
        args: StatsArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Simplify { args }) => simplify::run(args)?,
        Some(Commands::Stats { args }) => stats::run(args)?,
        None => {
            // Handle no command provided
        }
    }

    Ok(())
}
