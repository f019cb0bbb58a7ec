use clap::Parser;
use watermark_core::WatermarkError;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = Result<T, WatermarkError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();

    match args.command {
        Commands::Mark(m) => m.run(),
        Commands::Extract(e) => e.run(),
        Commands::Capacity(c) => c.run(),
    }
}
