mod cli;
mod display;

use clap::Parser;

use crate::cli::Args;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    cli::run(args)
}
