mod cli;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()

use cli::commands::run_cli;
use cli::opts::Cli;

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();
    run_cli(args)
}
