use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod config;
mod driver;
mod error;
mod tasks;
mod tool;
mod util;

fn main() -> Result<()> {
    let cli = crate::cli::Cli::parse();
    crate::util::logger::init(crate::util::logger::level_for(cli.verbose, cli.quiet));
    crate::app::run(cli)
}
