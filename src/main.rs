mod charts;
mod cli;
mod config;
mod convert;
mod logging;
mod onsets_cmd;
mod report_cmd;
mod thanksgiving_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Report(args) => report_cmd::run(args),
        Command::Onsets(args) => onsets_cmd::run(args),
        Command::Thanksgiving(args) => thanksgiving_cmd::run(args),
    }
}
