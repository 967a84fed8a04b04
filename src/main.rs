use anyhow::Result;
use clap::Parser;
use colored::*;
use dir_size::cli::Cli;
use dir_size::reporter::Reporter;
use dir_size::types::SizeConfig;
use std::io::{self, Write};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Missing paths exit through clap with a usage message
    let cli = Cli::parse();
    let config = SizeConfig::from(&cli);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Reporter::new(config).run(&cli.paths, &mut out)?;
    out.flush()?;

    Ok(())
}
