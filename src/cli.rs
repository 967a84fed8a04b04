use crate::types::SizeConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dir-size")]
#[command(author = "Dir Size Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Report the apparent size of files and directories", long_about = None)]
pub struct Cli {
    /// Files or directories to measure
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Display sizes in human-readable format (e.g., 1.5 KB, 234.0 MB, 2.0 GB)
    #[arg(short = 'H', long)]
    pub human: bool,

    /// Recursively include the sizes of subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Show per-path file counts on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Cli> for SizeConfig {
    fn from(cli: &Cli) -> Self {
        SizeConfig::new(cli.human, cli.recursive).with_verbose(cli.verbose)
    }
}
