//! CLI entry point for the backtracking jigsaw assembly solver

use clap::Parser;
use tilefit::io::cli::{Cli, FileProcessor};

fn main() -> tilefit::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
