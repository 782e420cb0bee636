//! CLI entry point for the Aztec diamond tiling generator

use aztectile::io::cli::{Cli, GenerationRunner, init_tracing};
use clap::Parser;

fn main() -> aztectile::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());
    let runner = GenerationRunner::new(cli);
    runner.process()
}
