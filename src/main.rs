//! CLI entry point for the plot catalogue tooling

use clap::Parser;
use plotfinder::io::cli::{Cli, CommandRunner};

fn main() -> plotfinder::Result<()> {
    let cli = Cli::parse();
    plotfinder::io::logging::init(cli.verbose);
    let runner = CommandRunner::new(cli);
    runner.run()
}
