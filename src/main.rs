use anyhow::Result;
use clap::Parser;

use imgsieve::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
