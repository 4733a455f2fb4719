use anyhow::Result;
use clap::Parser;

use smile::cli::Cli;

fn main() -> Result<()> {
    let _cli = Cli::parse();
    smile::app::run()
}
