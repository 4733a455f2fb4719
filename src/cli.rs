use clap::Parser;

/// Command-line interface. The picker takes no arguments; clap provides
/// `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(name = "smile")]
#[command(version, about = "An emoticon picker that types the chosen emoticon for you")]
pub struct Cli {}
