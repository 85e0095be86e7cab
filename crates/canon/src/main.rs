#![warn(rust_2024_compatibility, clippy::all)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use canon::check::run_check;
use canon::cli::{Args, Command};
use canon::rename::run_rename;
use canon::rules::run_rules;

fn main() -> Result<()> {
    // stdout carries findings only
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Check(check) => run_check(check),
        Command::Rename(rename) => run_rename(rename),
        Command::Rules(rules) => run_rules(rules),
    }
}
