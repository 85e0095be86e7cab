//! CLI argument parsing and command definitions

use camino::Utf8PathBuf;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "canon", version, about = "C# style rules over syntax facts")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Parser)]
pub enum Command {
    /// Check facts files/directories and exit non-zero on findings
    Check(CheckArgs),
    /// Rewrite an identifier to the casing the naming rules expect
    Rename(RenameArgs),
    /// List rules, their codes and whether the config enables them
    Rules(RulesArgs),
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// `*.facts.json` files or directories containing them.
    #[arg(required = true)]
    pub paths: Vec<Utf8PathBuf>,

    /// Optional config file (TOML only). Default: .canon.toml if present.
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,

    /// Output JSON instead of human format
    #[arg(long)]
    pub json: bool,

    /// Print proposed fixes under each finding
    #[arg(long)]
    pub suggest: bool,
}

#[derive(Debug, Parser)]
pub struct RenameArgs {
    pub name: String,

    /// Pascal case (types, methods) instead of camel case (fields, locals)
    #[arg(long)]
    pub pascal: bool,
}

#[derive(Debug, Parser)]
pub struct RulesArgs {
    /// Optional config file (TOML only). Default: .canon.toml if present.
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,

    /// Show category, severity and configured overrides
    #[arg(long)]
    pub details: bool,
}
