use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use oneside_diff::ComparisonPolicy;
use oneside_types::Side;

#[derive(Parser)]
#[command(
    name = "oneside",
    about = "One-sided diff -- both versions of a file in a single view",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Viewer settings file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show two files as one combined view
    Diff(DiffArgs),
    /// Translate a line number between a file and the combined view
    Translate(TranslateArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SideArg {
    Left,
    Right,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Left => Side::Left,
            SideArg::Right => Side::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PolicyArg {
    Default,
    Trim,
    Ignore,
}

impl From<PolicyArg> for ComparisonPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Default => ComparisonPolicy::Default,
            PolicyArg::Trim => ComparisonPolicy::TrimWhitespaces,
            PolicyArg::Ignore => ComparisonPolicy::IgnoreWhitespaces,
        }
    }
}

#[derive(Args)]
pub struct InputArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    /// Treat one side as absent (file added or deleted)
    #[arg(long)]
    pub missing: Option<SideArg>,
    /// Unchanged lines around each change; -1 shows everything
    #[arg(short = 'U', long, allow_negative_numbers = true)]
    pub context: Option<i64>,
    /// Side whose text is shown for unchanged lines
    #[arg(long)]
    pub master: Option<SideArg>,
    #[arg(long)]
    pub policy: Option<PolicyArg>,
    /// Skip character-level highlighting
    #[arg(long)]
    pub no_inline: bool,
}

#[derive(Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args)]
pub struct TranslateArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Zero-based line number
    #[arg(long)]
    pub line: usize,
    /// Translate a line of this file into the combined view; without it the
    /// line is a combined line translated back
    #[arg(long)]
    pub side: Option<SideArg>,
}
