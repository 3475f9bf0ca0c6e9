//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Generate a lazy-loading import map from a route table
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Route table path (default: src/routes.json, relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub routes: Option<PathBuf>,

    /// Generated artifact path (default: src/importsMap.jsx, relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Config file path, searched upward from the current directory (default: importmap.toml)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print the generated artifact to stdout instead of writing it
    #[arg(long, conflicts_with = "check")]
    pub dry: bool,

    /// Fail if the artifact on disk is missing or out of date
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Which action the invocation asks for.
    pub const fn mode(&self) -> RunMode {
        if self.dry {
            RunMode::Dry
        } else if self.check {
            RunMode::Check
        } else {
            RunMode::Write
        }
    }
}

/// What to do with the rendered artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Write the artifact (reference behavior)
    Write,
    /// Print to stdout
    Dry,
    /// Compare with the artifact on disk
    Check,
}
