//! contacts — project contact declarations for multi-module workspaces.
//!
//! # Usage
//!
//! ```text
//! contacts validate [--manifest <path>]
//! contacts list [module-path] [--manifest <path>] [--json]
//! contacts report [--manifest <path>] [--out <path>] [--format yaml|json]
//! ```

mod commands;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{list::ListArgs, report::ReportArgs, validate::ValidateArgs};
use contacts_manifest::ReportFormat;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "contacts",
    version,
    about = "Declare and aggregate project contacts across multi-module workspaces",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the workspace manifest and module tree for configuration errors.
    Validate(ValidateArgs),

    /// Show the effective contacts for one module.
    List(ListArgs),

    /// Emit the aggregated contact report for every module.
    Report(ReportArgs),
}

// ---------------------------------------------------------------------------
// Shared ReportFormat argument — parsed from CLI strings, converts to the
// manifest crate's type
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse [`ReportFormat`] from CLI args.
#[derive(Debug, Clone, Default)]
pub struct ReportFormatArg(pub ReportFormat);

impl FromStr for ReportFormatArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for ReportFormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(f: ReportFormatArg) -> Self {
        f.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Validate(args) => args.run(),
        Commands::List(args) => args.run(),
        Commands::Report(args) => args.run(),
    }
}
