//! `contacts report [--manifest <path>] [--out <path>] [--format yaml|json]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use contacts_manifest::{build_report, render_report, write_report};

use super::super::ReportFormatArg;
use super::{load_tree, manifest_path};

/// Emit the aggregated contact report for every module.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the workspace manifest. Defaults to ./contacts.yaml.
    #[arg(long, short = 'm')]
    pub manifest: Option<PathBuf>,

    /// Write the report to a file instead of stdout.
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Output format: yaml | json.
    #[arg(long, short = 'f', value_name = "FORMAT", default_value = "yaml")]
    pub format: ReportFormatArg,
}

impl ReportArgs {
    pub fn run(self) -> Result<()> {
        let path = manifest_path(self.manifest);
        let tree = load_tree(&path)?;
        let report = build_report(&tree).context("failed to aggregate contacts")?;
        let format = self.format.into();

        match self.out {
            Some(out) => {
                write_report(&out, &report, format)
                    .with_context(|| format!("failed to write report to '{}'", out.display()))?;
                println!("✓ Wrote contact report to {}", out.display());
            }
            None => {
                let rendered =
                    render_report(&report, format).context("failed to render report")?;
                print!("{rendered}");
            }
        }
        Ok(())
    }
}
