//! `contacts validate [--manifest <path>]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use contacts_core::effective_contacts;

use super::{load_tree, manifest_path};

/// Check the workspace manifest and module tree for configuration errors.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the workspace manifest. Defaults to ./contacts.yaml.
    #[arg(long, short = 'm')]
    pub manifest: Option<PathBuf>,
}

impl ValidateArgs {
    pub fn run(self) -> Result<()> {
        let path = manifest_path(self.manifest);
        let tree = load_tree(&path)?;

        for id in tree.nodes() {
            let module = tree
                .qualified_name(id)
                .context("module path could not be resolved")?;
            let effective = effective_contacts(&tree, id)
                .with_context(|| format!("failed to aggregate contacts for '{module}'"))?;
            let own = tree[id].contacts.len();
            let inherited = effective.len() - own;
            println!(
                "{} {} — {} contact(s) ({} own, {} inherited)",
                "✓".green(),
                module,
                effective.len(),
                own,
                inherited
            );
        }

        println!("\n{} modules OK: {}", tree.len(), path.display());
        Ok(())
    }
}
