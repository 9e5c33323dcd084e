//! `contacts list [module-path] [--manifest <path>] [--json]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use contacts_core::{effective_contacts, Contact};

use super::{load_tree, manifest_path};

/// Show the effective contacts for one module.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Colon-separated module path (e.g. "widgets:api"). Defaults to the root
    /// module.
    pub module: Option<String>,

    /// Path to the workspace manifest. Defaults to ./contacts.yaml.
    #[arg(long, short = 'm')]
    pub manifest: Option<PathBuf>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "email")]
    email: String,
    #[tabled(rename = "moniker")]
    moniker: String,
    #[tabled(rename = "github")]
    github: String,
    #[tabled(rename = "twitter")]
    twitter: String,
    #[tabled(rename = "roles")]
    roles: String,
}

impl ContactRow {
    fn from_contact(contact: &Contact) -> Self {
        let dash = || "-".to_owned();
        Self {
            email: contact.key.to_string(),
            moniker: contact.moniker.clone().unwrap_or_else(dash),
            github: contact.github.clone().unwrap_or_else(dash),
            twitter: contact.twitter.clone().unwrap_or_else(dash),
            roles: if contact.roles.is_empty() {
                dash()
            } else {
                contact.roles.iter().cloned().collect::<Vec<_>>().join(", ")
            },
        }
    }
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let path = manifest_path(self.manifest);
        let tree = load_tree(&path)?;

        let id = match self.module.as_deref() {
            Some(module) => tree
                .find(module)
                .with_context(|| format!("module '{module}' not found in '{}'", path.display()))?,
            None => tree.root(),
        };
        let effective = effective_contacts(&tree, id).context("failed to aggregate contacts")?;

        if self.json {
            let contacts: Vec<&Contact> = effective.all().collect();
            println!("{}", serde_json::to_string_pretty(&contacts)?);
            return Ok(());
        }

        if effective.is_empty() {
            println!("No contacts declared.");
            return Ok(());
        }

        let rows: Vec<ContactRow> = effective.all().map(ContactRow::from_contact).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
