//! Aggregated contact report — the query-side surface for downstream tooling.
//!
//! One entry per module in creation order, each carrying the module's
//! effective contacts (own + inherited). File writes are atomic:
//! serialize → `.tmp` sibling → rename, with the `.tmp` in the target's
//! directory (same filesystem — rename is atomic on POSIX).

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use contacts_core::{effective_contacts, Contact, ContactError, ProjectTree};

use crate::error::{io_err, ManifestError};

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Output format for [`render_report`] / [`write_report`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown report format '{other}'; expected: yaml, json")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Yaml => write!(f, "yaml"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Effective contacts for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleContacts {
    /// Colon-separated module path (e.g. `"widgets:api"`).
    pub module: String,
    pub contacts: Vec<Contact>,
}

/// Full aggregated report for a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReport {
    pub generated_at: DateTime<Utc>,
    pub modules: Vec<ModuleContacts>,
}

// ---------------------------------------------------------------------------
// Build / render / write
// ---------------------------------------------------------------------------

/// Aggregate every module's effective contacts, in module creation order.
pub fn build_report(tree: &ProjectTree) -> Result<ContactReport, ManifestError> {
    let mut modules = Vec::new();
    for id in tree.nodes() {
        let module = tree
            .qualified_name(id)
            .ok_or(ContactError::DetachedNode { index: id.0 })?;
        let effective = effective_contacts(tree, id)?;
        modules.push(ModuleContacts {
            module,
            contacts: effective.all().cloned().collect(),
        });
    }
    Ok(ContactReport {
        generated_at: Utc::now(),
        modules,
    })
}

/// Render a report to a string in the requested format.
pub fn render_report(report: &ContactReport, format: ReportFormat) -> Result<String, ManifestError> {
    match format {
        ReportFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        ReportFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
    }
}

/// Atomically write the rendered report to `path`.
///
/// Write flow: render → `<path>.tmp` sibling → `rename`.
pub fn write_report(
    path: &Path,
    report: &ContactReport,
    format: ReportFormat,
) -> Result<(), ManifestError> {
    let rendered = render_report(report, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }

    let tmp = PathBuf::from(format!("{}.tmp", path.display()));
    std::fs::write(&tmp, rendered).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote contact report: {}", path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
