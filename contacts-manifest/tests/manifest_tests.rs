//! Manifest load error-message and tree-construction integration tests.

use assert_fs::prelude::*;
use contacts_core::{effective_contacts, ContactError};
use contacts_manifest::{build_tree, load_manifest, ManifestError, MANIFEST_FILE};
use predicates::prelude::predicate;

fn write_manifest(dir: &assert_fs::TempDir, yaml: &str) -> std::path::PathBuf {
    let file = dir.child(MANIFEST_FILE);
    file.write_str(yaml).expect("write manifest");
    file.path().to_path_buf()
}

// ---------------------------------------------------------------------------
// 1. Load error messages
// ---------------------------------------------------------------------------

#[test]
fn load_missing_manifest_returns_not_found() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = dir.path().join(MANIFEST_FILE);
    let err = load_manifest(&path).unwrap_err();
    assert!(matches!(err, ManifestError::NotFound { .. }), "got: {err}");
    assert!(err.to_string().contains("manifest not found"));
    assert!(err.to_string().contains("contacts.yaml"));
}

#[test]
fn load_corrupt_yaml_returns_parse_error_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = write_manifest(&dir, ": : corrupt : yaml : !!!\n  - broken: [unclosed");

    let err = load_manifest(&path).unwrap_err();
    assert!(matches!(err, ManifestError::Parse { .. }), "got: {err}");
    let msg = err.to_string();
    assert!(msg.contains("contacts.yaml"), "must contain file path, got: {msg}");
    let source_msg = match &err {
        ManifestError::Parse { source, .. } => source.to_string(),
        _ => unreachable!(),
    };
    assert!(!source_msg.is_empty(), "serde_yaml must provide error context");
}

#[test]
fn load_wrong_shape_yaml_returns_parse_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = write_manifest(&dir, "- this is a list, not a mapping\n");

    let err = load_manifest(&path).unwrap_err();
    assert!(matches!(err, ManifestError::Parse { .. }), "got: {err}");
}

// ---------------------------------------------------------------------------
// 2. Full load + build + aggregate
// ---------------------------------------------------------------------------

#[test]
fn multi_module_manifest_aggregates_per_module() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = write_manifest(
        &dir,
        r#"
version: 1
project:
  name: widgets
  contacts:
    - email: minnie@disney.com
      moniker: Minnie
      roles: [owner]
  modules:
    - name: common
    - name: app
      contacts:
        - email: mickey@disney.com
          github: mickey
"#,
    );
    dir.child(MANIFEST_FILE).assert(predicate::path::exists());

    let manifest = load_manifest(&path).expect("load");
    assert_eq!(manifest.version, 1);
    let tree = build_tree(&manifest).expect("build");

    let common = tree.find("widgets:common").expect("common module");
    let app = tree.find("widgets:app").expect("app module");

    let common_view = effective_contacts(&tree, common).expect("common aggregate");
    assert_eq!(common_view.len(), 1, "common inherits only the root contact");

    let app_view = effective_contacts(&tree, app).expect("app aggregate");
    assert_eq!(app_view.len(), 2, "app sees root + its own");
    assert_eq!(
        app_view.get("mickey@disney.com").expect("present").github.as_deref(),
        Some("mickey")
    );
}

#[test]
fn re_declared_email_within_one_module_extends_the_record() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = write_manifest(
        &dir,
        r#"
version: 1
project:
  name: widgets
  contacts:
    - email: dev@example.com
      moniker: Dev
    - email: dev@example.com
      github: dev-gh
      roles: [notify]
"#,
    );

    let tree = build_tree(&load_manifest(&path).expect("load")).expect("build");
    let registry = &tree[tree.root()].contacts;
    assert_eq!(registry.len(), 1);
    let contact = registry.get("dev@example.com").expect("present");
    assert_eq!(contact.moniker.as_deref(), Some("Dev"));
    assert_eq!(contact.github.as_deref(), Some("dev-gh"));
    assert!(contact.roles.contains("notify"));
}

// ---------------------------------------------------------------------------
// 3. Rejected configurations
// ---------------------------------------------------------------------------

#[test]
fn invalid_email_in_declaration_is_rejected() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = write_manifest(
        &dir,
        r#"
version: 1
project:
  name: widgets
  modules:
    - name: app
      contacts:
        - email: not-an-email
"#,
    );

    let err = build_tree(&load_manifest(&path).expect("load")).unwrap_err();
    assert!(
        matches!(err, ManifestError::Contact(ContactError::InvalidKey { .. })),
        "got: {err}"
    );
    assert!(err.to_string().contains("not-an-email"));
}

#[test]
fn duplicate_sibling_modules_are_rejected() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = write_manifest(
        &dir,
        r#"
version: 1
project:
  name: widgets
  modules:
    - name: app
    - name: app
"#,
    );

    let err = build_tree(&load_manifest(&path).expect("load")).unwrap_err();
    assert!(matches!(err, ManifestError::DuplicateModule { .. }), "got: {err}");
    assert!(err.to_string().contains("widgets:app"));
}
