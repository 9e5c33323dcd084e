//! Domain types for the contact registry.
//!
//! [`ContactKey`] is validated at construction; every other field is free-form.
//! All types are serializable/deserializable via serde.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContactError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A validated contact key — conventionally an email address.
///
/// The check is a syntactic sanity check, not RFC validation: the string must
/// be non-empty, contain `'@'`, and contain no whitespace. Serde
/// deserialization goes through the same check via `try_from`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactKey(String);

impl ContactKey {
    /// Validate and wrap a raw key string.
    pub fn parse(raw: &str) -> Result<Self, ContactError> {
        if raw.is_empty() || !raw.contains('@') || raw.chars().any(char::is_whitespace) {
            return Err(ContactError::InvalidKey {
                key: raw.to_owned(),
            });
        }
        Ok(Self(raw.to_owned()))
    }

    /// The underlying key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ContactKey {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ContactKey {
    type Error = ContactError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ContactKey> for String {
    fn from(key: ContactKey) -> Self {
        key.0
    }
}

/// A strongly-typed name for a module in the project tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleName(pub String);

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ModuleName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ModuleName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A single person associated with a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub key: ContactKey,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moniker: Option<String>,
    /// GitHub handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Twitter handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// Free-form role labels (e.g. `"owner"`, `"notify"`).
    #[serde(default)]
    pub roles: BTreeSet<String>,
}

/// Partial-update payload for [`crate::ContactRegistry::add_or_merge`].
///
/// `Some` fields overwrite the stored value; `None` fields leave it alone;
/// `roles` are unioned into the stored set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub moniker: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub roles: BTreeSet<String>,
}

impl From<&Contact> for ContactFields {
    fn from(contact: &Contact) -> Self {
        Self {
            moniker: contact.moniker.clone(),
            github: contact.github.clone(),
            twitter: contact.twitter.clone(),
            roles: contact.roles.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_accepts_email_like_strings() {
        let key = ContactKey::parse("dev@example.com").expect("valid key");
        assert_eq!(key.as_str(), "dev@example.com");
        assert_eq!(key.to_string(), "dev@example.com");
    }

    #[test]
    fn key_rejects_missing_at_sign() {
        let err = ContactKey::parse("not-an-email").unwrap_err();
        assert!(matches!(err, ContactError::InvalidKey { .. }), "got: {err}");
    }

    #[test]
    fn key_rejects_empty_and_whitespace() {
        assert!(ContactKey::parse("").is_err());
        assert!(ContactKey::parse("a b@example.com").is_err());
        assert!(ContactKey::parse("a@example.com\t").is_err());
    }

    #[test]
    fn key_deserialization_validates() {
        let ok: Result<ContactKey, _> = serde_json::from_str("\"dev@example.com\"");
        assert!(ok.is_ok());
        let bad: Result<ContactKey, _> = serde_json::from_str("\"nope\"");
        assert!(bad.is_err());
    }

    #[test]
    fn module_name_display() {
        assert_eq!(ModuleName::from("api").to_string(), "api");
    }

    #[test]
    fn fields_from_contact_carry_everything() {
        let contact = Contact {
            key: ContactKey::parse("dev@example.com").expect("valid key"),
            moniker: Some("Dev".to_owned()),
            github: None,
            twitter: Some("dev_tw".to_owned()),
            roles: BTreeSet::from(["owner".to_owned()]),
        };
        let fields = ContactFields::from(&contact);
        assert_eq!(fields.moniker.as_deref(), Some("Dev"));
        assert_eq!(fields.github, None);
        assert_eq!(fields.twitter.as_deref(), Some("dev_tw"));
        assert!(fields.roles.contains("owner"));
    }
}
