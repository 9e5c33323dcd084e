//! Insertion-ordered contact registry scoped to one module.
//!
//! Keys are unique within a registry: re-declaring an existing key merges the
//! supplied fields into the stored record instead of appending a duplicate.
//! A key's position is fixed at first introduction and never changes.

use serde::{Deserialize, Serialize};

use crate::error::ContactError;
use crate::types::{Contact, ContactFields, ContactKey};

/// Ordered mapping from [`ContactKey`] to [`Contact`].
///
/// The registry is created empty when its module is configured, mutated only
/// while that module's declarations are applied, and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactRegistry {
    contacts: Vec<Contact>,
}

impl ContactRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new contact under `key`, or merge `fields` into the existing
    /// record.
    ///
    /// Merge rule: supplied (`Some`) fields overwrite, `None` fields are left
    /// alone, and `roles` are unioned into the stored set. Returns the stored
    /// record. Fails with [`ContactError::InvalidKey`] when `key` is empty or
    /// not email-like.
    pub fn add_or_merge(
        &mut self,
        key: &str,
        fields: ContactFields,
    ) -> Result<&Contact, ContactError> {
        let key = ContactKey::parse(key)?;
        let idx = match self.contacts.iter().position(|c| c.key == key) {
            Some(idx) => {
                let contact = &mut self.contacts[idx];
                if let Some(moniker) = fields.moniker {
                    contact.moniker = Some(moniker);
                }
                if let Some(github) = fields.github {
                    contact.github = Some(github);
                }
                if let Some(twitter) = fields.twitter {
                    contact.twitter = Some(twitter);
                }
                contact.roles.extend(fields.roles);
                idx
            }
            None => {
                self.contacts.push(Contact {
                    key,
                    moniker: fields.moniker,
                    github: fields.github,
                    twitter: fields.twitter,
                    roles: fields.roles,
                });
                self.contacts.len() - 1
            }
        };
        Ok(&self.contacts[idx])
    }

    /// Add one role to an already-declared contact.
    ///
    /// Fails with [`ContactError::UnknownContact`] if `key` was never added to
    /// this registry.
    pub fn add_role(&mut self, key: &str, role: &str) -> Result<(), ContactError> {
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.key.as_str() == key)
            .ok_or_else(|| ContactError::UnknownContact {
                key: key.to_owned(),
            })?;
        contact.roles.insert(role.to_owned());
        Ok(())
    }

    /// Point lookup by raw key string.
    pub fn get(&self, key: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.key.as_str() == key)
    }

    /// All contacts in first-introduction order. Restartable, no side effects.
    pub fn all(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.contacts.iter()
    }

    /// Count of distinct keys.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// `true` when no contact has been declared.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
