//! Link entity: a named short path mapped to a destination URL.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// A persisted mapping from a short name (and an id) to a destination URL.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// `name` is unique across all links at any point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub id: Uuid,
    pub name: String,
    pub url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: Uuid, name: String, url: String) -> Self {
        Self { id, name, url }
    }

    /// Returns true if this link carries exactly the given name and url.
    pub fn matches(&self, input: &LinkInput) -> bool {
        self.name == input.name && self.url == input.url
    }
}

/// Name and destination supplied on create and on update.
///
/// Updates are whole-record replacements, so both fields are always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkInput {
    pub name: String,
    pub url: String,
}

impl LinkInput {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Returns true when either field is empty. Such input is never persisted.
    pub fn has_empty_field(&self) -> bool {
        self.name.is_empty() || self.url.is_empty()
    }
}

/// Key used to look up a single link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkLookup {
    ByName(String),
    ById(Uuid),
}

impl fmt::Display for LinkLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkLookup::ByName(name) => write!(f, "name \"{name}\""),
            LinkLookup::ById(id) => write!(f, "id \"{id}\""),
        }
    }
}
