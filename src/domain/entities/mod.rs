//! Core domain entities.
//!
//! Entities are plain data structures without storage concerns:
//!
//! - [`Link`] - A persisted name/id to URL mapping
//! - [`LinkInput`] - Name and destination supplied on create and update
//! - [`LinkLookup`] - Key for single-link lookups (by name or by id)

pub mod link;

pub use link::{Link, LinkInput, LinkLookup};
