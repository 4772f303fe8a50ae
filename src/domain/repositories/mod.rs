//! Repository trait definitions for the domain layer.
//!
//! The traits here are the contracts the application layer depends on.
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated with `mockall` for unit tests.
//!
//! # Testing
//!
//! See `tests/repository_link.rs` for the PostgreSQL contract tests.

pub mod link_repository;

pub use link_repository::{LinkRepository, RepositoryError, StorageCause};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
