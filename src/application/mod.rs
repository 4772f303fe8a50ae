//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a storage-agnostic API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link create, list, update, delete and lookup
//! - [`services::redirect_resolver::RedirectResolver`] - Name-then-id resolution for redirects

pub mod services;
