//! HTTP API layer.
//!
//! Translates HTTP requests into service calls and service outcomes into
//! responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`extract`] - Validating extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Link management routes

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
