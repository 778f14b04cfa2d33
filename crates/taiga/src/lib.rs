//! Taiga infrastructure adapter.
//!
//! Implements the [`provisioning::TrackerApi`] port against the Taiga REST API
//! using `reqwest`.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules.
//! URLs, payload field names, bearer headers, and status handling live here;
//! the [`provisioning`] and `stages` crates never see them.
//!
//! ## Wire contract
//!
//! | Operation | Request | Response |
//! |-----------|---------|----------|
//! | authenticate | `POST /auth` `{type: "normal", username, password}` | `{auth_token}` |
//! | create board | `POST /projects` (bearer) `{name, description, is_private, is_*_activated}` | `{id, roles: [{id, name}]}` |
//! | grant membership | `POST /memberships` (bearer) `{project, role, email}` | membership record (ignored) |
//!
//! Calls are never retried.

mod client;
mod error;
mod wire;

pub use client::{TaigaClient, TaigaConfig, DEFAULT_BASE_URL};
pub use error::TaigaClientError;
