//! Rust client SDK for the VQLite vector database.
//!
//! This crate provides a [`VqliteClient`] with:
//! - one async method per VQLite REST operation (collections, documents,
//!   search, statistics),
//! - a retry-wrapped HTTP transport ([`client::VqliteHttpClient`]) that all
//!   operations funnel through,
//! - plain value objects ([`Document`], [`DocumentUpdate`]) matching the
//!   server's wire format.
//!
//! The client is stateless beyond its base URL: it is `Clone` and safe to
//! share across tasks, and callers own any parallelism.

mod api;
pub mod client;
mod config;
mod error;
mod types;

pub use api::VqliteClient;
pub use config::VqliteClientBuilder;
pub use error::VqliteError;
pub use types::{Document, DocumentUpdate, SearchOptions, TrainOptions};
