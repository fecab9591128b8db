//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the HTTP transport.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Hero record, page request and response envelope
//! - **catalogue**: Immutable page-partitioned hero store
//! - **query**: Paginated listing and name search
//! - **services**: Unified service container

pub mod catalogue;
pub mod config;
pub mod error;
pub mod query;
pub mod services;
pub mod types;

// Re-export key types for convenience
pub use catalogue::Catalogue;
pub use config::Config;
pub use error::{HeroesError, Result};
pub use query::QueryService;
pub use services::Services;
