//! Heroes API - read-only paginated hero catalogue
//!
//! Serves a fixed, in-memory catalogue of heroes in fixed-size
//! pages and supports case-insensitive substring search by name.
//!
//! # Architecture
//!
//! The codebase is organized into three modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - catalogue (immutable page store)
//!   - query (listing and search)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - router, handlers, middleware, error mapping
//!
//! - **cli**: Server flags (clap)

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line flags for the server binary
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::catalogue::Catalogue;
pub use crate::core::config::Config;
pub use crate::core::error::{HeroesError, Result};
pub use crate::core::query::QueryService;
pub use crate::core::services::Services;
pub use crate::core::types::*;
