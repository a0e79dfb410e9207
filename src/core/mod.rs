//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (HTTP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **limit**: Generation limit validation
//! - **sieve**: Sieve of Eratosthenes
//! - **types**: Request/response data structures
//! - **xdg**: XDG directory handling
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod limit;
pub mod services;
pub mod sieve;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{PrimegenError, Result};
pub use limit::{GenerationLimit, LimitError};
pub use services::Services;
