//! primegen - prime number generation service
//!
//! Generates every prime from 2 up to a caller-supplied limit with a
//! Sieve of Eratosthenes, behind an HTTP endpoint and a CLI.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - limit (validation), sieve, types
//!   - config, error, xdg
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - `GET /primes?generationLimit=N`
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - generate, show-config, completions

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{PrimegenError, Result};
pub use crate::core::limit::{GenerationLimit, LimitError, MAXIMUM_GENERATION_LIMIT};
pub use crate::core::services::Services;
pub use crate::core::types::*;
