//! Unified service container for primegen
//!
//! Provides shared access to configuration and the prime generation
//! pipeline (validate, then sieve).

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::limit::GenerationLimit;
use crate::core::sieve;
use std::sync::Arc;
use std::time::Instant;

/// Unified services container
///
/// All adapters use this same struct for service access. Holds no
/// mutable state, so one instance serves any number of concurrent
/// requests.
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Validate raw input and generate the primes up to it
    ///
    /// # Errors
    ///
    /// - `InvalidLimit`: the input failed validation
    pub fn generate_primes(&self, raw_limit: Option<&str>) -> Result<Vec<u32>> {
        let limit = GenerationLimit::parse(raw_limit)?;
        Ok(self.generate_for(limit))
    }

    /// Generate the primes up to an already validated limit
    pub fn generate_for(&self, limit: GenerationLimit) -> Vec<u32> {
        let start = Instant::now();
        let primes = sieve::primes_up_to(limit.get());

        tracing::debug!(
            limit = limit.get(),
            primes = primes.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Primes generated"
        );

        primes
    }

    /// Count the primes up to an already validated limit
    pub fn count_for(&self, limit: GenerationLimit) -> usize {
        sieve::count_up_to(limit.get())
    }
}
