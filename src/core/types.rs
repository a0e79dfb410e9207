//! Core data types for the primegen service.
//!
//! Request and response shapes shared by the HTTP and CLI adapters.

use serde::{Deserialize, Serialize};

/// Message returned alongside a successful generation
pub const PRIMES_GENERATED: &str = "primes generated!";

/// Query parameters accepted by `GET /primes`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrimesQuery {
    /// Raw, unvalidated upper bound
    #[serde(rename = "generationLimit")]
    pub generation_limit: Option<String>,
}

impl PrimesQuery {
    /// Name of the limit parameter on the wire
    pub const GENERATION_LIMIT: &'static str = "generationLimit";

    /// Collect the limit from decoded query pairs
    ///
    /// Repeated `generationLimit` values are joined with `,`, so a
    /// repeated parameter reaches validation instead of being dropped.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let values: Vec<&str> = pairs
            .iter()
            .filter(|(name, _)| name == Self::GENERATION_LIMIT)
            .map(|(_, value)| value.as_str())
            .collect();

        Self {
            generation_limit: (!values.is_empty()).then(|| values.join(",")),
        }
    }
}

/// Envelope returned for every prime generation request
///
/// `generated_primes` is empty whenever `message` reports a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeSequenceResult {
    /// Success or failure message
    pub message: String,

    /// Ascending primes up to the requested limit
    #[serde(rename = "generatedPrimes")]
    pub generated_primes: Vec<u32>,
}

impl PrimeSequenceResult {
    /// Successful generation
    pub fn generated(primes: Vec<u32>) -> Self {
        Self {
            message: PRIMES_GENERATED.to_string(),
            generated_primes: primes,
        }
    }

    /// Failed generation carrying no primes
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            generated_primes: Vec::new(),
        }
    }
}
