//! Validation of the prime generation limit.
//!
//! Turns caller-supplied text into a [`GenerationLimit`] or a
//! [`LimitError`] carrying the message returned to the caller. Rules
//! are applied in a fixed order and the first failing rule wins:
//! blank input, then syntax, then the lower bound, then the upper bound.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Largest accepted generation limit
pub const MAXIMUM_GENERATION_LIMIT: i32 = i32::MAX;

/// Reasons a generation limit is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitError {
    #[error("generationLimit cannot be blank")]
    Blank,

    #[error("generationLimit must be a valid integer")]
    NotAnInteger,

    #[error("generationLimit cannot be zero or less than zero")]
    NotPositive,

    #[error("generationLimit cannot exceed {max}", max = MAXIMUM_GENERATION_LIMIT)]
    TooLarge,
}

/// A validated, inclusive upper bound for prime generation
///
/// Always within `1..=MAXIMUM_GENERATION_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationLimit(i32);

impl GenerationLimit {
    /// Parse a generation limit from optional request text
    ///
    /// `None` is treated the same as empty input.
    ///
    /// # Errors
    ///
    /// - `Blank`: input is absent, empty or whitespace only
    /// - `NotAnInteger`: input is not a base-10 integer
    /// - `NotPositive`: value is zero or negative
    /// - `TooLarge`: value exceeds [`MAXIMUM_GENERATION_LIMIT`]
    pub fn parse(raw: Option<&str>) -> Result<Self, LimitError> {
        let raw = match raw {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(LimitError::Blank),
        };

        let (negative, digits) = match raw.as_bytes()[0] {
            b'-' => (true, &raw[1..]),
            b'+' => (false, &raw[1..]),
            _ => (false, raw),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LimitError::NotAnInteger);
        }

        // Magnitude comparison on the digit string keeps arbitrarily long
        // input in the range checks instead of failing as an overflow.
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() || negative {
            return Err(LimitError::NotPositive);
        }
        if significant.len() > 10 {
            return Err(LimitError::TooLarge);
        }

        let value: u64 = significant
            .parse()
            .map_err(|_| LimitError::NotAnInteger)?;
        i32::try_from(value)
            .map(Self)
            .map_err(|_| LimitError::TooLarge)
    }

    /// The bound as a plain integer
    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for GenerationLimit {
    type Err = LimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl TryFrom<i64> for GenerationLimit {
    type Error = LimitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 1 {
            return Err(LimitError::NotPositive);
        }
        i32::try_from(value)
            .map(Self)
            .map_err(|_| LimitError::TooLarge)
    }
}

impl fmt::Display for GenerationLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
