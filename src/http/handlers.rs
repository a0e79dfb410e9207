//! HTTP request handlers for the primegen API

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::PrimegenError;
use crate::core::limit::GenerationLimit;
use crate::core::services::Services;
use crate::core::types::{PrimeSequenceResult, PrimesQuery};

/// Prime generation handler
///
/// Validates `generationLimit` and returns every prime from 2 up to
/// it. A missing parameter is reported the same way as a blank one,
/// and a repeated parameter is validated as its comma-joined values.
/// The sieve runs on the blocking pool so large limits never stall
/// other requests.
///
/// # Errors
///
/// - `InvalidLimit`: the limit failed validation (422)
/// - `GenerationFailed`: the sieve task did not complete (500)
pub async fn primes_handler(
    State(services): State<Arc<Services>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<PrimeSequenceResult>, PrimegenError> {
    let query = PrimesQuery::from_pairs(&pairs);
    let limit = GenerationLimit::parse(query.generation_limit.as_deref())?;

    let primes = tokio::task::spawn_blocking(move || services.generate_for(limit))
        .await
        .map_err(|e| PrimegenError::GenerationFailed(e.to_string()))?;

    Ok(Json(PrimeSequenceResult::generated(primes)))
}

/// Fallback for paths other than `/primes`
pub async fn not_found_handler() -> (StatusCode, Json<PrimeSequenceResult>) {
    (
        StatusCode::NOT_FOUND,
        Json(PrimeSequenceResult::failed("resource not found")),
    )
}

/// Fallback for methods other than GET on `/primes`
pub async fn method_not_allowed_handler() -> (StatusCode, Json<PrimeSequenceResult>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(PrimeSequenceResult::failed("method not allowed")),
    )
}
