//! Generate command - sieve primes up to a limit

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::limit::GenerationLimit;
use crate::core::services::Services;
use crate::core::types::PrimeSequenceResult;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Upper bound, inclusive (1-2147483647)
    #[arg(allow_hyphen_values = true)]
    pub limit: String,

    /// Only print how many primes were found
    #[arg(long, short = 'c')]
    pub count: bool,
}

/// Count-only response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountResponse {
    #[serde(rename = "generationLimit")]
    pub generation_limit: i32,
    pub count: usize,
}

/// What a generate run produced, before rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutput {
    /// Full envelope, as served by `GET /primes`
    Primes(PrimeSequenceResult),
    /// Number of primes only (`--count`)
    Count(CountResponse),
}

/// Run the sieve for an already validated limit
pub fn generate(limit: GenerationLimit, count: bool, services: &Services) -> GenerateOutput {
    if count {
        return GenerateOutput::Count(CountResponse {
            generation_limit: limit.get(),
            count: services.count_for(limit),
        });
    }

    GenerateOutput::Primes(PrimeSequenceResult::generated(
        services.generate_for(limit),
    ))
}

/// Execute the generate command
///
/// Validation failures are returned as errors carrying the same
/// message the HTTP endpoint reports.
pub async fn execute(
    args: GenerateArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let limit = GenerationLimit::parse(Some(&args.limit))?;
    let start = Instant::now();
    let generated = generate(limit, args.count, services);
    let elapsed = start.elapsed().as_secs_f64();

    match (generated, format) {
        (GenerateOutput::Count(response), OutputFormat::Human) => {
            println!(
                "{} primes up to {}",
                colors::number(&response.count.to_string()),
                colors::number(&limit.to_string())
            );
        }
        (GenerateOutput::Count(response), OutputFormat::Json) => output::print_json(&response)?,
        (GenerateOutput::Primes(result), OutputFormat::Human) => {
            output::print_header(&format!(
                "{} primes up to {} ({})",
                result.generated_primes.len(),
                limit,
                output::format_duration(elapsed)
            ));
            for line in output::wrap_numbers(&result.generated_primes, 10) {
                println!("{line}");
            }
        }
        (GenerateOutput::Primes(result), OutputFormat::Json) => output::print_json(&result)?,
    }

    Ok(())
}
