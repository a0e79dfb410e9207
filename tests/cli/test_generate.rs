//! Tests for the generate CLI command

use crate::common::create_test_services;
use clap::Parser;
use primegen::cli::commands::generate::{
    execute, generate, CountResponse, GenerateArgs, GenerateOutput,
};
use primegen::cli::{Cli, Commands, OutputFormat};
use primegen::core::limit::GenerationLimit;
use primegen::core::types::PrimeSequenceResult;

fn args(limit: &str, count: bool) -> GenerateArgs {
    GenerateArgs {
        limit: limit.to_string(),
        count,
    }
}

/// Test that generation produces the same envelope as the HTTP endpoint
#[test]
fn test_generate_envelope() {
    let services = create_test_services();
    let limit = GenerationLimit::parse(Some("10")).unwrap();

    assert_eq!(
        generate(limit, false, &services),
        GenerateOutput::Primes(PrimeSequenceResult::generated(vec![2, 3, 5, 7]))
    );

    let limit = GenerationLimit::parse(Some("100")).unwrap();
    match generate(limit, false, &services) {
        GenerateOutput::Primes(result) => {
            assert_eq!(result.message, "primes generated!");
            assert_eq!(result.generated_primes.len(), 25);
            assert_eq!(result.generated_primes.last(), Some(&97));
        }
        other => panic!("Unexpected output: {other:?}"),
    }
}

/// Test count-only generation
#[test]
fn test_generate_count_output() {
    let services = create_test_services();
    let limit = GenerationLimit::parse(Some("1000")).unwrap();

    assert_eq!(
        generate(limit, true, &services),
        GenerateOutput::Count(CountResponse {
            generation_limit: 1000,
            count: 168,
        })
    );
}

/// Test that the count response uses the wire field names
#[test]
fn test_count_response_json() {
    let response = CountResponse {
        generation_limit: 10,
        count: 4,
    };
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        serde_json::json!({"generationLimit": 10, "count": 4})
    );
}

/// Test that execute succeeds in both output formats
#[tokio::test]
async fn test_generate_execute_formats() {
    let services = create_test_services();

    for format in [OutputFormat::Human, OutputFormat::Json] {
        for count in [false, true] {
            let result = execute(args("100", count), &services, format).await;
            assert!(result.is_ok(), "Generate should succeed ({format:?}, count {count})");
        }
    }
}

/// Test that invalid limits fail with the validator message
#[tokio::test]
async fn test_generate_invalid_limits() {
    let services = create_test_services();

    let cases = [
        ("", "generationLimit cannot be blank"),
        ("r2d2", "generationLimit must be a valid integer"),
        ("0", "generationLimit cannot be zero or less than zero"),
        ("-5", "generationLimit cannot be zero or less than zero"),
        ("2147483648", "generationLimit cannot exceed 2147483647"),
    ];

    for (limit, message) in cases {
        let err = execute(args(limit, false), &services, OutputFormat::Human)
            .await
            .expect_err("Invalid limit should fail");
        assert_eq!(err.to_string(), message, "limit {limit:?}");
    }
}

/// Test argument parsing, including negative values reaching validation
#[test]
fn test_parse_generate_args() {
    let cli = Cli::try_parse_from(["primegen", "--format", "json", "generate", "-5", "--count"])
        .expect("Arguments should parse");

    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::Generate(args) => {
            assert_eq!(args.limit, "-5");
            assert!(args.count);
        }
        other => panic!("Unexpected command: {other:?}"),
    }
}
