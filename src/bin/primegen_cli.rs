//! primegen CLI - generate primes from the command line
//!
//! # Examples
//!
//! ```bash
//! # Primes up to 100
//! primegen generate 100
//!
//! # Same envelope as the HTTP endpoint
//! primegen --format json generate 100
//!
//! # Only count them
//! primegen generate 1000000 --count
//! ```

use clap::Parser;
use primegen::cli::{output, run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
