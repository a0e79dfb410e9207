//! Sieve of Eratosthenes over a bounded range.
//!
//! Candidates are tracked in a [`FixedBitSet`] indexed `0..=N`, one bit
//! per integer, so the largest accepted bound costs about 256 MiB of
//! flags rather than 2 GiB of `bool`s.

use fixedbitset::FixedBitSet;

/// Generate every prime in `[2, bound]` in ascending order
///
/// Negative bounds are sieved by magnitude. Bounds below 2 yield an
/// empty list.
pub fn primes_up_to(bound: i32) -> Vec<u32> {
    sieve(bound)
        .ones()
        .map(|prime| prime as u32)
        .collect()
}

/// Count the primes in `[2, bound]` without collecting them
pub fn count_up_to(bound: i32) -> usize {
    sieve(bound).count_ones(..)
}

/// Flag set where bit `i` is set exactly when `i` is prime
fn sieve(bound: i32) -> FixedBitSet {
    let maximum = bound.unsigned_abs() as usize;
    let mut is_prime = FixedBitSet::with_capacity(maximum + 1);
    if maximum < 2 {
        return is_prime;
    }
    is_prime.insert_range(2..);

    // A composite always has a factor no greater than its square root.
    let maximum_sqrt = ((maximum as f64).sqrt() + 0.5) as usize;
    for candidate in 2..=maximum_sqrt {
        if !is_prime.contains(candidate) {
            continue;
        }
        // Smaller multiples were already cleared by smaller primes.
        let mut composite = candidate * candidate;
        while composite < is_prime.len() {
            is_prime.set(composite, false);
            composite += candidate;
        }
    }

    is_prime
}
