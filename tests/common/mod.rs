#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use julian_dates::Split;
use num_rational::Rational64;
use rand::rngs::StdRng;
use rand::Rng;
use tracing_subscriber::EnvFilter;

/// Route the crate's tracing events to the test output, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Shorthand for an exact rational.
pub fn q(numer: i64, denom: i64) -> Rational64 {
    Rational64::new(numer, denom)
}

pub fn assert_split_close(actual: &Split<f64>, day_number: f64, fraction: f64, epsilon: f64) {
    assert_eq!(*actual.day_number(), day_number);
    assert_abs_diff_eq!(*actual.fraction(), fraction, epsilon = epsilon);
}

/// Random day count within a few thousand years of the JD epochs of interest,
/// with a denominator small enough to keep sums in `i64`.
pub fn random_rational(rng: &mut StdRng) -> Rational64 {
    let numer = rng.random_range(-3_000_000_000_i64..3_000_000_000);
    let denom = rng.random_range(1_i64..=1_000);
    Rational64::new(numer, denom)
}

/// Random zone offset between UT−14:00 and UT+14:00, to the minute.
pub fn random_zone(rng: &mut StdRng) -> Rational64 {
    Rational64::new(rng.random_range(-840_i64..=840), 1_440)
}
