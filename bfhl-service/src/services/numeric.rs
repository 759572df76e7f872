//! Pure integer routines behind the `fibonacci`, `prime`, `lcm` and `hcf` keys.

use serde_json::Value;
use thiserror::Error;

/// Longest Fibonacci prefix whose last term still fits in a `u64`.
pub const MAX_FIBONACCI_TERMS: usize = 94;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    #[error("cannot reduce an empty sequence")]
    EmptySequence,

    #[error("lcm is undefined when both operands are zero")]
    ZeroOperands,

    #[error("result exceeds the supported integer range")]
    Overflow,
}

/// Trial division primality test.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    // `i <= n / i` is `i * i <= n` without the overflow near i64::MAX.
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Euclid's algorithm. The result is never negative; `gcd(a, 0) == |a|`.
///
/// Saturates at `i64::MAX` for the single unrepresentable case
/// `gcd(i64::MIN, 0)`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    i64::try_from(a).unwrap_or(i64::MAX)
}

pub fn lcm(a: i64, b: i64) -> Result<i64, NumericError> {
    let divisor = gcd(a, b);
    if divisor == 0 {
        return Err(NumericError::ZeroOperands);
    }

    (a / divisor)
        .checked_mul(b)
        .and_then(i64::checked_abs)
        .ok_or(NumericError::Overflow)
}

/// First `n` terms of 0, 1, 1, 2, 3, 5, ...
///
/// Callers bound `n` by [`MAX_FIBONACCI_TERMS`]; terms past that point would
/// not fit in a `u64` and are cut off.
pub fn fibonacci(n: usize) -> Vec<u64> {
    let n = n.min(MAX_FIBONACCI_TERMS);
    let mut terms = Vec::with_capacity(n);
    let (mut current, mut next) = (0u64, 1u64);

    for _ in 0..n {
        terms.push(current);
        // The final iteration may compute a term that is never emitted.
        (current, next) = (next, current.saturating_add(next));
    }
    terms
}

/// Keep the prime elements of `values` in their original order.
///
/// Elements that are not integers (strings, floats with a fraction, nulls)
/// are skipped rather than rejected.
pub fn filter_primes(values: &[Value]) -> Vec<i64> {
    values
        .iter()
        .filter_map(as_integer)
        .filter(|&n| is_prime(n))
        .collect()
}

/// Left fold with [`lcm`]. A single element reduces to its absolute value.
pub fn reduce_lcm(values: &[i64]) -> Result<i64, NumericError> {
    let (first, rest) = values.split_first().ok_or(NumericError::EmptySequence)?;
    let first = first.checked_abs().ok_or(NumericError::Overflow)?;
    rest.iter().try_fold(first, |acc, &n| lcm(acc, n))
}

/// Left fold with [`gcd`]. A single element reduces to its absolute value.
pub fn reduce_hcf(values: &[i64]) -> Result<i64, NumericError> {
    let (first, rest) = values.split_first().ok_or(NumericError::EmptySequence)?;
    let first = first.checked_abs().ok_or(NumericError::Overflow)?;
    Ok(rest.iter().fold(first, |acc, &n| gcd(acc, n)))
}

/// Interpret a JSON number as an integer.
///
/// Accepts anything representable as `i64`, including floats with no
/// fractional part such as `7.0`.
pub fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }

    let f = value.as_f64()?;
    // i64::MAX is not exactly representable; 2^63 as f64 is already out of range.
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
