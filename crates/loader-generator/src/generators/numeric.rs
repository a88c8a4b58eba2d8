//! Numeric value generators.

use loader_core::GeneratedValue;
use rand::Rng;

/// Decimal places beyond this no longer change an `f64`.
const MAX_DECIMALS: u32 = 300;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> GeneratedValue {
    if min >= max {
        return GeneratedValue::Int64(min);
    }
    GeneratedValue::Int64(rng.random_range(min..=max))
}

/// Generate a random float in `[min, max)`, truncated toward zero to `decimals` places.
pub fn generate_float_range<R: Rng>(
    rng: &mut R,
    min: f64,
    max: f64,
    decimals: u32,
) -> GeneratedValue {
    let value = min + rng.random::<f64>() * (max - min);
    let scale = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    GeneratedValue::Float64((value * scale).trunc() / scale)
}

/// Generate a monetary amount in `[min, max)` as a string with two decimals.
pub fn generate_money<R: Rng>(rng: &mut R, min: f64, max: f64) -> GeneratedValue {
    let value = min + rng.random::<f64>() * (max - min);
    GeneratedValue::String(format!("{value:.2}"))
}
