//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Truncate a f64 toward zero and clamp it to the i32 range, returning 0 for
/// NaN values.
#[must_use]
pub fn trunc_f64_to_i32(value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    let min = cast::<i32, f64>(i32::MIN).unwrap_or(f64::MIN);
    let max = cast::<i32, f64>(i32::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).trunc();
    cast::<f64, i32>(clamped).unwrap_or(0)
}

/// Ratio of two counters, defined as 0.0 when the denominator is zero.
#[must_use]
pub fn ratio_or_zero(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}
