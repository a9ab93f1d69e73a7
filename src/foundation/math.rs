/// Fractional part `x - floor(x)`, always in `[0, 1)` for finite input.
///
/// Tiny negative inputs would round up to exactly `1.0`; those map to the largest value below one.
pub(crate) fn frac(x: f64) -> f64 {
    (x - x.floor()).min(1.0 - f64::EPSILON / 2.0)
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Euclidean modulo for frame counters; `m` must be > 0.
pub(crate) fn wrap_i64(v: i64, m: i64) -> i64 {
    v.rem_euclid(m)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
