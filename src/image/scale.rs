//! Scale normalization

/// Bound `value` into `[min, max]`.
///
/// Unlike `f64::clamp` this never panics: with an inverted range the result
/// is `min`. Callers are expected to pass `min <= max`.
#[inline]
pub fn clamp_to_range(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Bound a zoom scale, allowing `elastic_buffer` of overshoot on both ends.
///
/// The allowed range is
/// `[min_scale * (1 - buffer), max(max_scale, hard_upper_bound) * (1 + buffer)]`.
/// `hard_upper_bound` can only raise the ceiling, never pull it below
/// `max_scale`.
#[inline]
pub fn normalize_scale(
    scale: f64,
    hard_upper_bound: f64,
    elastic_buffer: f64,
    min_scale: f64,
    max_scale: f64,
) -> f64 {
    let lower = min_scale * (1.0 - elastic_buffer);
    let upper = max_scale.max(hard_upper_bound) * (1.0 + elastic_buffer);
    let bounded = clamp_to_range(scale, lower, upper);
    tracing::trace!(target: "scale", scale, lower, upper, bounded, "normalize");
    bounded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_clamp_inside_range() {
        assert_eq!(clamp_to_range(5.0, 1.0, 10.0), 5.0);
    }

    #[test]
    fn test_clamp_below_and_above() {
        assert_eq!(clamp_to_range(-3.0, 1.0, 10.0), 1.0);
        assert_eq!(clamp_to_range(99.0, 1.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_inclusive_bounds() {
        assert_eq!(clamp_to_range(1.0, 1.0, 10.0), 1.0);
        assert_eq!(clamp_to_range(10.0, 1.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_inverted_range_does_not_panic() {
        let v = clamp_to_range(5.0, 10.0, 1.0);
        assert!(v.is_finite());
    }

    #[test]
    fn test_normalize_upper_overshoot() {
        assert!(approx(normalize_scale(15.0, 0.0, 0.2, 0.5, 10.0), 12.0));
    }

    #[test]
    fn test_normalize_lower_overshoot() {
        assert!(approx(normalize_scale(0.1, 0.0, 0.2, 0.5, 10.0), 0.4));
    }

    #[test]
    fn test_normalize_passthrough() {
        assert_eq!(normalize_scale(3.0, 0.0, 0.2, 0.5, 10.0), 3.0);
    }

    #[test]
    fn test_hard_upper_bound_raises_ceiling() {
        assert!(approx(normalize_scale(50.0, 20.0, 0.2, 0.5, 10.0), 24.0));
    }

    #[test]
    fn test_hard_upper_bound_never_lowers_ceiling() {
        assert!(approx(normalize_scale(50.0, 2.0, 0.2, 0.5, 10.0), 12.0));
    }

    #[test]
    fn test_zero_buffer_is_hard_clamp() {
        assert_eq!(normalize_scale(15.0, 0.0, 0.0, 0.5, 10.0), 10.0);
        assert_eq!(normalize_scale(0.1, 0.0, 0.0, 0.5, 10.0), 0.5);
    }
}
