//! Babylonian square root used by the standard deviation.

/// Iteration stops once guess and companion are closer than this.
pub const SQRT_TOLERANCE: f64 = 1e-6;

/// Upper bound on iterations. Halving down from `f64::MAX` takes about 512
/// steps before Newton's quadratic convergence kicks in.
pub const SQRT_MAX_ITERATIONS: usize = 1024;

/// Approximates `sqrt(value)` by repeatedly averaging a guess with
/// `value / guess`.
///
/// The guess starts at `value` and its companion at `1.0`; their product is
/// always `value`, so the root lies between them. Iteration ends when the two
/// are within [`SQRT_TOLERANCE`], when a step no longer lowers the guess
/// (floating-point fixed point, reached for large inputs where the tolerance
/// is finer than one ulp), or after [`SQRT_MAX_ITERATIONS`].
///
/// Edge cases: `0.0` and `+inf` map to themselves, negative inputs and NaN
/// map to NaN.
///
/// ```
/// use basic_stats::math::babylonian_sqrt;
///
/// assert!((babylonian_sqrt(2.0) - 1.414_213_56).abs() < 1e-6);
/// assert_eq!(babylonian_sqrt(0.0), 0.0);
/// ```
pub fn babylonian_sqrt(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        return f64::NAN;
    }
    if value == 0.0 || value.is_infinite() {
        return value;
    }

    let mut guess = value;
    let mut companion = 1.0;

    for iteration in 0..SQRT_MAX_ITERATIONS {
        if (guess - companion).abs() < SQRT_TOLERANCE {
            break;
        }

        let next = (guess + companion) / 2.0;
        // From the second step on the guess only decreases.
        if iteration > 0 && next >= guess {
            break;
        }

        guess = next;
        companion = value / guess;
    }

    guess
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        let slack = SQRT_TOLERANCE + expected * 1e-12;
        assert!(
            (actual - expected).abs() <= slack,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_perfect_squares() {
        assert_close(babylonian_sqrt(1.0), 1.0);
        assert_close(babylonian_sqrt(4.0), 2.0);
        assert_close(babylonian_sqrt(144.0), 12.0);
        assert_close(babylonian_sqrt(1e10), 1e5);
    }

    #[test]
    fn test_zero_is_exact() {
        assert_eq!(babylonian_sqrt(0.0), 0.0);
    }

    #[test]
    fn test_values_below_one_iterate() {
        // A one-sided `guess - companion` test would return the input here.
        assert_close(babylonian_sqrt(0.25), 0.5);
        assert_close(babylonian_sqrt(0.01), 0.1);
    }

    #[test]
    fn test_tiny_values_stay_within_tolerance() {
        let root = babylonian_sqrt(1e-300);
        assert!(root >= 0.0);
        assert!(root < SQRT_TOLERANCE * 2.0);
    }

    #[test]
    fn test_huge_values_terminate() {
        assert_close(babylonian_sqrt(1e300), 1e150);
        let root = babylonian_sqrt(f64::MAX);
        assert!(((root / f64::MAX.sqrt()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_and_negative() {
        assert_eq!(babylonian_sqrt(f64::INFINITY), f64::INFINITY);
        assert!(babylonian_sqrt(-1.0).is_nan());
        assert!(babylonian_sqrt(f64::NAN).is_nan());
    }

    proptest! {
        #[test]
        fn matches_reference_root(value in 0.0_f64..1e12) {
            let root = babylonian_sqrt(value);
            let expected = value.sqrt();
            prop_assert!(
                (root - expected).abs() <= SQRT_TOLERANCE + expected * 1e-12,
                "sqrt({}) = {}, expected {}", value, root, expected
            );
        }
    }
}
