/// Maximum number of evaluations spent looking for a finite value.
///
/// This is `ceil(-log2(f64::EPSILON))`: repeated shrinking cannot usefully
/// go on longer than the mantissa has bits.
pub(crate) const MAX_FINITE_ATTEMPTS: usize = f64::MANTISSA_DIGITS as usize - 1;

/// Returns the smallest `f64` greater than `x`.
///
/// `NaN` and `+inf` map to themselves.
pub(crate) fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Returns the spacing between `|x|` and the next larger `f64`.
pub(crate) fn ulp(x: f64) -> f64 {
    let x = x.abs();
    next_up(x) - x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_attempts_match_mantissa_bits() {
        assert_eq!(MAX_FINITE_ATTEMPTS, 52);
    }

    #[test]
    fn next_up_steps_one_ulp() {
        assert_eq!(next_up(1.0), 1.0 + f64::EPSILON);
        assert_eq!(next_up(0.0), f64::from_bits(1));
        assert_eq!(next_up(-0.0), f64::from_bits(1));
        assert!(next_up(-1.0) > -1.0);
        assert_eq!(next_up(f64::MAX), f64::INFINITY);
        assert_eq!(next_up(f64::INFINITY), f64::INFINITY);
        assert!(next_up(f64::NAN).is_nan());
    }

    #[test]
    fn ulp_scales_with_magnitude() {
        assert_eq!(ulp(1.0), f64::EPSILON);
        assert_eq!(ulp(-1.0), f64::EPSILON);
        assert_eq!(ulp(1024.0), 1024.0 * f64::EPSILON);
        assert_eq!(ulp(0.0), f64::from_bits(1));
    }
}
