//! `a.div_by(b)` builders for fractions.

use dashu::integer::IBig;

use crate::{Integer, Rational, RationalError};

/// Builds the rational `self / denominator`.
///
/// Implemented for pairs of the same integer type. All of them defer to
/// [`Rational::new`], so the result is canonical.
///
/// ```
/// use rationals_integers::DivBy;
///
/// let half = 2_000_000_000_i64.div_by(4_000_000_000).unwrap();
/// assert_eq!(half, 1_i32.div_by(2).unwrap());
/// ```
pub trait DivBy<Rhs = Self> {
    /// Returns `self / denominator` in lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if `denominator` is zero.
    fn div_by(self, denominator: Rhs) -> Result<Rational, RationalError>;
}

impl DivBy for Integer {
    fn div_by(self, denominator: Integer) -> Result<Rational, RationalError> {
        Rational::new(self, denominator)
    }
}

impl DivBy for IBig {
    fn div_by(self, denominator: IBig) -> Result<Rational, RationalError> {
        Rational::new(self.into(), denominator.into())
    }
}

impl DivBy for i64 {
    fn div_by(self, denominator: i64) -> Result<Rational, RationalError> {
        Rational::new(self.into(), denominator.into())
    }
}

impl DivBy for i32 {
    fn div_by(self, denominator: i32) -> Result<Rational, RationalError> {
        Rational::new(self.into(), denominator.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_widths_agree() {
        assert_eq!(1_i32.div_by(2), 1_i64.div_by(2));
        assert_eq!(
            Integer::new(-3).div_by(Integer::new(9)).unwrap().to_string(),
            "-1/3"
        );
        assert_eq!(IBig::from(10).div_by(IBig::from(-4)).unwrap().to_string(), "-5/2");
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(7_i32.div_by(0), Err(RationalError::ZeroDenominator));
        assert_eq!(7_i64.div_by(0), Err(RationalError::ZeroDenominator));
    }

    #[test]
    fn test_no_native_overflow() {
        assert_eq!(i64::MIN.div_by(-1).unwrap().to_string(), "9223372036854775808");
        assert_eq!(i32::MIN.div_by(i32::MIN).unwrap().to_string(), "1");
    }
}
