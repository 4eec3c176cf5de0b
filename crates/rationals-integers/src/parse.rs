//! Textual rationals: `INTEGER ( '/' INTEGER )?`.

use std::str::FromStr;
use tracing::{debug, trace};

use crate::{Integer, Rational, RationalError};

impl Rational {
    /// Parses `"n"` or `"n/d"` into a canonical rational.
    ///
    /// Unreduced and negative-denominator input is accepted, so
    /// `"117/1098"` parses to `13/122` and `"1/-2"` to `-1/2`.
    ///
    /// # Errors
    ///
    /// - [`RationalError::IllegalFormat`] if there is more than one `/`.
    /// - [`RationalError::Integer`] if either side is not an integer literal.
    /// - [`RationalError::ZeroDenominator`] if the denominator is zero.
    pub fn parse(s: &str) -> Result<Self, RationalError> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [integer] => Ok(Self::from_integer(parse_integer(integer)?)),
            [numerator, denominator] => {
                Self::new(parse_integer(numerator)?, parse_integer(denominator)?)
            }
            _ => {
                debug!(input = s, separators = parts.len() - 1, "illegal rational literal");
                Err(RationalError::IllegalFormat {
                    input: s.to_owned(),
                })
            }
        }
    }
}

fn parse_integer(literal: &str) -> Result<Integer, RationalError> {
    literal.parse().map_err(|source| {
        trace!(literal, %source, "integer literal rejected");
        RationalError::Integer {
            literal: literal.to_owned(),
            source,
        }
    })
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Conversion of string slices into rationals.
///
/// ```
/// use rationals_integers::ToRational;
///
/// let r = "117/1098".to_rational().unwrap();
/// assert_eq!(r.to_string(), "13/122");
/// ```
pub trait ToRational {
    /// Parses `self` as a rational literal.
    ///
    /// # Errors
    ///
    /// See [`Rational::parse`].
    fn to_rational(&self) -> Result<Rational, RationalError>;
}

impl ToRational for str {
    fn to_rational(&self) -> Result<Rational, RationalError> {
        Rational::parse(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("117/1098".to_rational().unwrap().to_string(), "13/122");
        assert_eq!("-2/4".parse::<Rational>().unwrap().to_string(), "-1/2");
        assert_eq!("1/-2".parse::<Rational>().unwrap().to_string(), "-1/2");
        assert_eq!("-6/-3".parse::<Rational>().unwrap().to_string(), "2");
        assert_eq!("42".parse::<Rational>().unwrap().to_string(), "42");
        assert_eq!("0/9".parse::<Rational>().unwrap().to_string(), "0");
    }

    #[test]
    fn test_parse_big_literals() {
        let r: Rational = "912016490186296920119201192141970416029/1824032980372593840238402384283940832058"
            .parse()
            .unwrap();
        assert_eq!(r, Rational::from_i64(1, 2).unwrap());
    }

    #[test]
    fn test_too_many_separators() {
        let err = "1/2/3".parse::<Rational>().unwrap_err();
        assert_eq!(
            err,
            RationalError::IllegalFormat {
                input: "1/2/3".to_owned()
            }
        );
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(err.to_string(), "illegal number format: \"1/2/3\"");
    }

    #[test]
    fn test_malformed_integer() {
        for input in ["", "1/", "/2", "x/2", "1/2.5", "one", "1_000", "1/2_0", "--1", " 1/2"] {
            let err = input.parse::<Rational>().unwrap_err();
            assert!(
                matches!(err, RationalError::Integer { .. }),
                "{input:?} gave {err:?}"
            );
            assert_eq!(err.kind(), ErrorKind::Format);
        }
    }

    #[test]
    fn test_integer_error_keeps_source() {
        use std::error::Error;

        let err = "1/abc".parse::<Rational>().unwrap_err();
        let expected = "abc".parse::<Integer>().unwrap_err();
        assert_eq!(
            err,
            RationalError::Integer {
                literal: "abc".to_owned(),
                source: expected,
            }
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_zero_denominator_text() {
        let err = "3/0".parse::<Rational>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
