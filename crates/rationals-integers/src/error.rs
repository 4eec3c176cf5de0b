//! Errors raised while constructing or parsing rationals.

use dashu::base::error::ParseError;
use thiserror::Error;

/// Coarse classification of a [`RationalError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied a value that cannot form a rational (a zero denominator).
    InvalidArgument,
    /// The caller supplied text that is not a rational literal.
    Format,
}

/// Errors that can occur while building a [`Rational`](crate::Rational).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A zero denominator, given directly or produced by dividing by zero.
    #[error("denominator must not be zero")]
    ZeroDenominator,

    /// The text has more than one `/` separator.
    #[error("illegal number format: {input:?}")]
    IllegalFormat {
        /// The rejected input.
        input: String,
    },

    /// One side of the fraction is not an integer literal.
    #[error("invalid integer literal {literal:?}: {source}")]
    Integer {
        /// The rejected literal.
        literal: String,
        /// The integer parser's own error.
        #[source]
        source: ParseError,
    },
}

impl RationalError {
    /// Returns which kind of caller error this is.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            RationalError::ZeroDenominator => ErrorKind::InvalidArgument,
            RationalError::IllegalFormat { .. } | RationalError::Integer { .. } => ErrorKind::Format,
        }
    }
}
