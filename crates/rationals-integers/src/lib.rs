//! # rationals-integers
//!
//! Exact integer and rational arithmetic.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Self-normalizing rationals (`Rational`) built on them
//! - Parsing and formatting of `n/d` literals
//!
//! ## Canonical form
//!
//! Every `Rational` is reduced with a positive denominator. Construction
//! is the only place this is enforced; arithmetic and parsing go through it.
//!
//! ```
//! use rationals_integers::{DivBy, Rational};
//!
//! let half = 1_i32.div_by(2).unwrap();
//! let third: Rational = "1/3".parse().unwrap();
//! assert_eq!((&half + &third).to_string(), "5/6");
//! assert_eq!((half / third).unwrap().to_string(), "3/2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod div_by;
pub mod error;
pub mod integer;
pub mod parse;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use div_by::DivBy;
pub use error::{ErrorKind, RationalError};
pub use integer::Integer;
pub use parse::ToRational;
pub use rational::Rational;
