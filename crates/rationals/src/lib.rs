//! # Rationals
//!
//! Exact rational numbers over arbitrary precision integers.
//!
//! Values are always kept in canonical form (lowest terms, positive
//! denominator), so equality, hashing and formatting never see two
//! spellings of the same number.
//!
//! ## Quick Start
//!
//! ```rust
//! use rationals::prelude::*;
//!
//! let half = 1_i32.div_by(2).unwrap();
//! let third = "1/3".to_rational().unwrap();
//! let two_thirds = 2_i32.div_by(3).unwrap();
//!
//! assert_eq!((&half - &third).to_string(), "1/6");
//! assert!(half < two_thirds);
//! assert!(half.within(&third, &two_thirds));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use rationals_integers as integers;
pub use rationals_integers::{DivBy, ErrorKind, Integer, Rational, RationalError, ToRational};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use rationals_integers::{DivBy, Integer, Rational, RationalError, ToRational};
}
