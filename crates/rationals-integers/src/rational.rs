//! Arbitrary precision rational numbers.
//!
//! A [`Rational`] is always in canonical form: the denominator is positive
//! and shares no factor with the numerator. Every constructor and operator
//! goes through [`Rational::new`] (or its unchecked core when the denominator
//! is known to be non-zero), so no other code ever reduces a fraction.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{Integer, RationalError};

/// An arbitrary precision rational number.
///
/// Because canonical form is unique, the derived equality and hash on the
/// `(numerator, denominator)` pair are value equality and value hash.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

#[derive(Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// The fraction is reduced and the sign moved onto the numerator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }
        Ok(Self::reduce(numerator, denominator))
    }

    // Caller guarantees `denominator != 0`.
    fn reduce(numerator: Integer, denominator: Integer) -> Self {
        debug_assert!(!denominator.is_zero());
        let gcd = numerator.gcd(&denominator);
        let numerator = numerator / &gcd;
        let denominator = denominator / &gcd;
        if denominator.is_negative() {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self::reduce(n, Integer::one())
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Returns the numerator. Carries the sign of the value.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator, which is always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Splits into `(numerator, denominator)`.
    #[must_use]
    pub fn into_parts(self) -> (Integer, Integer) {
        (self.numerator, self.denominator)
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.numerator.clone())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if the rational is zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Divides `self` by `other`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Self, RationalError> {
        let (numerator, denominator) = self.cross(other, Op::Div);
        Self::new(numerator, denominator)
    }

    /// Returns true if `lo <= self <= hi`.
    ///
    /// An interval with `lo > hi` contains nothing.
    #[must_use]
    pub fn within(&self, lo: &Self, hi: &Self) -> bool {
        lo <= self && self <= hi
    }

    /// Unreduced result of `self op other` by cross-multiplication.
    fn cross(&self, other: &Self, op: Op) -> (Integer, Integer) {
        let (a, b) = (&self.numerator, &self.denominator);
        let (c, d) = (&other.numerator, &other.denominator);
        match op {
            Op::Add => (a * d + b * c, b * d),
            Op::Sub => (a * d - b * c, b * d),
            Op::Mul => (a * c, b * d),
            Op::Div => (a * d, b * c),
        }
    }

    // Only for operators whose denominator is a product of two positive ones.
    fn combine(&self, other: &Self, op: Op) -> Self {
        let (numerator, denominator) = self.cross(other, op);
        Self::reduce(numerator, denominator)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so the sign of a·d − b·c decides.
        let difference =
            &self.numerator * &other.denominator - &self.denominator * &other.numerator;
        difference.signum().cmp(&0)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(&rhs, Op::Add)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        self.combine(rhs, Op::Add)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, Op::Add)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(&rhs, Op::Sub)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        self.combine(rhs, Op::Sub)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, Op::Sub)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.combine(&rhs, Op::Mul)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        self.combine(rhs, Op::Mul)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        self.combine(rhs, Op::Mul)
    }
}

/// Division is fallible: dividing by zero yields
/// [`RationalError::ZeroDenominator`].
impl Div for Rational {
    type Output = Result<Self, RationalError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(&rhs)
    }
}

impl Div<&Rational> for Rational {
    type Output = Result<Self, RationalError>;

    fn div(self, rhs: &Rational) -> Self::Output {
        self.divide(rhs)
    }
}

impl Div for &Rational {
    type Output = Result<Rational, RationalError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(rhs)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}
