//! Subcommand implementations.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use rationals::Rational;
use tracing::debug;

/// Binary operator accepted by `eval`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Operator {
    #[value(name = "+")]
    Add,
    #[value(name = "-")]
    Sub,
    #[value(name = "*", alias = "x")]
    Mul,
    #[value(name = "/")]
    Div,
}

/// Applies `op` to `lhs` and `rhs`.
///
/// Only division can fail, when `rhs` is zero.
pub fn eval(lhs: &Rational, op: Operator, rhs: &Rational) -> Result<Rational> {
    debug!(%lhs, ?op, %rhs, "evaluating");
    let value = match op {
        Operator::Add => lhs + rhs,
        Operator::Sub => lhs - rhs,
        Operator::Mul => lhs * rhs,
        Operator::Div => lhs
            .divide(rhs)
            .with_context(|| format!("cannot divide {lhs} by {rhs}"))?,
    };
    Ok(value)
}

/// Returns `<`, `=` or `>` for the order of `lhs` and `rhs`.
pub fn compare(lhs: &Rational, rhs: &Rational) -> &'static str {
    match lhs.cmp(rhs) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}
