//! Built-in checks exercising the whole rational API.

use anyhow::Result;
use rationals::prelude::*;

/// Outcome of one named check.
#[derive(Debug)]
pub struct Check {
    /// Short identifier printed before the outcome.
    pub name: &'static str,
    /// Whether the computed value matched the expected one.
    pub passed: bool,
}

impl Check {
    fn new(name: &'static str, passed: bool) -> Self {
        Self { name, passed }
    }
}

/// Runs every check in a fixed order.
///
/// Errors only if building an operand fails, which would be a bug here.
pub fn run() -> Result<Vec<Check>> {
    let half = 1_i32.div_by(2)?;
    let third = 1_i32.div_by(3)?;
    let two_thirds = 2_i32.div_by(3)?;

    let big_numerator: Integer = "912016490186296920119201192141970416029".parse()?;
    let big_denominator: Integer = "1824032980372593840238402384283940832058".parse()?;

    Ok(vec![
        Check::new("sum", &half + &third == 5_i32.div_by(6)?),
        Check::new("difference", &half - &third == 1_i32.div_by(6)?),
        Check::new("product", &half * &third == 1_i32.div_by(6)?),
        Check::new("quotient", (&half / &third)? == 3_i32.div_by(2)?),
        Check::new("negation", -&half == (-1_i32).div_by(2)?),
        Check::new("format_integer", 2_i32.div_by(1)?.to_string() == "2"),
        Check::new("format_negative", (-2_i32).div_by(4)?.to_string() == "-1/2"),
        Check::new("parse_reduces", "117/1098".to_rational()?.to_string() == "13/122"),
        Check::new("less_than", half < two_thirds),
        Check::new("in_range", half.within(&third, &two_thirds)),
        Check::new("wide_i64", 2_000_000_000_i64.div_by(4_000_000_000)? == half),
        Check::new("big_integer", big_numerator.div_by(big_denominator)? == half),
    ])
}
