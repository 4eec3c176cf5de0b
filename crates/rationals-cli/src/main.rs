//! Rationals CLI
//!
//! Exact rational arithmetic from the command line.
//!
//! # Commands
//!
//! - `eval`: apply `+ - * /` to two literals
//! - `cmp`: order two literals
//! - `within`: test membership in a closed interval
//! - `normalize`: print literals in lowest terms
//! - `demo`: run the built-in sanity checks
//!
//! Literals are `n` or `n/d` with arbitrary length integers.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use rationals::Rational;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod demo;

use commands::Operator;

/// Exact rational arithmetic from the command line
#[derive(Parser, Debug)]
#[command(name = "rationals")]
#[command(version)]
#[command(about = "Exact rational arithmetic from the command line")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate `LHS OP RHS`
    Eval {
        #[arg(allow_hyphen_values = true)]
        lhs: Rational,
        #[arg(allow_hyphen_values = true)]
        op: Operator,
        #[arg(allow_hyphen_values = true)]
        rhs: Rational,
    },
    /// Print `<`, `=` or `>` for the order of LHS and RHS
    Cmp {
        #[arg(allow_hyphen_values = true)]
        lhs: Rational,
        #[arg(allow_hyphen_values = true)]
        rhs: Rational,
    },
    /// Print whether LO <= X <= HI
    Within {
        #[arg(allow_hyphen_values = true)]
        x: Rational,
        #[arg(allow_hyphen_values = true)]
        lo: Rational,
        #[arg(allow_hyphen_values = true)]
        hi: Rational,
    },
    /// Print each literal in lowest terms
    Normalize {
        #[arg(required = true, allow_hyphen_values = true)]
        literals: Vec<Rational>,
    },
    /// Run the built-in checks, one `name: true|false` line each
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match cli.command {
        Command::Eval { lhs, op, rhs } => {
            println!("{}", commands::eval(&lhs, op, &rhs)?);
        }
        Command::Cmp { lhs, rhs } => {
            println!("{}", commands::compare(&lhs, &rhs));
        }
        Command::Within { x, lo, hi } => {
            println!("{}", x.within(&lo, &hi));
        }
        Command::Normalize { literals } => {
            for literal in literals {
                println!("{literal}");
            }
        }
        Command::Demo => {
            let checks = demo::run()?;
            for check in &checks {
                println!("{}: {}", check.name, check.passed);
            }
            let failed = checks.iter().filter(|c| !c.passed).count();
            if failed > 0 {
                bail!("{failed} of {} checks failed", checks.len());
            }
        }
    }

    Ok(())
}
