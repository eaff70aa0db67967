//! polyterm CLI - prints a polynomial arithmetic demonstration

mod report;

use clap::{Parser, ValueEnum};
use polyterm::prelude::RenderOptions;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Verbosity level
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity {
    /// No log output
    Quiet,
    /// Warnings only
    Normal,
    /// Operation summaries
    Debug,
    /// Every ignored term
    Trace,
}

impl Verbosity {
    fn level(self) -> Option<Level> {
        match self {
            Verbosity::Quiet => None,
            Verbosity::Normal => Some(Level::WARN),
            Verbosity::Debug => Some(Level::DEBUG),
            Verbosity::Trace => Some(Level::TRACE),
        }
    }
}

/// Sparse polynomial arithmetic demonstration
#[derive(Parser, Debug, Clone)]
#[command(name = "polyterm")]
#[command(version)]
#[command(about = "Builds polynomials term by term and prints sums, products and derivatives")]
struct Args {
    /// Term as COEFF:EXP (repeatable). Without terms the fixed demonstration runs.
    #[arg(
        short,
        long = "term",
        value_name = "COEFF:EXP",
        value_parser = parse_term,
        allow_hyphen_values = true
    )]
    terms: Vec<(i64, i64)>,

    /// Variable symbol used when printing
    #[arg(long, default_value = "x")]
    variable: String,

    /// Also print every polynomial evaluated at this point
    #[arg(long, value_name = "X", allow_hyphen_values = true)]
    at: Option<i64>,

    /// Verbosity level
    #[arg(short, long, value_enum, default_value = "normal")]
    verbosity: Verbosity,
}

/// Parses `COEFF:EXP`, e.g. `-3:2` for -3x^2.
fn parse_term(s: &str) -> Result<(i64, i64), String> {
    let (coeff, exp) = s
        .split_once(':')
        .ok_or_else(|| format!("expected COEFF:EXP, got `{s}`"))?;
    let coeff = coeff
        .trim()
        .parse()
        .map_err(|e| format!("bad coefficient `{coeff}`: {e}"))?;
    let exp = exp
        .trim()
        .parse()
        .map_err(|e| format!("bad exponent `{exp}`: {e}"))?;
    Ok((coeff, exp))
}

fn main() {
    let args = Args::parse();

    // Set up logging
    if let Some(level) = args.verbosity.level() {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Failed to set tracing subscriber: {e}");
            std::process::exit(1);
        }
    }

    let entries = if args.terms.is_empty() {
        report::demonstration()
    } else {
        report::custom(&args.terms)
    };

    let options = RenderOptions::new().with_variable(args.variable);
    match report::render(&entries, &options, args.at) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
