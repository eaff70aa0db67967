//! Builds the polynomials the driver prints and formats the report.

use polyterm::prelude::*;
use tracing::info;

/// A labelled polynomial in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: &'static str,
    pub poly: Polynomial,
}

/// Builds a polynomial from `(coefficient, exponent)` pairs.
pub fn build(terms: &[(i64, i64)]) -> Polynomial {
    let mut p = Polynomial::new();
    for &(coeff, exp) in terms {
        p.insert_term(coeff, exp);
    }
    p
}

/// The fixed demonstration: p1, p1 + p2, (p1 + p2) * 2x and p1'.
pub fn demonstration() -> Vec<Entry> {
    let p1 = build(&[(3, 4), (2, 2), (-1, 1), (5, 0)]);
    let p2 = build(&[(1, 4), (1, 0)]);
    let p3 = build(&[(2, 1)]);

    let sum = p1.add(&p2);
    let prod = sum.mul(&p3);
    let deriv = p1.derivative();
    info!(p1 = %p1, p2 = %p2, p3 = %p3, "built demonstration operands");

    vec![
        Entry { label: "p1", poly: p1 },
        Entry { label: "sum", poly: sum },
        Entry { label: "prod", poly: prod },
        Entry { label: "derivative of p1", poly: deriv },
    ]
}

/// A user-supplied polynomial and its derivative.
pub fn custom(terms: &[(i64, i64)]) -> Vec<Entry> {
    let p = build(terms);
    info!(terms = terms.len(), kept = p.len(), "built polynomial from arguments");
    let deriv = p.derivative();
    vec![
        Entry { label: "p", poly: p },
        Entry { label: "derivative of p", poly: deriv },
    ]
}

/// Formats the report, one `label: polynomial` line per entry.
///
/// With `at`, each line also carries the value at that point.
///
/// # Errors
///
/// Returns the first evaluation overflow.
pub fn render(
    entries: &[Entry],
    options: &RenderOptions,
    at: Option<i64>,
) -> Result<Vec<String>, PolyError> {
    entries
        .iter()
        .map(|entry| {
            let text = entry.poly.display_with(options);
            match at {
                None => Ok(format!("{}: {text}", entry.label)),
                Some(x) => {
                    let value = entry.poly.checked_eval(x)?;
                    Ok(format!(
                        "{}: {text}  [{}={x} -> {value}]",
                        entry.label,
                        options.variable()
                    ))
                }
            }
        })
        .collect()
}
