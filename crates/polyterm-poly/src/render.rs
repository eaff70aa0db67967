//! Human-readable rendering of polynomials.
//!
//! Terms are written in descending-exponent order. A unit coefficient is
//! elided except on the constant term, and every term after the first is
//! joined with `" + "` or `" - "` depending on its sign:
//!
//! ```text
//! 3x^4 + 2x^2 - x + 5
//! ```

use std::fmt;

use polyterm_rings::Coefficient;

use crate::sparse::Polynomial;
use crate::term::Term;

/// The variable symbol used when none is configured.
pub const DEFAULT_VARIABLE: &str = "x";

/// Options controlling how a polynomial is rendered.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RenderOptions {
    variable: String,
}

impl RenderOptions {
    /// Creates the default options (variable `x`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the variable symbol.
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Returns the variable symbol.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            variable: DEFAULT_VARIABLE.to_owned(),
        }
    }
}

/// A `Display` adapter pairing a polynomial with a variable symbol.
///
/// Returned by [`Polynomial::display_with`].
#[derive(Clone, Copy, Debug)]
pub struct Rendered<'a, C: Coefficient> {
    poly: &'a Polynomial<C>,
    variable: &'a str,
}

impl<'a, C: Coefficient> Rendered<'a, C> {
    pub(crate) fn new(poly: &'a Polynomial<C>, variable: &'a str) -> Self {
        Self { poly, variable }
    }
}

impl<C: Coefficient> fmt::Display for Rendered<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.poly.is_zero() {
            return f.write_str("0");
        }

        for (i, term) in self.poly.terms().enumerate() {
            match (i, term.coeff.is_negative()) {
                (0, true) => f.write_str("-")?,
                (0, false) => {}
                (_, true) => f.write_str(" - ")?,
                (_, false) => f.write_str(" + ")?,
            }
            write_unsigned_term(f, &term, self.variable)?;
        }

        Ok(())
    }
}

/// Writes `|coeff| var^exp` with unit coefficients and trivial exponents elided.
fn write_unsigned_term<C: Coefficient>(
    f: &mut fmt::Formatter<'_>,
    term: &Term<C>,
    variable: &str,
) -> fmt::Result {
    if term.is_constant() || !term.coeff.is_unit() {
        f.write_str(&term.coeff.magnitude_string())?;
    }

    match term.exp {
        0 => Ok(()),
        1 => f.write_str(variable),
        e => write!(f, "{variable}^{e}"),
    }
}
