//! Single polynomial terms.

use polyterm_rings::Coefficient;

use crate::error::{PolyError, Result};

/// A term `coeff * x^exp`.
///
/// Terms handed out by a `Polynomial` always have a non-zero coefficient.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Term<C: Coefficient = i64> {
    /// The exponent of the variable.
    pub exp: u32,
    /// The coefficient.
    pub coeff: C,
}

impl<C: Coefficient> Term<C> {
    /// Creates a new term.
    #[must_use]
    pub const fn new(coeff: C, exp: u32) -> Self {
        Self { exp, coeff }
    }

    /// Returns true if this is a constant term.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        self.exp == 0
    }

    /// Returns the derivative of this term, or `None` for a constant.
    ///
    /// Uses the native coefficient multiplication.
    #[must_use]
    pub fn derivative(&self) -> Option<Self> {
        if self.is_constant() {
            return None;
        }
        Some(Self::new(self.coeff * C::from_exponent(self.exp), self.exp - 1))
    }

    /// Like `derivative`, but reports an overflowing `coeff * exp`.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::CoefficientOverflow` if the product does not fit.
    pub fn checked_derivative(&self) -> Result<Option<Self>> {
        if self.is_constant() {
            return Ok(None);
        }
        let exp = self.exp - 1;
        self.coeff
            .checked_product(C::from_exponent(self.exp))
            .map(|c| Some(Self::new(c, exp)))
            .ok_or(PolyError::CoefficientOverflow {
                exponent: i64::from(exp),
            })
    }
}

impl<C: Coefficient> From<(C, u32)> for Term<C> {
    fn from((coeff, exp): (C, u32)) -> Self {
        Self::new(coeff, exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivative() {
        assert_eq!(Term::new(3i64, 4).derivative(), Some(Term::new(12, 3)));
        assert_eq!(Term::new(-1i64, 1).derivative(), Some(Term::new(-1, 0)));
        assert_eq!(Term::new(5i64, 0).derivative(), None);
    }

    #[test]
    fn test_checked_derivative() {
        assert_eq!(Term::new(5i64, 0).checked_derivative(), Ok(None));
        assert_eq!(Term::new(2i64, 3).checked_derivative(), Ok(Some(Term::new(6, 2))));
        assert_eq!(
            Term::new(i64::MAX, 2).checked_derivative(),
            Err(PolyError::CoefficientOverflow { exponent: 1 })
        );
    }
}
