//! Algebraic structure traits.
//!
//! Polynomial coefficients live in a ring of signed machine integers. The
//! trait here pins down exactly what the polynomial code needs from that
//! ring: the usual integer operations, checked variants for callers that
//! want overflow reported, and lossless conversion of exponents.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{PrimInt, Signed};

/// A signed integer type usable as a polynomial coefficient.
///
/// # Laws
///
/// - Addition and multiplication behave as in Z whenever no overflow occurs
/// - `checked_sum` / `checked_product` return `None` exactly when the
///   native operation would overflow
/// - Every `u32` exponent converts losslessly via `from_exponent`
pub trait Coefficient:
    PrimInt + Signed + From<u32> + Hash + Debug + Display + Send + Sync + 'static
{
    /// Converts an exponent into a coefficient (used for `c * e` in derivatives).
    #[must_use]
    fn from_exponent(e: u32) -> Self {
        <Self as From<u32>>::from(e)
    }

    /// Adds two coefficients, returning `None` on overflow.
    #[must_use]
    fn checked_sum(self, other: Self) -> Option<Self> {
        self.checked_add(&other)
    }

    /// Multiplies two coefficients, returning `None` on overflow.
    #[must_use]
    fn checked_product(self, other: Self) -> Option<Self> {
        self.checked_mul(&other)
    }

    /// Returns the decimal digits of `|self|`.
    ///
    /// Works for `MIN`, whose absolute value is not representable.
    #[must_use]
    fn magnitude_string(&self) -> String {
        let digits = self.to_string();
        match digits.strip_prefix('-') {
            Some(rest) => rest.to_owned(),
            None => digits,
        }
    }

    /// Returns true if this coefficient is exactly one in magnitude.
    #[must_use]
    fn is_unit(&self) -> bool {
        *self == Self::one() || *self == -Self::one()
    }
}
