//! Sparse univariate polynomials.
//!
//! This module provides a sparse representation that stores only the
//! non-zero terms, keyed by exponent. Every operation builds its result
//! through `insert_term`, so like terms are combined and cancelled terms
//! dropped in exactly one place.

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::fmt;
use std::iter::{Peekable, Rev};

use polyterm_rings::Coefficient;
use tracing::{debug, trace};

use crate::error::{PolyError, Result};
use crate::render::{Rendered, RenderOptions, DEFAULT_VARIABLE};
use crate::term::Term;

/// A sparse univariate polynomial with integer coefficients.
///
/// # Invariants
///
/// - At most one term per exponent
/// - No stored coefficient is zero
/// - Terms are visited in descending-exponent order
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Polynomial<C: Coefficient = i64> {
    /// Coefficients keyed by exponent.
    terms: BTreeMap<u32, C>,
}

impl<C: Coefficient> Polynomial<C> {
    /// Creates the empty (zero) polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::new()
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(C::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: C) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(C::one(), 1)
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: C, n: u32) -> Self {
        let mut poly = Self::new();
        poly.insert_term(c, i64::from(n));
        poly
    }

    /// Adds `coeff * x^exp` to this polynomial.
    ///
    /// A term already present at `exp` has `coeff` added to it and is
    /// removed if the sum is zero. Negative or out-of-range exponents and
    /// zero coefficients are ignored. The sum uses the coefficient type's
    /// native addition.
    pub fn insert_term(&mut self, coeff: C, exp: i64) {
        if let Err(err) = self.insert_with(coeff, exp, |a, b| Some(a + b)) {
            trace!(%err, "ignoring term");
        }
    }

    /// Adds `coeff * x^exp`, reporting rejected input instead of ignoring it.
    ///
    /// On error the polynomial is left unchanged.
    ///
    /// # Errors
    ///
    /// - `NegativeExponent` if `exp < 0`
    /// - `ExponentOverflow` if `exp` does not fit in a `u32`
    /// - `ZeroCoefficient` if `coeff` is zero
    /// - `CoefficientOverflow` if combining with an existing term overflows
    pub fn try_insert_term(&mut self, coeff: C, exp: i64) -> Result<()> {
        self.insert_with(coeff, exp, C::checked_sum)
    }

    fn insert_with(
        &mut self,
        coeff: C,
        exp: i64,
        combine: impl FnOnce(C, C) -> Option<C>,
    ) -> Result<()> {
        if exp < 0 {
            return Err(PolyError::NegativeExponent { exponent: exp });
        }
        let e = u32::try_from(exp).map_err(|_| PolyError::ExponentOverflow { exponent: exp })?;
        if coeff.is_zero() {
            return Err(PolyError::ZeroCoefficient { exponent: exp });
        }

        match self.terms.entry(e) {
            Entry::Vacant(slot) => {
                slot.insert(coeff);
            }
            Entry::Occupied(mut slot) => {
                let sum = combine(*slot.get(), coeff)
                    .ok_or(PolyError::CoefficientOverflow { exponent: exp })?;
                if sum.is_zero() {
                    slot.remove();
                } else {
                    slot.insert(sum);
                }
            }
        }

        Ok(())
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.terms.keys().next_back().copied()
    }

    /// Returns the coefficient of x^exp (zero if absent).
    #[must_use]
    pub fn coeff(&self, exp: u32) -> C {
        self.terms.get(&exp).copied().unwrap_or_else(C::zero)
    }

    /// Returns the leading term.
    #[must_use]
    pub fn leading_term(&self) -> Option<Term<C>> {
        self.terms().next()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<C> {
        self.leading_term().map(|t| t.coeff)
    }

    /// Iterates over the terms in descending-exponent order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = Term<C>> + ExactSizeIterator + '_ {
        self.terms.iter().rev().map(|(&exp, &coeff)| Term::new(coeff, exp))
    }

    /// Adds two polynomials.
    ///
    /// Walks both operands from their highest exponent down, taking the
    /// larger exponent first and summing coefficients on a tie.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for merged in MergeDescending::new(self, other) {
            match merged {
                Merged::Left(t) | Merged::Right(t) => result.insert_term(t.coeff, i64::from(t.exp)),
                Merged::Both(exp, a, b) => result.insert_term(a + b, i64::from(exp)),
            }
        }
        debug!(terms = result.len(), "added polynomials");
        result
    }

    /// Adds two polynomials, reporting coefficient overflow.
    ///
    /// # Errors
    ///
    /// Returns `CoefficientOverflow` if a pair of like terms overflows.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let mut result = Self::new();
        for merged in MergeDescending::new(self, other) {
            let (coeff, exp) = match merged {
                Merged::Left(t) | Merged::Right(t) => (t.coeff, i64::from(t.exp)),
                Merged::Both(exp, a, b) => {
                    let exp = i64::from(exp);
                    let sum = a
                        .checked_sum(b)
                        .ok_or(PolyError::CoefficientOverflow { exponent: exp })?;
                    (sum, exp)
                }
            };
            if !coeff.is_zero() {
                result.try_insert_term(coeff, exp)?;
            }
        }
        Ok(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        let mut result = Self::new();
        for t in self.terms() {
            result.insert_term(-t.coeff, i64::from(t.exp));
        }
        result
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    ///
    /// Products whose exponent exceeds `u32::MAX` are dropped.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for a in self.terms() {
            for b in other.terms() {
                result.insert_term(a.coeff * b.coeff, i64::from(a.exp) + i64::from(b.exp));
            }
        }
        debug!(
            lhs = self.len(),
            rhs = other.len(),
            terms = result.len(),
            "multiplied polynomials"
        );
        result
    }

    /// Multiplies two polynomials, reporting overflow.
    ///
    /// # Errors
    ///
    /// - `CoefficientOverflow` if a product or an accumulated sum overflows
    /// - `ExponentOverflow` if an exponent sum exceeds `u32::MAX`
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        let mut result = Self::new();
        for a in self.terms() {
            for b in other.terms() {
                let exp = i64::from(a.exp) + i64::from(b.exp);
                let coeff = a
                    .coeff
                    .checked_product(b.coeff)
                    .ok_or(PolyError::CoefficientOverflow { exponent: exp })?;
                result.try_insert_term(coeff, exp)?;
            }
        }
        Ok(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: C) -> Self {
        let mut result = Self::new();
        for t in self.terms() {
            result.insert_term(t.coeff * c, i64::from(t.exp));
        }
        result
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let mut result = Self::new();
        for d in self.terms().filter_map(|t| t.derivative()) {
            result.insert_term(d.coeff, i64::from(d.exp));
        }
        debug!(terms = result.len(), "differentiated polynomial");
        result
    }

    /// Computes the formal derivative, reporting coefficient overflow.
    ///
    /// # Errors
    ///
    /// Returns `CoefficientOverflow` if some `coeff * exp` does not fit.
    pub fn checked_derivative(&self) -> Result<Self> {
        let mut result = Self::new();
        for t in self.terms() {
            if let Some(d) = t.checked_derivative()? {
                result.try_insert_term(d.coeff, i64::from(d.exp))?;
            }
        }
        Ok(result)
    }

    /// Evaluates the polynomial at a point using Horner's method.
    ///
    /// Gaps between exponents are bridged with a single power of `x`.
    #[must_use]
    pub fn eval(&self, x: C) -> C {
        let Some(mut current) = self.degree() else {
            return C::zero();
        };

        let mut acc = C::zero();
        for t in self.terms() {
            acc = acc * x.pow(current - t.exp) + t.coeff;
            current = t.exp;
        }
        acc * x.pow(current)
    }

    /// Evaluates the polynomial at a point, reporting overflow.
    ///
    /// # Errors
    ///
    /// Returns `CoefficientOverflow` naming the term being folded in when
    /// the running value overflows.
    pub fn checked_eval(&self, x: C) -> Result<C> {
        let Some(mut current) = self.degree() else {
            return Ok(C::zero());
        };

        let mut acc = C::zero();
        for t in self.terms() {
            let overflow = PolyError::CoefficientOverflow {
                exponent: i64::from(t.exp),
            };
            acc = checked_pow(x, current - t.exp)
                .and_then(|p| acc.checked_product(p))
                .and_then(|v| v.checked_sum(t.coeff))
                .ok_or(overflow)?;
            current = t.exp;
        }

        checked_pow(x, current)
            .and_then(|p| acc.checked_product(p))
            .ok_or(PolyError::CoefficientOverflow { exponent: 0 })
    }

    /// Returns a `Display` adapter using the given rendering options.
    #[must_use]
    pub fn display_with<'a>(&'a self, options: &'a RenderOptions) -> Rendered<'a, C> {
        Rendered::new(self, options.variable())
    }
}

fn checked_pow<C: Coefficient>(base: C, exp: u32) -> Option<C> {
    usize::try_from(exp)
        .ok()
        .and_then(|e| num_traits::checked_pow(base, e))
}

impl<C: Coefficient> Default for Polynomial<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Coefficient> fmt::Display for Polynomial<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Rendered::new(self, DEFAULT_VARIABLE), f)
    }
}

impl<C: Coefficient> FromIterator<(C, i64)> for Polynomial<C> {
    fn from_iter<I: IntoIterator<Item = (C, i64)>>(iter: I) -> Self {
        let mut poly = Self::new();
        poly.extend(iter);
        poly
    }
}

impl<C: Coefficient> Extend<(C, i64)> for Polynomial<C> {
    fn extend<I: IntoIterator<Item = (C, i64)>>(&mut self, iter: I) {
        for (coeff, exp) in iter {
            self.insert_term(coeff, exp);
        }
    }
}

impl<C: Coefficient> From<Term<C>> for Polynomial<C> {
    fn from(term: Term<C>) -> Self {
        Self::monomial(term.coeff, term.exp)
    }
}

impl<C: Coefficient> std::ops::Add for &Polynomial<C> {
    type Output = Polynomial<C>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl<C: Coefficient> std::ops::Sub for &Polynomial<C> {
    type Output = Polynomial<C>;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl<C: Coefficient> std::ops::Mul for &Polynomial<C> {
    type Output = Polynomial<C>;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl<C: Coefficient> std::ops::Neg for &Polynomial<C> {
    type Output = Polynomial<C>;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

/// One step of a descending merge over two polynomials.
enum Merged<C: Coefficient> {
    /// A term only the left operand has.
    Left(Term<C>),
    /// A term only the right operand has.
    Right(Term<C>),
    /// Both operands have a term at this exponent.
    Both(u32, C, C),
}

type Descending<'a, C> = Peekable<Rev<btree_map::Iter<'a, u32, C>>>;

/// Merges the terms of two polynomials from the highest exponent down.
struct MergeDescending<'a, C: Coefficient> {
    left: Descending<'a, C>,
    right: Descending<'a, C>,
}

impl<'a, C: Coefficient> MergeDescending<'a, C> {
    fn new(left: &'a Polynomial<C>, right: &'a Polynomial<C>) -> Self {
        Self {
            left: left.terms.iter().rev().peekable(),
            right: right.terms.iter().rev().peekable(),
        }
    }
}

impl<C: Coefficient> Iterator for MergeDescending<'_, C> {
    type Item = Merged<C>;

    fn next(&mut self) -> Option<Self::Item> {
        let left_exp = self.left.peek().map(|&(&e, _)| e);
        let right_exp = self.right.peek().map(|&(&e, _)| e);

        let take_left = match (left_exp, right_exp) {
            (None, None) => return None,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(l), Some(r)) if l == r => {
                let (&exp, &a) = self.left.next()?;
                let (_, &b) = self.right.next()?;
                return Some(Merged::Both(exp, a, b));
            }
            (Some(l), Some(r)) => l > r,
        };

        if take_left {
            self.left.next().map(|(&e, &c)| Merged::Left(Term::new(c, e)))
        } else {
            self.right.next().map(|(&e, &c)| Merged::Right(Term::new(c, e)))
        }
    }
}
