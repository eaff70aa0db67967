//! # polyterm-poly
//!
//! Sparse univariate polynomial arithmetic for polyterm.
//!
//! This crate provides:
//! - `Polynomial`, a sparse exponent-keyed term collection
//! - Merge-based addition, schoolbook multiplication, formal derivative
//! - Checked variants that report rejected terms and coefficient overflow
//! - Canonical rendering (`3x^4 + 2x^2 - x + 5`) with a configurable variable
//!
//! ## Normal Form
//!
//! All mutation goes through `Polynomial::insert_term`, which combines
//! like terms and drops terms whose coefficient cancels to zero. A
//! polynomial therefore never holds two terms with the same exponent or a
//! term with coefficient zero, whatever order its terms arrived in.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod render;
pub mod sparse;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::{PolyError, Result};
pub use render::{RenderOptions, Rendered};
pub use sparse::Polynomial;
pub use term::Term;
