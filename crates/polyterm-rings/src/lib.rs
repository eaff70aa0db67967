//! # polyterm-rings
//!
//! Coefficient rings for polyterm.
//!
//! This crate provides:
//! - The `Coefficient` trait describing signed integer coefficients
//! - Implementations for `i64` (the default) and `i128`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod traits;

pub use traits::Coefficient;
