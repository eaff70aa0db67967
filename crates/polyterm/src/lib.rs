//! # polyterm
//!
//! Sparse univariate polynomial algebra over machine integers.
//!
//! ## Features
//!
//! - **Normal form by construction**: like terms combine, cancelled terms vanish
//! - **Arithmetic**: merge-based addition, schoolbook multiplication, derivative
//! - **Overflow policy of your choice**: native integer arithmetic or checked
//!   variants that report `PolyError`
//! - **Canonical rendering**: `3x^4 + 2x^2 - x + 5`
//!
//! ## Quick Start
//!
//! ```rust
//! use polyterm::prelude::*;
//!
//! let mut p: Polynomial = Polynomial::new();
//! p.insert_term(3, 4);
//! p.insert_term(2, 2);
//! p.insert_term(-1, 1);
//! p.insert_term(5, 0);
//!
//! assert_eq!(p.to_string(), "3x^4 + 2x^2 - x + 5");
//! assert_eq!(p.derivative().to_string(), "12x^3 + 4x - 1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyterm_poly as poly;
pub use polyterm_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyterm_poly::{PolyError, Polynomial, RenderOptions, Term};
    pub use polyterm_rings::Coefficient;
}
