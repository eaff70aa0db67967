//! Machine integer coefficient rings.
//!
//! `i64` is the default coefficient type. `i128` is available for callers
//! who want more headroom before overflow.

use crate::traits::Coefficient;

impl Coefficient for i64 {}

impl Coefficient for i128 {}
