//! Errors reported by the checked polynomial API.

use thiserror::Error;

/// A term or operation the checked API refused.
///
/// The unchecked API (`insert_term`, `add`, `mul`, `derivative`) never
/// reports these; it drops invalid terms and uses native overflow behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum PolyError {
    /// The exponent was negative.
    #[error("negative exponent {exponent}")]
    NegativeExponent {
        /// The rejected exponent.
        exponent: i64,
    },

    /// The exponent does not fit in a `u32`.
    #[error("exponent {exponent} is too large")]
    ExponentOverflow {
        /// The rejected exponent.
        exponent: i64,
    },

    /// The coefficient was zero.
    #[error("zero coefficient at exponent {exponent}")]
    ZeroCoefficient {
        /// The exponent the term was meant for.
        exponent: i64,
    },

    /// A coefficient computation overflowed.
    #[error("coefficient overflow at exponent {exponent}")]
    CoefficientOverflow {
        /// The exponent whose coefficient overflowed.
        exponent: i64,
    },
}

/// Result alias for the checked polynomial API.
pub type Result<T> = std::result::Result<T, PolyError>;
