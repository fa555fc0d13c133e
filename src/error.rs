//! Typed errors for the filter core.
//!
//! The command adapter deliberately does not inspect error identity (any
//! failure collapses to one opaque token on the wire), so the taxonomy here
//! exists for library callers and tests, which match on variants.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    /// Sizing attempted on an instance that was already sized.
    #[error("filter is already initialized")]
    AlreadyInitialized,

    /// Bad sizing input: item count below 1, or rate outside (0, 1).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The target rate is so lax that the optimal probe count rounds to zero.
    #[error("degenerate parameters: rate {fpp} yields no hash probes")]
    DegenerateParameters { fpp: f64 },

    /// Insert/query/print attempted before sizing.
    #[error("filter is not initialized")]
    NotInitialized,

    /// A probe produced a position outside the bit array. Unreachable by
    /// construction; kept as an invariant check.
    #[error("probe position {position} out of range 0..{bits}")]
    PositionOutOfRange { position: u64, bits: u64 },
}
