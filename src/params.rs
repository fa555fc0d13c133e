//! Filter sizing: bit-array length and probe count from the expected
//! cardinality and the target false-positive rate.
//!
//! Standard optimal Bloom parameters:
//! - bits   = round(-items * log2(rate) / ln 2)
//! - probes = round(-log2(rate))
//!
//! Validation order matters and is fixed: argument checks first, then the
//! degenerate-probe-count check, all before anything is allocated.

use crate::error::FilterError;

/// Parameters fixed at initialization for the lifetime of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParams {
    /// Number of addressable bits in the filter.
    pub bits: u64,
    /// Number of hash probes per insert/query.
    pub hashes: u32,
}

impl FilterParams {
    /// Backing buffer size: the bit array is stored as whole bytes.
    #[inline]
    pub fn storage_bytes(&self) -> usize {
        ((self.bits + 7) / 8) as usize
    }
}

/// Compute optimal parameters for `items` expected keys at rate `fpp`.
pub fn compute_params(items: i64, fpp: f64) -> Result<FilterParams, FilterError> {
    if items < 1 {
        return Err(FilterError::InvalidArgument(
            "expected item count must be at least 1",
        ));
    }
    // NaN fails both comparisons, so it is rejected here as well.
    if !(fpp > 0.0 && fpp < 1.0) {
        return Err(FilterError::InvalidArgument(
            "target false-positive rate must lie in (0, 1)",
        ));
    }

    let bits_per_key = -fpp.log2(); // > 0 on the open interval
    let bits = (items as f64 * bits_per_key / std::f64::consts::LN_2).round() as u64;
    let hashes = bits_per_key.round() as u32;

    if hashes < 1 {
        return Err(FilterError::DegenerateParameters { fpp });
    }

    Ok(FilterParams { bits, hashes })
}
