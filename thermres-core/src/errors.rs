//! Error Types for Circuit Design Failures
//!
//! ## Design Philosophy
//!
//! Errors follow the same rules as the rest of the core crate:
//!
//! 1. **No Heap Allocation**: parameter names are `&'static str`, values are
//!    copied inline. Works unchanged under `no_std`.
//!
//! 2. **Copy Semantics**: errors are small and implement `Copy`.
//!
//! 3. **Actionable Information**: each variant names the offending input and
//!    the value that was rejected, so a caller can report it directly.
//!
//! ## Error Categories
//!
//! - `InvalidParameter`: a single input is non-positive, non-finite or out of
//!   its supported range (e.g. `r_ref = -10`, `adc_bits = 0`)
//! - `InvalidRange`: the sweep bounds are out of order (`tmin >= tmax`)
//! - `InsufficientSamples`: the sweep is too short to take a difference
//!
//! ## Handling
//!
//! ```rust
//! use thermres_core::{compute_resolution, CircuitParams, DesignError};
//!
//! let params = CircuitParams::new(10_000.0, -3950.0, 10_000.0);
//! match compute_resolution(&params) {
//!     Ok(curve) => { let _ = curve.summary(); }
//!     Err(DesignError::InvalidParameter { name, .. }) => assert_eq!(name, "beta"),
//!     Err(other) => panic!("unexpected: {other}"),
//! }
//! ```
//!
//! Callers that want the old permissive behavior (NaN and infinity flowing
//! through to the output) use
//! [`compute_resolution_unchecked`](crate::resolution::compute_resolution_unchecked).

use thiserror_no_std::Error;

/// Result type for design computations
pub type DesignResult<T> = Result<T, DesignError>;

/// Design errors - kept small, no allocation
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DesignError {
    /// A circuit parameter is outside the values the model accepts
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears on [`CircuitParams`](crate::CircuitParams)
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Short description of the accepted domain
        reason: &'static str,
    },

    /// Sweep bounds out of order
    #[error("Invalid temperature range: tmin {min} must be below tmax {max}")]
    InvalidRange {
        /// Lower sweep bound (°C)
        min: f64,
        /// Upper sweep bound (°C)
        max: f64,
    },

    /// Not enough samples to form a first difference
    #[error("Insufficient samples: need {required}, have {available}")]
    InsufficientSamples {
        /// Minimum number of temperature samples needed
        required: usize,
        /// Number of samples the sweep produced
        available: usize,
    },
}

impl DesignError {
    /// Name of the offending parameter, if the error is about exactly one.
    ///
    /// `InvalidRange` involves both bounds and returns `None`.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { name, .. } => Some(*name),
            Self::InvalidRange { .. } | Self::InsufficientSamples { .. } => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DesignError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidParameter { name, value, reason } =>
                defmt::write!(fmt, "Invalid {} = {}: {}", name, value, reason),
            Self::InvalidRange { min, max } =>
                defmt::write!(fmt, "Invalid range [{}, {}]", min, max),
            Self::InsufficientSamples { required, available } =>
                defmt::write!(fmt, "Need {} samples, have {}", required, available),
        }
    }
}
