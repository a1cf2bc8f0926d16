//! Constants for thermres Core
//!
//! Every numeric value the model relies on lives here, with its unit in the
//! name and a note on where it comes from.
//!
//! ## Organization
//!
//! - **Physics**: temperature scale conversions and hard limits
//! - **Defaults**: default circuit and sweep parameters
//!
//! ## Usage Guidelines
//!
//! 1. Use these constants instead of magic numbers
//! 2. Include the unit in every new constant's name
//! 3. Document the source or rationale next to the value

/// Physical constants and hard limits.
pub mod physics;

/// Default circuit and sweep parameters.
pub mod defaults;

// Re-export commonly used constants for convenience
pub use physics::{ABSOLUTE_ZERO_CELSIUS, KELVIN_OFFSET};

pub use defaults::{
    DEFAULT_ADC_BITS, DEFAULT_T0_C, DEFAULT_TMAX_C, DEFAULT_TMIN_C, DEFAULT_VCC,
    MAX_ADC_BITS, MAX_SWEEP_SAMPLES, SWEEP_STEP_C,
};
