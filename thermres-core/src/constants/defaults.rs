//! Default Circuit and Sweep Parameters
//!
//! Defaults applied by [`CircuitParams::new`](crate::CircuitParams::new) for
//! everything except the three component values.

// ===== THERMISTOR =====

/// Reference temperature for the nominal resistance (°C).
///
/// Thermistor datasheets quote R25, the resistance at 25°C.
pub const DEFAULT_T0_C: f64 = 25.0;

// ===== ADC =====

/// ADC bit depth.
///
/// 10 bits matches the ATmega328 family and most hobby boards.
pub const DEFAULT_ADC_BITS: u8 = 10;

/// Largest supported ADC bit depth.
///
/// Nothing commercially relevant exceeds 32 bits, and the code count must
/// stay exact in an f64.
pub const MAX_ADC_BITS: u8 = 32;

/// Supply (and ADC reference) voltage (V).
///
/// Cancels out of the resolution, but sets the voltage curve scale.
pub const DEFAULT_VCC: f64 = 3.3;

// ===== SWEEP =====

/// Lower sweep bound (°C).
///
/// Lower limit of the rating of most commercial electronics.
pub const DEFAULT_TMIN_C: f64 = -40.0;

/// Upper sweep bound (°C).
///
/// Covers outdoor air temperatures in temperate climates.
pub const DEFAULT_TMAX_C: f64 = 50.0;

/// Temperature step between samples (°C).
pub const SWEEP_STEP_C: f64 = 0.1;

/// Fraction of a step tolerated when deciding whether `tmax` lands on the
/// sample grid.
pub const STEP_TOLERANCE: f64 = 1e-9;

/// Largest number of samples a sweep may hold.
///
/// The default sweep has 901. A million samples at 0.1°C covers 100 000°C,
/// far past any thermistor rating.
pub const MAX_SWEEP_SAMPLES: usize = 1_000_000;
