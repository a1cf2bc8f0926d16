//! Physical Constants for thermres
//!
//! Temperature scale conversions used by the B-parameter model. The model
//! works in Kelvin internally; every public API takes degrees Celsius.

/// Offset between the Celsius and Kelvin scales (K).
///
/// T(K) = T(°C) + 273.15
///
/// Source: SI Brochure, 9th edition (2019)
pub const KELVIN_OFFSET: f64 = 273.15;

/// Absolute zero in Celsius (°C).
///
/// The B-model divides by absolute temperature, so any temperature at or
/// below this value makes the exponent undefined.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -KELVIN_OFFSET;

/// Convert degrees Celsius to Kelvin.
#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

/// Convert Kelvin to degrees Celsius.
#[inline]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}
