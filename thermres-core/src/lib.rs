//! Core resolution engine for thermres
//!
//! Computes how many degrees Celsius one ADC code represents when an NTC
//! thermistor is read through a two-resistor voltage divider.
//!
//! Pipeline:
//! - B-model thermistor resistance over a temperature sweep
//! - Divider output voltage at each sample
//! - First difference of the voltage, scaled by ADC codes per volt
//!
//! Works without `std`, but always needs a heap: sweeps and curves are
//! `Vec`-backed. Build with `--no-default-features --features alloc` for
//! `no_std` targets.
//!
//! ```
//! use thermres_core::{compute_resolution, CircuitParams};
//!
//! // 10k NTC, B=3950, 10k reference, 10-bit ADC at 3.3V
//! let params = CircuitParams::new(10_000.0, 3950.0, 10_000.0);
//! let curve = compute_resolution(&params)?;
//!
//! let at_room = curve.resolution_at(25.0).unwrap();
//! assert!(at_room > 0.0 && at_room < 1.0);
//! # Ok::<(), thermres_core::DesignError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("thermres-core needs the `std` or `alloc` feature");

#[cfg(not(feature = "std"))]
extern crate alloc;

// Optional logging, compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod config;
pub mod constants;
pub mod divider;
pub mod errors;
pub mod resolution;
pub mod sweep;
pub mod thermistor;

// Public API
pub use config::CircuitParams;
pub use divider::{AdcModel, DividerTopology, VoltageDivider};
pub use errors::{DesignError, DesignResult};
pub use resolution::{
    compute_resolution, compute_resolution_unchecked, CurvePoint, CurveSummary, ResolutionCurve,
};
pub use sweep::DividerSweep;
pub use thermistor::BetaThermistor;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
