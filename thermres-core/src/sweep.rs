//! Temperature sweep over the divider
//!
//! Samples the thermistor and divider on a fixed temperature grid. All
//! sequences in a [`DividerSweep`] share one index: `voltages[i]` is the
//! divider output at `temperatures[i]`.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    config::CircuitParams,
    constants::defaults::{MAX_SWEEP_SAMPLES, STEP_TOLERANCE},
};

/// Temperature grid from `tmin` to `tmax` in increments of `step`.
///
/// Includes `tmax` when the span is a whole number of steps and never
/// overshoots it. Each sample is `tmin + i * step`, so rounding error does
/// not accumulate. Returns an empty grid when `tmin > tmax`, the step is
/// not positive, or the grid would exceed [`MAX_SWEEP_SAMPLES`].
pub fn temperature_steps(tmin: f64, tmax: f64, step: f64) -> Vec<f64> {
    match sample_count(tmin, tmax, step) {
        Some(count) => (0..count).map(|i| tmin + i as f64 * step).collect(),
        None => Vec::new(),
    }
}

/// Number of grid samples, `None` when the grid is empty or too large
fn sample_count(tmin: f64, tmax: f64, step: f64) -> Option<usize> {
    let span = (tmax - tmin) / step;
    if !span.is_finite() || span < -STEP_TOLERANCE || step <= 0.0 {
        return None;
    }

    let whole = libm::floor(span + STEP_TOLERANCE);
    if whole < 0.0 || whole >= MAX_SWEEP_SAMPLES as f64 {
        return None;
    }
    (whole as usize).checked_add(1)
}

/// Midpoints between consecutive samples; one shorter than `samples`
pub fn midpoints(samples: &[f64]) -> Vec<f64> {
    samples.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
}

/// Thermistor resistance and divider voltage across a temperature grid
#[derive(Debug, Clone, PartialEq)]
pub struct DividerSweep {
    /// Sample temperatures (°C)
    pub temperatures: Vec<f64>,
    /// Thermistor resistance at each sample (Ω)
    pub resistances: Vec<f64>,
    /// Divider output at each sample (V)
    pub voltages: Vec<f64>,
    /// Grid spacing (°C)
    pub step_c: f64,
}

impl DividerSweep {
    /// Evaluate the circuit in `params` over its sweep range.
    ///
    /// Does not validate; invalid parameters show up as NaN or infinite
    /// samples.
    pub fn run(params: &CircuitParams) -> Self {
        let thermistor = params.thermistor();
        let divider = params.divider();

        let temperatures = temperature_steps(params.tmin_c, params.tmax_c, params.step_c);
        let resistances: Vec<f64> = temperatures
            .iter()
            .map(|&t| thermistor.resistance(t))
            .collect();
        let voltages = resistances.iter().map(|&r| divider.output(r)).collect();

        log_debug!(
            "sweep {}..={} step {}: {} samples",
            params.tmin_c,
            params.tmax_c,
            params.step_c,
            temperatures.len()
        );

        Self {
            temperatures,
            resistances,
            voltages,
            step_c: params.step_c,
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    /// True when the grid holds no samples
    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// Midpoints of the temperature grid
    pub fn midpoints(&self) -> Vec<f64> {
        midpoints(&self.temperatures)
    }

    /// Forward-difference voltage slope between samples (V/°C)
    pub fn voltage_slopes(&self) -> Vec<f64> {
        let step = self.step_c;
        self.voltages
            .windows(2)
            .map(|w| (w[1] - w[0]) / step)
            .collect()
    }
}
