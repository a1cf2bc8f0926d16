//! Temperature resolution of a thermistor divider
//!
//! ## Model
//!
//! For each pair of neighbouring sweep samples:
//!
//! ```text
//! dV/dT        = (V[i+1] - V[i]) / step            (V/°C)
//! codes/volt   = (2^bits - 1) / VCC
//! resolution   = 1 / (dV/dT * codes/volt)          (°C per ADC code)
//! ```
//!
//! reported at the midpoint temperature `(T[i] + T[i+1]) / 2`.
//!
//! VCC cancels: scaling the supply scales both the divider output and the
//! ADC step, so resolution depends only on the resistances, B-value and
//! bit depth.
//!
//! ## Checked and unchecked entry points
//!
//! [`compute_resolution`] validates the parameters first and fails fast.
//! [`compute_resolution_unchecked`] skips validation: out-of-domain inputs
//! produce NaN or infinite points, and a flat voltage response produces an
//! infinite resolution. Nothing is clamped in either path.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    config::CircuitParams,
    errors::{DesignError, DesignResult},
    sweep::DividerSweep,
};

/// Resolution at one temperature
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurvePoint {
    /// Midpoint temperature (°C)
    pub temperature_c: f64,
    /// Degrees Celsius per ADC code
    pub resolution_c: f64,
}

/// Aggregate view over the finite points of a curve
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveSummary {
    /// Point with the finest resolution (smallest magnitude)
    pub best: CurvePoint,
    /// Point with the coarsest resolution (largest magnitude)
    pub worst: CurvePoint,
    /// Mean resolution magnitude
    pub mean: f64,
    /// Number of finite points included
    pub finite_points: usize,
}

/// Resolution as a function of temperature
///
/// `midpoints[i]` and `resolution[i]` always describe the same point.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolutionCurve {
    /// Midpoint temperatures, ascending (°C)
    pub midpoints: Vec<f64>,
    /// Degrees Celsius per ADC code at each midpoint
    pub resolution: Vec<f64>,
}

impl ResolutionCurve {
    /// Derive the curve from a sweep and ADC scaling
    pub fn from_sweep(sweep: &DividerSweep, codes_per_volt: f64) -> Self {
        let resolution = sweep
            .voltage_slopes()
            .into_iter()
            .map(|dv_dt| 1.0 / (dv_dt * codes_per_volt))
            .collect();

        Self {
            midpoints: sweep.midpoints(),
            resolution,
        }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    /// True when the curve has no points
    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }

    /// Iterate over points in temperature order
    pub fn iter(&self) -> impl Iterator<Item = CurvePoint> + '_ {
        self.midpoints
            .iter()
            .zip(self.resolution.iter())
            .map(|(&temperature_c, &resolution_c)| CurvePoint { temperature_c, resolution_c })
    }

    /// Number of points whose resolution is NaN or infinite
    pub fn non_finite_points(&self) -> usize {
        self.resolution.iter().filter(|r| !r.is_finite()).count()
    }

    /// Resolution at `temp_c`, linearly interpolated between midpoints.
    ///
    /// `None` outside the span of the midpoints.
    pub fn resolution_at(&self, temp_c: f64) -> Option<f64> {
        if temp_c.is_nan() || self.is_empty() {
            return None;
        }

        let idx = self.midpoints.partition_point(|&t| t < temp_c);
        if idx == self.midpoints.len() {
            return None;
        }
        if self.midpoints[idx] == temp_c {
            return Some(self.resolution[idx]);
        }
        if idx == 0 {
            return None;
        }

        let (t0, t1) = (self.midpoints[idx - 1], self.midpoints[idx]);
        let (r0, r1) = (self.resolution[idx - 1], self.resolution[idx]);
        let frac = (temp_c - t0) / (t1 - t0);
        Some(r0 + (r1 - r0) * frac)
    }

    /// Finite point with the finest resolution
    pub fn best(&self) -> Option<CurvePoint> {
        self.finite_points()
            .min_by(|a, b| libm::fabs(a.resolution_c).total_cmp(&libm::fabs(b.resolution_c)))
    }

    /// Finite point with the coarsest resolution
    pub fn worst(&self) -> Option<CurvePoint> {
        self.finite_points()
            .max_by(|a, b| libm::fabs(a.resolution_c).total_cmp(&libm::fabs(b.resolution_c)))
    }

    /// Best, worst and mean over finite points; `None` if there are none
    pub fn summary(&self) -> Option<CurveSummary> {
        let best = self.best()?;
        let worst = self.worst()?;

        let (sum, finite_points) = self
            .finite_points()
            .fold((0.0, 0usize), |(sum, n), p| (sum + libm::fabs(p.resolution_c), n + 1));

        Some(CurveSummary {
            best,
            worst,
            mean: sum / finite_points as f64,
            finite_points,
        })
    }

    fn finite_points(&self) -> impl Iterator<Item = CurvePoint> + '_ {
        self.iter().filter(|p| p.resolution_c.is_finite())
    }
}

/// Compute the resolution curve for a validated circuit.
///
/// Fails with [`DesignError::InvalidParameter`] or
/// [`DesignError::InvalidRange`] when the parameters are outside the model's
/// domain, and with [`DesignError::InsufficientSamples`] when the step is
/// wider than the sweep range.
pub fn compute_resolution(params: &CircuitParams) -> DesignResult<ResolutionCurve> {
    params.validate()?;

    let sweep = DividerSweep::run(params);
    if sweep.len() < 2 {
        return Err(DesignError::InsufficientSamples {
            required: 2,
            available: sweep.len(),
        });
    }

    Ok(evaluate(params, &sweep))
}

/// Compute the resolution curve without validating the parameters.
///
/// Never fails. Degenerate inputs propagate as NaN or infinite points; an
/// empty, single-sample or oversized sweep gives an empty curve.
pub fn compute_resolution_unchecked(params: &CircuitParams) -> ResolutionCurve {
    let sweep = DividerSweep::run(params);
    if sweep.len() < 2 {
        log_warn!(
            "sweep {}..={} step {} gives {} samples, curve is empty",
            params.tmin_c,
            params.tmax_c,
            params.step_c,
            sweep.len()
        );
    }
    let curve = evaluate(params, &sweep);

    let degenerate = curve.non_finite_points();
    if degenerate > 0 {
        log_warn!(
            "{} of {} resolution points are not finite",
            degenerate,
            curve.len()
        );
    }

    curve
}

fn evaluate(params: &CircuitParams, sweep: &DividerSweep) -> ResolutionCurve {
    let codes_per_volt = params.adc().codes_per_volt(params.vcc);
    let curve = ResolutionCurve::from_sweep(sweep, codes_per_volt);

    log_debug!(
        "{} bits, {:.3} codes/V, {} points",
        params.adc_bits,
        codes_per_volt,
        curve.len()
    );

    curve
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divider::DividerTopology;

    fn ntc_10k() -> CircuitParams {
        CircuitParams::new(10_000.0, 3950.0, 10_000.0)
    }

    #[test]
    fn lengths_follow_sweep() {
        let curve = compute_resolution(&ntc_10k()).unwrap();
        assert_eq!(curve.len(), 900);
        assert_eq!(curve.resolution.len(), curve.midpoints.len());
    }

    #[test]
    fn room_temperature_resolution() {
        let curve = compute_resolution(&ntc_10k()).unwrap();
        let r = curve.resolution_at(25.0).unwrap();
        // Analytic value for this circuit is ~0.088 °C/code
        assert!(r > 0.08 && r < 0.1, "resolution at 25°C = {r}");
    }

    #[test]
    fn bottom_topology_flips_sign() {
        let top = compute_resolution(&ntc_10k()).unwrap();
        let bottom =
            compute_resolution(&ntc_10k().with_topology(DividerTopology::NtcBottom)).unwrap();

        for (t, b) in top.resolution.iter().zip(bottom.resolution.iter()) {
            assert!(*t > 0.0);
            assert!(*b < 0.0);
        }
    }

    #[test]
    fn more_bits_finer_resolution() {
        let ten = compute_resolution(&ntc_10k()).unwrap();
        let twelve = compute_resolution(&ntc_10k().with_adc_bits(12)).unwrap();
        let ratio = ten.resolution[450] / twelve.resolution[450];
        assert!((ratio - 4095.0 / 1023.0).abs() < 1e-9);
    }

    #[test]
    fn best_resolution_near_balance_point() {
        // With R_ref = R_T the slope peaks a little below T0
        let summary = compute_resolution(&ntc_10k()).unwrap().summary().unwrap();
        assert!(summary.best.temperature_c > 0.0 && summary.best.temperature_c < 30.0);
        assert!(summary.worst.resolution_c > summary.best.resolution_c);
        assert!(summary.mean > summary.best.resolution_c);
        assert!(summary.mean < summary.worst.resolution_c);
        assert_eq!(summary.finite_points, 900);
    }

    #[test]
    fn interpolation_bounds() {
        let curve = ResolutionCurve {
            midpoints: vec![0.5, 1.5, 2.5],
            resolution: vec![1.0, 2.0, 4.0],
        };
        assert_eq!(curve.resolution_at(0.5), Some(1.0));
        assert_eq!(curve.resolution_at(1.0), Some(1.5));
        assert_eq!(curve.resolution_at(2.0), Some(3.0));
        assert_eq!(curve.resolution_at(2.5), Some(4.0));
        assert_eq!(curve.resolution_at(0.0), None);
        assert_eq!(curve.resolution_at(3.0), None);
        assert_eq!(curve.resolution_at(f64::NAN), None);
        assert_eq!(ResolutionCurve::default().resolution_at(1.0), None);
    }

    #[test]
    fn checked_path_rejects_bad_input() {
        let err = compute_resolution(&ntc_10k().with_vcc(-3.3)).unwrap_err();
        assert_eq!(err.parameter(), Some("vcc"));

        let err = compute_resolution(&ntc_10k().with_range(10.0, 10.05)).unwrap_err();
        assert_eq!(err, DesignError::InsufficientSamples { required: 2, available: 1 });
    }

    #[test]
    fn unchecked_path_propagates_degeneracy() {
        // Zero supply: flat 0 V output and infinite codes per volt
        let curve = compute_resolution_unchecked(&ntc_10k().with_vcc(0.0));
        assert_eq!(curve.len(), 900);
        assert!(curve.resolution.iter().all(|r| r.is_nan()));
        assert_eq!(curve.non_finite_points(), 900);
        assert!(curve.summary().is_none());

        let curve = compute_resolution_unchecked(&ntc_10k().with_range(50.0, -40.0));
        assert!(curve.is_empty());
    }

    #[test]
    fn oversized_sweep() {
        let err = compute_resolution(&ntc_10k().with_range(-40.0, 1e30)).unwrap_err();
        assert_eq!(err.parameter(), Some("step_c"));

        let err = compute_resolution(&ntc_10k().with_step(1e-300)).unwrap_err();
        assert_eq!(err.parameter(), Some("step_c"));

        assert!(compute_resolution_unchecked(&ntc_10k().with_range(-40.0, 1e30)).is_empty());
        assert!(compute_resolution_unchecked(&ntc_10k().with_step(1e-300)).is_empty());
    }

    #[test]
    fn flat_response_is_infinite() {
        // A huge reference resistor pins the output at VCC
        let params = CircuitParams::new(1.0, 1.0, 1e300).with_range(0.0, 1.0);
        let curve = compute_resolution_unchecked(&params);
        assert!(curve.resolution.iter().all(|r| r.is_infinite()));
    }
}
