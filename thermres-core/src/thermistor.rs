//! B-parameter thermistor model
//!
//! An NTC thermistor's resistance follows
//!
//! ```text
//! R(T) = r_inf * exp(B / T)        r_inf = R0 * exp(-B / T0)
//! ```
//!
//! with T and T0 in Kelvin. R0 is the nominal resistance at T0 (usually
//! 25°C), B the material constant from the datasheet.

use crate::constants::physics::{celsius_to_kelvin, kelvin_to_celsius};

/// NTC thermistor described by its nominal resistance and B-value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaThermistor {
    /// Resistance at `t0_c` (Ω)
    r_nominal: f64,
    /// B-value (K)
    beta: f64,
    /// Reference temperature (°C)
    t0_c: f64,
}

impl BetaThermistor {
    /// Create a thermistor model. No validation; see
    /// [`CircuitParams::validate`](crate::CircuitParams::validate).
    pub fn new(r_nominal: f64, beta: f64, t0_c: f64) -> Self {
        Self { r_nominal, beta, t0_c }
    }

    /// Nominal resistance (Ω)
    pub fn r_nominal(&self) -> f64 {
        self.r_nominal
    }

    /// B-value (K)
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Reference temperature (°C)
    pub fn t0_c(&self) -> f64 {
        self.t0_c
    }

    /// Resistance the model approaches as temperature goes to infinity (Ω)
    pub fn r_inf(&self) -> f64 {
        self.r_nominal * libm::exp(-self.beta / celsius_to_kelvin(self.t0_c))
    }

    /// Resistance at `temp_c` (Ω)
    pub fn resistance(&self, temp_c: f64) -> f64 {
        self.r_inf() * libm::exp(self.beta / celsius_to_kelvin(temp_c))
    }

    /// Temperature (°C) at which the thermistor has `resistance` ohms.
    ///
    /// Inverse of [`resistance`](Self::resistance):
    /// 1/T = 1/T0 + ln(R/R0)/B
    pub fn temperature(&self, resistance: f64) -> f64 {
        let inv_t = 1.0 / celsius_to_kelvin(self.t0_c)
            + libm::log(resistance / self.r_nominal) / self.beta;
        kelvin_to_celsius(1.0 / inv_t)
    }

    /// Analytic slope dR/dT at `temp_c` (Ω/°C). Negative for B > 0.
    pub fn sensitivity(&self, temp_c: f64) -> f64 {
        let t_k = celsius_to_kelvin(temp_c);
        -self.beta * self.resistance(temp_c) / (t_k * t_k)
    }
}
