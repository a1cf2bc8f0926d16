//! Circuit configuration
//!
//! [`CircuitParams`] carries everything the resolution calculation needs.
//! Only the three component values are required; the rest default to the
//! values in [`constants::defaults`](crate::constants::defaults).
//!
//! ```
//! use thermres_core::{CircuitParams, DividerTopology};
//!
//! let params = CircuitParams::new(100_000.0, 4250.0, 47_000.0)
//!     .with_adc_bits(12)
//!     .with_vcc(5.0)
//!     .with_range(0.0, 120.0)
//!     .with_topology(DividerTopology::NtcBottom)
//!     .with_part_number("NTCLE100E3104");
//!
//! assert!(params.validate().is_ok());
//! ```

#[cfg(not(feature = "std"))]
use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        defaults::STEP_TOLERANCE, physics::ABSOLUTE_ZERO_CELSIUS, DEFAULT_ADC_BITS,
        DEFAULT_T0_C, DEFAULT_TMAX_C, DEFAULT_TMIN_C, DEFAULT_VCC, MAX_ADC_BITS,
        MAX_SWEEP_SAMPLES, SWEEP_STEP_C,
    },
    divider::{AdcModel, DividerTopology, VoltageDivider},
    errors::{DesignError, DesignResult},
    thermistor::BetaThermistor,
};

/// Thermistor divider circuit and sweep parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CircuitParams {
    /// Thermistor resistance at `t0_c` (Ω)
    pub r_nominal: f64,

    /// Thermistor B-value (K)
    pub beta: f64,

    /// Reference resistor in the divider (Ω)
    pub r_ref: f64,

    /// Temperature at which `r_nominal` is specified (°C)
    #[cfg_attr(feature = "serde", serde(default = "default_t0"))]
    pub t0_c: f64,

    /// ADC resolution in bits
    #[cfg_attr(feature = "serde", serde(default = "default_adc_bits"))]
    pub adc_bits: u8,

    /// Divider supply, also the ADC reference (V)
    #[cfg_attr(feature = "serde", serde(default = "default_vcc"))]
    pub vcc: f64,

    /// Lower sweep bound (°C)
    #[cfg_attr(feature = "serde", serde(default = "default_tmin"))]
    pub tmin_c: f64,

    /// Upper sweep bound (°C)
    #[cfg_attr(feature = "serde", serde(default = "default_tmax"))]
    pub tmax_c: f64,

    /// Sweep step (°C)
    #[cfg_attr(feature = "serde", serde(default = "default_step"))]
    pub step_c: f64,

    /// Which divider leg the thermistor occupies
    #[cfg_attr(feature = "serde", serde(default))]
    pub topology: DividerTopology,

    /// Free-form label, e.g. a manufacturer part number
    #[cfg_attr(feature = "serde", serde(default))]
    pub part_number: String,
}

#[cfg(feature = "serde")]
fn default_t0() -> f64 {
    DEFAULT_T0_C
}

#[cfg(feature = "serde")]
fn default_adc_bits() -> u8 {
    DEFAULT_ADC_BITS
}

#[cfg(feature = "serde")]
fn default_vcc() -> f64 {
    DEFAULT_VCC
}

#[cfg(feature = "serde")]
fn default_tmin() -> f64 {
    DEFAULT_TMIN_C
}

#[cfg(feature = "serde")]
fn default_tmax() -> f64 {
    DEFAULT_TMAX_C
}

#[cfg(feature = "serde")]
fn default_step() -> f64 {
    SWEEP_STEP_C
}

impl CircuitParams {
    /// Circuit with the given thermistor and reference resistor, defaults
    /// elsewhere
    pub fn new(r_nominal: f64, beta: f64, r_ref: f64) -> Self {
        Self {
            r_nominal,
            beta,
            r_ref,
            t0_c: DEFAULT_T0_C,
            adc_bits: DEFAULT_ADC_BITS,
            vcc: DEFAULT_VCC,
            tmin_c: DEFAULT_TMIN_C,
            tmax_c: DEFAULT_TMAX_C,
            step_c: SWEEP_STEP_C,
            topology: DividerTopology::default(),
            part_number: String::new(),
        }
    }

    /// Set the reference temperature for `r_nominal`
    pub fn with_t0(mut self, t0_c: f64) -> Self {
        self.t0_c = t0_c;
        self
    }

    /// Set the ADC bit depth
    pub fn with_adc_bits(mut self, bits: u8) -> Self {
        self.adc_bits = bits;
        self
    }

    /// Set the supply voltage
    pub fn with_vcc(mut self, vcc: f64) -> Self {
        self.vcc = vcc;
        self
    }

    /// Set the sweep bounds
    pub fn with_range(mut self, tmin_c: f64, tmax_c: f64) -> Self {
        self.tmin_c = tmin_c;
        self.tmax_c = tmax_c;
        self
    }

    /// Set the sweep step
    pub fn with_step(mut self, step_c: f64) -> Self {
        self.step_c = step_c;
        self
    }

    /// Set the divider topology
    pub fn with_topology(mut self, topology: DividerTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Set the part number label
    pub fn with_part_number(mut self, part_number: impl Into<String>) -> Self {
        self.part_number = part_number.into();
        self
    }

    /// Thermistor model for these parameters
    pub fn thermistor(&self) -> BetaThermistor {
        BetaThermistor::new(self.r_nominal, self.beta, self.t0_c)
    }

    /// Divider model for these parameters
    pub fn divider(&self) -> VoltageDivider {
        VoltageDivider::new(self.topology, self.r_ref, self.vcc)
    }

    /// ADC model for these parameters
    pub fn adc(&self) -> AdcModel {
        AdcModel::new(self.adc_bits)
    }

    /// Check every parameter against the domain the model is defined on
    pub fn validate(&self) -> DesignResult<()> {
        positive("r_nominal", self.r_nominal)?;
        positive("beta", self.beta)?;
        positive("r_ref", self.r_ref)?;
        positive("vcc", self.vcc)?;
        positive("step_c", self.step_c)?;

        if self.adc_bits < 1 || self.adc_bits > MAX_ADC_BITS {
            return Err(DesignError::InvalidParameter {
                name: "adc_bits",
                value: f64::from(self.adc_bits),
                reason: "must be between 1 and 32",
            });
        }

        above_absolute_zero("t0_c", self.t0_c)?;
        above_absolute_zero("tmin_c", self.tmin_c)?;
        finite("tmax_c", self.tmax_c)?;

        if self.tmin_c >= self.tmax_c {
            return Err(DesignError::InvalidRange {
                min: self.tmin_c,
                max: self.tmax_c,
            });
        }

        let steps = (self.tmax_c - self.tmin_c) / self.step_c;
        if steps.is_nan() || steps + STEP_TOLERANCE >= MAX_SWEEP_SAMPLES as f64 {
            return Err(DesignError::InvalidParameter {
                name: "step_c",
                value: self.step_c,
                reason: "sweep would exceed 1000000 samples",
            });
        }

        Ok(())
    }
}

fn finite(name: &'static str, value: f64) -> DesignResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DesignError::InvalidParameter { name, value, reason: "must be finite" })
    }
}

fn positive(name: &'static str, value: f64) -> DesignResult<()> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(DesignError::InvalidParameter { name, value, reason: "must be positive" })
    }
}

fn above_absolute_zero(name: &'static str, value: f64) -> DesignResult<()> {
    finite(name, value)?;
    if value > ABSOLUTE_ZERO_CELSIUS {
        Ok(())
    } else {
        Err(DesignError::InvalidParameter { name, value, reason: "must be above absolute zero" })
    }
}
