//! Voltage divider and ADC models
//!
//! The thermistor sits in one leg of a two-resistor divider across VCC and
//! the ADC samples the midpoint. Which leg it occupies sets the sign of the
//! voltage slope:
//!
//! ```text
//!   NtcTop                 NtcBottom
//!   VCC ─ NTC ─┬─ R_ref ─ GND     VCC ─ R_ref ─┬─ NTC ─ GND
//!              └─ ADC                         └─ ADC
//!   V rises with T         V falls with T
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Divider leg holding the thermistor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DividerTopology {
    /// Thermistor between VCC and the output, R_ref to ground
    #[default]
    NtcTop,
    /// R_ref between VCC and the output, thermistor to ground
    NtcBottom,
}

/// Two-resistor divider with one thermistor leg
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageDivider {
    topology: DividerTopology,
    r_ref: f64,
    vcc: f64,
}

impl VoltageDivider {
    /// Create a divider with reference resistor `r_ref` (Ω) across `vcc` (V)
    pub fn new(topology: DividerTopology, r_ref: f64, vcc: f64) -> Self {
        Self { topology, r_ref, vcc }
    }

    /// Divider topology
    pub fn topology(&self) -> DividerTopology {
        self.topology
    }

    /// Output voltage for a thermistor resistance of `r_thermistor` ohms
    pub fn output(&self, r_thermistor: f64) -> f64 {
        let lower = match self.topology {
            DividerTopology::NtcTop => self.r_ref,
            DividerTopology::NtcBottom => r_thermistor,
        };
        self.vcc * lower / (r_thermistor + self.r_ref)
    }

    /// Thermistor resistance that produces `v_out` at the divider midpoint
    pub fn thermistor_resistance(&self, v_out: f64) -> f64 {
        match self.topology {
            // Drop across the NTC is VCC - V_out
            DividerTopology::NtcTop => self.r_ref * (self.vcc - v_out) / v_out,
            DividerTopology::NtcBottom => self.r_ref * v_out / (self.vcc - v_out),
        }
    }
}

/// Ideal ADC described by its bit depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdcModel {
    bits: u8,
}

impl AdcModel {
    /// ADC with `bits` of resolution
    pub fn new(bits: u8) -> Self {
        Self { bits }
    }

    /// Bit depth
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Number of code intervals across full scale: 2^bits - 1
    pub fn codes(&self) -> f64 {
        libm::ldexp(1.0, i32::from(self.bits)) - 1.0
    }

    /// Code intervals per volt when full scale is `vref`
    pub fn codes_per_volt(&self, vref: f64) -> f64 {
        self.codes() / vref
    }

    /// Code reported for `voltage`, rounded to nearest and clamped to full scale
    pub fn code_for(&self, voltage: f64, vref: f64) -> u32 {
        let code = libm::round(voltage * self.codes_per_volt(vref));
        code.clamp(0.0, self.codes()) as u32
    }
}
