//! Shared fixtures and assertions for thermres-core integration tests

#![allow(dead_code)]

use thermres_core::CircuitParams;

/// The circuit most hobby boards ship: 10k NTC, B=3950, 10k reference,
/// 10-bit ADC at 3.3V, swept -40..=50°C
pub fn ntc_10k_b3950() -> CircuitParams {
    CircuitParams::new(10_000.0, 3950.0, 10_000.0)
}

/// Vishay NTCLE100E3 100k part with a matched reference, 12-bit ADC
pub fn ntc_100k_b4190() -> CircuitParams {
    CircuitParams::new(100_000.0, 4190.0, 100_000.0)
        .with_adc_bits(12)
        .with_part_number("NTCLE100E3104JB0")
}

/// Relative difference, with absolute fallback near zero
pub fn relative_diff(actual: f64, expected: f64) -> f64 {
    let scale = expected.abs().max(1e-300);
    (actual - expected).abs() / scale
}

#[macro_export]
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let diff = ($actual - $expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                $actual, $tolerance, $expected, diff
            );
        }
    };
}

#[macro_export]
macro_rules! assert_relative_eq {
    ($actual:expr, $expected:expr, $rel:expr) => {
        let rel = $crate::common::relative_diff($actual, $expected);
        if rel > $rel {
            panic!(
                "Value {} differs from expected {} by relative {} (limit {})",
                $actual, $expected, rel, $rel
            );
        }
    };
}
