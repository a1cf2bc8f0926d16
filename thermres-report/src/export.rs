//! Machine-readable output
//!
//! CSV carries only the curve. JSON also carries the circuit and a summary:
//!
//! ```json
//! {
//!   "title": "Thermistor: R_T=10.0kΩ; R_r=10.0kΩ; B=3950K",
//!   "params": { "r_nominal": 10000.0, "beta": 3950.0, ... },
//!   "summary": { "best": { ... }, "worst": { ... }, "mean": 0.162, "finite_points": 900 },
//!   "points": [[-39.95, 0.566], ...]
//! }
//! ```
//!
//! Non-finite resolutions are written as `NaN`/`inf` in CSV and `null` in
//! JSON.

use std::io::Write;

use serde::Serialize;
use thermres_core::{CircuitParams, CurveSummary, ResolutionCurve};

use crate::{error::ReportResult, title::plot_title};

/// CSV header row
pub const CSV_HEADER: &str = "temperature_c,resolution_c";

/// Write the curve as CSV, one row per midpoint
pub fn write_csv<W: Write>(curve: &ResolutionCurve, mut out: W) -> ReportResult<()> {
    writeln!(out, "{}", CSV_HEADER)?;
    for point in curve.iter() {
        writeln!(out, "{},{}", point.temperature_c, point.resolution_c)?;
    }
    out.flush()?;
    Ok(())
}

/// JSON document describing one computed curve
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Chart title for the circuit
    pub title: String,
    /// Parameters the curve was computed from
    pub params: &'a CircuitParams,
    /// Best/worst/mean, absent when no point is finite
    pub summary: Option<CurveSummary>,
    /// `[temperature_c, resolution_c]` pairs
    pub points: Vec<[f64; 2]>,
}

impl<'a> JsonReport<'a> {
    /// Assemble the report for `curve` computed from `params`
    pub fn new(params: &'a CircuitParams, curve: &ResolutionCurve) -> Self {
        Self {
            title: plot_title(params),
            params,
            summary: curve.summary(),
            points: curve
                .iter()
                .map(|p| [p.temperature_c, p.resolution_c])
                .collect(),
        }
    }
}

/// Write the curve and its parameters as pretty-printed JSON
pub fn write_json<W: Write>(
    params: &CircuitParams,
    curve: &ResolutionCurve,
    mut out: W,
) -> ReportResult<()> {
    let report = JsonReport::new(params, curve);
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermres_core::compute_resolution;

    fn small_circuit() -> CircuitParams {
        CircuitParams::new(10_000.0, 3950.0, 10_000.0).with_range(20.0, 21.0)
    }

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let params = small_circuit();
        let curve = compute_resolution(&params).unwrap();
        let mut buf = Vec::new();
        write_csv(&curve, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), curve.len() + 1);

        let first: Vec<f64> = lines[1].split(',').map(|v| v.parse().unwrap()).collect();
        assert!((first[0] - 20.05).abs() < 1e-9);
        assert!((first[1] - curve.resolution[0]).abs() < 1e-15);
    }

    #[test]
    fn csv_keeps_non_finite_values() {
        let curve = ResolutionCurve {
            midpoints: vec![0.05],
            resolution: vec![f64::INFINITY],
        };
        let mut buf = Vec::new();
        write_csv(&curve, &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().ends_with("0.05,inf\n"));
    }

    #[test]
    fn json_contains_params_summary_and_points() {
        let params = small_circuit().with_part_number("NTC-10K");
        let curve = compute_resolution(&params).unwrap();
        let mut buf = Vec::new();
        write_json(&params, &curve, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["title"], plot_title(&params));
        assert_eq!(value["params"]["part_number"], "NTC-10K");
        assert_eq!(value["params"]["topology"], "ntc_top");
        assert_eq!(value["points"].as_array().unwrap().len(), curve.len());
        assert_eq!(value["summary"]["finite_points"], curve.len());
    }

    #[test]
    fn json_writes_null_for_nan() {
        let params = small_circuit();
        let curve = ResolutionCurve {
            midpoints: vec![20.05],
            resolution: vec![f64::NAN],
        };
        let mut buf = Vec::new();
        write_json(&params, &curve, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value["summary"].is_null());
        assert!(value["points"][0][1].is_null());
    }
}
