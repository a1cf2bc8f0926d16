//! End-to-end tests for the reporting layer
//!
//! Parameter files on disk, command-line overrides, and every output format
//! driven from one computed curve.

use std::io::Write;

use proptest::prelude::*;
use tempfile::NamedTempFile;

use thermres_core::{compute_resolution, CircuitParams, DividerTopology};
use thermres_report::{
    cli::{self, Command, OutputFormat, RunOptions},
    export::{self, CSV_HEADER},
    plot::{MIN_CHART_HEIGHT, MIN_CHART_WIDTH},
    plot_title, ReportError, TextChart,
};

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run_options(args: &[&str]) -> RunOptions {
    match cli::parse_args(args.iter().copied()).unwrap() {
        Command::Run(opts) => opts,
        other => panic!("expected run, got {other:?}"),
    }
}

#[test]
fn test_config_file_fills_defaults() {
    let file = write_config(r#"{ "r_nominal": 10000.0, "beta": 3950.0, "r_ref": 10000.0 }"#);
    let path = file.path().to_str().unwrap();

    let opts = run_options(&["--config", path]);
    assert_eq!(opts.params, CircuitParams::new(10_000.0, 3950.0, 10_000.0));
}

#[test]
fn test_flags_override_config_file() {
    let file = write_config(
        r#"{
            "r_nominal": 100000.0,
            "beta": 4190.0,
            "r_ref": 100000.0,
            "adc_bits": 12,
            "topology": "ntc_bottom",
            "part_number": "NTCLE100E3104JB0"
        }"#,
    );
    let path = file.path().to_str().unwrap();

    let opts = run_options(&["--config", path, "--bits", "16", "--tmin", "0", "--format", "json"]);
    assert_eq!(opts.params.adc_bits, 16);
    assert_eq!(opts.params.tmin_c, 0.0);
    assert_eq!(opts.params.r_nominal, 100_000.0);
    assert_eq!(opts.params.topology, DividerTopology::NtcBottom);
    assert_eq!(opts.params.part_number, "NTCLE100E3104JB0");
    assert_eq!(opts.format, OutputFormat::Json);
}

#[test]
fn test_malformed_config_is_json_error() {
    let file = write_config(r#"{ "r_nominal": "ten thousand" }"#);
    let path = file.path().to_str().unwrap();

    let err = cli::parse_args(["--config", path]).unwrap_err();
    assert!(matches!(err, ReportError::Json(_)));
}

#[test]
fn test_invalid_circuit_surfaces_design_error() {
    let opts = run_options(&["--rt", "10000", "--beta", "3950", "--rref", "10000", "--bits", "0"]);
    let err: ReportError = compute_resolution(&opts.params).unwrap_err().into();

    assert!(matches!(err, ReportError::Design(_)));
    assert!(err.to_string().contains("adc_bits"));
}

#[test]
fn test_csv_and_json_agree() {
    let params = CircuitParams::new(10_000.0, 3950.0, 10_000.0).with_part_number("NTC-10K");
    let curve = compute_resolution(&params).unwrap();

    let mut csv = Vec::new();
    export::write_csv(&curve, &mut csv).unwrap();
    let csv = String::from_utf8(csv).unwrap();

    let mut json = Vec::new();
    export::write_json(&params, &curve, &mut json).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&json).unwrap();

    let rows: Vec<&str> = csv.lines().skip(1).collect();
    let points = json["points"].as_array().unwrap();
    assert_eq!(csv.lines().next(), Some(CSV_HEADER));
    assert_eq!(rows.len(), 900);
    assert_eq!(points.len(), rows.len());

    for (row, point) in rows.iter().zip(points).step_by(97) {
        let values: Vec<f64> = row.split(',').map(|v| v.parse().unwrap()).collect();
        assert!((values[0] - point[0].as_f64().unwrap()).abs() < 1e-12);
        assert!((values[1] - point[1].as_f64().unwrap()).abs() < 1e-12);
    }

    assert_eq!(json["title"], "Thermistor NTC-10K: R_T=10.0kΩ; R_r=10.0kΩ; B=3950K");
    let worst = &json["summary"]["worst"];
    assert!((worst["temperature_c"].as_f64().unwrap() + 39.95).abs() < 1e-9);
}

#[test]
fn test_json_params_load_back() {
    let params = CircuitParams::new(47_000.0, 4050.0, 22_000.0)
        .with_vcc(5.0)
        .with_range(-20.0, 80.0)
        .with_step(0.5);
    let curve = compute_resolution(&params).unwrap();

    let mut json = Vec::new();
    export::write_json(&params, &curve, &mut json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();

    // The exported params block is itself a valid parameter file
    let file = write_config(&value["params"].to_string());
    let loaded = cli::load_params(file.path()).unwrap();
    assert_eq!(loaded, params);
}

#[test]
fn test_chart_for_default_circuit() {
    let params = CircuitParams::new(10_000.0, 3950.0, 10_000.0);
    let curve = compute_resolution(&params).unwrap();
    let chart = TextChart::for_circuit(&params);

    let text = chart.render(&curve).unwrap();
    assert_eq!(chart.title(), plot_title(&params));
    assert!(text.starts_with(&plot_title(&params)));
    assert!(text.contains("Temperature (°C)"));
    assert!(text.contains("Resolution (°C)"));
}

#[test]
fn test_chart_for_bottom_leg_has_negative_axis() {
    let params = CircuitParams::new(10_000.0, 3950.0, 10_000.0)
        .with_topology(DividerTopology::NtcBottom);
    let curve = compute_resolution(&params).unwrap();

    let text = TextChart::for_circuit(&params).with_size(30, 8).render(&curve).unwrap();
    assert!(text.contains("-0.5"));
}

proptest! {
    #[test]
    fn prop_chart_dimensions(
        width in MIN_CHART_WIDTH..120usize,
        height in MIN_CHART_HEIGHT..40usize,
        bits in 8u8..=16,
    ) {
        let params = CircuitParams::new(10_000.0, 3950.0, 10_000.0)
            .with_adc_bits(bits)
            .with_step(1.0);
        let curve = compute_resolution(&params).unwrap();
        let text = TextChart::for_circuit(&params).with_size(width, height).render(&curve).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), height + 5);
        for row in &lines[2..2 + height] {
            prop_assert!(row.chars().count() <= width + 11);
        }
    }
}
