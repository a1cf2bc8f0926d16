//! Command-line parsing for the `thermres` binary
//!
//! Flags map one-to-one onto [`CircuitParams`] fields. A JSON parameter file
//! given with `--config` is loaded first; flags on the command line override
//! its values.

use std::{fs, path::{Path, PathBuf}, str::FromStr};

use log::LevelFilter;
use thermres_core::{CircuitParams, DividerTopology};

use crate::{
    error::{ReportError, ReportResult},
    logger,
    plot::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH},
};

/// Help text
pub const USAGE: &str = "\
Usage: thermres --rt <OHMS> --beta <KELVIN> --rref <OHMS> [options]
       thermres --config <FILE.json> [options]

Circuit:
  --rt <OHMS>          Thermistor resistance at T0
  --beta <KELVIN>      Thermistor B-value
  --rref <OHMS>        Reference resistor
  --t0 <C>             Reference temperature (default 25)
  --bits <N>           ADC bit depth (default 10)
  --vcc <V>            Supply voltage (default 3.3)
  --bottom             Thermistor on the ground side of the divider
  --part <LABEL>       Part number for the chart title

Sweep:
  --tmin <C>           Lower bound (default -40)
  --tmax <C>           Upper bound (default 50)
  --step <C>           Step (default 0.1)

Output:
  --format <FMT>       chart | csv | json (default chart)
  --width <N>          Chart width in characters (default 72)
  --height <N>         Chart height in characters (default 20)
  --unchecked          Skip parameter validation, keep NaN/inf in the output
  -v, --verbose        More log output (repeatable)
  -q, --quiet          Errors only
  -h, --help           Show this help
  -V, --version        Show version
";

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Braille chart on stdout
    #[default]
    Chart,
    /// CSV on stdout
    Csv,
    /// JSON on stdout
    Json,
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chart" | "plot" => Ok(Self::Chart),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ReportError::usage(format!(
                "unknown format '{other}', expected chart, csv or json"
            ))),
        }
    }
}

/// Everything one run of the binary needs
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Circuit to evaluate
    pub params: CircuitParams,
    /// Output format
    pub format: OutputFormat,
    /// Chart width (characters)
    pub width: usize,
    /// Chart height (characters)
    pub height: usize,
    /// Skip validation
    pub unchecked: bool,
    /// Log level
    pub log_level: LevelFilter,
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print usage
    Help,
    /// Print version
    Version,
    /// Compute and output a curve
    Run(RunOptions),
}

/// Values given on the command line, applied over the base parameters
#[derive(Debug, Default)]
struct Overrides {
    r_nominal: Option<f64>,
    beta: Option<f64>,
    r_ref: Option<f64>,
    t0_c: Option<f64>,
    adc_bits: Option<u8>,
    vcc: Option<f64>,
    tmin_c: Option<f64>,
    tmax_c: Option<f64>,
    step_c: Option<f64>,
    bottom: bool,
    part_number: Option<String>,
}

impl Overrides {
    fn apply(self, mut params: CircuitParams) -> CircuitParams {
        if let Some(v) = self.r_nominal {
            params.r_nominal = v;
        }
        if let Some(v) = self.beta {
            params.beta = v;
        }
        if let Some(v) = self.r_ref {
            params.r_ref = v;
        }
        if let Some(v) = self.t0_c {
            params.t0_c = v;
        }
        if let Some(v) = self.adc_bits {
            params.adc_bits = v;
        }
        if let Some(v) = self.vcc {
            params.vcc = v;
        }
        if let Some(v) = self.tmin_c {
            params.tmin_c = v;
        }
        if let Some(v) = self.tmax_c {
            params.tmax_c = v;
        }
        if let Some(v) = self.step_c {
            params.step_c = v;
        }
        if self.bottom {
            params.topology = DividerTopology::NtcBottom;
        }
        if let Some(v) = self.part_number {
            params.part_number = v;
        }
        params
    }

    fn required(&self) -> ReportResult<CircuitParams> {
        let missing = |flag: &str| ReportError::usage(format!("missing required {flag} (or --config)"));
        Ok(CircuitParams::new(
            self.r_nominal.ok_or_else(|| missing("--rt"))?,
            self.beta.ok_or_else(|| missing("--beta"))?,
            self.r_ref.ok_or_else(|| missing("--rref"))?,
        ))
    }
}

/// Parse arguments (without the program name)
pub fn parse_args<I, S>(args: I) -> ReportResult<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::<String>::into);

    let mut overrides = Overrides::default();
    let mut config: Option<PathBuf> = None;
    let mut format = OutputFormat::default();
    let mut width = DEFAULT_CHART_WIDTH;
    let mut height = DEFAULT_CHART_HEIGHT;
    let mut unchecked = false;
    let mut verbose = 0u8;
    let mut quiet = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--rt" => overrides.r_nominal = Some(value(&mut args, &arg)?),
            "--beta" => overrides.beta = Some(value(&mut args, &arg)?),
            "--rref" => overrides.r_ref = Some(value(&mut args, &arg)?),
            "--t0" => overrides.t0_c = Some(value(&mut args, &arg)?),
            "--bits" => overrides.adc_bits = Some(value(&mut args, &arg)?),
            "--vcc" => overrides.vcc = Some(value(&mut args, &arg)?),
            "--tmin" => overrides.tmin_c = Some(value(&mut args, &arg)?),
            "--tmax" => overrides.tmax_c = Some(value(&mut args, &arg)?),
            "--step" => overrides.step_c = Some(value(&mut args, &arg)?),
            "--part" => overrides.part_number = Some(value(&mut args, &arg)?),
            "--bottom" => overrides.bottom = true,
            "--config" => config = Some(value(&mut args, &arg)?),
            "--format" => format = value(&mut args, &arg)?,
            "--width" => width = value(&mut args, &arg)?,
            "--height" => height = value(&mut args, &arg)?,
            "--unchecked" => unchecked = true,
            "-v" | "--verbose" => verbose = verbose.saturating_add(1),
            "-q" | "--quiet" => quiet = true,
            other => return Err(ReportError::usage(format!("unknown argument '{other}'"))),
        }
    }

    let base = match config {
        Some(path) => load_params(&path)?,
        None => overrides.required()?,
    };

    Ok(Command::Run(RunOptions {
        params: overrides.apply(base),
        format,
        width,
        height,
        unchecked,
        log_level: logger::level_for(verbose, quiet),
    }))
}

/// Read circuit parameters from a JSON file
pub fn load_params(path: &Path) -> ReportResult<CircuitParams> {
    let text = fs::read_to_string(path)?;
    let params = serde_json::from_str(&text)?;
    log::info!("loaded parameters from {}", path.display());
    Ok(params)
}

fn value<T, I>(args: &mut I, flag: &str) -> ReportResult<T>
where
    T: FromStr,
    I: Iterator<Item = String>,
{
    let raw = args
        .next()
        .ok_or_else(|| ReportError::usage(format!("{flag} needs a value")))?;
    raw.parse()
        .map_err(|_| ReportError::usage(format!("invalid value '{raw}' for {flag}")))
}
