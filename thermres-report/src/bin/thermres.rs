//! thermres command line
//!
//! Prints the temperature resolution of a thermistor divider as a terminal
//! chart, CSV or JSON.
//!
//! ## Usage
//!
//! ```bash
//! # 10k NTC, B=3950, 10k reference, 10-bit ADC, -40..50°C
//! thermres --rt 10000 --beta 3950 --rref 10000
//!
//! # 12-bit ADC, CSV for a spreadsheet
//! thermres --rt 10000 --beta 3950 --rref 10000 --bits 12 --format csv > res.csv
//!
//! # Parameters from a file, overriding the sweep
//! thermres --config ntc.json --tmin 0 --tmax 100
//! ```

use std::io;

use anyhow::{Context, Result};
use log::{info, warn};

use thermres_core::{compute_resolution, compute_resolution_unchecked, ResolutionCurve};
use thermres_report::{
    cli::{self, Command, OutputFormat, RunOptions},
    export, logger, TextChart,
};

fn main() -> Result<()> {
    let command = cli::parse_args(std::env::args().skip(1))
        .map_err(|e| anyhow::anyhow!("{e}\n\n{}", cli::USAGE))?;

    match command {
        Command::Help => {
            print!("{}", cli::USAGE);
            Ok(())
        }
        Command::Version => {
            println!("thermres {}", thermres_core::VERSION);
            Ok(())
        }
        Command::Run(opts) => run(opts),
    }
}

fn run(opts: RunOptions) -> Result<()> {
    logger::init(opts.log_level)?;

    let curve = compute(&opts)?;
    if let Some(summary) = curve.summary() {
        info!(
            "best {:.4}°C/code at {:.2}°C, worst {:.4}°C/code at {:.2}°C",
            summary.best.resolution_c,
            summary.best.temperature_c,
            summary.worst.resolution_c,
            summary.worst.temperature_c
        );
    }

    match opts.format {
        OutputFormat::Chart => TextChart::for_circuit(&opts.params)
            .with_size(opts.width, opts.height)
            .show(&curve)
            .context("failed to draw chart")?,
        OutputFormat::Csv => export::write_csv(&curve, io::stdout().lock()).context("failed to write CSV")?,
        OutputFormat::Json => {
            export::write_json(&opts.params, &curve, io::stdout().lock()).context("failed to write JSON")?
        }
    }

    Ok(())
}

fn compute(opts: &RunOptions) -> Result<ResolutionCurve> {
    if opts.unchecked {
        warn!("parameter validation disabled");
        return Ok(compute_resolution_unchecked(&opts.params));
    }
    compute_resolution(&opts.params).context("invalid circuit parameters")
}
