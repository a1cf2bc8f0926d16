//! Reporting layer for thermres
//!
//! Turns a [`ResolutionCurve`](thermres_core::ResolutionCurve) into
//! something a person or another program can read:
//!
//! - [`plot::TextChart`]: braille chart with title and axis labels
//! - [`export`]: CSV and JSON
//! - [`cli`]: argument parsing for the `thermres` binary
//!
//! ```no_run
//! use thermres_core::{compute_resolution, CircuitParams};
//! use thermres_report::TextChart;
//!
//! let params = CircuitParams::new(10_000.0, 3950.0, 10_000.0).with_part_number("NTC-10K");
//! let curve = compute_resolution(&params)?;
//! TextChart::for_circuit(&params).show(&curve)?;
//! # Ok::<(), thermres_report::ReportError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod error;
pub mod export;
pub mod logger;
pub mod plot;
pub mod title;

pub use error::{ReportError, ReportResult};
pub use export::{write_csv, write_json, JsonReport};
pub use plot::TextChart;
pub use title::{plot_title, X_LABEL, Y_LABEL};
