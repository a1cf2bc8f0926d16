//! Error handling for reports and the command line
//!
//! ```text
//! DesignError (core)   → ReportError::Design
//! std::io::Error       → ReportError::Io
//! serde_json::Error    → ReportError::Json
//! bad flags / values   → ReportError::Usage
//! ```

use thermres_core::DesignError;
use thiserror::Error;

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors raised while rendering, exporting or parsing arguments
#[derive(Error, Debug)]
pub enum ReportError {
    /// Circuit parameters rejected by the core model
    #[error(transparent)]
    Design(#[from] DesignError),

    /// Writing output or reading a parameter file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parameter file or JSON export failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Curve has no finite point to draw
    #[error("Nothing to plot: {points} points, none finite")]
    NothingToPlot {
        /// Total number of points in the curve
        points: usize,
    },

    /// Requested chart is smaller than the renderer supports
    #[error("Chart {width}x{height} too small, need at least {min_width}x{min_height}")]
    ChartTooSmall {
        /// Requested width in characters
        width: usize,
        /// Requested height in characters
        height: usize,
        /// Minimum width
        min_width: usize,
        /// Minimum height
        min_height: usize,
    },

    /// Command line could not be understood
    #[error("{0}")]
    Usage(String),

    /// A logger was already installed for this process
    #[error("Logger already initialized")]
    LoggerInstalled,
}

impl ReportError {
    /// Build a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}
