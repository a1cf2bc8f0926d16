//! Terminal chart of a resolution curve
//!
//! Each character cell is a braille glyph holding a 2x4 grid of dots, so a
//! `width x height` chart has `2*width x 4*height` addressable points.
//! Consecutive samples are joined with straight segments so steep parts of
//! the curve stay connected.
//!
//! ```text
//! Thermistor: R_T=10.0kΩ; R_r=10.0kΩ; B=3950K
//! Resolution (°C)
//!     0.566 ┤⡀
//!           │⠈⠢⡀
//!     0.326 ┤  ⠈⠑⠢⠤⣀⡀
//!           │        ⠉⠉⠒⠒⠤⠤⠤⣀⣀⣀⣀⣀⣀⣀⣀⣀⡀
//!     0.086 ┤                         ⠉⠉
//!           └──────────────────────────────
//!            -39.95                   49.95
//!            Temperature (°C)
//! ```

use std::io::{self, Write};

use thermres_core::{CircuitParams, ResolutionCurve};

use crate::{
    error::{ReportError, ReportResult},
    title::{plot_title, X_LABEL, Y_LABEL},
};

/// Narrowest chart the renderer will draw (characters)
pub const MIN_CHART_WIDTH: usize = 14;
/// Shortest chart the renderer will draw (characters)
pub const MIN_CHART_HEIGHT: usize = 7;
/// Default chart width (characters)
pub const DEFAULT_CHART_WIDTH: usize = 72;
/// Default chart height (characters)
pub const DEFAULT_CHART_HEIGHT: usize = 20;

/// Braille has 2 horizontal dots per cell
const DOTS_X: usize = 2;
/// Braille has 4 vertical dots per cell
const DOTS_Y: usize = 4;
/// First codepoint of the braille block
const BRAILLE_BASE: u32 = 0x2800;
/// Width of the y tick label column, fits `-1.23e-10`
const LABEL_WIDTH: usize = 9;
/// Tick magnitudes outside this range switch to scientific notation
const FIXED_TICK_RANGE: std::ops::Range<f64> = 1e-2..1e4;
/// Smallest axis span that three-decimal ticks still tell apart
const FIXED_TICK_MIN_SPAN: f64 = 4e-3;

/// Dot bit for column `dx` (0..2), row `dy` (0..4) within one cell
const fn dot_bit(dx: usize, dy: usize) -> u8 {
    match (dx, dy) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, _) => 0x40,
        (_, 0) => 0x08,
        (_, 1) => 0x10,
        (_, 2) => 0x20,
        _ => 0x80,
    }
}

/// Braille line chart with title and axis labels
#[derive(Debug, Clone)]
pub struct TextChart {
    title: String,
    x_label: String,
    y_label: String,
    width: usize,
    height: usize,
}

impl TextChart {
    /// Chart titled after the circuit, with the standard axis labels
    pub fn for_circuit(params: &CircuitParams) -> Self {
        Self {
            title: plot_title(params),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }

    /// Override the plot area size in characters
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Chart title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render the curve to a multi-line string.
    ///
    /// Non-finite points are skipped; segments are not drawn across them.
    pub fn render(&self, curve: &ResolutionCurve) -> ReportResult<String> {
        if self.width < MIN_CHART_WIDTH || self.height < MIN_CHART_HEIGHT {
            return Err(ReportError::ChartTooSmall {
                width: self.width,
                height: self.height,
                min_width: MIN_CHART_WIDTH,
                min_height: MIN_CHART_HEIGHT,
            });
        }

        let finite: Vec<(f64, f64)> = curve
            .iter()
            .filter(|p| p.temperature_c.is_finite() && p.resolution_c.is_finite())
            .map(|p| (p.temperature_c, p.resolution_c))
            .collect();
        if finite.is_empty() {
            return Err(ReportError::NothingToPlot { points: curve.len() });
        }

        let (x_min, x_max) = padded_bounds(finite.iter().map(|p| p.0));
        let (y_min, y_max) = padded_bounds(finite.iter().map(|p| p.1));

        let dots_w = self.width * DOTS_X;
        let dots_h = self.height * DOTS_Y;
        let to_dot = |x: f64, y: f64| -> (usize, usize) {
            let dx = (x - x_min) / (x_max - x_min) * (dots_w - 1) as f64;
            let dy = (y_max - y) / (y_max - y_min) * (dots_h - 1) as f64;
            (dx.round() as usize, dy.round() as usize)
        };

        let mut cells = vec![vec![0u8; self.width]; self.height];
        let mut plot = |(px, py): (usize, usize)| {
            cells[py / DOTS_Y][px / DOTS_X] |= dot_bit(px % DOTS_X, py % DOTS_Y);
        };

        let mut prev: Option<(usize, usize)> = None;
        for point in curve.iter() {
            if !(point.temperature_c.is_finite() && point.resolution_c.is_finite()) {
                prev = None;
                continue;
            }
            let dot = to_dot(point.temperature_c, point.resolution_c);
            match prev {
                Some(from) => segment(from, dot).for_each(&mut plot),
                None => plot(dot),
            }
            prev = Some(dot);
        }

        Ok(self.layout(&cells, (x_min, x_max), (y_min, y_max)))
    }

    /// Render and write to stdout, blocking until written
    pub fn show(&self, curve: &ResolutionCurve) -> ReportResult<()> {
        let text = self.render(curve)?;
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn layout(&self, cells: &[Vec<u8>], x: (f64, f64), y: (f64, f64)) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&self.y_label);
        out.push('\n');

        let last_row = self.height - 1;
        for (row, line) in cells.iter().enumerate() {
            let tick = match row {
                0 => Some(y.1),
                r if r == last_row => Some(y.0),
                r if r == last_row / 2 => Some(y.1 - (y.1 - y.0) * r as f64 / last_row as f64),
                _ => None,
            };
            match tick {
                Some(value) => out.push_str(&format!(
                    "{:>width$} ┤",
                    tick_label(value, y),
                    width = LABEL_WIDTH
                )),
                None => out.push_str(&format!("{:>width$} │", "", width = LABEL_WIDTH)),
            }
            let glyphs: String = line
                .iter()
                .map(|&bits| char::from_u32(BRAILLE_BASE + u32::from(bits)).unwrap_or(' '))
                .collect();
            out.push_str(glyphs.trim_end_matches('\u{2800}'));
            out.push('\n');
        }

        let gutter = " ".repeat(LABEL_WIDTH + 1);
        out.push_str(&gutter);
        out.push('└');
        out.push_str(&"─".repeat(self.width));
        out.push('\n');

        let left = format!("{:.2}", x.0);
        let right = format!("{:.2}", x.1);
        let pad = (self.width + 1).saturating_sub(left.len() + right.len()).max(1);
        out.push_str(&gutter);
        out.push_str(&left);
        out.push_str(&" ".repeat(pad));
        out.push_str(&right);
        out.push('\n');

        out.push_str(&gutter);
        out.push_str(&self.x_label);
        out.push('\n');
        out
    }
}

/// Y tick text for `value` on an axis spanning `bounds`.
///
/// Three decimals for ordinary magnitudes, scientific notation when those
/// would print the same digits on every tick or overflow the gutter.
fn tick_label(value: f64, bounds: (f64, f64)) -> String {
    let magnitude = bounds.0.abs().max(bounds.1.abs());
    let span = bounds.1 - bounds.0;
    if FIXED_TICK_RANGE.contains(&magnitude) && span >= FIXED_TICK_MIN_SPAN {
        format!("{:.3}", value)
    } else {
        format!("{:.2e}", value)
    }
}

/// Min and max of `values`, widened when they coincide
fn padded_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if hi > lo {
        (lo, hi)
    } else {
        let pad = if lo == 0.0 { 0.5 } else { lo.abs() * 0.05 };
        (lo - pad, hi + pad)
    }
}

/// Dots on the straight segment from `a` to `b`, both ends included
fn segment(a: (usize, usize), b: (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
    let (ax, ay) = (a.0 as f64, a.1 as f64);
    let (bx, by) = (b.0 as f64, b.1 as f64);
    let steps = a.0.abs_diff(b.0).max(a.1.abs_diff(b.1)).max(1);
    (0..=steps).map(move |i| {
        let t = i as f64 / steps as f64;
        (
            (ax + (bx - ax) * t).round() as usize,
            (ay + (by - ay) * t).round() as usize,
        )
    })
}
