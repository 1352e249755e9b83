//! src/spark/config.rs
//!
//! Configuration values for a sparkline: value range, window size, margins, styles.

use crate::error::{Result, SparkError};
use crate::render::{Rgb, StrokeStyle, TextStyle};

/// Space reserved around the plot area, in container pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    pub fn new(left: f64, top: f64, bottom: f64) -> Self {
        Self { left, top, bottom }
    }

    /// No margins: the plot fills the whole container.
    pub fn none() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(40.0, 6.0, 6.0)
    }
}

#[derive(Clone, Debug)]
pub struct SparkConfig {
    /// Bottom of the value range.
    pub min_y: f64,

    /// Top of the value range.
    pub max_y: f64,

    /// Number of samples kept in the sliding window.
    pub max_length: usize,

    pub margins: Margins,

    /// Draw the boundary lines and the min/max labels.
    pub decorations: bool,

    pub line: StrokeStyle,
    pub axis: StrokeStyle,
    pub label: TextStyle,
}

impl SparkConfig {
    /// Create a new `SparkConfig` with default margins and styles.
    pub fn new(min_y: f64, max_y: f64, max_length: usize) -> Self {
        Self {
            min_y,
            max_y,
            max_length,
            ..Self::default()
        }
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn decorations(mut self, decorations: bool) -> Self {
        self.decorations = decorations;
        self
    }

    pub fn line(mut self, line: StrokeStyle) -> Self {
        self.line = line;
        self
    }

    /// Reject a zero-sized window or a non-finite value range.
    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            return Err(SparkError::InvalidMaxLength);
        }
        if !self.min_y.is_finite() || !self.max_y.is_finite() {
            return Err(SparkError::InvalidRange {
                min_y: self.min_y,
                max_y: self.max_y,
            });
        }
        Ok(())
    }
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self {
            min_y: 0.0,
            max_y: 1.0,
            max_length: 60,
            margins: Margins::default(),
            decorations: true,
            line: StrokeStyle::new(Rgb::DARK_CYAN, 1.5),
            axis: StrokeStyle::new(Rgb::LIGHT_GRAY, 1.0),
            label: TextStyle {
                color: Rgb::GRAY,
                font_size: 10.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_window_is_rejected() {
        let cfg = SparkConfig::new(0.0, 10.0, 0);
        assert!(matches!(cfg.validate(), Err(SparkError::InvalidMaxLength)));
    }

    #[test]
    fn non_finite_range_is_rejected() {
        let cfg = SparkConfig::new(f64::NAN, 10.0, 5);
        assert!(matches!(cfg.validate(), Err(SparkError::InvalidRange { .. })));
        let cfg = SparkConfig::new(0.0, f64::INFINITY, 5);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_range_is_accepted() {
        // values are never validated against the range, and neither is its order
        assert!(SparkConfig::new(10.0, 0.0, 5).validate().is_ok());
    }
}
