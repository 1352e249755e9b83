//! src/spark/scale.rs
//!
//! Linear mapping from sample index / value space into container pixels.

use super::config::{Margins, SparkConfig};
use crate::render::{Point, Size};

/// Linear map from `domain` onto `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map `v` from domain to range. Values outside the domain extrapolate.
    /// A zero-width domain maps everything to the start of the range.
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }
}

/// The part of the container left for the line once margins are removed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Container size minus margins; negative extents collapse to zero.
    pub fn new(size: Size, margins: Margins) -> Self {
        Self {
            left: margins.left,
            top: margins.top,
            width: (size.width - margins.left).max(0.0),
            height: (size.height - margins.top - margins.bottom).max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The x (index) and y (inverted value) scales of one sparkline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl Scales {
    /// X: `[0, max_length - 1]` onto the plot width, so a full window ends
    /// exactly at the right edge. Y: `[0, max_y - min_y]` onto the plot height.
    pub fn new(config: &SparkConfig, area: PlotArea) -> Self {
        let last_index = config.max_length.saturating_sub(1) as f64;
        Self {
            x: LinearScale::new((0.0, last_index), (area.left, area.right())),
            y: LinearScale::new((0.0, config.max_y - config.min_y), (area.top, area.bottom())),
        }
    }

    /// Pixel position of the sample at window `index` with value `value`.
    pub fn point(&self, index: usize, offset: usize, max_y: f64, value: f64) -> Point {
        Point::new(
            self.x.apply((index + offset) as f64),
            self.y.apply(max_y - value),
        )
    }
}
