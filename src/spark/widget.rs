//! src/spark/widget.rs
//!
//! The sparkline widget: owns the sample window, its scales, and the scene it
//! draws into. `add_data` is the only mutator.

use super::config::SparkConfig;
use super::scale::{PlotArea, Scales};
use super::window::{SampleWindow, WindowState};
use crate::error::Result;
use crate::render::{Anchor, Page, Point, Scene, ShapeId};

#[derive(Debug)]
pub struct Sparkline {
    container: String,
    config: SparkConfig,
    window: SampleWindow,
    area: PlotArea,
    scene: Scene,
    /// the line drawn at construction and updated in place afterwards
    path: ShapeId,
}

impl Sparkline {
    /// Build a sparkline filling the container `container` of `page`.
    ///
    /// The container is measured once here. `initial` is truncated to its last
    /// `config.max_length` samples. Boundary lines and labels, when enabled,
    /// are drawn once and never touched again.
    ///
    /// # Errors
    /// `InvalidMaxLength` / `InvalidRange` for a bad config, `UnknownContainer`
    /// when the page has no container with that id.
    pub fn new(page: &Page, container: &str, initial: &[f64], config: SparkConfig) -> Result<Self> {
        config.validate()?;
        let size = page.element_size(container)?;
        let mut scene = page.create_surface(container)?;
        let area = PlotArea::new(size, config.margins);
        let window = SampleWindow::new(config.max_length, initial);

        if config.decorations {
            draw_decorations(&mut scene, &config, area);
        }

        let scales = Scales::new(&config, area);
        let path = scene.add_path(line_points(&window, &scales, config.max_y), config.line);

        tracing::debug!(
            container,
            width = size.width,
            height = size.height,
            samples = window.len(),
            "sparkline created"
        );

        Ok(Self {
            container: container.to_string(),
            config,
            window,
            area,
            scene,
            path,
        })
    }

    /// Scales from window index / inverted value into container pixels.
    pub fn scales(&self) -> Scales {
        Scales::new(&self.config, self.area)
    }

    /// Append samples and redraw the line.
    pub fn add_data(&mut self, samples: &[f64]) {
        if samples.is_empty() {
            return;
        }
        let before = self.window.state();
        self.window.extend(samples);
        if before == WindowState::Filling && self.window.state() == WindowState::Full {
            tracing::debug!(container = %self.container, "sample window full");
        }
        let points = line_points(&self.window, &self.scales(), self.config.max_y);
        self.scene.set_path(self.path, points);
    }

    /// Pixel coordinates of the line currently drawn.
    pub fn points(&self) -> &[Point] {
        self.scene.path(self.path).unwrap_or(&[])
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    pub fn offset(&self) -> usize {
        self.window.offset()
    }

    pub fn state(&self) -> WindowState {
        self.window.state()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn config(&self) -> &SparkConfig {
        &self.config
    }
}

/// Line generator: sample `i` with value `v` lands on `(x(i + offset), y(max_y - v))`.
fn line_points(window: &SampleWindow, scales: &Scales, max_y: f64) -> Vec<Point> {
    let offset = window.offset();
    window
        .iter()
        .enumerate()
        .map(|(i, v)| scales.point(i, offset, max_y, v))
        .collect()
}

/// Boundary lines at the plot top/bottom and the max/min labels at its right edge.
fn draw_decorations(scene: &mut Scene, config: &SparkConfig, area: PlotArea) {
    let top = area.top;
    let bottom = area.bottom();
    scene.add_line(
        Point::new(area.left, top),
        Point::new(area.right(), top),
        config.axis,
    );
    scene.add_line(
        Point::new(area.left, bottom),
        Point::new(area.right(), bottom),
        config.axis,
    );

    // labels sit inside the plot: max hangs below the top line, min rests on the bottom one
    let font = config.label.font_size;
    scene.add_text(
        Point::new(area.right(), top + font),
        &format!("{}", config.max_y),
        Anchor::End,
        config.label,
    );
    scene.add_text(
        Point::new(area.right(), bottom - 1.0),
        &format!("{}", config.min_y),
        Anchor::End,
        config.label,
    );
}
