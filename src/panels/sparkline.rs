//! src/panels/sparkline.rs
//!
//! Paints a sparkline's scene onto a braille canvas.
//!
//! One scene pixel is one braille dot: a terminal cell is 2 dots wide and 4
//! dots tall. Scene y grows downward while canvas y grows upward, so every y
//! is flipped against the scene height.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Line as TextLine,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Context, Line, Points},
    },
};

use super::term_color;
use crate::render::{Anchor, Point, Scene, Shape, Size};
use crate::spark::Sparkline;

const DOTS_PER_COL: u16 = 2;
const DOTS_PER_ROW: u16 = 4;

pub struct SparklinePanel<'a> {
    pub spark: &'a Sparkline,
    pub title: String,
}

impl<'a> SparklinePanel<'a> {
    pub fn new(spark: &'a Sparkline, title: &str) -> Self {
        Self {
            spark,
            title: title.to_string(),
        }
    }

    /// Pixel size of the container inside a bordered panel occupying `area`.
    pub fn container_size(area: Rect) -> Size {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        Size::new(
            f64::from(inner.width * DOTS_PER_COL),
            f64::from(inner.height * DOTS_PER_ROW),
        )
    }
}

impl crate::ui::Panel for SparklinePanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let scene = self.spark.scene();
        let size = scene.size();
        let canvas = Canvas::default()
            .block(Block::default().title(self.title.clone()).borders(Borders::ALL))
            .marker(Marker::Braille)
            .x_bounds([0.0, size.width])
            .y_bounds([0.0, size.height])
            .paint(|ctx| paint_scene(ctx, scene));
        f.render_widget(canvas, area);
    }
}

fn paint_scene(ctx: &mut Context<'_>, scene: &Scene) {
    let h = scene.size().height;
    let flip = |p: &Point| (p.x, h - p.y);

    for shape in scene.shapes() {
        match shape {
            Shape::Path { points, style } => {
                let color = term_color(style.color);
                if let [only] = points.as_slice() {
                    ctx.draw(&Points {
                        coords: &[flip(only)],
                        color,
                    });
                }
                for pair in points.windows(2) {
                    let (x1, y1) = flip(&pair[0]);
                    let (x2, y2) = flip(&pair[1]);
                    ctx.draw(&Line::new(x1, y1, x2, y2, color));
                }
            }
            Shape::Line { from, to, style } => {
                let (x1, y1) = flip(from);
                let (x2, y2) = flip(to);
                ctx.draw(&Line::new(x1, y1, x2, y2, term_color(style.color)));
            }
            Shape::Text {
                at,
                text,
                anchor,
                style,
            } => {
                let (mut x, y) = flip(at);
                if *anchor == Anchor::End {
                    // one character per cell
                    x -= (text.chars().count() as f64) * f64::from(DOTS_PER_COL);
                }
                ctx.print(
                    x.max(0.0),
                    y,
                    TextLine::styled(text.clone(), Style::default().fg(term_color(style.color))),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Page;
    use crate::spark::{Margins, SparkConfig};
    use crate::ui::Panel;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn container_size_counts_braille_dots() {
        assert_eq!(
            SparklinePanel::container_size(Rect::new(0, 0, 42, 12)),
            Size::new(80.0, 40.0)
        );
    }

    #[test]
    fn draws_line_and_labels() {
        let area = Rect::new(0, 0, 42, 12);
        let page = Page::new().with_container("pupil", SparklinePanel::container_size(area));
        let cfg = SparkConfig::new(0.0, 10.0, 20).margins(Margins::new(0.0, 4.0, 4.0));
        let mut spark = Sparkline::new(&page, "pupil", &[], cfg).unwrap();
        spark.add_data(&[1.0, 3.0, 5.0, 7.0, 9.0, 7.0, 5.0, 3.0]);

        let mut terminal = Terminal::new(TestBackend::new(42, 12)).unwrap();
        terminal
            .draw(|f| SparklinePanel::new(&spark, "pupil").draw(f, area))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("pupil"));
        assert!(content.contains("10"));
        assert!(
            content
                .chars()
                .any(|c| ('\u{2801}'..='\u{28FF}').contains(&c)),
            "no braille dots drawn"
        );
    }
}
