//! src/panels/info.rs
//!
//! Widget status: window state, fill level, offset, last value, and range.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::spark::{Sparkline, WindowState};

/// Read-only view of one sparkline's state.
pub struct InfoPanel<'a> {
    pub spark: &'a Sparkline,
    /// samples received since start, including evicted ones
    pub received: usize,
}

impl<'a> InfoPanel<'a> {
    pub fn new(spark: &'a Sparkline, received: usize) -> Self {
        Self { spark, received }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let window = self.spark.window();
        let cfg = self.spark.config();
        let (state, color) = match self.spark.state() {
            WindowState::Filling => ("Filling", Color::Yellow),
            WindowState::Full => ("Full", Color::Green),
        };
        let last = match window.last() {
            Some(v) => format!("{:.3}", v),
            None => "-".to_string(),
        };
        vec![
            Line::from(vec![
                Span::raw("state="),
                Span::styled(state, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(format!("window={}/{}", window.len(), window.max_length())),
            Line::from(format!("offset={}", self.spark.offset())),
            Line::from(format!("last={}  received={}", last, self.received)),
            Line::from(format!("range=[{}, {}]", cfg.min_y, cfg.max_y)),
        ]
    }
}

impl crate::ui::Panel for InfoPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(format!("Info: {}", self.spark.container()))
            .borders(Borders::ALL);
        f.render_widget(Paragraph::new(self.lines()).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Page, Size};
    use crate::spark::SparkConfig;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn reports_filling_then_full() {
        let page = Page::new().with_container("pupil", Size::new(100.0, 40.0));
        let mut spark = Sparkline::new(&page, "pupil", &[3.0], SparkConfig::new(2.0, 5.0, 3)).unwrap();

        let filling = text(&InfoPanel::new(&spark, 1).lines());
        assert_eq!(filling[0], "state=Filling");
        assert_eq!(filling[1], "window=1/3");
        assert_eq!(filling[2], "offset=2");
        assert_eq!(filling[3], "last=3.000  received=1");
        assert_eq!(filling[4], "range=[2, 5]");

        spark.add_data(&[4.0, 4.5, 2.5]);
        let full = text(&InfoPanel::new(&spark, 4).lines());
        assert_eq!(full[0], "state=Full");
        assert_eq!(full[1], "window=3/3");
        assert_eq!(full[2], "offset=0");
        assert_eq!(full[3], "last=2.500  received=4");
    }
}
