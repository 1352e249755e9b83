//! src/panels/samples.rs
//!
//! Scrolling list of the values currently in the sample window, newest last.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::spark::Sparkline;

pub struct SamplesPanel<'a> {
    pub spark: &'a Sparkline,
}

impl<'a> SamplesPanel<'a> {
    pub fn new(spark: &'a Sparkline) -> Self {
        Self { spark }
    }

    /// The last `rows` window entries, the newest highlighted.
    fn lines(&self, rows: usize) -> Vec<Line<'static>> {
        let values = self.spark.window().to_vec();
        let start = values.len().saturating_sub(rows);
        let last_index = values.len().saturating_sub(1);
        values
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, v)| {
                let style = if i == last_index {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                Line::from(vec![
                    Span::styled(format!("{:>4} ", i), Style::default().fg(Color::Yellow)),
                    Span::styled(format!("{:.3}", v), style),
                ])
            })
            .collect()
    }
}

impl crate::ui::Panel for SamplesPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        // two rows go to the borders
        let rows = area.height.saturating_sub(2) as usize;
        let block = Block::default().title("Samples").borders(Borders::ALL);
        f.render_widget(Paragraph::new(self.lines(rows)).block(block), area);
    }
}
