//! src/panels/title.rs
//!
//! Header panel: application title plus the active sample source.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct TitlePanel {
    pub title: String,
    pub source: String,
}

impl TitlePanel {
    pub fn new(title: &str, source: &str) -> Self {
        Self {
            title: title.to_string(),
            source: source.to_string(),
        }
    }
}

impl crate::ui::Panel for TitlePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled(&self.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::raw(&self.source),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
