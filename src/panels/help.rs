//! src/panels/help.rs
//!
//! Footer with key bindings and the last status message.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct HelpPanel<'a> {
    pub bindings: &'a [(&'a str, &'a str)],
    pub status: Option<&'a str>,
}

impl<'a> HelpPanel<'a> {
    pub fn new(bindings: &'a [(&'a str, &'a str)], status: Option<&'a str>) -> Self {
        Self { bindings, status }
    }
}

impl crate::ui::Panel for HelpPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans = Vec::with_capacity(self.bindings.len() * 2 + 1);
        for (key, action) in self.bindings {
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!("={}  ", action)));
        }
        if let Some(status) = self.status {
            spans.push(Span::styled(status, Style::default().fg(Color::Green)));
        }
        let block = Block::default().title("Controls").borders(Borders::ALL);
        f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
