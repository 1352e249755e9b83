//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod help;
pub mod info;
pub mod samples;
pub mod sparkline;
pub mod title;

pub use help::HelpPanel;
pub use info::InfoPanel;
pub use samples::SamplesPanel;
pub use sparkline::SparklinePanel;
pub use title::TitlePanel;

/// Convert a scene color into a terminal color.
pub(crate) fn term_color(c: crate::render::Rgb) -> ratatui::style::Color {
    ratatui::style::Color::Rgb(c.0, c.1, c.2)
}
