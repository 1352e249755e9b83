//! src/spark.rs
//!
//! Sparkline core: configuration, the bounded sample window, scales, and the widget.

pub mod config;
pub mod scale;
pub mod widget;
pub mod window;

/// Re-exports
pub use config::{Margins, SparkConfig};
pub use scale::{LinearScale, PlotArea, Scales};
pub use widget::Sparkline;
pub use window::{SampleWindow, WindowState};
