//! src/lib.rs
//!
//! Scrolling sparkline for a rolling window of live samples (e.g. eye-tracker
//! pupil size), rendered to a terminal dashboard or to SVG.

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod panels;
pub mod render;
pub mod source;
pub mod spark;
pub mod ui;

pub use error::{Result, SparkError};
pub use render::{Page, Scene, Size};
pub use spark::{SparkConfig, Sparkline};
