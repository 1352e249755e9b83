//! src/render.rs
//!
//! Rendering collaborator: named containers, retained scenes, SVG output.

pub mod page;
pub mod scene;
pub mod svg;

/// Re-exports
pub use page::{Page, Size};
pub use scene::{Anchor, Point, Rgb, Scene, Shape, ShapeId, StrokeStyle, TextStyle};
