//! src/render/scene.rs
//!
//! Retained drawables for one surface. Both the SVG writer and the terminal
//! canvas paint from the same `Scene`.

use super::page::Size;

/// A point in container pixels, origin at the top-left, y growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const DARK_CYAN: Rgb = Rgb(0, 139, 139);
    pub const LIGHT_GRAY: Rgb = Rgb(204, 204, 204);
    pub const GRAY: Rgb = Rgb(128, 128, 128);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub width: f64,
}

impl StrokeStyle {
    pub fn new(color: Rgb, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Rgb,
    pub font_size: f64,
}

/// Horizontal text anchor relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Path {
        points: Vec<Point>,
        style: StrokeStyle,
    },
    Line {
        from: Point,
        to: Point,
        style: StrokeStyle,
    },
    Text {
        at: Point,
        text: String,
        anchor: Anchor,
        style: TextStyle,
    },
}

/// Handle to a shape inside the scene that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeId(usize);

#[derive(Clone, Debug)]
pub struct Scene {
    size: Size,
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            shapes: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Shapes in paint order (first painted first).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn add_path(&mut self, points: Vec<Point>, style: StrokeStyle) -> ShapeId {
        self.push(Shape::Path { points, style })
    }

    pub fn add_line(&mut self, from: Point, to: Point, style: StrokeStyle) -> ShapeId {
        self.push(Shape::Line { from, to, style })
    }

    pub fn add_text(&mut self, at: Point, text: &str, anchor: Anchor, style: TextStyle) -> ShapeId {
        self.push(Shape::Text {
            at,
            text: text.to_string(),
            anchor,
            style,
        })
    }

    /// Replace a path's geometry in place, keeping its style and paint order.
    pub fn set_path(&mut self, id: ShapeId, new_points: Vec<Point>) {
        match self.shapes.get_mut(id.0) {
            Some(Shape::Path { points, .. }) => *points = new_points,
            _ => tracing::warn!(?id, "set_path on a shape that is not a path"),
        }
    }

    /// Geometry of a path, if `id` names one.
    pub fn path(&self, id: ShapeId) -> Option<&[Point]> {
        match self.shapes.get(id.0) {
            Some(Shape::Path { points, .. }) => Some(points),
            _ => None,
        }
    }

    fn push(&mut self, shape: Shape) -> ShapeId {
        self.shapes.push(shape);
        ShapeId(self.shapes.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_path_replaces_geometry_in_place() {
        let mut scene = Scene::new(Size::new(100.0, 20.0));
        let style = StrokeStyle::new(Rgb::DARK_CYAN, 1.5);
        let axis = scene.add_line(Point::new(0.0, 0.0), Point::new(100.0, 0.0), style);
        let path = scene.add_path(vec![Point::new(0.0, 10.0)], style);

        scene.set_path(path, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);

        assert_eq!(scene.shapes().len(), 2);
        assert_eq!(
            scene.path(path),
            Some(&[Point::new(1.0, 2.0), Point::new(3.0, 4.0)][..])
        );
        assert_eq!(scene.path(axis), None);
    }

    #[test]
    fn set_path_ignores_non_paths() {
        let mut scene = Scene::new(Size::new(100.0, 20.0));
        let style = StrokeStyle::new(Rgb::GRAY, 1.0);
        let axis = scene.add_line(Point::new(0.0, 0.0), Point::new(100.0, 0.0), style);
        let before = scene.shapes().to_vec();

        scene.set_path(axis, vec![Point::new(5.0, 5.0)]);

        assert_eq!(scene.shapes(), &before[..]);
    }
}
