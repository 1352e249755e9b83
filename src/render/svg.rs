//! src/render/svg.rs
//!
//! Serialize a `Scene` into a standalone SVG document.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::scene::{Anchor, Point, Rgb, Scene, Shape};
use crate::error::Result;

/// Render the scene as an SVG document string.
pub fn to_svg(scene: &Scene) -> String {
    let size = scene.size();
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = size.width,
        h = size.height
    );
    for shape in scene.shapes() {
        match shape {
            Shape::Path { points, style } => {
                let _ = writeln!(
                    out,
                    r#"  <path d="{}" style="fill: none; stroke: {}; stroke-width: {}px;"/>"#,
                    path_data(points),
                    color(style.color),
                    style.width
                );
            }
            Shape::Line { from, to, style } => {
                let _ = writeln!(
                    out,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" style="stroke: {}; stroke-width: {}px;"/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    color(style.color),
                    style.width
                );
            }
            Shape::Text {
                at,
                text,
                anchor,
                style,
            } => {
                let anchor = match anchor {
                    Anchor::Start => "start",
                    Anchor::End => "end",
                };
                let _ = writeln!(
                    out,
                    r#"  <text x="{}" y="{}" text-anchor="{}" style="font-size: {}px; fill: {};">{}</text>"#,
                    at.x,
                    at.y,
                    anchor,
                    style.font_size,
                    color(style.color),
                    escape(text)
                );
            }
        }
    }
    out.push_str("</svg>\n");
    out
}

/// Write the scene to `path` as SVG.
pub fn write_svg(scene: &Scene, path: &Path) -> Result<()> {
    fs::write(path, to_svg(scene))?;
    tracing::info!(path = %path.display(), "wrote svg");
    Ok(())
}

/// `M x,y L x,y ...`; empty for an empty path.
fn path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{}{},{}", cmd, p.x, p.y);
    }
    d
}

fn color(c: Rgb) -> String {
    format!("rgb({},{},{})", c.0, c.1, c.2)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Size, StrokeStyle, TextStyle};

    fn sample_scene() -> Scene {
        let mut scene = Scene::new(Size::new(200.0, 50.0));
        let axis = StrokeStyle::new(Rgb::LIGHT_GRAY, 1.0);
        scene.add_line(Point::new(40.0, 6.0), Point::new(200.0, 6.0), axis);
        scene.add_text(
            Point::new(200.0, 16.0),
            "<max & co>",
            Anchor::End,
            TextStyle {
                color: Rgb::GRAY,
                font_size: 10.0,
            },
        );
        scene.add_path(
            vec![Point::new(40.0, 44.0), Point::new(120.0, 25.0), Point::new(200.0, 6.0)],
            StrokeStyle::new(Rgb::DARK_CYAN, 1.5),
        );
        scene
    }

    #[test]
    fn document_has_every_shape() {
        let svg = to_svg(&sample_scene());
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="50""#));
        assert!(svg.contains(r#"<line x1="40" y1="6" x2="200" y2="6""#));
        assert!(svg.contains(r#"text-anchor="end""#));
        assert!(svg.contains(r#"d="M40,44 L120,25 L200,6""#));
        assert!(svg.contains("stroke: rgb(0,139,139); stroke-width: 1.5px;"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn text_is_escaped() {
        let svg = to_svg(&sample_scene());
        assert!(svg.contains("&lt;max &amp; co&gt;"));
        assert!(!svg.contains("<max"));
    }

    #[test]
    fn empty_path_has_empty_data() {
        let mut scene = Scene::new(Size::new(10.0, 10.0));
        scene.add_path(Vec::new(), StrokeStyle::new(Rgb::DARK_CYAN, 1.5));
        assert!(to_svg(&scene).contains(r#"<path d="""#));
    }

    #[test]
    fn write_svg_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spark.svg");
        write_svg(&sample_scene(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_svg(&sample_scene()));
    }
}
