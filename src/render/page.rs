//! src/render/page.rs
//!
//! A page is a registry of named containers with fixed pixel sizes. Widgets
//! query a container's size and create a surface that fills it.

use std::collections::HashMap;

use super::scene::Scene;
use crate::error::{Result, SparkError};

/// Pixel dimensions of a container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Default)]
pub struct Page {
    containers: HashMap<String, Size>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Page::insert`].
    pub fn with_container(mut self, id: &str, size: Size) -> Self {
        self.insert(id, size);
        self
    }

    /// Register (or resize) a container. Widgets already built on it keep the
    /// size they read at construction.
    pub fn insert(&mut self, id: &str, size: Size) {
        self.containers.insert(id.to_string(), size);
    }

    /// Current pixel size of the container named `id`.
    pub fn element_size(&self, id: &str) -> Result<Size> {
        self.containers
            .get(id)
            .copied()
            .ok_or_else(|| SparkError::UnknownContainer(id.to_string()))
    }

    /// Create an empty scene sized to fill the container.
    pub fn create_surface(&self, id: &str) -> Result<Scene> {
        let size = self.element_size(id)?;
        Ok(Scene::new(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_container_is_an_error() {
        let page = Page::new().with_container("pupil", Size::new(300.0, 60.0));
        assert!(page.element_size("pupil").is_ok());
        assert!(matches!(
            page.create_surface("gaze"),
            Err(SparkError::UnknownContainer(id)) if id == "gaze"
        ));
    }

    #[test]
    fn surface_fills_container() {
        let page = Page::new().with_container("pupil", Size::new(300.0, 60.0));
        let scene = page.create_surface("pupil").unwrap();
        assert_eq!(scene.size(), Size::new(300.0, 60.0));
        assert!(scene.shapes().is_empty());
    }
}
