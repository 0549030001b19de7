//! Track definition: one boundary frame plus decorative paths
//!
//! The frame is the only collision boundary. It is stored unrotated in world
//! space, so the camera hitbox is brought into that frame before testing.

use serde::{Deserialize, Serialize};

use crate::geom::{Body, Camera, Point3, Polygon, Vertex};

/// One shape record as it appears in a course file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeData {
    #[serde(default)]
    pub material: Option<String>,
    pub vertices: Vec<Vertex>,
    pub position: Point3,
    pub color: String,
}

impl ShapeData {
    /// Build the polygon. Course shapes carry no physical parameters.
    ///
    /// # Panics
    ///
    /// Panics if the record has fewer than three vertices.
    pub fn into_polygon(self) -> Polygon {
        let polygon = Polygon::new(self.vertices, self.position, self.color, Body::default());
        match self.material {
            Some(material) => polygon.with_material(material),
            None => polygon,
        }
    }
}

/// A whole course file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseData {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: String,
    pub frame: ShapeData,
    #[serde(default)]
    pub paths: Vec<ShapeData>,
}

/// A loaded course. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    name: String,
    description: String,
    difficulty: String,
    frame: Polygon,
    paths: Vec<Polygon>,
}

impl Course {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        difficulty: impl Into<String>,
        frame: Polygon,
        paths: Vec<Polygon>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            difficulty: difficulty.into(),
            frame,
            paths,
        }
    }

    /// # Panics
    ///
    /// Panics if any shape has fewer than three vertices.
    pub fn from_data(data: CourseData) -> Self {
        let frame = data.frame.into_polygon();
        let paths: Vec<Polygon> = data.paths.into_iter().map(ShapeData::into_polygon).collect();
        log::info!(
            "Loaded course '{}' ({} frame vertices, {} paths)",
            data.name,
            frame.vertices().len(),
            paths.len()
        );
        Self::new(data.name, data.description, data.difficulty, frame, paths)
    }

    /// Parse a course file. Shape records must already be well formed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let data: CourseData = serde_json::from_str(json)?;
        Ok(Self::from_data(data))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn frame(&self) -> &Polygon {
        &self.frame
    }

    pub fn paths(&self) -> &[Polygon] {
        &self.paths
    }

    /// True when every hitbox vertex lies inside the frame
    pub fn is_inside_camera(&self, camera: &Camera) -> bool {
        camera
            .frame_space_vertices()
            .all(|p| self.frame.contains_point(p))
    }

    /// Correction that nudges the camera back onto the track.
    ///
    /// Zero when no hitbox vertex is outside the frame; otherwise the frame's
    /// bounding-box rebound for the vertices that are.
    pub fn rebound_vector(&self, camera: &Camera) -> Point3 {
        let outside: Vec<Point3> = camera
            .frame_space_vertices()
            .filter(|p| !self.frame.contains_point(*p))
            .collect();
        if outside.is_empty() {
            return Point3::ZERO;
        }

        let rebound = self.frame.rebound_vector(&outside);
        log::debug!(
            "Camera crossed the frame with {} vertices, rebound ({}, {})",
            outside.len(),
            rebound.x,
            rebound.y
        );
        rebound
    }
}
