//! Polygon vertices tagged with the style of their outgoing edge

use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::point::Point3;

/// How the edge from a vertex to the next one is connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeStyle {
    #[default]
    #[serde(rename = "line")]
    Straight,
    #[serde(rename = "arc")]
    Arc,
}

/// A point on a shape boundary. Serialized flat as `{x, y, z, type}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(flatten)]
    pub point: Point3,
    #[serde(rename = "type", default)]
    pub edge_style: EdgeStyle,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, edge_style: EdgeStyle) -> Self {
        Self {
            point: Point3::new(x, y, z),
            edge_style,
        }
    }

    pub const fn line(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, EdgeStyle::Straight)
    }

    pub const fn arc(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, EdgeStyle::Arc)
    }

    /// Same edge style, different position
    #[inline]
    pub fn with_point(self, point: Point3) -> Self {
        Self { point, ..self }
    }

    #[inline]
    pub fn to_point(self) -> Point3 {
        self.point
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.point.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.point.y
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.point.z
    }

    #[inline]
    pub fn scaled_by(self, factor: f32) -> Self {
        self.with_point(self.point.scaled_by(factor))
    }

    #[inline]
    pub fn rotated_around(self, pivot: Point3, angle: f32) -> Self {
        self.with_point(self.point.rotated_around(pivot, angle))
    }

    #[inline]
    pub fn distance_to(self, other: Self) -> f32 {
        self.point.distance_to(other.point)
    }

    #[inline]
    pub fn is_arc(&self) -> bool {
        self.edge_style == EdgeStyle::Arc
    }
}

impl Add<Point3> for Vertex {
    type Output = Self;

    #[inline]
    fn add(self, offset: Point3) -> Self {
        self.with_point(self.point + offset)
    }
}

impl From<Vertex> for Point3 {
    fn from(v: Vertex) -> Self {
        v.point
    }
}
