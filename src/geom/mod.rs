//! Shape geometry
//!
//! Everything here is pure and allocation-light:
//! - Points and vertices are `Copy` values
//! - Polygons own immutable local-space outlines plus a mutable pose
//! - No rendering or platform dependencies

pub mod camera;
pub mod hull;
pub mod point;
pub mod polygon;
pub mod vertex;

pub use camera::Camera;
pub use hull::{Orientation, convex_hull, orientation};
pub use point::Point3;
pub use polygon::{Body, Bounds, Polygon};
pub use vertex::{EdgeStyle, Vertex};
