//! Immutable 3D coordinate value
//!
//! Only x and y take part in planar geometry. z is carried through every
//! operation so course data round-trips, but it is never projected.

use std::ops::{Add, Mul, Neg, Sub};

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A point (or offset) in world or render space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Uniform scale of all three coordinates
    #[inline]
    pub fn scaled_by(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Planar (x, y) distance to another point
    #[inline]
    pub fn distance_to(self, other: Self) -> f32 {
        self.xy().distance(other.xy())
    }

    /// Signed horizontal leg from this point to `other`
    #[inline]
    pub fn base_to(self, other: Self) -> f32 {
        other.x - self.x
    }

    /// Rotate (x, y) about `pivot` by `angle` radians, z unchanged
    pub fn rotated_around(self, pivot: Self, angle: f32) -> Self {
        let rotated = Vec2::from_angle(angle).rotate(self.xy() - pivot.xy()) + pivot.xy();
        Self::new(rotated.x, rotated.y, self.z)
    }

    /// Drop z
    #[inline]
    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Vec3::from(self).min(Vec3::from(other)).into()
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Vec3::from(self).max(Vec3::from(other)).into()
    }
}

impl Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Point3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f32) -> Self {
        self.scaled_by(factor)
    }
}

impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for Vec3 {
    fn from(p: Point3) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}
