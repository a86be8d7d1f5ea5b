//! Math utilities and types
//!
//! Provides the vector, pose and rectangle types shared by tracking,
//! layout and overlay geometry.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Matrix4, Quaternion, Unit, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (also used for RGBA colors)
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a transform from translation, rotation and scale
    pub fn from_trs(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }
}

/// Axis-aligned screen rectangle, top-left origin, y pointing down
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge
    pub fn x_min(&self) -> f32 {
        self.x
    }

    /// Top edge
    pub fn y_min(&self) -> f32 {
        self.y
    }

    /// Right edge
    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner as a vector
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Whether a point lies inside the rectangle (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x_min()
            && point.x <= self.x_max()
            && point.y >= self.y_min()
            && point.y <= self.y_max()
    }
}

/// Intersect the line through `p1`-`p2` with the line through `p3`-`p4`
///
/// Parallel lines produce non-finite coordinates.
pub fn intersect_lines(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Vec2 {
    let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    let a = p1.x * p2.y - p1.y * p2.x;
    let b = p3.x * p4.y - p3.y * p4.x;
    let x = (a * (p3.x - p4.x) - (p1.x - p2.x) * b) / denom;
    let y = (a * (p3.y - p4.y) - (p1.y - p2.y) * b) / denom;
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.x_min(), 10.0);
        assert_eq!(rect.y_min(), 20.0);
        assert_eq!(rect.x_max(), 110.0);
        assert_eq!(rect.y_max(), 70.0);
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(110.0, 70.0)));
        assert!(!rect.contains(Vec2::new(9.0, 30.0)));
    }

    #[test]
    fn test_intersect_perpendicular_lines() {
        let hit = intersect_lines(
            Vec2::new(0.0, 5.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(3.0, 10.0),
        );
        assert_relative_eq!(hit, Vec2::new(3.0, 5.0), epsilon = 1e-5);
    }

    #[test]
    fn test_transform_scales_before_translating() {
        let transform = Transform::from_trs(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::identity(),
            Vec3::new(2.0, 1.0, 4.0),
        );
        let p = transform.transform_point(Point3::new(0.5, 0.0, -0.5));
        assert_relative_eq!(p, Point3::new(2.0, 2.0, 1.0), epsilon = 1e-5);
    }
}
