//! Outlines around tracked words
//!
//! Each tracked word is outlined by a screen-space ring of four quads. The
//! word's corners are projected to the screen, pushed outwards by the
//! configured padding to get the inner edge of the ring, and by the line
//! width on top of that to get the outer edge.

use crate::core::config::BoundingBoxConfig;
use crate::foundation::math::{intersect_lines, Point3, Vec2, Vec4};
use crate::host::ScreenProjector;
use crate::tracking::TrackedWord;

/// Corners of the unit quad in the word's local x/z plane
const UNIT_QUAD: [[f32; 3]; 4] = [
    [-0.5, 0.0, -0.5],
    [0.5, 0.0, -0.5],
    [0.5, 0.0, 0.5],
    [-0.5, 0.0, 0.5],
];

/// Triangle list over the ring vertices: inner corners 0-3, outer 4-7
pub const RING_INDICES: [u32; 24] = [
    0, 5, 4, 1, 5, 0, //
    1, 6, 5, 2, 6, 1, //
    2, 7, 6, 3, 7, 2, //
    3, 4, 7, 0, 4, 3,
];

/// Screen-space outline mesh for one word
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBoxMesh {
    /// Inner corners followed by outer corners, in screen pixels
    pub vertices: [Vec2; 8],

    /// Outline color (RGBA)
    pub color: Vec4,
}

impl BoundingBoxMesh {
    /// Triangle indices into [`Self::vertices`]
    pub fn indices(&self) -> &'static [u32; 24] {
        &RING_INDICES
    }
}

/// Project the corners of a tracked word to the screen
pub fn word_screen_corners(word: &TrackedWord, projector: &dyn ScreenProjector) -> [Vec2; 4] {
    let transform = word.quad_transform();
    UNIT_QUAD.map(|[x, y, z]| projector.world_to_screen(transform.transform_point(Point3::new(x, y, z))))
}

/// Unit normal of every edge `i -> i + 1`, rotated clockwise
pub fn edge_normals(corners: &[Vec2; 4]) -> [Vec2; 4] {
    std::array::from_fn(|i| {
        let direction = (corners[(i + 1) % 4] - corners[i]).normalize();
        Vec2::new(direction.y, -direction.x)
    })
}

/// Move every edge outwards along its normal and return the new corners
pub fn extend_corners(corners: &[Vec2; 4], normals: &[Vec2; 4], extension: f32) -> [Vec2; 4] {
    let shifted: [(Vec2, Vec2); 4] = std::array::from_fn(|i| {
        let offset = normals[i] * extension;
        (corners[i] + offset, corners[(i + 1) % 4] + offset)
    });

    let mut extended = [Vec2::zeros(); 4];
    for i in 0..4 {
        let (a0, a1) = shifted[i];
        let (b0, b1) = shifted[(i + 1) % 4];
        extended[(i + 1) % 4] = intersect_lines(a0, a1, b0, b1);
    }
    extended
}

/// Build the outline mesh for a quad given by its screen corners
pub fn build_bounding_box(corners: &[Vec2; 4], config: &BoundingBoxConfig) -> BoundingBoxMesh {
    let normals = edge_normals(corners);
    let inner = extend_corners(corners, &normals, config.padding);
    let outer = extend_corners(&inner, &normals, config.line_width);

    let mut vertices = [Vec2::zeros(); 8];
    vertices[..4].copy_from_slice(&inner);
    vertices[4..].copy_from_slice(&outer);

    BoundingBoxMesh {
        vertices,
        color: config.color,
    }
}
