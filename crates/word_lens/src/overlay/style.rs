//! Text style for the word list label

use crate::foundation::math::Vec4;
use serde::{Deserialize, Serialize};

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalAlign {
    /// Left-aligned text
    Left,
    /// Center-aligned text
    Center,
    /// Right-aligned text
    Right,
}

/// Vertical text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalAlign {
    /// Top-aligned text
    Top,
    /// Middle-aligned text
    Middle,
    /// Bottom-aligned text
    Bottom,
}

/// Style the host renderer uses for the translated word list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordStyle {
    /// Font resource name resolved by the host
    pub font: String,

    /// Text color (RGBA)
    pub color: Vec4,

    /// Horizontal alignment within the label rectangle
    pub h_align: HorizontalAlign,

    /// Vertical alignment within the label rectangle
    pub v_align: VerticalAlign,

    /// Line height of the font at scale 1.0, in pixels
    ///
    /// This is a property of the loaded font; host adapters should replace
    /// the default with the measured value.
    pub native_line_height: f32,
}

impl Default for WordStyle {
    fn default() -> Self {
        Self {
            font: "SourceSansPro-Regular_big".to_string(),
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            h_align: HorizontalAlign::Center,
            v_align: VerticalAlign::Top,
            native_line_height: 48.0,
        }
    }
}
