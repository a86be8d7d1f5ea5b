//! Backend-agnostic overlay rendering data

use crate::foundation::math::{Rect, Vec2, Vec4};
use crate::overlay::style::WordStyle;

/// Everything the overlay draws in one frame, except word outlines
///
/// The handler produces this structure; the host renderer consumes it
/// without knowing anything about tracking or translation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayFrame {
    /// Semi-transparent quads masking the screen outside the loupe
    pub mask: Vec<RenderQuad>,

    /// Translated word list, once the loupe is known
    pub word_list: Option<WordListLabel>,
}

impl OverlayFrame {
    /// Create an empty frame with nothing to draw
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Solid color quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderQuad {
    /// Screen rectangle (pixels from top-left)
    pub rect: Rect,

    /// Color (RGBA)
    pub color: Vec4,
}

/// Scaled text label holding the wrapped word list
#[derive(Debug, Clone, PartialEq)]
pub struct WordListLabel {
    /// Label rectangle before scaling
    pub rect: Rect,

    /// Text, with embedded line breaks
    pub text: String,

    /// Uniform scale applied around [`Self::pivot`]
    pub scale: f32,

    /// Pivot of the scale, in screen pixels
    pub pivot: Vec2,

    /// Text style
    pub style: WordStyle,
}
