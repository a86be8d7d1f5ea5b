//! Overlay Render Backend Trait
//!
//! Defines the interface between the overlay and the host renderer.
//! Keeps the overlay independent of the host's GUI and mesh APIs.

use crate::overlay::bounding_box::BoundingBoxMesh;
use crate::overlay::data::{OverlayFrame, RenderQuad, WordListLabel};

/// Host renderer interface
pub trait OverlayRenderBackend {
    /// Begin an overlay pass
    fn begin_overlay_pass(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Draw solid color quads
    fn draw_quads(&mut self, quads: &[RenderQuad]) -> Result<(), Box<dyn std::error::Error>>;

    /// Draw the scaled word list label
    fn draw_label(&mut self, label: &WordListLabel) -> Result<(), Box<dyn std::error::Error>>;

    /// Draw word outlines
    fn draw_bounding_boxes(
        &mut self,
        meshes: &[BoundingBoxMesh],
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// End the overlay pass
    fn end_overlay_pass(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}

/// Submit a frame and its outlines to a backend in one pass
pub fn submit_frame(
    backend: &mut dyn OverlayRenderBackend,
    frame: &OverlayFrame,
    outlines: &[BoundingBoxMesh],
) -> Result<(), Box<dyn std::error::Error>> {
    backend.begin_overlay_pass()?;
    if !frame.mask.is_empty() {
        backend.draw_quads(&frame.mask)?;
    }
    if let Some(label) = &frame.word_list {
        backend.draw_label(label)?;
    }
    if !outlines.is_empty() {
        backend.draw_bounding_boxes(outlines)?;
    }
    backend.end_overlay_pass()
}
