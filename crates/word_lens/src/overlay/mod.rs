//! Overlay geometry and render data
//!
//! Architecture:
//! - loupe/mask: text search area and the mask around it
//! - word_list: the scaled, wrapped translation label
//! - bounding_box: outlines around tracked words
//! - data/backend: what gets handed to the host renderer and how

pub mod backend;
pub mod bounding_box;
pub mod data;
pub mod device;
pub mod loupe;
pub mod mask;
pub mod style;
pub mod word_list;

pub use backend::{submit_frame, OverlayRenderBackend};
pub use bounding_box::{build_bounding_box, word_screen_corners, BoundingBoxMesh};
pub use data::{OverlayFrame, RenderQuad, WordListLabel};
pub use device::is_tablet;
pub use loupe::{loupe_region, text_box_region};
pub use mask::mask_rectangles;
pub use style::{HorizontalAlign, VerticalAlign, WordStyle};
pub use word_list::word_list_label;
