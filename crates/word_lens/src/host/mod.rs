//! Host engine capabilities
//!
//! The AR host owns the camera, the text tracker and the renderer. The
//! overlay only talks to it through the traits in this module; every host
//! binding provides an adapter implementing them.

use crate::foundation::math::{Point3, Rect, Vec2};
use crate::tracking::{TrackedWord, Word};

/// Screen the overlay is drawn on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel density, if the host knows it
    pub dpi: Option<f32>,
}

impl Screen {
    /// Create a screen description
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            dpi: None,
        }
    }

    /// Set the pixel density
    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = Some(dpi);
        self
    }

    /// Width as a float
    pub fn w(&self) -> f32 {
        self.width as f32
    }

    /// Height as a float
    pub fn h(&self) -> f32 {
        self.height as f32
    }

    /// Diagonal in inches, when the pixel density is known and positive
    pub fn diagonal_inches(&self) -> Option<f32> {
        let dpi = self.dpi.filter(|dpi| *dpi > 0.0)?;
        Some((self.w() / dpi).hypot(self.h() / dpi))
    }
}

/// Text tracker commands the overlay issues
pub trait TextTracker {
    /// Restrict detection and tracking to screen-space regions
    fn set_region_of_interest(&mut self, detection: Rect, tracking: Rect);
}

/// Camera projection supplied by the host
pub trait ScreenProjector {
    /// Project a camera-space point to screen pixels
    fn world_to_screen(&self, point: Point3) -> Vec2;
}

/// Text recognition callbacks
///
/// Called serially by the host on its update thread.
pub trait TextRecoEventHandler {
    /// The text tracker finished initializing
    fn on_initialized(&mut self, screen: &Screen);

    /// A new word is being tracked
    fn on_word_detected(&mut self, word: TrackedWord);

    /// A tracked word is no longer tracked
    fn on_word_lost(&mut self, word: &Word);
}

/// Video background callbacks
pub trait VideoBackgroundEventHandler {
    /// The video background configuration changed; the region of interest
    /// has to be set again
    fn on_video_background_config_changed(&mut self);
}
