//! # Word Lens
//!
//! Live word tracking and translation overlay for augmented-reality text
//! recognition hosts.
//!
//! ## Features
//!
//! - **Word Tracking**: Sorted set of the words the host currently tracks
//! - **Word List Layout**: Uniform scaling so the whole list fits on screen
//! - **Line Wrapping**: Greedy wrapping of the translated list
//! - **Translation**: Toy word-by-word English to Spanish substitution
//! - **Overlay Geometry**: Loupe, background mask and word outlines
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use word_lens::prelude::*;
//!
//! struct NullTracker;
//!
//! impl TextTracker for NullTracker {
//!     fn set_region_of_interest(&mut self, _detection: Rect, _tracking: Rect) {}
//! }
//!
//! let screen = Screen::new(720, 1280);
//! let mut handler = WordLensHandler::new(LensConfig::default());
//! handler.init_handler(&screen, false);
//! handler.on_initialized(&screen);
//!
//! let word = Word::new(WordId(1), "hello", Vec2::new(0.1, 0.02));
//! handler.on_word_detected(TrackedWord::new(word, WordPose::default()));
//!
//! handler.update(&mut NullTracker, &screen);
//! let frame = handler.draw(&screen);
//! assert_eq!(frame.word_list.unwrap().text, " Hola");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Shared configuration
pub mod core;
pub mod config;

pub mod foundation;
pub mod tracking;
pub mod layout;
pub mod translate;
pub mod overlay;
pub mod host;

mod handler;

#[cfg(test)]
mod tests;

pub use handler::WordLensHandler;

/// Common imports for host adapters
pub mod prelude {
    pub use crate::{
        WordLensHandler,
        core::config::{LensConfig, LoupeConfig, WordListConfig},
        config::{Config, ConfigError},
        foundation::math::{Quat, Rect, Vec2, Vec3, Vec4},
        host::{
            Screen, ScreenProjector, TextRecoEventHandler, TextTracker,
            VideoBackgroundEventHandler,
        },
        layout::{GreedyLineWrapper, WordListLayout, WordListPlacement},
        overlay::{submit_frame, BoundingBoxMesh, OverlayFrame, OverlayRenderBackend},
        tracking::{
            ReadingOrder, TrackedWord, TrackingError, Word, WordComparator, WordId, WordPose,
            WordStore,
        },
        translate::TranslationTable,
    };
}
