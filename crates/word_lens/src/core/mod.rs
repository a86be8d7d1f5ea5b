//! # Core Module
//!
//! Shared configuration for every part of the overlay.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration for loupe, mask, word list, bounding
//!   boxes, text style and the tablet profile

pub mod config;

// Re-export commonly used config types
pub use config::{
    BoundingBoxConfig,
    LensConfig,
    LoupeConfig,
    MaskConfig,
    TabletProfile,
    WordListConfig,
};
pub use crate::config::{Config, ConfigError, ConfigFormat};
