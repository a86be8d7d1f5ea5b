//! # Unified Configuration System
//!
//! All tunables of the word lens overlay live here: the loupe (text search
//! area), the background mask, the word list, bounding boxes around tracked
//! words, the text style and the tablet profile.
//!
//! Defaults reproduce the stock phone layout. [`LensConfig::for_device`]
//! applies the tablet overrides when the screen is large enough.

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::foundation::math::Vec4;
use crate::overlay::style::WordStyle;

/// # Loupe Configuration
///
/// Size of the text search area as a fraction of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoupeConfig {
    /// Width as a fraction of screen width
    pub width: f32,
    /// Height as a fraction of screen height
    pub height: f32,
}

impl LoupeConfig {
    /// Create a loupe configuration
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for LoupeConfig {
    fn default() -> Self {
        Self::new(0.9, 0.5)
    }
}

/// Mask drawn over everything outside the loupe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Alpha of the black mask (0.0 - 1.0)
    pub background_alpha: f32,
}

impl MaskConfig {
    /// RGBA color of the mask
    pub fn color(&self) -> Vec4 {
        Vec4::new(0.0, 0.0, 0.0, self.background_alpha)
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            background_alpha: 0.7,
        }
    }
}

/// # Word List Configuration
///
/// Controls the text box below the loupe and how the list of translated
/// words is scaled into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordListConfig {
    /// Text box width as a fraction of screen width
    pub textbox_width: f32,
    /// Text box height as a fraction of the screen band below the loupe
    pub textbox_height: f32,
    /// Word count below which the list is laid out as if it had this many
    pub fixed_word_count: usize,
    /// Blank space between and around lines, as a fraction of a line
    pub word_padding: f32,
    /// Lower bound for the computed line height, in pixels
    pub min_line_height: f32,
}

impl WordListConfig {
    /// Set the fixed word count
    pub fn with_fixed_word_count(mut self, count: usize) -> Self {
        self.fixed_word_count = count;
        self
    }

    /// Set the line padding fraction
    pub fn with_word_padding(mut self, padding: f32) -> Self {
        self.word_padding = padding;
        self
    }

    /// Set the minimum line height
    pub fn with_min_line_height(mut self, height: f32) -> Self {
        self.min_line_height = height;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_fraction("word_list.textbox_width", self.textbox_width)?;
        check_fraction("word_list.textbox_height", self.textbox_height)?;
        if !(self.word_padding >= 0.0 && self.word_padding.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "word_list.word_padding",
                reason: format!("must be a non-negative number, got {}", self.word_padding),
            });
        }
        if !(self.min_line_height > 0.0 && self.min_line_height.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "word_list.min_line_height",
                reason: format!("must be positive, got {}", self.min_line_height),
            });
        }
        Ok(())
    }
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            textbox_width: 0.9,
            textbox_height: 0.95,
            fixed_word_count: 9,
            word_padding: 0.05,
            min_line_height: 15.0,
        }
    }
}

/// Outline drawn around each tracked word
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingBoxConfig {
    /// Line width in pixels
    pub line_width: f32,
    /// Gap between the word and the inner edge of the outline, in pixels
    pub padding: f32,
    /// Outline color (RGBA)
    pub color: Vec4,
}

impl Default for BoundingBoxConfig {
    fn default() -> Self {
        Self {
            line_width: 30.0,
            padding: 0.0,
            color: Vec4::new(1.0, 0.447, 0.0, 1.0),
        }
    }
}

/// Overrides applied on large screens
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabletProfile {
    /// Screen diagonal, in inches, from which a device counts as a tablet
    pub min_diagonal_inches: f32,
    /// Loupe used on tablets
    pub loupe: LoupeConfig,
    /// Text box width used on tablets
    pub textbox_width: f32,
    /// Fixed word count used on tablets
    pub fixed_word_count: usize,
}

impl Default for TabletProfile {
    fn default() -> Self {
        Self {
            min_diagonal_inches: 6.0,
            loupe: LoupeConfig::new(0.6, 0.1),
            textbox_width: 0.6,
            fixed_word_count: 14,
        }
    }
}

/// # Complete Lens Configuration
///
/// Top-level configuration handed to [`crate::WordLensHandler`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LensConfig {
    /// Text search area
    pub loupe: LoupeConfig,
    /// Background mask
    pub mask: MaskConfig,
    /// Word list text box and scaling
    pub word_list: WordListConfig,
    /// Outlines around tracked words
    pub bounding_box: BoundingBoxConfig,
    /// Word list text style
    pub word_style: WordStyle,
    /// Large-screen overrides
    pub tablet: TabletProfile,
}

impl LensConfig {
    /// Set the loupe configuration
    pub fn with_loupe(mut self, loupe: LoupeConfig) -> Self {
        self.loupe = loupe;
        self
    }

    /// Set the word list configuration
    pub fn with_word_list(mut self, word_list: WordListConfig) -> Self {
        self.word_list = word_list;
        self
    }

    /// Set the word style
    pub fn with_word_style(mut self, word_style: WordStyle) -> Self {
        self.word_style = word_style;
        self
    }

    /// Return the configuration to use on this device
    ///
    /// Tablets get the loupe, text box width and fixed word count of the
    /// tablet profile; everything else is unchanged.
    pub fn for_device(&self, is_tablet: bool) -> Self {
        let mut config = self.clone();
        if is_tablet {
            config.loupe = self.tablet.loupe;
            config.word_list.textbox_width = self.tablet.textbox_width;
            config.word_list.fixed_word_count = self.tablet.fixed_word_count;
        }
        config
    }
}

impl Config for LensConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        check_fraction("loupe.width", self.loupe.width)?;
        check_fraction("loupe.height", self.loupe.height)?;
        check_fraction("mask.background_alpha", self.mask.background_alpha)?;
        self.word_list.validate()?;
        if !(self.word_style.native_line_height > 0.0) {
            return Err(ConfigError::Invalid {
                field: "word_style.native_line_height",
                reason: format!("must be positive, got {}", self.word_style.native_line_height),
            });
        }
        if self.bounding_box.line_width < 0.0 || self.bounding_box.padding < 0.0 {
            return Err(ConfigError::Invalid {
                field: "bounding_box",
                reason: "line width and padding cannot be negative".to_string(),
            });
        }
        check_fraction("tablet.loupe.width", self.tablet.loupe.width)?;
        check_fraction("tablet.loupe.height", self.tablet.loupe.height)?;
        check_fraction("tablet.textbox_width", self.tablet.textbox_width)?;
        Ok(())
    }
}

fn check_fraction(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be within 0.0..=1.0, got {value}"),
        })
    }
}
