//! Word list scaling
//!
//! Scales the rendered word list uniformly so that every tracked word fits
//! into the text box, without letting the text size jump around while only
//! a handful of words are visible.

use crate::core::config::WordListConfig;
use crate::foundation::math::Rect;

/// Result of [`WordListLayout::compute_layout`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordListPlacement {
    /// Uniform scale to apply to the text style
    pub scale: f32,

    /// Rectangle of the first line, in unscaled text units
    pub first_line: Rect,
}

/// Layout calculator for the word list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordListLayout {
    fixed_word_count: usize,
    word_padding: f32,
    min_line_height: f32,
}

impl WordListLayout {
    /// Create a layout calculator from the word list configuration
    pub fn new(config: &WordListConfig) -> Self {
        Self {
            fixed_word_count: config.fixed_word_count,
            word_padding: config.word_padding,
            min_line_height: config.min_line_height,
        }
    }

    /// Line height in pixels for `word_count` words stacked into `region`
    ///
    /// Counts below the fixed word count are raised to it, and the result
    /// never drops below the minimum line height.
    pub fn line_height(&self, word_count: usize, region: &Rect) -> f32 {
        let count = word_count.max(self.fixed_word_count) as f32;
        let requested = region.height / (count + self.word_padding * (count + 1.0));
        requested.max(self.min_line_height)
    }

    /// Compute the scale and the first line rectangle
    ///
    /// # Arguments
    /// * `word_count` - Number of currently tracked words
    /// * `region` - Text box the whole list has to fit into
    /// * `native_line_height` - Line height of the text style at scale 1.0
    pub fn compute_layout(
        &self,
        word_count: usize,
        region: &Rect,
        native_line_height: f32,
    ) -> WordListPlacement {
        let scale = self.line_height(word_count, region) / native_line_height;

        let width = region.width / scale;
        let first_line = Rect::new(
            region.x_min() + (region.width - width) * 0.5,
            region.y_min(),
            width,
            native_line_height,
        );

        WordListPlacement { scale, first_line }
    }
}

impl Default for WordListLayout {
    fn default() -> Self {
        Self::new(&WordListConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const NATIVE: f32 = 40.0;

    fn region() -> Rect {
        Rect::new(36.0, 700.0, 648.0, 540.0)
    }

    #[test]
    fn test_small_counts_use_fixed_word_count() {
        let layout = WordListLayout::default();
        let at_zero = layout.compute_layout(0, &region(), NATIVE);
        let at_nine = layout.compute_layout(9, &region(), NATIVE);
        assert_eq!(at_zero.scale, at_nine.scale);
        assert_eq!(at_zero.first_line, at_nine.first_line);
    }

    #[test]
    fn test_line_height_formula() {
        let layout = WordListLayout::default();
        // 540 / (9 + 0.05 * 10) = 56.842...
        let expected = 540.0 / 9.5;
        assert_relative_eq!(layout.line_height(3, &region()), expected, epsilon = 1e-4);
        let placement = layout.compute_layout(3, &region(), NATIVE);
        assert_relative_eq!(placement.scale, expected / NATIVE, epsilon = 1e-5);
    }

    #[test]
    fn test_more_words_shrink_the_scale() {
        let layout = WordListLayout::default();
        let nine = layout.compute_layout(9, &region(), NATIVE).scale;
        let twenty = layout.compute_layout(20, &region(), NATIVE).scale;
        assert!(twenty < nine);
    }

    #[test]
    fn test_line_height_never_below_minimum() {
        let layout = WordListLayout::default();
        for count in [50, 500, 100_000] {
            assert!(layout.line_height(count, &region()) >= 15.0);
        }
        let placement = layout.compute_layout(100_000, &region(), NATIVE);
        assert_relative_eq!(placement.scale, 15.0 / NATIVE, epsilon = 1e-6);
    }

    #[test]
    fn test_first_line_centered_at_top() {
        let layout = WordListLayout::default();
        let r = region();
        let placement = layout.compute_layout(0, &r, NATIVE);
        let line = placement.first_line;
        assert_relative_eq!(line.width, r.width / placement.scale, epsilon = 1e-3);
        assert_relative_eq!(line.y, r.y, epsilon = 1e-6);
        assert_relative_eq!(line.height, NATIVE, epsilon = 1e-6);
        let center = line.x + line.width * 0.5;
        assert_relative_eq!(center, r.x + r.width * 0.5, epsilon = 1e-3);
    }

    #[test]
    fn test_custom_configuration() {
        let config = WordListConfig::default()
            .with_fixed_word_count(4)
            .with_word_padding(0.0)
            .with_min_line_height(1.0);
        let layout = WordListLayout::new(&config);
        assert_relative_eq!(layout.line_height(2, &Rect::new(0.0, 0.0, 10.0, 100.0)), 25.0);
    }
}
