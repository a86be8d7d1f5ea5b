//! Loupe and text box regions

use crate::core::config::{LoupeConfig, WordListConfig};
use crate::foundation::math::Rect;
use crate::host::Screen;

/// Screen area searched for text
///
/// Horizontally centered; the top margin equals the side margin.
pub fn loupe_region(screen: &Screen, loupe: &LoupeConfig) -> Rect {
    let width = loupe.width * screen.w();
    let height = loupe.height * screen.h();
    let left = (screen.w() - width) * 0.5;
    Rect::new(left, left, width, height)
}

/// Text box for the word list, in the band below the loupe
///
/// Centered horizontally and vertically within that band.
pub fn text_box_region(screen: &Screen, loupe: &Rect, word_list: &WordListConfig) -> Rect {
    let width = screen.w() * word_list.textbox_width;
    let height = (screen.h() - loupe.y_max()) * word_list.textbox_height;
    let left = (screen.w() - width) * 0.5;
    let top = loupe.y_max() + (screen.h() - (height + loupe.y_max())) * 0.5;
    Rect::new(left, top, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_loupe_region_default_phone() {
        let screen = Screen::new(720, 1280);
        let rect = loupe_region(&screen, &LoupeConfig::default());
        assert_relative_eq!(rect.width, 648.0, epsilon = 1e-3);
        assert_relative_eq!(rect.height, 640.0, epsilon = 1e-3);
        assert_relative_eq!(rect.x, 36.0, epsilon = 1e-3);
        assert_relative_eq!(rect.y, 36.0, epsilon = 1e-3);
    }

    #[test]
    fn test_text_box_below_loupe() {
        let screen = Screen::new(720, 1280);
        let loupe = Rect::new(36.0, 36.0, 648.0, 640.0);
        let text_box = text_box_region(&screen, &loupe, &WordListConfig::default());
        // band below the loupe is 1280 - 676 = 604 pixels
        assert_relative_eq!(text_box.height, 604.0 * 0.95, epsilon = 1e-3);
        assert_relative_eq!(text_box.width, 648.0, epsilon = 1e-3);
        assert_relative_eq!(text_box.x, 36.0, epsilon = 1e-3);
        assert_relative_eq!(text_box.y, 676.0 + 604.0 * 0.025, epsilon = 1e-3);
        assert!(text_box.y_max() <= 1280.0);
    }
}
