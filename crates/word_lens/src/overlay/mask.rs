//! Mask covering everything outside the loupe

use crate::foundation::math::Rect;
use crate::host::Screen;

/// Four rectangles covering the screen around `hole`
///
/// Left and right strips span the full height; top and bottom pieces fill
/// the space between them.
pub fn mask_rectangles(screen: &Screen, hole: &Rect) -> [Rect; 4] {
    [
        Rect::new(0.0, 0.0, hole.x_min(), screen.h()),
        Rect::new(hole.x_min(), 0.0, hole.width, hole.y_min()),
        Rect::new(hole.x_min(), hole.y_max(), hole.width, screen.h() - hole.y_max()),
        Rect::new(hole.x_max(), 0.0, screen.w() - hole.x_max(), screen.h()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_area_complements_hole() {
        let screen = Screen::new(800, 600);
        let hole = Rect::new(40.0, 40.0, 720.0, 300.0);
        let rects = mask_rectangles(&screen, &hole);
        let covered: f32 = rects.iter().map(|r| r.width * r.height).sum();
        assert_eq!(covered + hole.width * hole.height, 800.0 * 600.0);
        assert_eq!(rects[2], Rect::new(40.0, 340.0, 720.0, 260.0));
        assert_eq!(rects[3], Rect::new(760.0, 0.0, 40.0, 600.0));
    }
}
