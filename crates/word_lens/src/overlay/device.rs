//! Device class detection

use crate::host::Screen;

/// Whether the screen belongs to a tablet
///
/// Tablets usually have a screen diagonal of six inches or more. Without a
/// known pixel density the device is treated as a phone.
pub fn is_tablet(screen: &Screen, min_diagonal_inches: f32) -> bool {
    screen
        .diagonal_inches()
        .is_some_and(|diagonal| diagonal >= min_diagonal_inches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_and_tablet() {
        // 1080x1920 at 440 dpi is about 5 inches
        assert!(!is_tablet(&Screen::new(1080, 1920).with_dpi(440.0), 6.0));
        // 1536x2048 at 264 dpi is about 9.7 inches
        assert!(is_tablet(&Screen::new(1536, 2048).with_dpi(264.0), 6.0));
    }

    #[test]
    fn test_unknown_dpi_is_phone() {
        assert!(!is_tablet(&Screen::new(4000, 4000), 6.0));
        assert!(!is_tablet(&Screen::new(4000, 4000).with_dpi(0.0), 6.0));
    }
}
