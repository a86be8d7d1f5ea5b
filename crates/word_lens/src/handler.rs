//! Text recognition event handler
//!
//! Ties the word store, the word list layout and the translation table to
//! the host's lifecycle callbacks.

use log::{debug, error, info};

use crate::core::config::LensConfig;
use crate::foundation::math::Rect;
use crate::host::{
    Screen, ScreenProjector, TextRecoEventHandler, TextTracker, VideoBackgroundEventHandler,
};
use crate::overlay::{
    build_bounding_box, is_tablet, loupe_region, mask_rectangles, word_list_label,
    word_screen_corners, BoundingBoxMesh, OverlayFrame, RenderQuad,
};
use crate::tracking::{TrackedWord, Word, WordComparator, WordStore};
use crate::translate::TranslationTable;

/// Overlay state driven by host callbacks
///
/// The host calls, in order: [`init_handler`](Self::init_handler) once,
/// then the event callbacks as they happen, and every frame
/// [`update`](Self::update), [`draw`](Self::draw) and
/// [`render_bounding_boxes`](Self::render_bounding_boxes).
pub struct WordLensHandler {
    base_config: LensConfig,
    config: LensConfig,
    store: WordStore,
    table: TranslationTable,
    loupe: Rect,
    is_tablet: bool,
    is_initialized: bool,
    video_background_changed: bool,
}

impl WordLensHandler {
    /// Create a handler with the built-in translation table
    pub fn new(config: LensConfig) -> Self {
        Self {
            config: config.clone(),
            base_config: config,
            store: WordStore::new(),
            table: TranslationTable::english_to_spanish(),
            loupe: Rect::default(),
            is_tablet: false,
            is_initialized: false,
            video_background_changed: false,
        }
    }

    /// Use a different translation table
    pub fn with_translation_table(mut self, table: TranslationTable) -> Self {
        self.table = table;
        self
    }

    /// Use a different ordering for the word list
    ///
    /// Words already tracked are dropped.
    pub fn with_comparator(mut self, comparator: impl WordComparator + 'static) -> Self {
        self.store = WordStore::with_comparator(comparator);
        self
    }

    /// Pick the device profile for `screen`
    ///
    /// The tablet profile is never used in editor play mode, where the
    /// screen is a window on a desktop monitor.
    pub fn init_handler(&mut self, screen: &Screen, play_mode: bool) {
        self.is_tablet =
            !play_mode && is_tablet(screen, self.base_config.tablet.min_diagonal_inches);
        self.config = self.base_config.for_device(self.is_tablet);
        info!(
            "Word lens initialized for {}x{} ({})",
            screen.width,
            screen.height,
            if self.is_tablet { "tablet" } else { "phone" }
        );
    }

    /// Per-frame update
    ///
    /// Once the tracker is initialized, pushes a fresh region of interest
    /// whenever the video background changed since the last push. Returns
    /// whether a region was pushed.
    pub fn update(&mut self, tracker: &mut dyn TextTracker, screen: &Screen) -> bool {
        if !(self.is_initialized && self.video_background_changed) {
            return false;
        }

        self.loupe = loupe_region(screen, &self.config.loupe);
        tracker.set_region_of_interest(self.loupe, self.loupe);
        debug!("Region of interest set to {:?}", self.loupe);
        self.video_background_changed = false;
        true
    }

    /// Mask and word list for this frame
    ///
    /// Nothing is drawn before the tracker has initialized.
    pub fn draw(&self, screen: &Screen) -> OverlayFrame {
        if !self.is_initialized {
            return OverlayFrame::empty();
        }

        let color = self.config.mask.color();
        let mask = mask_rectangles(screen, &self.loupe)
            .into_iter()
            .map(|rect| RenderQuad { rect, color })
            .collect();

        let label = word_list_label(
            screen,
            &self.loupe,
            &self.config.word_list,
            &self.config.word_style,
            &self.store,
            &self.table,
        );

        OverlayFrame {
            mask,
            word_list: Some(label),
        }
    }

    /// Outline meshes for every tracked word
    pub fn render_bounding_boxes(&self, projector: &dyn ScreenProjector) -> Vec<BoundingBoxMesh> {
        self.store
            .iter()
            .map(|word| {
                let corners = word_screen_corners(word, projector);
                build_bounding_box(&corners, &self.config.bounding_box)
            })
            .collect()
    }

    /// Tracked words in list order
    pub fn store(&self) -> &WordStore {
        &self.store
    }

    /// Translation table in use
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Effective configuration after the device profile was applied
    pub fn config(&self) -> &LensConfig {
        &self.config
    }

    /// Current text search area
    pub fn loupe(&self) -> Rect {
        self.loupe
    }

    /// Whether the tablet profile is active
    pub fn is_tablet(&self) -> bool {
        self.is_tablet
    }

    /// Whether the tracker reported initialization
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }
}

impl TextRecoEventHandler for WordLensHandler {
    fn on_initialized(&mut self, screen: &Screen) {
        self.loupe = loupe_region(screen, &self.config.loupe);
        self.is_initialized = true;
        self.video_background_changed = true;
    }

    fn on_word_detected(&mut self, word: TrackedWord) {
        info!("Text: New word: {} ({})", word.word.string_value, word.id());
        if let Err(e) = self.store.insert(word) {
            error!("{e}");
        }
    }

    fn on_word_lost(&mut self, word: &Word) {
        info!("Text: Lost word: {} ({})", word.string_value, word.id);
        if let Err(e) = self.store.remove(word.id) {
            error!("{e}");
        }
    }
}

impl VideoBackgroundEventHandler for WordLensHandler {
    fn on_video_background_config_changed(&mut self) {
        self.video_background_changed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Quat, Vec2, Vec3};
    use crate::tracking::{WordId, WordPose};

    #[derive(Default)]
    struct RecordingTracker {
        regions: Vec<(Rect, Rect)>,
    }

    impl TextTracker for RecordingTracker {
        fn set_region_of_interest(&mut self, detection: Rect, tracking: Rect) {
            self.regions.push((detection, tracking));
        }
    }

    fn tracked(id: u64, text: &str, x: f32) -> TrackedWord {
        TrackedWord::new(
            Word::new(WordId(id), text, Vec2::new(1.0, 0.25)),
            WordPose::new(Vec3::new(x, 0.0, 0.0), Quat::identity()),
        )
    }

    #[test]
    fn test_no_region_before_initialization() {
        let screen = Screen::new(720, 1280);
        let mut handler = WordLensHandler::new(LensConfig::default());
        let mut tracker = RecordingTracker::default();
        handler.on_video_background_config_changed();
        assert!(!handler.update(&mut tracker, &screen));
        assert!(tracker.regions.is_empty());
        assert_eq!(handler.draw(&screen), OverlayFrame::empty());
    }

    #[test]
    fn test_region_pushed_once_per_change() {
        let screen = Screen::new(720, 1280);
        let mut handler = WordLensHandler::new(LensConfig::default());
        let mut tracker = RecordingTracker::default();
        handler.on_initialized(&screen);
        assert!(handler.update(&mut tracker, &screen));
        assert!(!handler.update(&mut tracker, &screen));
        handler.on_video_background_config_changed();
        let rotated = Screen::new(1280, 720);
        assert!(handler.update(&mut tracker, &rotated));
        assert_eq!(tracker.regions.len(), 2);
        let (detection, tracking) = tracker.regions[1];
        assert_eq!(detection, tracking);
        assert_eq!(detection, loupe_region(&rotated, &LensConfig::default().loupe));
    }

    #[test]
    fn test_duplicate_and_unknown_events_are_ignored() {
        let mut handler = WordLensHandler::new(LensConfig::default());
        handler.on_word_detected(tracked(1, "hello", 0.0));
        handler.on_word_detected(tracked(1, "hello", 5.0));
        assert_eq!(handler.store().len(), 1);
        handler.on_word_lost(&Word::new(WordId(42), "ghost", Vec2::zeros()));
        assert_eq!(handler.store().len(), 1);
        handler.on_word_lost(&tracked(1, "hello", 0.0).word);
        assert!(handler.store().is_empty());
    }

    #[test]
    fn test_tablet_profile_skipped_in_play_mode() {
        let tablet = Screen::new(1536, 2048).with_dpi(264.0);
        let mut handler = WordLensHandler::new(LensConfig::default());
        handler.init_handler(&tablet, true);
        assert!(!handler.is_tablet());
        assert_eq!(handler.config().word_list.fixed_word_count, 9);
        handler.init_handler(&tablet, false);
        assert!(handler.is_tablet());
        assert_eq!(handler.config().word_list.fixed_word_count, 14);
    }

    #[test]
    fn test_draw_masks_around_loupe() {
        let screen = Screen::new(720, 1280);
        let mut handler = WordLensHandler::new(LensConfig::default());
        handler.on_initialized(&screen);
        handler.on_word_detected(tracked(1, "hello", 0.0));
        let frame = handler.draw(&screen);
        assert_eq!(frame.mask.len(), 4);
        assert!(frame.mask.iter().all(|q| q.color.w == 0.7));
        assert_eq!(frame.word_list.unwrap().text, " Hola");
    }
}
