//! Integration tests for a full overlay session
//!
//! A scripted host initializes the handler, reports words coming and going,
//! changes its video background, and renders frames through a recording
//! backend.

use std::cmp::Ordering;

use crate::core::config::{LensConfig, WordListConfig};
use crate::foundation::math::{Point3, Quat, Rect, Vec2, Vec3};
use crate::host::{
    Screen, ScreenProjector, TextRecoEventHandler, TextTracker, VideoBackgroundEventHandler,
};
use crate::overlay::{submit_frame, BoundingBoxMesh, OverlayRenderBackend, RenderQuad, WordListLabel};
use crate::tracking::{TrackedWord, Word, WordId, WordPose};
use crate::translate::TranslationTable;
use crate::WordLensHandler;

#[derive(Default)]
struct MockTracker {
    regions: Vec<Rect>,
}

impl TextTracker for MockTracker {
    fn set_region_of_interest(&mut self, detection: Rect, _tracking: Rect) {
        self.regions.push(detection);
    }
}

/// Pinhole-free projection: camera x/y map straight to pixels
struct FlatProjector;

impl ScreenProjector for FlatProjector {
    fn world_to_screen(&self, point: Point3) -> Vec2 {
        Vec2::new(point.x, point.z)
    }
}

#[derive(Default)]
struct RecordingBackend {
    calls: Vec<&'static str>,
    quads: usize,
    labels: Vec<String>,
    outlines: usize,
}

impl OverlayRenderBackend for RecordingBackend {
    fn begin_overlay_pass(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.calls.push("begin");
        Ok(())
    }

    fn draw_quads(&mut self, quads: &[RenderQuad]) -> Result<(), Box<dyn std::error::Error>> {
        self.calls.push("quads");
        self.quads += quads.len();
        Ok(())
    }

    fn draw_label(&mut self, label: &WordListLabel) -> Result<(), Box<dyn std::error::Error>> {
        self.calls.push("label");
        self.labels.push(label.text.clone());
        Ok(())
    }

    fn draw_bounding_boxes(
        &mut self,
        meshes: &[BoundingBoxMesh],
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.calls.push("boxes");
        self.outlines += meshes.len();
        Ok(())
    }

    fn end_overlay_pass(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.calls.push("end");
        Ok(())
    }
}

fn word(id: u64, text: &str, x: f32, y: f32) -> TrackedWord {
    TrackedWord::new(
        Word::new(WordId(id), text, Vec2::new(40.0, 12.0)),
        WordPose::new(Vec3::new(x, y, 0.0), Quat::identity()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_session() {
        let screen = Screen::new(720, 1280);
        let mut tracker = MockTracker::default();
        let mut backend = RecordingBackend::default();
        let mut handler = WordLensHandler::new(LensConfig::default());

        handler.init_handler(&screen, false);
        handler.on_initialized(&screen);
        handler.update(&mut tracker, &screen);
        assert_eq!(tracker.regions.len(), 1);

        handler.on_word_detected(word(10, "dog", 300.0, 0.0));
        handler.on_word_detected(word(11, "the", 100.0, 0.0));
        handler.on_word_detected(word(12, "barks", 500.0, 0.0));
        handler.on_word_lost(&word(10, "dog", 300.0, 0.0).word);

        let frame = handler.draw(&screen);
        let outlines = handler.render_bounding_boxes(&FlatProjector);
        submit_frame(&mut backend, &frame, &outlines).unwrap();

        assert_eq!(backend.calls, vec!["begin", "quads", "label", "boxes", "end"]);
        assert_eq!(backend.quads, 4);
        assert_eq!(backend.outlines, 2);
        assert_eq!(backend.labels, vec![" el barkso".to_string()]);

        let rotated = Screen::new(1280, 720);
        handler.on_video_background_config_changed();
        handler.update(&mut tracker, &rotated);
        assert_eq!(tracker.regions.len(), 2);
        assert_eq!(tracker.regions[1], handler.loupe());
        assert_eq!(tracker.regions[1].width, 1280.0 * 0.9);
    }

    #[test]
    fn test_scale_stable_until_fixed_word_count() {
        let screen = Screen::new(720, 1280);
        let mut handler = WordLensHandler::new(LensConfig::default());
        handler.on_initialized(&screen);

        let scale_of = |handler: &WordLensHandler| handler.draw(&screen).word_list.unwrap().scale;
        let empty_scale = scale_of(&handler);

        for id in 0..9 {
            handler.on_word_detected(word(id, "a", id as f32, 0.0));
            assert_eq!(scale_of(&handler), empty_scale);
        }
        handler.on_word_detected(word(9, "a", 9.0, 0.0));
        assert!(scale_of(&handler) < empty_scale);
    }

    #[test]
    fn test_custom_ordering_and_table() {
        let screen = Screen::new(400, 800);
        let by_id_desc = |a: &TrackedWord, b: &TrackedWord| b.id().cmp(&a.id());
        let mut handler = WordLensHandler::new(LensConfig::default())
            .with_comparator(by_id_desc)
            .with_translation_table(TranslationTable::from_pairs([("one", "uno"), ("two", "dos")]));
        handler.on_initialized(&screen);
        handler.on_word_detected(word(1, "One", 0.0, 0.0));
        handler.on_word_detected(word(2, "Two", 0.0, 0.0));
        handler.on_word_detected(word(3, "Three", 0.0, 0.0));

        let ids: Vec<u64> = handler.store().iter().map(|w| w.id().0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(by_id_desc(&word(1, "", 0.0, 0.0), &word(2, "", 0.0, 0.0)), Ordering::Greater);
        assert_eq!(handler.draw(&screen).word_list.unwrap().text, " threeo dos uno");
    }

    #[test]
    fn test_long_list_wraps_to_half_screen_columns() {
        // 20 pixels wide screen wraps at 10 columns
        let screen = Screen::new(20, 400);
        let config = LensConfig::default()
            .with_word_list(WordListConfig::default().with_min_line_height(1.0));
        let mut handler = WordLensHandler::new(config);
        handler.on_initialized(&screen);
        for (i, text) in ["hello", "friend", "water"].iter().enumerate() {
            handler.on_word_detected(word(i as u64, text, i as f32, 0.0));
        }
        let label = handler.draw(&screen).word_list.unwrap();
        assert_eq!(label.text, " Hola\namigo agua");
    }
}
