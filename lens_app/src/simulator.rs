//! Scripted stand-in for an AR host
//!
//! Replays a fixed sequence of tracker events against the handler and
//! prints each rendered frame to the console.

use log::info;
use word_lens::overlay::{BoundingBoxMesh, RenderQuad, WordListLabel};
use word_lens::prelude::*;
use word_lens::foundation::math::Point3;

/// One host notification
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// Text tracker ready
    Initialized,
    /// Word came into view
    Detected(TrackedWord),
    /// Word left the view
    Lost(Word),
    /// Video background reconfigured, e.g. after a rotation
    VideoBackgroundChanged(Screen),
    /// Render one frame
    Frame,
}

/// Tracker that only logs the regions it is given
#[derive(Default)]
pub struct ConsoleTracker {
    pub pushes: usize,
}

impl TextTracker for ConsoleTracker {
    fn set_region_of_interest(&mut self, detection: Rect, _tracking: Rect) {
        self.pushes += 1;
        info!(
            "tracker: region of interest ({:.0}, {:.0}) {:.0}x{:.0}",
            detection.x, detection.y, detection.width, detection.height
        );
    }
}

/// Simple pinhole camera looking down +z
pub struct PinholeProjector {
    pub focal_length: f32,
    pub screen: Screen,
}

impl ScreenProjector for PinholeProjector {
    fn world_to_screen(&self, point: Point3) -> Vec2 {
        let depth = point.z.max(f32::EPSILON);
        Vec2::new(
            self.screen.w() * 0.5 + self.focal_length * point.x / depth,
            self.screen.h() * 0.5 + self.focal_length * point.y / depth,
        )
    }
}

/// Backend printing what it would draw
#[derive(Default)]
pub struct ConsoleBackend {
    pub frames: usize,
}

impl OverlayRenderBackend for ConsoleBackend {
    fn begin_overlay_pass(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.frames += 1;
        println!("--- frame {} ---", self.frames);
        Ok(())
    }

    fn draw_quads(&mut self, quads: &[RenderQuad]) -> Result<(), Box<dyn std::error::Error>> {
        let alpha = quads.first().map_or(0.0, |q| q.color.w);
        println!("mask: {} quads, alpha {alpha:.2}", quads.len());
        Ok(())
    }

    fn draw_label(&mut self, label: &WordListLabel) -> Result<(), Box<dyn std::error::Error>> {
        println!("word list (scale {:.2}):", label.scale);
        for line in label.text.lines() {
            println!("  |{line}");
        }
        Ok(())
    }

    fn draw_bounding_boxes(
        &mut self,
        meshes: &[BoundingBoxMesh],
    ) -> Result<(), Box<dyn std::error::Error>> {
        for mesh in meshes {
            let inner = mesh.vertices[0];
            let outer = mesh.vertices[4];
            println!(
                "outline: inner ({:.0}, {:.0}) outer ({:.0}, {:.0})",
                inner.x, inner.y, outer.x, outer.y
            );
        }
        Ok(())
    }

    fn end_overlay_pass(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn word(id: u64, text: &str, x: f32, y: f32) -> TrackedWord {
    TrackedWord::new(
        Word::new(WordId(id), text, Vec2::new(0.08, 0.02)),
        WordPose::new(Vec3::new(x, y, 0.5), Quat::identity()),
    )
}

/// The demo script: a short sentence scrolls through the loupe
pub fn demo_script(rotated: Screen) -> Vec<HostEvent> {
    vec![
        HostEvent::Initialized,
        HostEvent::Frame,
        HostEvent::Detected(word(1, "The", -0.2, 0.0)),
        HostEvent::Detected(word(2, "friend", 0.0, 0.0)),
        HostEvent::Detected(word(3, "drinks", 0.2, 0.0)),
        HostEvent::Detected(word(4, "water", 0.0, 0.05)),
        HostEvent::Frame,
        // The host occasionally repeats itself; the handler logs and moves on
        HostEvent::Detected(word(2, "friend", 0.0, 0.0)),
        HostEvent::Lost(word(1, "The", -0.2, 0.0).word),
        HostEvent::Lost(word(9, "ghost", 0.0, 0.0).word),
        HostEvent::Detected(word(5, "supercalifragilistic", -0.2, 0.1)),
        HostEvent::VideoBackgroundChanged(rotated),
        HostEvent::Frame,
    ]
}
