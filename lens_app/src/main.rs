//! Word lens demo driving the overlay with a scripted host

mod simulator;

use log::{error, info};
use thiserror::Error;
use word_lens::foundation::logging;
use word_lens::prelude::*;

use simulator::{demo_script, ConsoleBackend, ConsoleTracker, HostEvent, PinholeProjector};

/// Demo application errors
#[derive(Error, Debug)]
enum AppError {
    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The render backend failed
    #[error("Render error: {0}")]
    Render(String),
}

struct LensDemoApp {
    handler: WordLensHandler,
    tracker: ConsoleTracker,
    backend: ConsoleBackend,
    screen: Screen,
}

impl LensDemoApp {
    fn new(config: LensConfig, screen: Screen) -> Self {
        let mut handler = WordLensHandler::new(config).with_comparator(ReadingOrder::new(0.01));
        handler.init_handler(&screen, false);
        Self {
            handler,
            tracker: ConsoleTracker::default(),
            backend: ConsoleBackend::default(),
            screen,
        }
    }

    fn run(&mut self, script: Vec<HostEvent>) -> Result<(), AppError> {
        for event in script {
            match event {
                HostEvent::Initialized => self.handler.on_initialized(&self.screen),
                HostEvent::Detected(word) => self.handler.on_word_detected(word),
                HostEvent::Lost(word) => self.handler.on_word_lost(&word),
                HostEvent::VideoBackgroundChanged(screen) => {
                    self.screen = screen;
                    self.handler.on_video_background_config_changed();
                }
                HostEvent::Frame => self.frame()?,
            }
        }
        info!(
            "Demo finished: {} frames, {} region updates, {} words tracked",
            self.backend.frames,
            self.tracker.pushes,
            self.handler.store().len()
        );
        Ok(())
    }

    fn frame(&mut self) -> Result<(), AppError> {
        self.handler.update(&mut self.tracker, &self.screen);
        let frame = self.handler.draw(&self.screen);
        let projector = PinholeProjector {
            focal_length: self.screen.w(),
            screen: self.screen,
        };
        let outlines = self.handler.render_bounding_boxes(&projector);
        submit_frame(&mut self.backend, &frame, &outlines).map_err(|e| AppError::Render(e.to_string()))
    }
}

fn load_config() -> Result<LensConfig, AppError> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading overlay config from {path}");
            Ok(LensConfig::load_from_file(&path)?)
        }
        None => Ok(LensConfig::default()),
    }
}

fn main() {
    logging::init("info");

    let screen = Screen::new(720, 1280).with_dpi(320.0);
    let result = load_config().and_then(|config| {
        let mut app = LensDemoApp::new(config, screen);
        app.run(demo_script(Screen::new(1280, 720).with_dpi(320.0)))
    });

    if let Err(e) = result {
        error!("Application error: {e}");
        std::process::exit(1);
    }
}
