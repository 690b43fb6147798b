//! HUD coaching engine.
//!
//! Periodically reads HUD text from the bottom corners of a live game
//! frame, converts recognized text into discrete gameplay signals (low
//! health, reload, hazard zone, elimination, victory) and dispatches
//! coaching tips from per-game tip banks.
//!
//! Video acquisition, text recognition and tip output are injected
//! collaborators: the host supplies a [`FrameSource`], a
//! [`TextRecognizer`](ocr::TextRecognizer) (a Tesseract-backed one is
//! provided) and a [`TipSink`](engine::TipSink). The engine owns all
//! decision logic in between.

pub mod capture;
pub mod config;
pub mod engine;
pub mod history;
pub mod logging;
pub mod ocr;
pub mod paths;
pub mod profile;
pub mod settings;
pub mod signals;
pub mod tips;

pub use capture::{FrameSource, Side};
pub use config::CoachConfig;
pub use engine::runner::CoachRunner;
pub use engine::{Engine, RunOutcome, TipSink};
pub use logging::log;
pub use profile::GameProfile;
pub use signals::SignalSet;
pub use tips::TipCategory;
