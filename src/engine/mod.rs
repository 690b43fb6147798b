//! Pipeline driver: the dispatch throttle and dedup state machine.
//!
//! One [`Engine`] owns all mutable coaching state. Each run crops the two
//! bottom HUD corners from the current frame, normalizes and recognizes
//! them, arbitrates between the two texts, extracts gameplay signals,
//! selects a tip and finally decides whether that tip may actually be
//! emitted. Every run ends in a [`RunOutcome`] and always releases the
//! single-flight guard.

pub mod arbitrate;
pub mod runner;
pub mod state;

pub use state::{EngineState, RunOutcome};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Local;

use crate::capture::{crop_bottom, FrameSource, Side};
use crate::config::CoachConfig;
use crate::history::TipHistory;
use crate::ocr::{preprocess, TextRecognizer};
use crate::profile::GameProfile;
use crate::settings::{self, GameSettings};
use crate::signals;
use crate::tips::{self, TipCategory};

/// Consumes engine output.
///
/// `tip` receives emitted coaching tips; display, persistent logging and
/// speech all live behind this seam. `status` receives capture status
/// lines for the UI.
pub trait TipSink {
    fn tip(&mut self, text: &str);
    fn status(&mut self, text: &str);
}

/// Clears the busy flag when a run ends, whatever path it takes out.
struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// The pipeline driver.
pub struct Engine {
    config: CoachConfig,
    state: EngineState,
    busy: Arc<AtomicBool>,
    rng: fastrand::Rng,
    recognizer: Option<Box<dyn TextRecognizer + Send>>,
    sink: Box<dyn TipSink + Send>,
    history: TipHistory,
}

impl Engine {
    /// Creates an engine with the given collaborators.
    ///
    /// `recognizer` may be `None` when text recognition is not set up
    /// yet (e.g. the backend is still being installed); runs then skip
    /// after the frame stage.
    pub fn new(
        config: CoachConfig,
        recognizer: Option<Box<dyn TextRecognizer + Send>>,
        sink: Box<dyn TipSink + Send>,
    ) -> Self {
        let state = EngineState::new(&config);
        Self {
            config,
            state,
            busy: Arc::new(AtomicBool::new(false)),
            rng: fastrand::Rng::new(),
            recognizer,
            sink,
            history: TipHistory::new(),
        }
    }

    /// Same as [`Engine::new`] but with a deterministic random source, so
    /// tests can pin tip choice and the general-tip branch.
    pub fn with_seed(
        config: CoachConfig,
        recognizer: Option<Box<dyn TextRecognizer + Send>>,
        sink: Box<dyn TipSink + Send>,
        seed: u64,
    ) -> Self {
        let mut engine = Self::new(config, recognizer, sink);
        engine.rng = fastrand::Rng::with_seed(seed);
        engine
    }

    /// Interval between automatic capture ticks.
    pub fn capture_interval(&self) -> Duration {
        Duration::from_millis(self.config.capture_interval_ms)
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn history(&self) -> &TipHistory {
        &self.history
    }

    /// Removes one tip from the history by position.
    pub fn remove_history_entry(&mut self, index: usize) {
        self.history.remove(index);
    }

    /// Drops the whole tip history.
    pub fn reset_history(&mut self) {
        self.history.clear();
    }

    /// True while a pipeline run is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Switches the active game profile.
    pub fn set_profile(&mut self, profile: GameProfile) {
        self.state.profile = profile;
        self.apply_mode_settings(profile);
        self.force_tip(&format!("Game mode set to: {}", profile.label()));
    }

    fn apply_mode_settings(&mut self, profile: GameProfile) {
        self.state.keep_w = self.config.keep_width;
        self.state.keep_h = self.config.keep_height;
        if profile != GameProfile::Custom {
            self.state.prefer_side = None;
            self.state.pending_lookup = None;
        }
    }

    /// Records a free-text custom game name and auto-detects the profile.
    ///
    /// A known match switches profiles immediately. An unknown name
    /// becomes a custom profile and schedules a debounced settings
    /// lookup; typing again before the deadline replaces the pending
    /// lookup.
    pub fn set_custom_game(&mut self, name: &str) {
        self.state.custom_game = name.to_string();
        if name.trim().is_empty() {
            return;
        }

        let detected = GameProfile::detect(name);
        self.state.profile = detected;
        self.apply_mode_settings(detected);

        if detected != GameProfile::Custom {
            self.force_tip(&format!("Auto-detected: {}", detected.label()));
            return;
        }

        self.force_tip(&format!("Custom game: {} (looking up settings...)", name));
        let deadline = Instant::now() + Duration::from_millis(self.config.lookup_debounce_ms);
        self.state.pending_lookup = Some((deadline, name.to_string()));
    }

    /// Fires the debounced settings lookup once its deadline passes.
    ///
    /// The runner calls this once per tick. A lookup failure is reported
    /// as a forced tip and leaves the rest of the engine state alone.
    pub fn poll_lookup(&mut self) {
        let Some((deadline, name)) = self.state.pending_lookup.clone() else {
            return;
        };
        if Instant::now() < deadline {
            return;
        }
        self.state.pending_lookup = None;

        match settings::fetch_game_settings(&self.config.settings_base_url, &name) {
            Ok(settings) => self.apply_game_settings(settings),
            Err(e) => {
                crate::log(&format!("settings lookup for '{}' failed: {:#}", name, e));
                self.force_tip("Could not reach the game settings service.");
            }
        }
    }

    fn apply_game_settings(&mut self, settings: GameSettings) {
        if let Some(w) = settings.keep_w {
            self.state.keep_w = w;
        }
        if let Some(h) = settings.keep_h {
            self.state.keep_h = h;
        }
        match settings.prefer_side {
            Some(side) => {
                self.state.prefer_side = Some(side);
                self.force_tip(&format!("Auto-configured: prefer {} HUD", side.label()));
            }
            None => self.force_tip("Auto-configured (no side preference)."),
        }
    }

    /// Runs one pipeline pass.
    ///
    /// Automatic ticks call this with `manual = false`. The manual
    /// "simulate" request uses `manual = true`, which bypasses cooldown
    /// and category-repeat suppression and reports problems as forced
    /// tips instead of staying silent.
    ///
    /// Refusal while another run is in flight is silent: the trigger is
    /// dropped, not queued.
    pub fn run_once(&mut self, frames: &dyn FrameSource, manual: bool) -> RunOutcome {
        if self.busy.swap(true, Ordering::SeqCst) {
            return RunOutcome::Busy;
        }
        let _busy = BusyGuard(Arc::clone(&self.busy));

        let outcome = self.pipeline(frames, manual);
        crate::log(&format!(
            "pipeline run ({}): {}",
            if manual { "manual" } else { "auto" },
            outcome
        ));
        outcome
    }

    fn pipeline(&mut self, frames: &dyn FrameSource, manual: bool) -> RunOutcome {
        let Some(frame) = frames.current_frame() else {
            self.sink.status("Waiting for video...");
            return RunOutcome::NoFrame;
        };
        if frame.width() < self.config.min_frame_dim
            || frame.height() < self.config.min_frame_dim
        {
            self.sink.status("Frame too small to read a HUD from.");
            return RunOutcome::FrameTooSmall;
        }

        self.sink
            .status(&format!("Captured at {}", Local::now().format("%H:%M:%S")));

        let right = crop_bottom(&frame, Side::Right, self.state.keep_w, self.state.keep_h);
        let left = crop_bottom(&frame, Side::Left, self.state.keep_w, self.state.keep_h);

        let right_prepped =
            preprocess::prepare(&right, self.config.upscale_factor, self.config.contrast_gain);
        let left_prepped =
            preprocess::prepare(&left, self.config.upscale_factor, self.config.contrast_gain);

        let recognized = match &self.recognizer {
            Some(recognizer) => Some((
                recognizer.recognize(&right_prepped),
                recognizer.recognize(&left_prepped),
            )),
            None => None,
        };

        let (right_text, left_text) = match recognized {
            None => {
                if manual {
                    self.force_tip("Text recognition is not set up yet.");
                }
                return RunOutcome::RecognizerMissing;
            }
            Some((Ok(right_text), Ok(left_text))) => (right_text, left_text),
            Some((Err(e), _)) | Some((_, Err(e))) => {
                crate::log(&format!("recognition failed: {:#}", e));
                if manual {
                    self.force_tip("Text recognition error, see log.");
                }
                return RunOutcome::RecognitionFailed;
            }
        };

        let chosen = arbitrate::choose_text(
            &right_text,
            &left_text,
            self.state.profile,
            self.state.prefer_side,
        );
        let text = signals::normalize_text(&chosen);

        if text.chars().count() < self.config.min_text_len {
            if manual {
                self.force_tip("No clear HUD text detected yet.");
            }
            return RunOutcome::NoText;
        }

        // Identical capture in automatic mode means nothing changed;
        // skip extraction entirely
        if !manual && text == self.state.last_raw_text {
            return RunOutcome::Unchanged;
        }
        self.state.last_raw_text = text.clone();

        let signal_set = signals::extract(&text, &self.config);
        let bank = tips::bank_for(self.state.profile);
        let chance = self
            .config
            .general_tip_chance
            .unwrap_or(bank.general_chance);

        match tips::select_from_bank(&signal_set, bank, chance, &mut self.rng) {
            Some((category, tip)) => self.dispatch(category, &tip, manual),
            None => {
                if manual {
                    self.force_tip(
                        "No HUD signal yet. Try showing HP, reload, a zone warning or an elimination.",
                    );
                }
                RunOutcome::NoSignal
            }
        }
    }

    /// Applies the cooldown and category-repeat rules to a selected tip.
    fn dispatch(&mut self, category: TipCategory, tip: &str, force: bool) -> RunOutcome {
        // The same signal re-fires every poll while the condition
        // persists; only a change of category gets through
        if !force && self.state.last_category == Some(category) {
            return RunOutcome::Suppressed(category);
        }

        let now = Instant::now();
        if !force {
            let cooldown = Duration::from_millis(self.config.tip_cooldown_ms);
            if let Some(last) = self.state.last_emission {
                if now.duration_since(last) < cooldown {
                    return RunOutcome::Suppressed(category);
                }
            }
        }

        self.state.last_emission = Some(now);
        self.state.last_category = Some(category);
        self.emit(tip);
        RunOutcome::Emitted(category)
    }

    /// Emits a system or notification tip immediately, bypassing the
    /// cooldown without touching the category-repeat state.
    fn force_tip(&mut self, text: &str) {
        self.state.last_emission = Some(Instant::now());
        self.emit(text);
    }

    fn emit(&mut self, text: &str) {
        self.history.push(text);
        self.sink.tip(text);
    }
}
