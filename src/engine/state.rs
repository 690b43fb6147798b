//! Mutable engine state carried across pipeline runs.

use std::time::Instant;

use crate::capture::Side;
use crate::config::CoachConfig;
use crate::profile::GameProfile;
use crate::tips::TipCategory;

/// The one piece of state that survives between pipeline runs.
///
/// Owned by a single [`Engine`](super::Engine); nothing here is
/// process-global, so separate engines (one per test, say) cannot
/// interfere with each other.
#[derive(Debug)]
pub struct EngineState {
    /// When the last tip was actually emitted.
    pub last_emission: Option<Instant>,
    /// Category of the last emitted signal tip, for repeat suppression.
    pub last_category: Option<TipCategory>,
    /// Most recent normalized recognized text, for automatic-mode dedup.
    pub last_raw_text: String,
    /// Active game profile.
    pub profile: GameProfile,
    /// Free-text custom game name, as last typed.
    pub custom_game: String,
    /// Crop fractions currently in effect.
    pub keep_w: f64,
    pub keep_h: f64,
    /// Side preference from the settings lookup. Only consulted for
    /// custom profiles; known profiles carry their own bias.
    pub prefer_side: Option<Side>,
    /// Debounced settings lookup waiting to fire: (deadline, game name).
    pub pending_lookup: Option<(Instant, String)>,
}

impl EngineState {
    pub fn new(config: &CoachConfig) -> Self {
        Self {
            last_emission: None,
            last_category: None,
            last_raw_text: String::new(),
            profile: GameProfile::default(),
            custom_game: String::new(),
            keep_w: config.keep_width,
            keep_h: config.keep_height,
            prefer_side: None,
            pending_lookup: None,
        }
    }
}

/// Terminal status of one pipeline run.
///
/// Every run ends in exactly one of these; all of them release the
/// single-flight guard.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// A tip was forwarded to the sink.
    Emitted(TipCategory),
    /// A tip was selected but held back by cooldown or category repeat.
    Suppressed(TipCategory),
    /// Text was recognized but produced no signal and no general tip.
    NoSignal,
    /// Recognized text was identical to the previous automatic capture.
    Unchanged,
    /// Recognized text was too short to mean anything.
    NoText,
    /// No frame available from the video source.
    NoFrame,
    /// Frame smaller than the usable minimum.
    FrameTooSmall,
    /// Another run was already in flight; this trigger was dropped.
    Busy,
    /// No recognizer has been configured yet.
    RecognizerMissing,
    /// The recognizer reported an error.
    RecognitionFailed,
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunOutcome::Emitted(category) => write!(f, "tip emitted ({})", category),
            RunOutcome::Suppressed(category) => write!(f, "tip suppressed ({})", category),
            RunOutcome::NoSignal => write!(f, "no signal"),
            RunOutcome::Unchanged => write!(f, "unchanged capture"),
            RunOutcome::NoText => write!(f, "no usable text"),
            RunOutcome::NoFrame => write!(f, "no frame"),
            RunOutcome::FrameTooSmall => write!(f, "frame too small"),
            RunOutcome::Busy => write!(f, "busy"),
            RunOutcome::RecognizerMissing => write!(f, "recognizer not configured"),
            RunOutcome::RecognitionFailed => write!(f, "recognition failed"),
        }
    }
}
