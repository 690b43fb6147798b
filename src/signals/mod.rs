//! Gameplay signal extraction from recognized HUD text.
//!
//! All detectors are keyword and numeric heuristics over uppercased,
//! whitespace-collapsed text. They are independent boolean tests; the tip
//! selector is what imposes priority between them.

use regex::Regex;
use std::sync::OnceLock;

use crate::config::CoachConfig;

/// Discrete gameplay conditions read from one HUD text capture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignalSet {
    /// Numeric health reading, when one was found in range.
    pub health: Option<u32>,
    pub low_health: bool,
    pub critical_health: bool,
    pub reload: bool,
    pub hazard_zone: bool,
    pub eliminated: bool,
    pub victory: bool,
}

const RELOAD_KEYWORDS: &[&str] = &["RELOAD", "OUT OF AMMO", "NO AMMO", "AMMO"];
const HAZARD_KEYWORDS: &[&str] = &["STORM", "CIRCLE", "SAFE ZONE", "ZONE"];
const ELIMINATED_KEYWORDS: &[&str] = &["ELIMINATED", "YOU DIED", "DEFEAT"];
const VICTORY_KEYWORDS: &[&str] = &["VICTORY", "WIN"];

/// Labeled health patterns, tried in order. OCR tends to mangle either
/// the label or the number, so both orderings are accepted.
fn health_patterns() -> &'static [Regex; 4] {
    static PATTERNS: OnceLock<[Regex; 4]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"HP\s*[:\-]?\s*(\d{1,3})").unwrap(),
            Regex::new(r"HEALTH\s*[:\-]?\s*(\d{1,3})").unwrap(),
            Regex::new(r"(\d{1,3})\s*HP").unwrap(),
            Regex::new(r"(\d{1,3})\s*HEALTH").unwrap(),
        ]
    })
}

fn standalone_number() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b(\d{1,3})\b").unwrap())
}

/// Uppercases and collapses whitespace runs to single spaces.
pub fn normalize_text(raw: &str) -> String {
    raw.to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts a numeric health reading from normalized text.
///
/// Labeled patterns win; a pattern whose number falls outside
/// `[0, max]` is skipped rather than rejected outright, so a garbled
/// label can still be rescued by a later pattern. With no labeled match,
/// the first standalone 1-3 digit token in range is used.
fn parse_health(text: &str, max: u32) -> Option<u32> {
    for pattern in health_patterns() {
        if let Some(caps) = pattern.captures(text) {
            if let Ok(n) = caps[1].parse::<u32>() {
                if n <= max {
                    return Some(n);
                }
            }
        }
    }

    if let Some(caps) = standalone_number().captures(text) {
        if let Ok(n) = caps[1].parse::<u32>() {
            if n <= max {
                return Some(n);
            }
        }
    }

    None
}

/// Parses recognized text into a structured signal set.
pub fn extract(raw: &str, config: &CoachConfig) -> SignalSet {
    let text = normalize_text(raw);

    let health = parse_health(&text, config.max_health);
    let low_health = health.is_some_and(|h| h <= config.low_health);
    let critical_health = health.is_some_and(|h| h <= config.critical_health);

    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

    SignalSet {
        health,
        low_health,
        critical_health,
        reload: contains_any(RELOAD_KEYWORDS),
        hazard_zone: contains_any(HAZARD_KEYWORDS),
        eliminated: contains_any(ELIMINATED_KEYWORDS),
        victory: contains_any(VICTORY_KEYWORDS),
    }
}
