//! Tip selection from gameplay signals.

pub mod bank;

pub use bank::{bank_for, TipBank};

use crate::profile::GameProfile;
use crate::signals::SignalSet;

/// Tip category, in dispatch priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TipCategory {
    CriticalHealth,
    LowHealth,
    Reload,
    HazardZone,
    Eliminated,
    Victory,
    General,
}

impl std::fmt::Display for TipCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TipCategory::CriticalHealth => write!(f, "critical health"),
            TipCategory::LowHealth => write!(f, "low health"),
            TipCategory::Reload => write!(f, "reload"),
            TipCategory::HazardZone => write!(f, "hazard zone"),
            TipCategory::Eliminated => write!(f, "eliminated"),
            TipCategory::Victory => write!(f, "victory"),
            TipCategory::General => write!(f, "general"),
        }
    }
}

fn pick(rng: &mut fastrand::Rng, list: &'static [&'static str]) -> Option<String> {
    rng.choice(list.iter()).map(|tip| tip.to_string())
}

/// Picks one tip for a signal set, or `None` when nothing fires.
///
/// Uses the profile's bank and its configured general-tip probability.
pub fn select(
    signals: &SignalSet,
    profile: GameProfile,
    rng: &mut fastrand::Rng,
) -> Option<(TipCategory, String)> {
    let bank = bank_for(profile);
    select_from_bank(signals, bank, bank.general_chance, rng)
}

/// Priority selection against an explicit bank.
///
/// Fixed order, first match wins: critical health, low health, reload,
/// hazard zone (skipped when the bank carries no hazard tips), eliminated,
/// victory. On a quiet capture a general tip is returned with probability
/// `general_chance` so uneventful play is not totally silent. Tip text is
/// drawn uniformly at random from the category's candidates; identical
/// signals should not always echo the same sentence.
pub fn select_from_bank(
    signals: &SignalSet,
    bank: &TipBank,
    general_chance: f64,
    rng: &mut fastrand::Rng,
) -> Option<(TipCategory, String)> {
    if signals.critical_health {
        return Some((TipCategory::CriticalHealth, pick(rng, bank.critical_health)?));
    }
    if signals.low_health {
        return Some((TipCategory::LowHealth, pick(rng, bank.low_health)?));
    }
    if signals.reload {
        return Some((TipCategory::Reload, pick(rng, bank.reload)?));
    }
    if signals.hazard_zone && !bank.hazard_zone.is_empty() {
        return Some((TipCategory::HazardZone, pick(rng, bank.hazard_zone)?));
    }
    if signals.eliminated {
        return Some((TipCategory::Eliminated, pick(rng, bank.eliminated)?));
    }
    if signals.victory {
        return Some((TipCategory::Victory, pick(rng, bank.victory)?));
    }

    if rng.f64() < general_chance {
        return Some((TipCategory::General, pick(rng, bank.general)?));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(7)
    }

    #[test]
    fn test_critical_beats_everything() {
        let signals = SignalSet {
            health: Some(18),
            critical_health: true,
            low_health: true,
            reload: true,
            hazard_zone: true,
            eliminated: true,
            victory: true,
        };
        let bank = bank_for(GameProfile::Fortnite);
        let (category, text) = select_from_bank(&signals, bank, 0.0, &mut rng()).unwrap();
        assert_eq!(category, TipCategory::CriticalHealth);
        assert!(bank.critical_health.contains(&text.as_str()));
    }

    #[test]
    fn test_low_beats_reload() {
        let signals = SignalSet {
            health: Some(40),
            low_health: true,
            reload: true,
            ..Default::default()
        };
        let (category, _) = select(&signals, GameProfile::Fortnite, &mut rng()).unwrap();
        assert_eq!(category, TipCategory::LowHealth);
    }

    #[test]
    fn test_hazard_skipped_without_bank_tips() {
        let signals = SignalSet {
            hazard_zone: true,
            eliminated: true,
            ..Default::default()
        };
        // The generic shooter bank has no hazard tips, so the rung is
        // skipped and elimination wins
        let (category, _) = select(&signals, GameProfile::Valorant, &mut rng()).unwrap();
        assert_eq!(category, TipCategory::Eliminated);
    }

    #[test]
    fn test_hazard_selected_when_supported() {
        let signals = SignalSet {
            hazard_zone: true,
            ..Default::default()
        };
        let (category, _) = select(&signals, GameProfile::Fortnite, &mut rng()).unwrap();
        assert_eq!(category, TipCategory::HazardZone);
    }

    #[test]
    fn test_quiet_capture_general_branch() {
        let signals = SignalSet::default();
        let bank = bank_for(GameProfile::Fortnite);

        // chance 1.0: always a general tip
        let picked = select_from_bank(&signals, bank, 1.0, &mut rng()).unwrap();
        assert_eq!(picked.0, TipCategory::General);
        assert!(bank.general.contains(&picked.1.as_str()));

        // chance 0.0: always silent
        assert!(select_from_bank(&signals, bank, 0.0, &mut rng()).is_none());
    }

    #[test]
    fn test_tip_text_varies_across_seeds() {
        let signals = SignalSet {
            health: Some(30),
            low_health: true,
            ..Default::default()
        };
        let bank = bank_for(GameProfile::Fortnite);

        let mut seen = std::collections::HashSet::new();
        for seed in 0..64 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let (_, text) = select_from_bank(&signals, bank, 0.0, &mut rng).unwrap();
            assert!(bank.low_health.contains(&text.as_str()));
            seen.insert(text);
        }
        // With three candidates and 64 seeds, more than one sentence
        // should have come up
        assert!(seen.len() > 1);
    }
}
