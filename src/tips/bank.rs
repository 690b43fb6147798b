//! Curated coaching tip banks.
//!
//! Tips are real coaching sentences, chosen per signal category. The
//! engine never surfaces raw recognized text; everything a player sees
//! comes from these banks.

use crate::profile::GameProfile;

/// Per-category candidate tips for one game profile.
pub struct TipBank {
    pub critical_health: &'static [&'static str],
    pub low_health: &'static [&'static str],
    pub reload: &'static [&'static str],
    /// Empty when the profile has no zone-style hazard.
    pub hazard_zone: &'static [&'static str],
    pub eliminated: &'static [&'static str],
    pub victory: &'static [&'static str],
    pub general: &'static [&'static str],
    /// Probability of a general tip on a quiet capture.
    pub general_chance: f64,
}

static FORTNITE: TipBank = TipBank {
    critical_health: &[
        "Critical HP. Hard cover now, then heal immediately.",
        "You're one shot. Break line of sight, then heal.",
    ],
    low_health: &[
        "Heal as soon as possible, then reposition. Don't re-peek while weak.",
        "Play cover first: box up or use natural cover before healing.",
        "If you're low, disengage and reset instead of forcing the fight.",
    ],
    reload: &[
        "Reload behind cover. Don't wide peek while reloading.",
        "Weapon swap is faster than reloading. Use your inventory order.",
    ],
    hazard_zone: &[
        "Check the map and rotate early. Don't get stuck running from the storm.",
        "Use the storm edge to reduce the angles enemies can shoot from.",
    ],
    eliminated: &[
        "Reset: next fight, use cover longer and don't over-peek.",
        "Think about positioning, timing, or tunnel vision. Fix one thing next round.",
    ],
    victory: &[
        "Nice. Repeat what worked: cover, timing and smart rotates.",
        "Good game. Keep your inventory order consistent for faster swaps.",
    ],
    general: &[
        "Turn on Visualize Sound Effects. Huge awareness advantage.",
        "Prioritize high ground in fights. Better angles, harder to hit you.",
        "Keep moving, even while looting or healing. Don't be a free snipe.",
        "Carry heals plus mobility. Use shields when you find them.",
    ],
    general_chance: 0.12,
};

static GENERIC_SHOOTER: TipBank = TipBank {
    critical_health: &[
        "Critical. Hard cover now. Reset the fight and heal.",
        "One-shot danger. Disengage and heal immediately.",
    ],
    low_health: &[
        "Low health. Stop wide peeking and heal behind cover first.",
        "Break line of sight, then heal. Don't ego-challenge on low HP.",
    ],
    reload: &[
        "Reload behind cover, not in the open.",
        "Swap weapons instead of reloading in a close fight.",
    ],
    hazard_zone: &[],
    eliminated: &[
        "Eliminated. Review: were you exposed too long, or fighting without cover?",
        "Next fight: pre-aim common angles and use cover discipline.",
    ],
    victory: &["Nice. Keep the same good habits: cover, timing and repositioning."],
    general: &[
        "Don't stand still. Strafe and reposition between shots.",
        "Take fights with cover. Minimize how much of you is visible.",
    ],
    general_chance: 0.12,
};

/// Returns the tip bank for a profile. Games without a curated bank use
/// the generic shooter one.
pub fn bank_for(profile: GameProfile) -> &'static TipBank {
    match profile {
        GameProfile::Fortnite => &FORTNITE,
        _ => &GENERIC_SHOOTER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fortnite_has_its_own_bank() {
        assert!(!bank_for(GameProfile::Fortnite).hazard_zone.is_empty());
    }

    #[test]
    fn test_generic_bank_has_no_hazard_tips() {
        assert!(bank_for(GameProfile::Valorant).hazard_zone.is_empty());
        assert!(bank_for(GameProfile::Custom).hazard_zone.is_empty());
    }

    #[test]
    fn test_all_other_categories_are_populated() {
        for profile in [GameProfile::Fortnite, GameProfile::Valorant] {
            let bank = bank_for(profile);
            assert!(!bank.critical_health.is_empty());
            assert!(!bank.low_health.is_empty());
            assert!(!bank.reload.is_empty());
            assert!(!bank.eliminated.is_empty());
            assert!(!bank.victory.is_empty());
            assert!(!bank.general.is_empty());
        }
    }
}
