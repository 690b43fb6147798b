//! Region arbitration: choosing between the two candidate OCR texts.

use crate::capture::Side;
use crate::profile::GameProfile;

/// Scores recognized text by counting alphanumeric characters. Garbled
/// or blank output scores low.
pub fn score_text(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_alphanumeric()).count()
}

/// Picks the text to parse from the right and left HUD crops.
///
/// A known profile's side bias wins; a custom profile uses the externally
/// supplied preference when present. Either way a blank preferred side
/// falls back to the other one. With no bias at all, the higher-scoring
/// text wins, ties going right.
pub fn choose_text(
    right: &str,
    left: &str,
    profile: GameProfile,
    prefer: Option<Side>,
) -> String {
    let right_score = score_text(right);
    let left_score = score_text(left);

    let bias = profile.hud_bias().or(prefer);

    let chosen = match bias {
        Some(Side::Right) => {
            if right_score > 0 {
                right
            } else {
                left
            }
        }
        Some(Side::Left) => {
            if left_score > 0 {
                left
            } else {
                right
            }
        }
        None => {
            if right_score >= left_score {
                right
            } else {
                left
            }
        }
    };

    chosen.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_counts_alphanumerics() {
        assert_eq!(score_text("HP 40"), 4);
        assert_eq!(score_text("  --|~  "), 0);
        assert_eq!(score_text(""), 0);
    }

    #[test]
    fn test_right_biased_profile_prefers_right() {
        let chosen = choose_text("HP 95", "AMMO 30", GameProfile::Fortnite, None);
        assert_eq!(chosen, "HP 95");
    }

    #[test]
    fn test_left_biased_profile_prefers_left() {
        let chosen = choose_text("HP 95", "AMMO 30", GameProfile::Valorant, None);
        assert_eq!(chosen, "AMMO 30");
    }

    #[test]
    fn test_blank_preferred_side_falls_back() {
        // Valorant prefers left, but the left crop read nothing
        let chosen = choose_text("HP 40", "", GameProfile::Valorant, None);
        assert_eq!(chosen, "HP 40");
    }

    #[test]
    fn test_custom_uses_external_preference() {
        let chosen = choose_text("RIGHT TEXT", "LEFT TEXT", GameProfile::Custom, Some(Side::Left));
        assert_eq!(chosen, "LEFT TEXT");
    }

    #[test]
    fn test_custom_without_preference_scores() {
        let chosen = choose_text("AB", "LONGER TEXT", GameProfile::Custom, None);
        assert_eq!(chosen, "LONGER TEXT");
    }

    #[test]
    fn test_score_tie_goes_right() {
        let chosen = choose_text("AAAA", "BBBB", GameProfile::Custom, None);
        assert_eq!(chosen, "AAAA");
    }

    #[test]
    fn test_profile_bias_beats_external_preference() {
        // A known profile's own bias is not overridden by a stale lookup
        let chosen = choose_text("R", "L", GameProfile::Fortnite, Some(Side::Left));
        assert_eq!(chosen, "R");
    }
}
