//! Game profiles: which tip bank and HUD layout rules apply.

use crate::capture::Side;

/// The active game identity.
///
/// Known profiles carry a HUD side bias and a curated tip bank; `Custom`
/// covers everything else and defers layout hints to the settings lookup
/// service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameProfile {
    #[default]
    Fortnite,
    Valorant,
    CallOfDuty,
    Custom,
}

impl GameProfile {
    /// Display label for status lines and mode-change tips.
    pub fn label(self) -> &'static str {
        match self {
            GameProfile::Fortnite => "FORTNITE",
            GameProfile::Valorant => "VALORANT",
            GameProfile::CallOfDuty => "CALL OF DUTY",
            GameProfile::Custom => "CUSTOM",
        }
    }

    /// HUD side this profile's health readout usually sits on, when known.
    ///
    /// OCR reliability differs by HUD layout per game; a fixed per-profile
    /// bias avoids re-deriving it every run.
    pub fn hud_bias(self) -> Option<Side> {
        match self {
            GameProfile::Fortnite => Some(Side::Right),
            GameProfile::Valorant | GameProfile::CallOfDuty => Some(Side::Left),
            GameProfile::Custom => None,
        }
    }

    /// Detects a known profile from a free-text game name by substring
    /// matching against a fixed keyword table. Unrecognized names map to
    /// `Custom`.
    pub fn detect(name: &str) -> GameProfile {
        let typed = name.trim().to_lowercase();

        if typed.contains("fortnite") || typed == "fn" {
            GameProfile::Fortnite
        } else if typed.contains("valorant") || typed.contains("valo") {
            GameProfile::Valorant
        } else if typed.contains("call of duty")
            || typed.contains("cod")
            || typed.contains("warzone")
            || typed.contains("modern warfare")
        {
            GameProfile::CallOfDuty
        } else {
            GameProfile::Custom
        }
    }
}
