//! Client for the game settings lookup service.
//!
//! Given a free-text game name the service may return crop geometry and a
//! HUD side preference for games without a built-in profile. Absent or
//! malformed response fields are ignored rather than treated as errors;
//! only an unreachable or non-OK service is a failure.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer};

use crate::capture::Side;

/// Response shape of the lookup service. Every field is optional, and a
/// field of the wrong type deserializes to `None` instead of failing the
/// whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameSettings {
    #[serde(rename = "keepW", default, deserialize_with = "lenient")]
    pub keep_w: Option<f64>,
    #[serde(rename = "keepH", default, deserialize_with = "lenient")]
    pub keep_h: Option<f64>,
    #[serde(rename = "preferSide", default, deserialize_with = "lenient")]
    pub prefer_side: Option<Side>,
}

/// Deserializes to `None` on any type mismatch instead of erroring.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Queries the lookup service for `name`.
///
/// `base_url` is the service root; the request goes to
/// `<base_url>/api/game-settings?name=<name>`.
pub fn fetch_game_settings(base_url: &str, name: &str) -> Result<GameSettings> {
    let url = format!("{}/api/game-settings", base_url.trim_end_matches('/'));

    let response = reqwest::blocking::Client::new()
        .get(&url)
        .query(&[("name", name)])
        .send()?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "game settings lookup returned {}",
            response.status()
        ));
    }

    Ok(response.json()?)
}
