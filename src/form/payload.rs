//! Outgoing JSON payloads
//!
//! Field names match what the prop controller firmware expects
//! (`offDuration`, `cutSuccessVolume`, ...). Optional fields are left out
//! of the JSON entirely rather than sent as `null`.

use crate::error::{PanelError, Result};
use serde::Serialize;

/// Body of `POST {base}/sound`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundSettings {
    pub enable: bool,
    pub freq: i32,
    pub duration: i32,
    pub off_duration: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_volume: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cut_volume: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cut_success_volume: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cut_failed_volume: Option<i32>,
}

/// Body of `POST {base}/gamestate`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bomb_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_remaining: Option<i32>,
}

impl GameState {
    /// Build a game state from raw field text.
    ///
    /// Both fields are required: the first one that does not parse is
    /// reported and nothing is sent.
    pub fn from_inputs(bomb_count: &str, minutes_remaining: &str) -> Result<Self> {
        let bomb_count = parse_int(bomb_count).ok_or_else(|| PanelError::InvalidInput {
            field: "bomb count",
            value: bomb_count.to_string(),
        })?;
        let minutes_remaining =
            parse_int(minutes_remaining).ok_or_else(|| PanelError::InvalidInput {
                field: "minutes remaining",
                value: minutes_remaining.to_string(),
            })?;

        Ok(Self {
            bomb_count: Some(bomb_count),
            minutes_remaining: Some(minutes_remaining),
        })
    }
}

/// Parse a whole number the way the form accepts it: surrounding
/// whitespace and a leading sign are fine, anything else is rejected.
pub fn parse_int(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_settings() -> SoundSettings {
        SoundSettings {
            enable: true,
            freq: 1000,
            duration: 300,
            off_duration: 700,
            volume: None,
            connect_volume: None,
            cut_volume: None,
            cut_success_volume: None,
            cut_failed_volume: None,
        }
    }

    #[test]
    fn test_parse_int_accepts_whitespace_and_sign() {
        assert_eq!(parse_int(" 15 "), Some(15));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("+7"), Some(7));
    }

    #[test]
    fn test_parse_int_rejects_garbage() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("1.5"), None);
        assert_eq!(parse_int("ten"), None);
        assert_eq!(parse_int("99999999999"), None);
    }

    #[test]
    fn test_sound_required_fields_use_wire_names() {
        let value = serde_json::to_value(base_settings()).unwrap();
        assert_eq!(
            value,
            json!({"enable": true, "freq": 1000, "duration": 300, "offDuration": 700})
        );
    }

    #[test]
    fn test_sound_optional_fields_when_present() {
        let settings = SoundSettings {
            volume: Some(1),
            connect_volume: Some(2),
            cut_volume: Some(15),
            cut_success_volume: Some(4),
            cut_failed_volume: Some(100),
            ..base_settings()
        };
        let value = serde_json::to_value(settings).unwrap();
        assert_eq!(value["volume"], 1);
        assert_eq!(value["connectVolume"], 2);
        assert_eq!(value["cutVolume"], 15);
        assert_eq!(value["cutSuccessVolume"], 4);
        assert_eq!(value["cutFailedVolume"], 100);
    }

    #[test]
    fn test_game_state_requires_both_fields() {
        let state = GameState::from_inputs("3", "45").unwrap();
        assert_eq!(
            serde_json::to_value(state).unwrap(),
            json!({"bombCount": 3, "minutesRemaining": 45})
        );

        let err = GameState::from_inputs("x", "45").unwrap_err();
        assert!(matches!(err, PanelError::InvalidInput { field: "bomb count", .. }));

        let err = GameState::from_inputs("3", "").unwrap_err();
        assert!(matches!(
            err,
            PanelError::InvalidInput {
                field: "minutes remaining",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_game_state_serializes_to_empty_object() {
        let value = serde_json::to_value(GameState::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
