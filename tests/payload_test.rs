//! Property tests for payload construction

use prop_panel::config::SoundConfig;
use prop_panel::form::{FormModel, GameState};
use proptest::prelude::*;

/// Either a valid whole number or text that never parses
fn volume_text() -> impl Strategy<Value = (String, Option<i32>)> {
    prop_oneof![
        any::<i32>().prop_map(|v| (v.to_string(), Some(v))),
        (-1000i32..1000).prop_map(|v| (format!("  {}  ", v), Some(v))),
        "[a-z]{0,6}".prop_map(|s| (s, None)),
        (0i32..100).prop_map(|v| (format!("{}.5", v), None)),
    ]
}

proptest! {
    #[test]
    fn sound_payload_holds_exactly_the_parsed_volumes(
        volume in volume_text(),
        connect in volume_text(),
        cut in volume_text(),
        cut_success in volume_text(),
        cut_failed in volume_text(),
    ) {
        let mut form = FormModel::new("http://device.test", &SoundConfig::default());
        form.volume = volume.0;
        form.connect_volume = connect.0;
        form.cut_volume = cut.0;
        form.cut_success_volume = cut_success.0;
        form.cut_failed_volume = cut_failed.0;

        let json = serde_json::to_value(form.sound_settings()).unwrap();
        let object = json.as_object().unwrap();

        for (key, expected) in [
            ("volume", volume.1),
            ("connectVolume", connect.1),
            ("cutVolume", cut.1),
            ("cutSuccessVolume", cut_success.1),
            ("cutFailedVolume", cut_failed.1),
        ] {
            match expected {
                Some(v) => prop_assert_eq!(object.get(key).and_then(|x| x.as_i64()), Some(i64::from(v))),
                None => prop_assert!(!object.contains_key(key), "{} should be omitted", key),
            }
        }

        // Sliders are always present
        for key in ["enable", "freq", "duration", "offDuration"] {
            prop_assert!(object.contains_key(key));
        }
    }

    #[test]
    fn frequency_is_position_plus_offset(position in 0i32..=4800) {
        let mut form = FormModel::new("http://device.test", &SoundConfig::default());
        form.frequency.set_position(position);
        prop_assert_eq!(form.sound_settings().freq, position + 200);
    }

    #[test]
    fn slider_never_leaves_its_track(delta in any::<i32>()) {
        let mut form = FormModel::new("http://device.test", &SoundConfig::default());
        form.duration.step(delta);
        let value = form.sound_settings().duration;
        prop_assert!((0..=2000).contains(&value));
    }

    #[test]
    fn game_state_needs_both_fields(bombs in any::<i32>(), junk in "[a-z]{1,4}") {
        let ok = GameState::from_inputs(&bombs.to_string(), "5").unwrap();
        prop_assert_eq!(ok.bomb_count, Some(bombs));

        prop_assert!(GameState::from_inputs(&bombs.to_string(), &junk).is_err());
        prop_assert!(GameState::from_inputs(&junk, "5").is_err());
    }
}
