//! Form model
//!
//! Current values of every field on the control screen. Sliders hold a
//! position and map it to the payload value; numeric fields keep the raw
//! text the operator typed and are only parsed when a payload is built.

pub mod payload;

pub use payload::{parse_int, GameState, SoundSettings};

use crate::config::SoundConfig;
use crate::constants::{MAX_DURATION_MS, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ};
use crate::error::Result;

// =============================================================================
// Slider
// =============================================================================

/// Integer slider with a fixed offset between position and value
///
/// The frequency slider runs 0..=4800 and reports `position + 200` Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    position: i32,
    max: i32,
    offset: i32,
}

impl Slider {
    pub const fn new(max: i32, offset: i32) -> Self {
        Self {
            position: 0,
            max,
            offset,
        }
    }

    pub fn frequency() -> Self {
        Self::new(MAX_FREQUENCY_HZ - MIN_FREQUENCY_HZ, MIN_FREQUENCY_HZ)
    }

    pub fn duration() -> Self {
        Self::new(MAX_DURATION_MS, 0)
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    /// Value sent to the device
    pub fn value(&self) -> i32 {
        self.position + self.offset
    }

    /// Fraction of the track covered, for gauges
    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            f64::from(self.position) / f64::from(self.max)
        }
    }

    /// Move to `position` (clamped). Returns true if the position changed.
    pub fn set_position(&mut self, position: i32) -> bool {
        let clamped = position.clamp(0, self.max);
        let changed = clamped != self.position;
        self.position = clamped;
        changed
    }

    /// Move so that `value()` equals `value` (clamped)
    pub fn set_value(&mut self, value: i32) -> bool {
        self.set_position(value.saturating_sub(self.offset))
    }

    /// Move by `delta` steps (clamped)
    pub fn step(&mut self, delta: i32) -> bool {
        self.set_position(self.position.saturating_add(delta))
    }
}

// =============================================================================
// Fields
// =============================================================================

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text (base URL)
    Text,
    /// Whole number typed as text
    Number,
    /// Arrow-key slider
    Slider,
    /// On/off switch
    Switch,
}

/// Every field on the control screen, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    BaseUrl,
    Enable,
    Frequency,
    Duration,
    OffDuration,
    Volume,
    ConnectVolume,
    CutVolume,
    CutSuccessVolume,
    CutFailedVolume,
    BombCount,
    MinutesRemaining,
}

impl FormField {
    pub const ALL: [FormField; 12] = [
        FormField::BaseUrl,
        FormField::Enable,
        FormField::Frequency,
        FormField::Duration,
        FormField::OffDuration,
        FormField::Volume,
        FormField::ConnectVolume,
        FormField::CutVolume,
        FormField::CutSuccessVolume,
        FormField::CutFailedVolume,
        FormField::BombCount,
        FormField::MinutesRemaining,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Get next field (wraps)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Get previous field (wraps)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FormField::BaseUrl => FieldKind::Text,
            FormField::Enable => FieldKind::Switch,
            FormField::Frequency | FormField::Duration | FormField::OffDuration => {
                FieldKind::Slider
            }
            _ => FieldKind::Number,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::BaseUrl => "Address",
            FormField::Enable => "Sound",
            FormField::Frequency => "Frequency",
            FormField::Duration => "Duration",
            FormField::OffDuration => "Off duration",
            FormField::Volume => "Volume",
            FormField::ConnectVolume => "Connect vol",
            FormField::CutVolume => "Cut vol",
            FormField::CutSuccessVolume => "Cut OK vol",
            FormField::CutFailedVolume => "Cut fail vol",
            FormField::BombCount => "Bombs",
            FormField::MinutesRemaining => "Minutes left",
        }
    }

    /// True for fields that belong to the game state section
    pub fn is_game_state(self) -> bool {
        matches!(self, FormField::BombCount | FormField::MinutesRemaining)
    }
}

// =============================================================================
// Form model
// =============================================================================

/// What the continuous-update loop reads on every iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundTarget {
    pub base_url: String,
    pub settings: SoundSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModel {
    pub base_url: String,
    pub enable: bool,
    pub frequency: Slider,
    pub duration: Slider,
    pub off_duration: Slider,
    pub volume: String,
    pub connect_volume: String,
    pub cut_volume: String,
    pub cut_success_volume: String,
    pub cut_failed_volume: String,
    pub bomb_count: String,
    pub minutes_remaining: String,
}

impl FormModel {
    pub fn new(base_url: impl Into<String>, defaults: &SoundConfig) -> Self {
        let mut form = Self {
            base_url: base_url.into(),
            enable: defaults.enabled,
            frequency: Slider::frequency(),
            duration: Slider::duration(),
            off_duration: Slider::duration(),
            volume: String::new(),
            connect_volume: String::new(),
            cut_volume: String::new(),
            cut_success_volume: String::new(),
            cut_failed_volume: String::new(),
            bomb_count: String::new(),
            minutes_remaining: String::new(),
        };
        form.reset_sound(defaults);
        form
    }

    /// Restore sliders and volume fields. The enable switch and the game
    /// state fields are left alone.
    pub fn reset_sound(&mut self, defaults: &SoundConfig) {
        self.frequency.set_value(defaults.frequency_hz);
        self.duration.set_value(defaults.duration_ms);
        self.off_duration.set_value(defaults.off_duration_ms);
        self.volume = defaults.volume.to_string();
        self.connect_volume = defaults.connect_volume.to_string();
        self.cut_volume = defaults.cut_volume.to_string();
        self.cut_success_volume = defaults.cut_success_volume.to_string();
        self.cut_failed_volume = defaults.cut_failed_volume.to_string();
    }

    /// Sound payload from the current values. Volume fields that do not
    /// parse are omitted.
    pub fn sound_settings(&self) -> SoundSettings {
        SoundSettings {
            enable: self.enable,
            freq: self.frequency.value(),
            duration: self.duration.value(),
            off_duration: self.off_duration.value(),
            volume: parse_int(&self.volume),
            connect_volume: parse_int(&self.connect_volume),
            cut_volume: parse_int(&self.cut_volume),
            cut_success_volume: parse_int(&self.cut_success_volume),
            cut_failed_volume: parse_int(&self.cut_failed_volume),
        }
    }

    /// Game state payload, or the first field that failed to parse
    pub fn game_state(&self) -> Result<GameState> {
        GameState::from_inputs(&self.bomb_count, &self.minutes_remaining)
    }

    pub fn sound_target(&self) -> SoundTarget {
        SoundTarget {
            base_url: self.base_url.clone(),
            settings: self.sound_settings(),
        }
    }

    /// Raw text of a text or number field
    pub fn text(&self, field: FormField) -> Option<&str> {
        let text = match field {
            FormField::BaseUrl => &self.base_url,
            FormField::Volume => &self.volume,
            FormField::ConnectVolume => &self.connect_volume,
            FormField::CutVolume => &self.cut_volume,
            FormField::CutSuccessVolume => &self.cut_success_volume,
            FormField::CutFailedVolume => &self.cut_failed_volume,
            FormField::BombCount => &self.bomb_count,
            FormField::MinutesRemaining => &self.minutes_remaining,
            _ => return None,
        };
        Some(text)
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        let text = match field {
            FormField::BaseUrl => &mut self.base_url,
            FormField::Volume => &mut self.volume,
            FormField::ConnectVolume => &mut self.connect_volume,
            FormField::CutVolume => &mut self.cut_volume,
            FormField::CutSuccessVolume => &mut self.cut_success_volume,
            FormField::CutFailedVolume => &mut self.cut_failed_volume,
            FormField::BombCount => &mut self.bomb_count,
            FormField::MinutesRemaining => &mut self.minutes_remaining,
            _ => return None,
        };
        Some(text)
    }

    pub fn slider(&self, field: FormField) -> Option<&Slider> {
        match field {
            FormField::Frequency => Some(&self.frequency),
            FormField::Duration => Some(&self.duration),
            FormField::OffDuration => Some(&self.off_duration),
            _ => None,
        }
    }

    pub fn slider_mut(&mut self, field: FormField) -> Option<&mut Slider> {
        match field {
            FormField::Frequency => Some(&mut self.frequency),
            FormField::Duration => Some(&mut self.duration),
            FormField::OffDuration => Some(&mut self.off_duration),
            _ => None,
        }
    }
}
