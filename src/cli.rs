//! Command-line interface definition using clap
//!
//! Provides structured argument parsing with automatic help generation.

use crate::constants::{MAX_DURATION_MS, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ};
use crate::form::FormModel;
use clap::{Args, Parser, Subcommand};

// =============================================================================
// CLI Definition
// =============================================================================

/// Control panel for escape-room prop controllers
#[derive(Parser, Debug, Default)]
#[command(name = "prop-panel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the prop controller (overrides config)
    #[arg(long, value_name = "URL", global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Headless subcommands. Without one the interactive TUI starts.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// POST the sound settings once
    Sound(SoundArgs),

    /// POST the game state once
    #[command(name = "gamestate")]
    GameState {
        /// Number of bombs left
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        bomb_count: String,

        /// Minutes left on the clock
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        minutes_remaining: String,
    },

    /// Re-send the sound settings every interval until Ctrl+C
    Watch(SoundArgs),
}

/// Sound overrides applied on top of the configured defaults
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct SoundArgs {
    /// Tone frequency in Hz
    #[arg(long, value_name = "HZ", value_parser = clap::value_parser!(i32).range(i64::from(MIN_FREQUENCY_HZ)..=i64::from(MAX_FREQUENCY_HZ)))]
    pub freq: Option<i32>,

    /// Tone on-time in ms
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(i32).range(0..=i64::from(MAX_DURATION_MS)))]
    pub duration: Option<i32>,

    /// Silence between tones in ms
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(i32).range(0..=i64::from(MAX_DURATION_MS)))]
    pub off_duration: Option<i32>,

    /// Turn sound on
    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    /// Turn sound off
    #[arg(long)]
    pub disable: bool,

    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub volume: Option<i32>,

    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub connect_volume: Option<i32>,

    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub cut_volume: Option<i32>,

    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub cut_success_volume: Option<i32>,

    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub cut_failed_volume: Option<i32>,
}

impl SoundArgs {
    /// Write every given option into `form`
    pub fn apply(&self, form: &mut FormModel) {
        if let Some(freq) = self.freq {
            form.frequency.set_value(freq);
        }
        if let Some(duration) = self.duration {
            form.duration.set_value(duration);
        }
        if let Some(off) = self.off_duration {
            form.off_duration.set_value(off);
        }
        if self.enable {
            form.enable = true;
        }
        if self.disable {
            form.enable = false;
        }

        let volumes = [
            (self.volume, &mut form.volume),
            (self.connect_volume, &mut form.connect_volume),
            (self.cut_volume, &mut form.cut_volume),
            (self.cut_success_volume, &mut form.cut_success_volume),
            (self.cut_failed_volume, &mut form.cut_failed_volume),
        ];
        for (value, text) in volumes {
            if let Some(value) = value {
                *text = value.to_string();
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
