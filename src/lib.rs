//! Prop Panel - terminal control panel for escape-room prop controllers
//!
//! The panel edits sound settings and game state and POSTs them as JSON to
//! `{base}/sound` and `{base}/gamestate`. Moving a sound slider starts a
//! continuous-update loop that re-sends the current sound settings once a
//! second until the next slider move replaces it.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod form;
pub mod input;
pub mod logging;
pub mod platform;
pub mod scheduler;
pub mod sender;
pub mod ui;
