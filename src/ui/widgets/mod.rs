//! TUI widgets

pub mod actions;
pub mod form;
pub mod log;
pub mod status;
