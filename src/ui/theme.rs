//! UI theme constants - Minimalist dark theme

use ratatui::style::{Color, Modifier, Style};

// Base colors - muted grays
pub const COLOR_DIM: Color = Color::Rgb(80, 80, 80); // Borders, secondary
pub const COLOR_MUTED: Color = Color::Rgb(120, 120, 120); // Labels
pub const COLOR_TEXT: Color = Color::Rgb(180, 180, 180); // Normal text
pub const COLOR_BRIGHT: Color = Color::Rgb(220, 220, 220); // Emphasis

// Accent colors - used sparingly
pub const COLOR_ACCENT: Color = Color::Rgb(100, 180, 220); // Keys, selection
pub const COLOR_SUCCESS: Color = Color::Rgb(100, 180, 100);
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;

// Semantic aliases
pub const COLOR_BORDER: Color = COLOR_DIM;
pub const COLOR_TITLE: Color = COLOR_BRIGHT;
pub const COLOR_LABEL: Color = COLOR_MUTED;
pub const COLOR_VALUE: Color = COLOR_TEXT;

// Loop states
pub const COLOR_RUNNING: Color = COLOR_SUCCESS;
pub const COLOR_STOPPED: Color = COLOR_MUTED;

// Log colors
pub const COLOR_LOG_OK: Color = COLOR_SUCCESS;
pub const COLOR_LOG_FAIL: Color = COLOR_ERROR;
pub const COLOR_LOG_INPUT: Color = COLOR_WARNING;
pub const COLOR_LOG_SYSTEM: Color = COLOR_MUTED;

// Styles
pub const STYLE_DIM: Style = Style::new().fg(COLOR_DIM);
pub const STYLE_MUTED: Style = Style::new().fg(COLOR_MUTED);
pub const STYLE_TEXT: Style = Style::new().fg(COLOR_TEXT);
pub const STYLE_BRIGHT: Style = Style::new().fg(COLOR_BRIGHT);
pub const STYLE_BORDER: Style = Style::new().fg(COLOR_BORDER);
pub const STYLE_LABEL: Style = Style::new().fg(COLOR_LABEL);
pub const STYLE_VALUE: Style = Style::new().fg(COLOR_VALUE);
pub const STYLE_KEY: Style = Style::new().fg(COLOR_ACCENT);
pub const STYLE_ACTION: Style = Style::new().fg(COLOR_MUTED);
pub const STYLE_SELECTED: Style = Style::new().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD);
pub const STYLE_EDITING: Style = Style::new()
    .fg(COLOR_BRIGHT)
    .add_modifier(Modifier::UNDERLINED);

// Status symbols
pub const SYMBOL_RUNNING: &str = "●";
pub const SYMBOL_STOPPED: &str = "○";
pub const SYMBOL_ERROR: &str = "✖";
pub const SYMBOL_OK: &str = "✔";
pub const SYMBOL_CURSOR: &str = "▸";
pub const SYMBOL_OUT: &str = "→";

/// Bold style in the given color
pub const fn style_bold(color: Color) -> Style {
    Style::new().fg(color).add_modifier(Modifier::BOLD)
}
