//! Application-wide constants
//!
//! Centralized constants to avoid duplication and ensure consistency.

// =============================================================================
// Device
// =============================================================================

/// Default base URL of the prop controller on the local network
pub const DEFAULT_BASE_URL: &str = "http://192.168.127.137";

/// Path of the sound endpoint, appended to the base URL
pub const SOUND_PATH: &str = "sound";

/// Path of the game state endpoint, appended to the base URL
pub const GAMESTATE_PATH: &str = "gamestate";

// =============================================================================
// Timing
// =============================================================================

/// Delay between two sends of the continuous-update loop (milliseconds)
pub const DEFAULT_REPEAT_INTERVAL_MS: u64 = 1000;

/// Per-request HTTP timeout (milliseconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Status message display timeout (seconds)
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 2;

// =============================================================================
// Sound parameters
// =============================================================================

/// Lowest frequency the device accepts (Hz), also the frequency slider offset
pub const MIN_FREQUENCY_HZ: i32 = 200;

/// Highest frequency the device accepts (Hz)
pub const MAX_FREQUENCY_HZ: i32 = 5000;

/// Upper bound for the duration and off-duration sliders (milliseconds)
pub const MAX_DURATION_MS: i32 = 2000;

/// Slider step for a plain arrow key press
pub const SLIDER_STEP: i32 = 10;

/// Slider step with Shift held
pub const SLIDER_COARSE_STEP: i32 = 100;

/// Reset values restored by "Reset sound"
pub const DEFAULT_FREQUENCY_HZ: i32 = 1000;
pub const DEFAULT_DURATION_MS: i32 = 300;
pub const DEFAULT_OFF_DURATION_MS: i32 = 700;
pub const DEFAULT_VOLUME: i32 = 1;
pub const DEFAULT_CONNECT_VOLUME: i32 = 1;
pub const DEFAULT_CUT_VOLUME: i32 = 15;
pub const DEFAULT_CUT_SUCCESS_VOLUME: i32 = 1;
pub const DEFAULT_CUT_FAILED_VOLUME: i32 = 100;

/// Maximum characters accepted in a numeric text field
pub const MAX_NUMBER_INPUT_LEN: usize = 11;

/// Maximum characters accepted in the base URL field
pub const MAX_URL_INPUT_LEN: usize = 128;

// =============================================================================
// UI
// =============================================================================

/// Frame duration for TUI loop (milliseconds, ~60 FPS)
pub const FRAME_DURATION_MS: u64 = 16;

/// Number of lines to scroll per page (PageUp/PageDown)
pub const PAGE_SCROLL_LINES: usize = 10;

/// Auto-scroll threshold (lines from bottom)
pub const AUTO_SCROLL_THRESHOLD: usize = 5;

/// Width threshold for wide/narrow layout switch
pub const WIDE_THRESHOLD: u16 = 100;

/// Width of the form panel in wide mode
pub const FORM_WIDTH: u16 = 48;

// =============================================================================
// Buffers
// =============================================================================

/// Channel capacity for events flowing from send tasks to the UI
pub const CHANNEL_CAPACITY: usize = 256;

/// File name of the tracing output in TUI mode
pub const TRACE_FILE_NAME: &str = "prop-panel.log";
