//! Log storage with filtering, scrolling, and export
//!
//! Pure data structure for managing log entries with no I/O side effects.

use super::{FilterMode, LogEntry, LogFilter, LogKind};
use crate::constants::AUTO_SCROLL_THRESHOLD;
use crate::sender::Origin;
use std::collections::VecDeque;

/// Log storage with filtering, scrolling, and text export.
///
/// Uses a ring buffer (`VecDeque`) with configurable maximum capacity.
/// Old entries are dropped when capacity is reached, the filtered count is
/// cached, and new entries auto-scroll to the bottom unless the operator
/// scrolled away or paused.
pub struct LogStore {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
    scroll: usize,
    auto_scroll: bool,
    filter: LogFilter,
    filter_mode: FilterMode,
    /// Cached count of filtered entries (O(1) access)
    filtered_cache: usize,
    paused: bool,
}

impl LogStore {
    /// Create a new LogStore with the given maximum capacity
    pub fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
            scroll: 0,
            auto_scroll: true,
            filter: LogFilter::default(),
            filter_mode: FilterMode::All,
            filtered_cache: 0,
            paused: false,
        }
    }

    // === Log addition ===

    /// Add a log entry, rotating out old entries if at capacity
    pub fn add(&mut self, entry: LogEntry) {
        let entry_matches_filter = self.filter.matches(&entry);

        if self.entries.len() >= self.max_entries {
            if let Some(removed) = self.entries.pop_front() {
                if self.filter.matches(&removed) {
                    self.filtered_cache = self.filtered_cache.saturating_sub(1);
                    // Keep the paused view on the same entry
                    if self.paused && self.scroll > 0 {
                        self.scroll -= 1;
                    }
                }
            }
        }
        self.entries.push_back(entry);

        if entry_matches_filter {
            self.filtered_cache += 1;
        }

        if self.auto_scroll && entry_matches_filter && !self.paused {
            self.scroll = self.filtered_cache.saturating_sub(1);
        }
    }

    /// Clear all log entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.scroll = 0;
        self.filtered_cache = 0;
        self.auto_scroll = true;
    }

    // === Scroll ===

    /// Scroll up one line
    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll down one line
    pub fn scroll_down(&mut self) {
        let filtered_count = self.filtered_count();
        if self.scroll < filtered_count.saturating_sub(1) {
            self.scroll += 1;
        }
        if !self.paused && self.scroll >= filtered_count.saturating_sub(AUTO_SCROLL_THRESHOLD) {
            self.auto_scroll = true;
        }
    }

    /// Scroll to the top
    pub fn scroll_to_top(&mut self) {
        self.auto_scroll = false;
        self.scroll = 0;
    }

    /// Scroll to the bottom
    pub fn scroll_to_bottom(&mut self) {
        self.auto_scroll = !self.paused;
        self.scroll = self.filtered_count().saturating_sub(1);
    }

    /// Get current scroll position
    pub fn scroll_position(&self) -> usize {
        self.scroll
    }

    // === Pause ===

    /// Toggle pause state, returns new paused state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        if self.paused {
            self.auto_scroll = false;
        } else {
            self.scroll_to_bottom();
        }
        self.paused
    }

    /// Check if paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    // === Filtering ===

    /// Set filter mode
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = LogFilter::for_mode(mode);
        self.filter_mode = mode;
        self.recalculate_filtered_cache();
        self.reset_scroll_for_filter();
    }

    /// Reset scroll position when filter changes
    fn reset_scroll_for_filter(&mut self) {
        self.scroll = self.filtered_count().saturating_sub(1);
        self.auto_scroll = !self.paused;
    }

    /// Get current filter
    pub fn filter(&self) -> &LogFilter {
        &self.filter
    }

    /// Get current filter mode
    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    // === Data access ===

    /// Get all entries
    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    /// Get count of entries matching current filter (O(1))
    pub fn filtered_count(&self) -> usize {
        self.filtered_cache
    }

    /// Recalculate filtered cache (call when filter changes)
    fn recalculate_filtered_cache(&mut self) {
        self.filtered_cache = self
            .entries
            .iter()
            .filter(|e| self.filter.matches(e))
            .count();
    }

    // === Export (pure methods) ===

    /// Format all filtered logs as text
    pub fn to_text(&self) -> String {
        self.to_text_limited(usize::MAX)
    }

    /// Format filtered logs as text, limited to max entries (most recent)
    pub fn to_text_limited(&self, max: usize) -> String {
        let filtered: Vec<&LogEntry> = self
            .entries
            .iter()
            .filter(|e| self.filter.matches(e))
            .collect();

        let start = filtered.len().saturating_sub(max);

        filtered[start..]
            .iter()
            .map(|e| format_log_entry_text(e))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Format a log entry as plain text
pub fn format_log_entry_text(entry: &LogEntry) -> String {
    match &entry.kind {
        LogKind::Request {
            endpoint,
            origin,
            result,
        } => {
            let tag = if result.success { "[OK]  " } else { "[FAIL]" };
            let via = match origin {
                Origin::Manual => String::new(),
                Origin::Loop { generation } => format!(" (loop #{})", generation),
            };
            format!(
                "{} {} POST /{} {}{}",
                entry.timestamp,
                tag,
                endpoint.path(),
                result.describe(),
                via
            )
        }
        LogKind::Rejected { message } => format!("{} [INPUT] {}", entry.timestamp, message),
        LogKind::System { message } => format!("{} [SYS] {}", entry.timestamp, message),
    }
}
