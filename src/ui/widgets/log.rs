//! Log widget - displays scrollable event log with a filter bar

use crate::logging::{FilterMode, LogEntry, LogFilter, LogKind};
use crate::sender::Origin;
use crate::ui::theme::{
    style_bold, COLOR_BRIGHT, COLOR_LOG_FAIL, COLOR_LOG_INPUT, COLOR_LOG_OK, COLOR_LOG_SYSTEM,
    COLOR_WARNING, STYLE_BORDER, STYLE_DIM, STYLE_LABEL, STYLE_MUTED, STYLE_TEXT,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget,
        Widget,
    },
};
use std::collections::VecDeque;

pub struct LogWidget<'a> {
    entries: &'a VecDeque<LogEntry>,
    filter: &'a LogFilter,
    filter_mode: FilterMode,
    scroll: usize,
    paused: bool,
}

impl<'a> LogWidget<'a> {
    pub fn new(
        entries: &'a VecDeque<LogEntry>,
        filter: &'a LogFilter,
        filter_mode: FilterMode,
        scroll: usize,
        paused: bool,
    ) -> Self {
        Self {
            entries,
            filter,
            filter_mode,
            scroll,
            paused,
        }
    }
}

impl Widget for LogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(area);

        self.render_filter_bar(chunks[0], buf);
        self.render_logs(chunks[1], buf);
    }
}

impl LogWidget<'_> {
    fn render_filter_bar(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(" Filter: ", STYLE_LABEL),
            filter_button("1", "All", self.filter_mode == FilterMode::All),
            Span::raw("  "),
            filter_button("2", "Requests", self.filter_mode == FilterMode::Requests),
            Span::raw("  "),
            filter_button("3", "Failures", self.filter_mode == FilterMode::Failures),
        ]);

        Paragraph::new(line).style(STYLE_DIM).render(area, buf);
    }

    /// Render the main logs area
    fn render_logs(&self, area: Rect, buf: &mut Buffer) {
        let inner_height = area.height.saturating_sub(2) as usize;
        let inner_width = area.width.saturating_sub(3) as usize; // -2 for borders, -1 for scrollbar

        let total_lines = self
            .entries
            .iter()
            .filter(|e| self.filter.matches(e))
            .count();

        let start = self.scroll.saturating_sub(inner_height.saturating_sub(1));
        let end = (start + inner_height).min(total_lines);

        let lines: Vec<Line> = self
            .entries
            .iter()
            .filter(|e| self.filter.matches(e))
            .skip(start)
            .take(end.saturating_sub(start))
            .map(|entry| format_log_entry(entry, inner_width))
            .collect();

        // Title with pause hint on the right
        let title_right = if self.paused {
            Line::from(vec![
                Span::styled("PAUSED ", Style::new().fg(COLOR_WARNING)),
                Span::styled("P Resume ", STYLE_MUTED),
            ])
        } else {
            Line::from(Span::styled("P Pause ", STYLE_DIM))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(STYLE_BORDER)
            .title(Span::styled(" Events ", STYLE_LABEL))
            .title_bottom(title_right);

        Paragraph::new(lines).block(block).render(area, buf);

        if total_lines > inner_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"));

            let mut scrollbar_state = ScrollbarState::new(total_lines).position(self.scroll);

            let scrollbar_area = Rect {
                x: area.x + area.width.saturating_sub(1),
                y: area.y + 1,
                width: 1,
                height: area.height.saturating_sub(2),
            };

            scrollbar.render(scrollbar_area, buf, &mut scrollbar_state);
        }
    }
}

fn filter_button(key: &str, label: &str, active: bool) -> Span<'static> {
    if active {
        Span::styled(format!("[{}] {}", key, label), style_bold(COLOR_BRIGHT))
    } else {
        Span::styled(format!(" {}  {}", key, label), STYLE_MUTED)
    }
}

/// Format a log entry into a styled Line
fn format_log_entry(entry: &LogEntry, max_width: usize) -> Line<'static> {
    // "  " + timestamp(12) + " " + tag(7) = 22 chars, message gets the rest
    let msg_width = max_width.saturating_sub(22);
    let timestamp = Span::styled(format!("  {} ", entry.timestamp), STYLE_MUTED);

    match &entry.kind {
        LogKind::Request {
            endpoint,
            origin,
            result,
        } => {
            let (tag, color) = if result.success {
                ("OK    ", COLOR_LOG_OK)
            } else {
                ("FAIL  ", COLOR_LOG_FAIL)
            };
            let via = match origin {
                Origin::Manual => String::new(),
                Origin::Loop { generation } => format!("  loop #{}", generation),
            };
            let message = format!("POST /{} {}{}", endpoint.path(), result.describe(), via);

            Line::from(vec![
                timestamp,
                Span::styled(format!("{} ", tag), Style::new().fg(color)),
                Span::styled(pad_or_truncate(&message, msg_width), STYLE_TEXT),
            ])
        }
        LogKind::Rejected { message } => Line::from(vec![
            timestamp,
            Span::styled("INPUT  ", Style::new().fg(COLOR_LOG_INPUT)),
            Span::styled(pad_or_truncate(message, msg_width), STYLE_TEXT),
        ]),
        LogKind::System { message } => Line::from(vec![
            timestamp,
            Span::raw("       "),
            Span::styled(
                pad_or_truncate(message, msg_width),
                Style::new().fg(COLOR_LOG_SYSTEM),
            ),
        ]),
    }
}

/// Pad or truncate a string to exactly the given width (in chars)
fn pad_or_truncate(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len <= width {
        format!("{:<width$}", s, width = width)
    } else if width > 3 {
        let head: String = s.chars().take(width - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(width).collect()
    }
}
