//! Status widget - displays target, continuous updates, request counters

use crate::app::{AppState, LoopState};
use crate::sender::stats::LastOutcome;
use crate::ui::theme::*;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct StatusWidget<'a> {
    state: &'a AppState<'a>,
}

impl<'a> StatusWidget<'a> {
    /// Border(2) + four rows
    pub const HEIGHT: u16 = 6;

    pub fn new(state: &'a AppState<'a>) -> Self {
        Self { state }
    }

    fn updates_line(&self) -> Line<'static> {
        let (symbol, color, text) = match self.state.loop_state {
            LoopState::Running { generation } => (
                SYMBOL_RUNNING,
                COLOR_RUNNING,
                format!(
                    "Running (#{}, every {} ms)",
                    generation,
                    self.state.interval.as_millis()
                ),
            ),
            LoopState::Idle => (SYMBOL_STOPPED, COLOR_STOPPED, "Idle".to_string()),
        };

        Line::from(vec![
            Span::styled("  Updates    ", STYLE_LABEL),
            Span::styled(format!("{} ", symbol), Style::new().fg(color)),
            Span::styled(text, STYLE_VALUE),
        ])
    }

    fn requests_line(&self) -> Line<'static> {
        let failed_style = if self.state.failed > 0 {
            Style::new().fg(COLOR_ERROR)
        } else {
            STYLE_VALUE
        };

        Line::from(vec![
            Span::styled("  Requests   ", STYLE_LABEL),
            Span::styled(format!("{} ok", self.state.succeeded), STYLE_VALUE),
            Span::styled("  ", STYLE_DIM),
            Span::styled(format!("{} failed", self.state.failed), failed_style),
        ])
    }

    fn last_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("  Last       ", STYLE_LABEL)];
        match &self.state.last {
            Some(last) => spans.extend(last_spans(last)),
            None => spans.push(Span::styled("–", STYLE_DIM)),
        }

        if let Some(msg) = self.state.status_message {
            spans.push(Span::styled("   ", STYLE_DIM));
            spans.push(Span::styled(msg.to_string(), style_bold(COLOR_BRIGHT)));
        }
        Line::from(spans)
    }
}

fn last_spans(last: &LastOutcome) -> Vec<Span<'static>> {
    let (symbol, color) = if last.result.success {
        (SYMBOL_OK, COLOR_SUCCESS)
    } else {
        (SYMBOL_ERROR, COLOR_ERROR)
    };
    vec![
        Span::styled(format!("{} ", symbol), Style::new().fg(color)),
        Span::styled(
            format!("POST /{} {}", last.endpoint.path(), last.result.describe()),
            STYLE_VALUE,
        ),
        Span::styled(
            format!(" ({}s ago)", last.at.elapsed().as_secs()),
            STYLE_MUTED,
        ),
    ]
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(vec![
                Span::styled("  Target     ", STYLE_LABEL),
                Span::styled(format!("{} ", SYMBOL_OUT), STYLE_KEY),
                Span::styled(self.state.base_url.to_string(), STYLE_VALUE),
            ]),
            self.updates_line(),
            self.requests_line(),
            self.last_line(),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(STYLE_BORDER)
            .title(Span::styled(" PROP PANEL ", style_bold(COLOR_TITLE)));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
