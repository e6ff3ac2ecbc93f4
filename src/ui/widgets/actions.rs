//! Actions widget - displays keyboard shortcuts bar
//!
//! Shows available commands based on current state.

use crate::app::{AppState, LoopState};
use crate::ui::theme::{STYLE_ACTION, STYLE_DIM, STYLE_KEY};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ActionsWidget<'a> {
    state: &'a AppState<'a>,
}

impl<'a> ActionsWidget<'a> {
    pub fn new(state: &'a AppState<'a>) -> Self {
        Self { state }
    }

    fn key(key: &'static str, label: impl Into<String>) -> [Span<'static>; 2] {
        [
            Span::styled(key, STYLE_KEY),
            Span::styled(label.into(), STYLE_ACTION),
        ]
    }
}

impl Widget for ActionsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut line1: Vec<Span> = if self.state.editing {
            // Field editor owns the keyboard
            [
                Self::key("Enter", " Apply  "),
                Self::key("Esc", " Cancel  "),
                Self::key("⌫", " Delete"),
            ]
            .into_iter()
            .flatten()
            .collect()
        } else {
            let stop = match self.state.loop_state {
                LoopState::Running { .. } => Self::key("S", " Stop  "),
                LoopState::Idle => [
                    Span::styled("S", STYLE_DIM),
                    Span::styled(" Stop  ", STYLE_DIM),
                ],
            };
            [
                Self::key("←→", " Adjust  "),
                Self::key("Enter", " Edit  "),
                Self::key("U", " Sound  "),
                Self::key("G", " Game state  "),
                Self::key("R", " Reset  "),
                stop,
                Self::key("Q", " Quit"),
            ]
            .into_iter()
            .flatten()
            .collect()
        };

        let pause_label = if self.state.paused { "Resume" } else { "Pause" };

        let mut line2: Vec<Span> = [
            Self::key("1", " All  "),
            Self::key("2", " Requests  "),
            Self::key("3", " Failures  "),
            Self::key("P", format!(" {}  ", pause_label)),
            Self::key("C", " Copy  "),
            Self::key("X", " Cut  "),
            Self::key("E", " Export  "),
            Self::key("F", " Config  "),
            Self::key("⌫", " Clear"),
        ]
        .into_iter()
        .flatten()
        .collect();

        line1.insert(0, Span::raw("  "));
        line2.insert(0, Span::raw("  "));

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(STYLE_DIM);

        Paragraph::new(vec![Line::from(line1), Line::from(line2)])
            .block(block)
            .render(area, buf);
    }
}
