//! Form widget - sound settings, sliders and game state fields

use crate::form::{parse_int, FieldKind, FormField, FormModel, Slider};
use crate::ui::theme::*;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Width of the slider track in cells
const TRACK_WIDTH: usize = 16;

pub struct FormWidget<'a> {
    form: &'a FormModel,
    selected: FormField,
    edit_buffer: Option<&'a str>,
}

impl<'a> FormWidget<'a> {
    /// Border(2) + 12 fields + 2 section headers
    pub const HEIGHT: u16 = 16;

    pub fn new(form: &'a FormModel, selected: FormField, edit_buffer: Option<&'a str>) -> Self {
        Self {
            form,
            selected,
            edit_buffer,
        }
    }

    fn field_line(&self, field: FormField) -> Line<'static> {
        let is_selected = field == self.selected;
        let (cursor, label_style) = if is_selected {
            (SYMBOL_CURSOR, STYLE_SELECTED)
        } else {
            (" ", STYLE_LABEL)
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", cursor), STYLE_KEY),
            Span::styled(format!("{:<13}", field.label()), label_style),
        ];

        match (is_selected, self.edit_buffer) {
            (true, Some(buffer)) => {
                spans.push(Span::styled(buffer.to_string(), STYLE_EDITING));
                spans.push(Span::styled("_", STYLE_KEY));
            }
            _ => spans.extend(self.value_spans(field)),
        }
        Line::from(spans)
    }

    fn value_spans(&self, field: FormField) -> Vec<Span<'static>> {
        match field.kind() {
            FieldKind::Switch => {
                let (text, color) = if self.form.enable {
                    ("[on] ", COLOR_SUCCESS)
                } else {
                    ("[off]", COLOR_STOPPED)
                };
                vec![Span::styled(text, style_bold(color))]
            }
            FieldKind::Slider => match self.form.slider(field) {
                Some(slider) => slider_spans(field, slider),
                None => Vec::new(),
            },
            FieldKind::Text => vec![Span::styled(
                self.form.text(field).unwrap_or_default().to_string(),
                STYLE_VALUE,
            )],
            FieldKind::Number => {
                let text = self.form.text(field).unwrap_or_default();
                // Highlight text that will not make it into a payload
                let style = if parse_int(text).is_some() {
                    STYLE_VALUE
                } else {
                    Style::new().fg(COLOR_WARNING)
                };
                let shown = if text.is_empty() { "–" } else { text };
                vec![Span::styled(shown.to_string(), style)]
            }
        }
    }
}

fn slider_spans(field: FormField, slider: &Slider) -> Vec<Span<'static>> {
    let filled = ((slider.ratio() * TRACK_WIDTH as f64).round() as usize).min(TRACK_WIDTH);
    let unit = if field == FormField::Frequency { "Hz" } else { "ms" };

    vec![
        Span::styled("━".repeat(filled), STYLE_KEY),
        Span::styled("─".repeat(TRACK_WIDTH - filled), STYLE_DIM),
        Span::styled(format!(" {:>4} {}", slider.value(), unit), STYLE_VALUE),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(format!(" {}", title), style_bold(COLOR_MUTED)))
}

impl Widget for FormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::with_capacity(FormField::ALL.len() + 2);
        lines.push(self.field_line(FormField::BaseUrl));
        lines.push(section("Sound"));
        for field in FormField::ALL
            .into_iter()
            .filter(|f| *f != FormField::BaseUrl && !f.is_game_state())
        {
            lines.push(self.field_line(field));
        }
        lines.push(section("Game state"));
        for field in FormField::ALL.into_iter().filter(|f| f.is_game_state()) {
            lines.push(self.field_line(field));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(STYLE_BORDER)
            .title(Span::styled(" Controls ", STYLE_LABEL));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
