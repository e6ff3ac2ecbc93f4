//! Terminal UI using ratatui
//!
//! Thin layer responsible only for terminal I/O. All business logic
//! is delegated to App via handle_key() and handle_scroll().

pub mod theme;
pub mod widgets;

use crate::app::App;
use crate::constants::{FORM_WIDTH, FRAME_DURATION_MS, WIDE_THRESHOLD};
use crate::error::{PanelError, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use widgets::{actions::ActionsWidget, form::FormWidget, log::LogWidget, status::StatusWidget};

/// Map io::Error to PanelError::Runtime
fn map_io_err(e: io::Error) -> PanelError {
    PanelError::Runtime { source: e }
}

/// Run the TUI event loop
pub async fn run(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().map_err(map_io_err)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(map_io_err)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(map_io_err)?;

    let result = event_loop(&mut terminal, app);

    // Restore terminal, even when the loop failed
    // Every step runs; the first failure is reported
    finish(result, || {
        let raw = disable_raw_mode();
        let screen = execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let cursor = terminal.show_cursor();
        raw.and(screen).and(cursor)
    })
}

/// Run `restore` and combine it with the loop outcome. A loop error wins
/// over a restore error; the restore error is traced either way.
fn finish(result: Result<()>, restore: impl FnOnce() -> io::Result<()>) -> Result<()> {
    let restored = restore();
    if let Err(e) = &restored {
        tracing::warn!("terminal restore failed: {}", e);
    }
    result?;
    restored.map_err(map_io_err)
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Pull send outcomes into the log and status line
        app.poll();

        terminal.draw(|f| draw(f, app)).map_err(map_io_err)?;

        // Handle input with timeout
        if event::poll(std::time::Duration::from_millis(FRAME_DURATION_MS)).map_err(map_io_err)? {
            match event::read().map_err(map_io_err)? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => app.handle_scroll(true),
                    MouseEventKind::ScrollDown => app.handle_scroll(false),
                    _ => {}
                },
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

/// Split the body into form and log areas
///
/// Wide: form on the left, log on the right. Narrow: form above log.
fn split_body(area: Rect) -> (Rect, Rect) {
    if area.width > WIDE_THRESHOLD {
        let chunks =
            Layout::horizontal([Constraint::Length(FORM_WIDTH), Constraint::Min(40)]).split(area);
        (chunks[0], chunks[1])
    } else {
        let chunks = Layout::vertical([
            Constraint::Length(FormWidget::HEIGHT),
            Constraint::Min(5),
        ])
        .split(area);
        (chunks[0], chunks[1])
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(StatusWidget::HEIGHT),
        Constraint::Min(10),
        Constraint::Length(3), // Actions widget
    ])
    .split(frame.area());

    let state = app.state();

    frame.render_widget(StatusWidget::new(&state), chunks[0]);

    let (form_area, log_area) = split_body(chunks[1]);

    let form = FormWidget::new(app.form(), app.selected_field(), app.edit_buffer());
    frame.render_widget(form, form_area);

    let log = LogWidget::new(
        app.logs(),
        app.filter(),
        app.filter_mode(),
        app.scroll_position(),
        state.paused,
    );
    frame.render_widget(log, log_area);

    frame.render_widget(ActionsWidget::new(&state), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn broken_tty() -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty gone"))
    }

    #[test]
    fn test_finish_keeps_loop_error_when_restore_fails() {
        let loop_err = Err(PanelError::Runtime {
            source: io::Error::new(io::ErrorKind::Other, "draw failed"),
        });

        let err = finish(loop_err, broken_tty).unwrap_err();
        assert!(err.to_string().contains("draw failed"), "{}", err);
    }

    #[test]
    fn test_finish_always_restores() {
        let restored = Cell::new(false);
        let loop_err = Err(PanelError::Runtime {
            source: io::Error::new(io::ErrorKind::Other, "draw failed"),
        });

        let _ = finish(loop_err, || {
            restored.set(true);
            Ok(())
        });
        assert!(restored.get());
    }

    #[test]
    fn test_finish_reports_restore_error_after_clean_exit() {
        let err = finish(Ok(()), broken_tty).unwrap_err();
        assert!(err.to_string().contains("tty gone"), "{}", err);
        assert!(finish(Ok(()), || Ok(())).is_ok());
    }

    #[test]
    fn test_split_body_wide_puts_form_left() {
        let (form, log) = split_body(Rect::new(0, 0, 140, 30));
        assert_eq!(form.width, FORM_WIDTH);
        assert_eq!(form.y, log.y);
        assert!(log.x >= form.width);
    }

    #[test]
    fn test_split_body_narrow_stacks() {
        let (form, log) = split_body(Rect::new(0, 0, 80, 40));
        assert_eq!(form.height, FormWidget::HEIGHT);
        assert_eq!(form.width, log.width);
        assert!(log.y >= form.height);
    }
}
