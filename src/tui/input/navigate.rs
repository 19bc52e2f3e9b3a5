use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => {
            let count = app.row_count();
            if app.cursor + 1 < count {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.row_count().saturating_sub(1);
        }
        KeyCode::Char('v') => app.cycle_view(),
        KeyCode::Char('f') => app.open_filter_panel(),
        KeyCode::Char('s') => app.open_sort_panel(),
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
}
