use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Field;
use crate::tui::app::App;

pub(super) fn handle_sort_panel(app: &mut App, key: KeyEvent) {
    let row = app.sort_row;
    match key.code {
        KeyCode::Esc => app.sort_panel.close(),
        KeyCode::Enter => app.apply_sort_panel(),
        KeyCode::Char('j') | KeyCode::Down => move_row(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_row(app, -1),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Right | KeyCode::Left => {
            let forward = key.code == KeyCode::Right;
            if let Some(draft) = app.sort_panel.draft_mut()
                && let Some(current) = draft.rows.get(row)
            {
                let field = match (current.field, forward) {
                    (Some(f), true) => f.next(),
                    (Some(f), false) => f.prev(),
                    (None, true) => Field::ALL[0],
                    (None, false) => Field::ALL[Field::ALL.len() - 1],
                };
                draft.set_field(row, field);
            }
        }
        KeyCode::Char('o') => {
            if let Some(draft) = app.sort_panel.draft_mut() {
                draft.toggle_order(row);
            }
        }
        KeyCode::Char('J') => {
            if let Some(draft) = app.sort_panel.draft_mut()
                && row + 1 < draft.rows.len()
            {
                draft.move_rule(row, row + 1);
                app.sort_row = row + 1;
            }
        }
        KeyCode::Char('K') => {
            if let Some(draft) = app.sort_panel.draft_mut()
                && row > 0
            {
                draft.move_rule(row, row - 1);
                app.sort_row = row - 1;
            }
        }
        KeyCode::Char('a') => {
            if let Some(draft) = app.sort_panel.draft_mut() {
                draft.add_rule();
                app.sort_row = draft.rows.len() - 1;
            }
        }
        KeyCode::Char('d') => {
            if let Some(draft) = app.sort_panel.draft_mut() {
                draft.remove_rule(row);
                app.sort_row = row.min(draft.rows.len().saturating_sub(1));
            }
        }
        KeyCode::Char('x') => {
            if let Some(draft) = app.sort_panel.draft_mut() {
                draft.clear_all();
                app.sort_row = 0;
            }
        }
        _ => {}
    }
}

fn move_row(app: &mut App, delta: isize) {
    let Some(draft) = app.sort_panel.draft() else {
        return;
    };
    let last = draft.rows.len().saturating_sub(1);
    app.sort_row = app.sort_row.saturating_add_signed(delta).min(last);
}
