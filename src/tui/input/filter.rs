use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Field;
use crate::tui::app::{App, FilterColumn};
use crate::util::unicode::pop_grapheme;

pub(super) fn handle_filter_panel(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.filter_panel.close(),
        KeyCode::Enter => app.apply_filter_panel(),
        KeyCode::Tab => app.filter_column = app.filter_column.next(),
        KeyCode::BackTab => app.filter_column = app.filter_column.prev(),
        KeyCode::Down => move_row(app, 1),
        KeyCode::Up => move_row(app, -1),
        KeyCode::Right => step_cell(app, true),
        KeyCode::Left => step_cell(app, false),
        KeyCode::Char('n') if ctrl => next_suggestion(app),
        KeyCode::Backspace if value_focused(app) => edit_value(app, None),
        KeyCode::Char(c) if value_focused(app) && !ctrl => edit_value(app, Some(c)),
        KeyCode::Char('j') => move_row(app, 1),
        KeyCode::Char('k') => move_row(app, -1),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('a') => {
            if let Some(draft) = app.filter_panel.draft_mut() {
                draft.add_row();
                app.filter_row = draft.rows.len() - 1;
                app.filter_column = FilterColumn::Field;
                app.suggestion_idx = 0;
            }
        }
        KeyCode::Char('d') => {
            if let Some(draft) = app.filter_panel.draft_mut() {
                draft.remove_row(app.filter_row);
                app.filter_row = app.filter_row.min(draft.rows.len().saturating_sub(1));
                if draft.rows.is_empty() {
                    app.filter_column = FilterColumn::Field;
                }
            }
        }
        KeyCode::Char('c') => {
            if let Some(draft) = app.filter_panel.draft_mut() {
                draft.toggle_condition();
            }
        }
        KeyCode::Char('x') => {
            if let Some(draft) = app.filter_panel.draft_mut() {
                draft.clear_all();
                app.filter_row = 0;
                app.filter_column = FilterColumn::Field;
                app.suggestion_idx = 0;
            }
        }
        _ => {}
    }
}

/// Typing goes to the value cell only while it has a row behind it
fn value_focused(app: &App) -> bool {
    app.filter_column == FilterColumn::Value
        && app
            .filter_panel
            .draft()
            .is_some_and(|d| app.filter_row < d.rows.len())
}

fn move_row(app: &mut App, delta: isize) {
    let Some(draft) = app.filter_panel.draft() else {
        return;
    };
    let len = draft.rows.len();
    if len == 0 {
        return;
    }
    let next = app.filter_row.saturating_add_signed(delta).min(len - 1);
    if next != app.filter_row {
        app.filter_row = next;
        app.suggestion_idx = 0;
    }
}

/// Left/right on the field or operator cell
fn step_cell(app: &mut App, forward: bool) {
    let row = app.filter_row;
    let column = app.filter_column;
    let Some(draft) = app.filter_panel.draft_mut() else {
        return;
    };
    let Some(current) = draft.rows.get(row) else {
        return;
    };
    match column {
        FilterColumn::Field => {
            let field = match (current.field, forward) {
                (Some(f), true) => f.next(),
                (Some(f), false) => f.prev(),
                (None, true) => Field::ALL[0],
                (None, false) => Field::ALL[Field::ALL.len() - 1],
            };
            draft.set_field(row, field);
            app.suggestion_idx = 0;
        }
        FilterColumn::Operator => {
            if forward {
                draft.cycle_operator(row);
            } else {
                let offered = current.offered_operators();
                let prev = match offered.iter().position(|op| *op == current.operator) {
                    Some(pos) => offered[(pos + offered.len() - 1) % offered.len()].clone(),
                    None => offered[0].clone(),
                };
                draft.set_operator(row, prev);
            }
        }
        FilterColumn::Value => {}
    }
}

/// Append a character to the focused value, or remove the last one
fn edit_value(app: &mut App, c: Option<char>) {
    let row = app.filter_row;
    let Some(draft) = app.filter_panel.draft_mut() else {
        return;
    };
    let Some(current) = draft.rows.get(row) else {
        return;
    };
    let mut value = current.value.clone();
    match c {
        Some(c) => value.push(c),
        None => pop_grapheme(&mut value),
    }
    draft.set_value(row, value);
}

/// Fill the value from the field's distinct values, cycling on repeat
fn next_suggestion(app: &mut App) {
    let row = app.filter_row;
    let Some(field) = app
        .filter_panel
        .draft()
        .and_then(|d| d.rows.get(row))
        .and_then(|r| r.field)
    else {
        return;
    };
    let values = app.store.distinct_values(field);
    if values.is_empty() {
        return;
    }
    let value = values[app.suggestion_idx % values.len()].clone();
    app.suggestion_idx = app.suggestion_idx.wrapping_add(1);
    if let Some(draft) = app.filter_panel.draft_mut() {
        draft.set_value(row, value);
    }
}
