use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, FilterColumn};
use crate::util::unicode::fit_to_width;

use super::centered_rect;

const PREFIX_WIDTH: usize = 6;
const FIELD_WIDTH: usize = 18;
const OPERATOR_WIDTH: usize = 14;
const VALUE_WIDTH: usize = 24;

/// Render the filter panel popup over the table
pub fn render_filter_panel(frame: &mut Frame, app: &App, area: Rect) {
    let Some(draft) = app.filter_panel.draft() else {
        return;
    };
    let popup = centered_rect(80, 80, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let text = Style::default().fg(app.theme.text).bg(bg);
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let focus = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.selection_bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    if draft.rows.is_empty() {
        lines.push(Line::from(Span::styled(" No filters. Press a to add one.", dim)));
    }

    for (i, row) in draft.rows.iter().enumerate() {
        let prefix = if i == 0 { "Where" } else { draft.condition.label() };
        let row_focused = i == app.filter_row;
        let cell_style = |column: FilterColumn, placeholder: bool| {
            if row_focused && app.filter_column == column {
                focus
            } else if placeholder {
                dim
            } else {
                text
            }
        };

        let (field_text, field_empty) = match row.field {
            Some(f) => (f.label(), false),
            None => ("Select field", true),
        };
        let (value_text, value_empty) = if row.value.is_empty() {
            ("Type a value", true)
        } else {
            (row.value.as_str(), false)
        };
        let marker = if row_focused { "\u{25B8}" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(fit_to_width(prefix, PREFIX_WIDTH, false), dim),
            Span::styled(
                fit_to_width(field_text, FIELD_WIDTH, false),
                cell_style(FilterColumn::Field, field_empty),
            ),
            Span::styled(" ", text),
            Span::styled(
                fit_to_width(row.operator.label(row.field), OPERATOR_WIDTH, false),
                cell_style(FilterColumn::Operator, false),
            ),
            Span::styled(" ", text),
            Span::styled(
                fit_to_width(value_text, VALUE_WIDTH, false),
                cell_style(FilterColumn::Value, value_empty),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Tab column  \u{2190}\u{2192} change  ^N suggest  a add  d remove  c and/or  x clear",
        dim,
    )));
    lines.push(Line::from(Span::styled(" Enter apply  Esc close", dim)));

    let block = Block::default()
        .title(format!(" Filter ({}) ", draft.condition.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.panel_border).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;
    use crate::tui::render::test_helpers::*;

    fn render_panel(app: &App) -> String {
        render_to_string(TERM_W, 20, |frame, area| {
            render_filter_panel(frame, app, area);
        })
    }

    #[test]
    fn test_closed_panel_draws_nothing() {
        let app = sample_app();
        assert_eq!(render_panel(&app), "");
    }

    #[test]
    fn test_rows_and_placeholders() {
        let mut app = sample_app();
        app.open_filter_panel();
        {
            let draft = app.filter_panel.draft_mut().unwrap();
            draft.set_field(0, Field::Criticality);
            draft.set_value(0, "High");
            draft.add_row();
        }
        let output = render_panel(&app);
        assert!(output.contains("Filter (AND)"));
        let row0 = output.lines().find(|l| l.contains("Where")).unwrap();
        assert!(row0.contains("\u{25B8}Where Criticality"));
        assert!(row0.contains("is"));
        assert!(row0.contains("High"));
        let row1 = output.lines().find(|l| l.contains("Select field")).unwrap();
        assert!(row1.contains("AND"));
        assert!(row1.contains("Type a value"));
    }

    #[test]
    fn test_numeric_is_reads_equals() {
        let mut app = sample_app();
        app.open_filter_panel();
        {
            let draft = app.filter_panel.draft_mut().unwrap();
            draft.set_field(0, Field::OpenTasks);
            draft.cycle_operator(0);
            draft.cycle_operator(0);
        }
        let output = render_panel(&app);
        assert!(output.contains("Open Tasks"));
        assert!(output.contains("equals"));
    }

    #[test]
    fn test_all_rows_removed() {
        let mut app = sample_app();
        app.open_filter_panel();
        app.filter_panel.draft_mut().unwrap().remove_row(0);
        let output = render_panel(&app);
        assert!(output.contains("No filters. Press a to add one."));
    }
}
