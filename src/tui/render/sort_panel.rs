use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::panel::order_label;
use crate::tui::app::App;
use crate::util::unicode::fit_to_width;

use super::centered_rect;

const FIELD_WIDTH: usize = 18;

/// Render the sort panel popup over the table
pub fn render_sort_panel(frame: &mut Frame, app: &App, area: Rect) {
    let Some(draft) = app.sort_panel.draft() else {
        return;
    };
    let popup = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let text = Style::default().fg(app.theme.text).bg(bg);
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let focus = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.selection_bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    for (i, row) in draft.rows.iter().enumerate() {
        let focused = i == app.sort_row;
        let (field_text, field_style) = match row.field {
            Some(f) => (f.label(), if focused { focus } else { text }),
            None => ("Select field", if focused { focus } else { dim }),
        };
        lines.push(Line::from(vec![
            Span::styled(" \u{22EE}\u{22EE} ", dim),
            Span::styled(format!("{}. ", i + 1), dim),
            Span::styled(fit_to_width(field_text, FIELD_WIDTH, false), field_style),
            Span::styled(" ", text),
            Span::styled(
                order_label(row.field, row.order),
                Style::default().fg(app.theme.cyan).bg(bg),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " \u{2190}\u{2192} field  o order  J/K move  a add  d remove  x clear",
        dim,
    )));
    lines.push(Line::from(Span::styled(" Enter apply  Esc close", dim)));

    let block = Block::default()
        .title(" Sort ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.panel_border).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
