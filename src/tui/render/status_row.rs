use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::display_width;

/// Render the status row (bottom of screen): key hints on the left, the
/// cursor position on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let row_count = app.row_count();

    let mut spans: Vec<Span> = Vec::new();
    if row_count == 0 {
        spans.push(Span::styled(
            " No matching tasks. Press f to change the filter",
            Style::default().fg(app.theme.yellow).bg(bg),
        ));
    } else if app.config.ui.show_key_hints {
        let hint = if app.filter_panel.is_open() || app.sort_panel.is_open() {
            " Enter apply  Esc close  ? help"
        } else {
            " j/k move  v view  f filter  s sort  ? help  q quit"
        };
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    if row_count > 0 {
        let position = format!("{}/{} ", app.cursor + 1, row_count);
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let position_width = display_width(&position);
        if content_width + position_width < width {
            let padding = width - content_width - position_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(
                position,
                Style::default().fg(app.theme.text).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
