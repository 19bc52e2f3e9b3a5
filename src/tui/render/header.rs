use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the header: title, view mode and count, then the active specs
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let bg = app.theme.background;
    let sep = Span::styled(" \u{2502} ", Style::default().fg(app.theme.dim).bg(bg));
    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let value_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let shown = app.result().task_count();
    let total = app.store.len();

    let title = Line::from(vec![
        Span::styled(" \u{25B6} ", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            "taskgrid",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
        Span::styled("View: ", label_style),
        Span::styled(app.active.mode.name(), value_style),
        sep.clone(),
        Span::styled(format!("{} of {} tasks", shown, total), value_style),
    ]);

    let filter = if app.active.filter.is_empty() {
        "none".to_string()
    } else {
        app.active.filter.summary()
    };
    let sort = if app.active.sort.is_empty() {
        "none".to_string()
    } else {
        app.active.sort.summary()
    };
    let specs = Line::from(vec![
        Span::styled(" Filter: ", label_style),
        Span::styled(filter, Style::default().fg(app.theme.cyan).bg(bg)),
        sep,
        Span::styled("Sort: ", label_style),
        Span::styled(sort, Style::default().fg(app.theme.cyan).bg(bg)),
    ]);

    frame.render_widget(Paragraph::new(title).style(Style::default().bg(bg)), chunks[0]);
    frame.render_widget(Paragraph::new(specs).style(Style::default().bg(bg)), chunks[1]);
}
