use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Field, TaskRecord};
use crate::tui::app::{App, DisplayRow};
use crate::util::unicode::fit_to_width;

/// A table column. Width 0 marks the flexible title column.
struct Column {
    field: Field,
    header: &'static str,
    width: usize,
    right: bool,
}

const fn col(field: Field, header: &'static str, width: usize, right: bool) -> Column {
    Column {
        field,
        header,
        width,
        right,
    }
}

const FLAT_COLUMNS: [Column; 10] = [
    col(Field::TaskId, "Task ID", 7, false),
    col(Field::ContractId, "Contract", 8, false),
    col(Field::Category, "Category", 13, false),
    col(Field::Subdomain, "Subdomain", 15, false),
    col(Field::ObligationTitle, "Obligation Title", 0, false),
    col(Field::Criticality, "Criticality", 11, false),
    col(Field::Owner, "Owner", 14, false),
    col(Field::TriggeredTasks, "Trig", 4, true),
    col(Field::OpenTasks, "Open", 4, true),
    col(Field::Compliance, "Compliance", 13, false),
];

/// Grouped views leave out the columns the groups already show
const GROUPED_COLUMNS: [Column; 7] = [
    col(Field::TaskId, "Task ID", 7, false),
    col(Field::ObligationTitle, "Obligation Title", 0, false),
    col(Field::Domain, "Domain", 14, false),
    col(Field::Criticality, "Criticality", 11, false),
    col(Field::Owner, "Owner", 14, false),
    col(Field::OpenTasks, "Open", 4, true),
    col(Field::Compliance, "Compliance", 13, false),
];

const MIN_TITLE_WIDTH: usize = 8;

/// Resolve column widths for a row indented by `indent` cells. The title
/// column absorbs the remaining space so the right-hand columns line up.
fn column_widths(columns: &[Column], total: usize, indent: usize) -> Vec<usize> {
    let fixed: usize = columns.iter().map(|c| c.width).sum();
    let gaps = columns.len().saturating_sub(1);
    // one cell of left margin
    let flex = total
        .saturating_sub(1 + indent + fixed + gaps)
        .max(MIN_TITLE_WIDTH);
    columns
        .iter()
        .map(|c| if c.width == 0 { flex } else { c.width })
        .collect()
}

/// Render the task table with group headers, cursor and scrolling
pub fn render_table_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let total_width = area.width as usize;
    let body_height = area.height.saturating_sub(1) as usize;

    let row_count = app.row_count();
    if app.cursor >= row_count {
        app.cursor = row_count.saturating_sub(1);
    }
    // Keep the cursor inside the visible window
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if body_height > 0 && app.cursor >= app.scroll_offset + body_height {
        app.scroll_offset = app.cursor + 1 - body_height;
    }

    let app = &*app;
    let columns: &[Column] = if app.active.mode.is_grouped() {
        &GROUPED_COLUMNS
    } else {
        &FLAT_COLUMNS
    };

    let mut lines: Vec<Line> = Vec::with_capacity(body_height + 1);
    lines.push(header_line(app, columns, total_width));

    let rows = app.rows();
    if rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No tasks match the active filters",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    for (idx, row) in rows
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(body_height)
    {
        let selected = idx == app.cursor;
        let line = match row {
            DisplayRow::Group {
                level,
                key,
                depth,
                task_count,
                open_tasks,
            } => {
                let row_bg = if selected { app.theme.selection_bg } else { bg };
                let noun = if *task_count == 1 { "task" } else { "tasks" };
                Line::from(vec![
                    Span::styled(
                        format!(" {}\u{25BE} ", "  ".repeat(*depth)),
                        Style::default().fg(app.theme.dim).bg(row_bg),
                    ),
                    Span::styled(
                        format!("{}: {}", level.label(), key),
                        Style::default()
                            .fg(app.theme.highlight)
                            .bg(row_bg)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  ({} {}, {} open)", task_count, noun, open_tasks),
                        Style::default().fg(app.theme.dim).bg(row_bg),
                    ),
                ])
            }
            DisplayRow::Task { record, depth } => {
                task_line(app, columns, record, *depth, total_width, selected)
            }
        };
        lines.push(line);
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn header_line(app: &App, columns: &[Column], total_width: usize) -> Line<'static> {
    let style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD);
    let widths = column_widths(columns, total_width, 0);
    let mut text = String::from(" ");
    for (i, (c, w)) in columns.iter().zip(widths).enumerate() {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(&fit_to_width(c.header, w, c.right));
    }
    Line::from(Span::styled(text, style))
}

fn task_line(
    app: &App,
    columns: &[Column],
    record: &TaskRecord,
    depth: usize,
    total_width: usize,
    selected: bool,
) -> Line<'static> {
    let row_bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let text_color = if selected {
        app.theme.text_bright
    } else {
        app.theme.text
    };
    let indent = "  ".repeat(depth);
    let widths = column_widths(columns, total_width, indent.len());

    let mut spans = vec![Span::styled(
        format!(" {}", indent),
        Style::default().bg(row_bg),
    )];
    for (i, (c, w)) in columns.iter().zip(widths).enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", Style::default().bg(row_bg)));
        }
        let fg = cell_color(app, record, c.field).unwrap_or(text_color);
        let value = record.value(c.field).as_string();
        spans.push(Span::styled(
            fit_to_width(&value, w, c.right),
            Style::default().fg(fg).bg(row_bg),
        ));
    }
    Line::from(spans)
}

/// Status fields carry their own color
fn cell_color(app: &App, record: &TaskRecord, field: Field) -> Option<Color> {
    match field {
        Field::Criticality => Some(app.theme.criticality_color(record.criticality)),
        Field::Compliance => Some(app.theme.compliance_color(record.compliance)),
        Field::TaskId => Some(app.theme.cyan),
        _ => None,
    }
}
