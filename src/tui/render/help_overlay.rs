use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect;

/// Render the help overlay (toggled with ?). Shows the bindings of the
/// layer that has focus.
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Center the overlay, leaving some margin
    let overlay_area = centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;

    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    let bindings: &[(&str, &str)] = if app.filter_panel.is_open() {
        lines.push(Line::from(Span::styled(" Filter panel", header_style)));
        &[
            (" \u{2191}\u{2193}/jk", "Move between rows"),
            (" Tab/S-Tab", "Next/previous cell"),
            (" \u{2190}\u{2192}", "Change field or operator"),
            (" type", "Edit the value cell"),
            (" Ctrl+N", "Suggest a value"),
            (" a / d", "Add / remove row"),
            (" c", "Toggle AND / OR"),
            (" x", "Clear all rows"),
            (" Enter", "Apply (panel stays open)"),
            (" Esc", "Close, discard edits"),
        ]
    } else if app.sort_panel.is_open() {
        lines.push(Line::from(Span::styled(" Sort panel", header_style)));
        &[
            (" \u{2191}\u{2193}/jk", "Move between rules"),
            (" \u{2190}\u{2192}", "Change field"),
            (" o", "Toggle direction"),
            (" J / K", "Move rule down / up"),
            (" a / d", "Add / remove rule"),
            (" x", "Clear all rules"),
            (" Enter", "Apply and close"),
            (" Esc", "Close, discard edits"),
        ]
    } else {
        lines.push(Line::from(Span::styled(" Table", header_style)));
        &[
            (" \u{2191}\u{2193}/jk", "Move cursor up/down"),
            (" g/G", "Jump to top/bottom"),
            (" v", "Cycle flat / contract / hierarchy"),
            (" f", "Open filter panel"),
            (" s", "Open sort panel"),
            (" q/Esc", "Quit"),
        ]
    };
    for (key, desc) in bindings {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
