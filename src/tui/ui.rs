//! UI layout and rendering logic for the picker TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app::App;

/// Render the main UI
pub fn render_ui(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Panels
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(20)])
        .split(main_layout[0]);

    render_algorithm_list(frame, app, panels[0]);
    render_results(frame, app, panels[1]);
    render_status_bar(frame, app, main_layout[1]);

    if app.show_help {
        render_help_overlay(frame);
    }
}

/// Render the radio-group list of algorithms
fn render_algorithm_list(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if app.algorithms.is_empty() {
        lines.push(Line::from(Span::styled(
            "no scripts found",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, name) in app.algorithms.iter().enumerate() {
        let marker = if app.marked == Some(i) { "(x) " } else { "( ) " };
        let mut style = if app.marked == Some(i) {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        if i == app.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(Span::styled(format!("{}{}", marker, name), style)));
    }

    // Keep the cursor visible when the list outgrows the panel
    let available_height = area.height.saturating_sub(2) as usize;
    let scroll_y = app.cursor.saturating_sub(available_height.saturating_sub(1)) as u16;

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("Algorithms"))
        .scroll((scroll_y, 0));

    frame.render_widget(paragraph, area);
}

/// Render the results panel, which doubles as the loading indicator while a
/// cycle is in flight
fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if app.is_running {
        lines.push(Line::from(Span::styled(
            format!("Running {}…", app.running_name),
            Style::default().fg(Color::Yellow),
        )));
    } else {
        let style = if app.result_is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Cyan)
        };
        for line in &app.results {
            lines.push(Line::from(Span::styled(line.clone(), style)));
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .wrap(Wrap { trim: false })
        .scroll((app.results_scroll as u16, 0));

    frame.render_widget(paragraph, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status_text = truncate_to_width(&app.status_message, area.width as usize);

    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_paragraph, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_area = centered_rect(60, 60, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let help_lines = vec![
        Line::from("Algorithm Picker Help"),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("  ↑/↓ or k/j - Move cursor"),
        Line::from("  Space      - Mark algorithm (radio select)"),
        Line::from("  Enter      - Run the marked algorithm"),
        Line::from("  PgUp/PgDn  - Scroll results"),
        Line::from(""),
        Line::from("Other:"),
        Line::from("  r          - Rescan the scripts directory"),
        Line::from("  F1/Ctrl+H  - Toggle this help"),
        Line::from("  q / Esc    - Quit"),
        Line::from("  Ctrl+C ×2  - Quit"),
    ];

    let help_paragraph = Paragraph::new(Text::from(help_lines))
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: false });

    frame.render_widget(help_paragraph, popup_area);
}

/// Create a centered rect using percentages of the available area
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Display-width-aware truncation for the status bar
fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + cw > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        width += cw;
    }
    out.push('…');
    out
}
