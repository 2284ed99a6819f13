//! Field rendering utilities for the contact form

use crate::state::QueryType;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Border color for a field given focus and validation state
fn border_color(is_active: bool, has_error: bool, accent: Color) -> Color {
    if is_active {
        accent
    } else if has_error {
        Color::Red
    } else {
        Color::DarkGray
    }
}

/// Split the bottom row off for the error message, when one is present
fn split_error_row(area: Rect, error: Option<&str>) -> (Rect, Option<Rect>) {
    match error {
        Some(_) if area.height > 1 => {
            let field = Rect {
                height: area.height - 1,
                ..area
            };
            let message = Rect {
                y: area.y + area.height - 1,
                height: 1,
                ..area
            };
            (field, Some(message))
        }
        _ => (area, None),
    }
}

fn draw_error_line(frame: &mut Frame, area: Rect, error: &str) {
    let line = Paragraph::new(Line::from(Span::styled(
        format!(" {error}"),
        Style::default().fg(Color::Red),
    )));
    frame.render_widget(line, area);
}

/// Draw a bordered text input with its label, cursor and error line
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
    error: Option<&str>,
    accent: Color,
) {
    let (field_area, error_area) = split_error_row(area, error);

    let text_style = if is_active {
        Style::default().fg(accent)
    } else {
        Style::default()
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(accent)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(accent),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value.to_string(), text_style),
            Span::styled(cursor, Style::default().fg(accent)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_active, error.is_some(), accent)));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), field_area);

    if let Some((message_area, message)) = error_area.zip(error) {
        draw_error_line(frame, message_area, message);
    }
}

/// Draw the query-type radio group
pub fn draw_query_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    current: &str,
    is_active: bool,
    error: Option<&str>,
    accent: Color,
) {
    let (field_area, error_area) = split_error_row(area, error);

    let mut spans = Vec::new();
    for query in QueryType::ALL {
        let selected = current == query.label();
        let marker = if selected { "(•)" } else { "( )" };
        let style = if selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else if is_active {
            Style::default().fg(accent)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {marker} {} ", query.label()), style));
        spans.push(Span::raw("  "));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_active, error.is_some(), accent)));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), field_area);

    if let Some((message_area, message)) = error_area.zip(error) {
        draw_error_line(frame, message_area, message);
    }
}

/// Draw the consent checkbox with its label
pub fn draw_consent_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    checked: bool,
    is_active: bool,
    error: Option<&str>,
    accent: Color,
) {
    let (field_area, error_area) = split_error_row(area, error);

    let marker = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let line = Paragraph::new(Line::from(Span::styled(format!(" {marker} {label}"), style)));
    frame.render_widget(line, field_area);

    if let Some((message_area, message)) = error_area.zip(error) {
        draw_error_line(frame, message_area, message);
    }
}
