//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form;
mod toast;

use crate::app::App;
use crate::config::TuiConfig;
use crate::platform;
use crate::submit::SubmissionSink;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw<S: SubmissionSink>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let (form_area, help_area) = if app.config.show_help_bar() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    form::draw(frame, form_area, app);

    if let Some(help_area) = help_area {
        draw_help_bar(frame, help_area);
    }

    if let Some(ref toast) = app.state.toast {
        toast::draw(frame, area, toast, accent_color(&app.config));
    }
}

/// Resolve the configured accent color name, falling back to cyan
pub(crate) fn accent_color(config: &TuiConfig) -> Color {
    config.accent_color().parse().unwrap_or(Color::Cyan)
}

fn draw_help_bar(frame: &mut Frame, area: ratatui::layout::Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", key_style),
        Span::raw(": next field  "),
        Span::styled(platform::SUBMIT_SHORTCUT, key_style),
        Span::raw(": submit  "),
        Span::styled(platform::PASTE_SHORTCUT, key_style),
        Span::raw(": paste  "),
        Span::styled("Esc", key_style),
        Span::raw(": clear  "),
        Span::styled("Ctrl+C", key_style),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
