//! Contact form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_consent_field, draw_query_field, draw_text_field};
use crate::app::App;
use crate::state::{FieldName, FormFocus};
use crate::submit::SubmissionSink;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Extra row a field slot needs when its error message is showing
fn error_rows<S: SubmissionSink>(app: &App<S>, name: FieldName) -> u16 {
    u16::from(app.state.form.error(name).is_some())
}

/// Draw the whole form: fields, submit button, inline errors
pub fn draw<S: SubmissionSink>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let accent = super::accent_color(&app.config);
    let form = &app.state.form;
    let focus = app.state.focus;

    let title = match app.sent_count() {
        0 => " Contact Us ".to_string(),
        1 => " Contact Us · 1 message sent ".to_string(),
        n => format!(" Contact Us · {n} messages sent "),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, area);

    let name_error_rows = error_rows(app, FieldName::FirstName).max(error_rows(app, FieldName::LastName));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3 + name_error_rows), // First / Last name
            Constraint::Length(3 + error_rows(app, FieldName::Email)), // Email
            Constraint::Length(3 + error_rows(app, FieldName::Query)), // Query type
            Constraint::Min(5 + error_rows(app, FieldName::Message)), // Message
            Constraint::Length(1 + error_rows(app, FieldName::Consent)), // Consent
            Constraint::Length(BUTTON_HEIGHT),       // Submit
        ])
        .margin(1)
        .split(area);

    let name_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_text_field(
        frame,
        name_row[0],
        FieldName::FirstName.label(),
        &form.values().first_name,
        focus == FormFocus::FirstName,
        false,
        form.error(FieldName::FirstName),
        accent,
    );
    draw_text_field(
        frame,
        name_row[1],
        FieldName::LastName.label(),
        &form.values().last_name,
        focus == FormFocus::LastName,
        false,
        form.error(FieldName::LastName),
        accent,
    );
    draw_text_field(
        frame,
        chunks[1],
        FieldName::Email.label(),
        &form.values().email,
        focus == FormFocus::Email,
        false,
        form.error(FieldName::Email),
        accent,
    );
    draw_query_field(
        frame,
        chunks[2],
        FieldName::Query.label(),
        &form.values().query,
        focus == FormFocus::Query,
        form.error(FieldName::Query),
        accent,
    );
    draw_text_field(
        frame,
        chunks[3],
        FieldName::Message.label(),
        &form.values().message,
        focus == FormFocus::Message,
        true,
        form.error(FieldName::Message),
        accent,
    );
    draw_consent_field(
        frame,
        chunks[4],
        FieldName::Consent.label(),
        form.values().consent,
        focus == FormFocus::Consent,
        form.error(FieldName::Consent),
        accent,
    );

    // Center the submit button under the fields
    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(chunks[5]);
    render_button(
        frame,
        button_area[1],
        "Submit",
        focus == FormFocus::Submit,
        accent,
    );
}
