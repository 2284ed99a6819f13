//! Success toast rendering

use crate::state::Toast;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_WIDTH: u16 = 38;
const TOAST_HEIGHT: u16 = 5;

/// Draw the success banner sliding in from the right edge
pub fn draw(frame: &mut Frame, area: Rect, toast: &Toast, accent: Color) {
    if area.width < TOAST_WIDTH + 2 || area.height < TOAST_HEIGHT + 1 {
        return;
    }

    // Slide from just past the right edge into the top-right corner
    let final_x = area.width - TOAST_WIDTH - 1;
    let travel = (TOAST_WIDTH + 1) as f32;
    let offset = ((1.0 - toast.progress) * travel) as u16;
    let x = (final_x + offset).min(area.width.saturating_sub(1));
    let width = TOAST_WIDTH.min(area.width - x);

    let toast_area = Rect {
        x,
        y: 1,
        width,
        height: TOAST_HEIGHT,
    };

    let block = Block::default()
        .title(" Message Sent! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let body = Paragraph::new(vec![
        Line::from(" Thanks for completing the form."),
        Line::from(" We'll be in touch soon."),
        Line::from(vec![
            Span::raw(" Ref: "),
            Span::styled(
                toast.reference.clone(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]),
    ]);

    frame.render_widget(Clear, toast_area);
    frame.render_widget(body.block(block), toast_area);
}
