use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Style},
    text::Text,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::{
    components::scene::Scene,
    config::Display,
    constants::RESIZE_HINT,
    game::{GameError, Session, Tuning, Viewport},
};

pub const BORDER: Color = Color::from_u32(6315991);

/// The part of `area` left inside the border.
pub fn playfield(area: Rect) -> Rect {
    area.inner(Margin { horizontal: 1, vertical: 1 })
}

/// Pixel viewport for the playfield inside a terminal of size `area`.
pub fn viewport_for(area: Rect, display: &Display, tuning: &Tuning) -> Result<Viewport, GameError> {
    let playfield = playfield(area);
    Viewport::new(
        f32::from(playfield.width) * display.cell_width,
        f32::from(playfield.height) * display.cell_height,
        tuning,
    )
}

pub fn render_border(frame: &mut Frame, rect: Rect) {
    let border = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(BORDER).bg(Color::Black));
    frame.render_widget(border, rect);
}

pub fn render_resize_message(frame: &mut Frame, rect: Rect, error: &GameError) {
    let [_, area, _] = Layout::vertical([Constraint::Fill(1), Constraint::Length(3), Constraint::Fill(1)]).areas(rect);
    let message = Paragraph::new(Text::from(vec![
        RESIZE_HINT.into(),
        "".into(),
        error.to_string().into(),
    ]))
    .style(Style::default().fg(Color::Cyan))
    .alignment(Alignment::Center);
    frame.render_widget(message, area);
}

/// Draws one frame: the border, then either the game or why it cannot be shown.
pub fn draw(frame: &mut Frame, session: &Session, display: &Display, resize_error: Option<&GameError>) {
    let area = frame.area();
    render_border(frame, area);

    let inner = playfield(area);
    match resize_error {
        Some(error) => render_resize_message(frame, inner, error),
        None => frame.render_widget(Scene::new(session, display), inner),
    }
}
