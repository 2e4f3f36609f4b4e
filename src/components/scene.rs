use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use crate::{
    components::multiline::MultiLine,
    config::Display,
    constants::{game, GAME_OVER_TEXT, JUMP_HINT, RETRY_HINT, START_HINT, TITLE_TEXT},
    game::{Bird, Hitbox, Phase, Session},
};

/// Animation frame of the bird, picked from the flap countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Resting,
    Flapping,
}

impl Sprite {
    pub fn of(bird: &Bird) -> Self {
        if bird.is_flapping() {
            Sprite::Flapping
        } else {
            Sprite::Resting
        }
    }

    pub fn lines(self) -> &'static [&'static str] {
        match self {
            Sprite::Resting => &game::BIRD_RESTING,
            Sprite::Flapping => &game::BIRD_FLAPPING,
        }
    }
}

/// The playfield: sky, pipes, bird and the text for the current phase.
///
/// Pixels map onto cells through `display`; the area should be the one the session's viewport
/// was derived from.
pub struct Scene<'a> {
    session: &'a Session,
    display: &'a Display,
}

impl<'a> Scene<'a> {
    pub fn new(session: &'a Session, display: &'a Display) -> Self {
        Self { session, display }
    }

    fn col(&self, x: f32) -> i32 {
        (x / self.display.cell_width).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y / self.display.cell_height).floor() as i32
    }

    /// Cells touched by `hitbox`, clipped to `area`.
    fn cells(&self, hitbox: &Hitbox, area: Rect) -> Option<Rect> {
        let left = self.col(hitbox.x).max(0);
        let top = self.row(hitbox.y).max(0);
        let right = ((hitbox.right() / self.display.cell_width).ceil() as i32).min(i32::from(area.width));
        let bottom = ((hitbox.bottom() / self.display.cell_height).ceil() as i32).min(i32::from(area.height));
        if left >= right || top >= bottom {
            return None;
        }
        Some(Rect::new(area.x + left as u16, area.y + top as u16, (right - left) as u16, (bottom - top) as u16))
    }

    fn render_pipes(&self, area: Rect, buf: &mut Buffer) {
        let tuning = self.session.tuning();
        let body = Style::default().fg(game::PIPE_COLOR);
        let lip = Style::default().fg(game::PIPE_LIP_COLOR);

        for pipe in self.session.pipes() {
            let [top, bottom] = pipe.segments(tuning);
            // The lip is the row that borders the gap.
            let segments = [(top, true), (bottom, false)];
            for (segment, lip_at_bottom) in segments {
                let Some(cells) = self.cells(&segment, area) else { continue };
                let lip_row = if lip_at_bottom { cells.bottom() - 1 } else { cells.top() };
                for y in cells.top()..cells.bottom() {
                    let (symbol, style) = if y == lip_row { (game::PIPE_LIP, lip) } else { (game::PIPE_BODY, body) };
                    for x in cells.left()..cells.right() {
                        if let Some(cell) = buf.cell_mut((x, y)) {
                            cell.set_char(symbol).set_style(style);
                        }
                    }
                }
            }
        }
    }

    fn render_bird(&self, area: Rect, buf: &mut Buffer) {
        let bird = self.session.bird();
        MultiLine::new(Sprite::of(bird).lines())
            .offset(self.col(bird.x()), self.row(bird.y()))
            .ignore_whitespace(true)
            .style(Style::default().fg(game::BIRD_COLOR).add_modifier(Modifier::BOLD))
            .render(area, buf);
    }

    /// One line of text centred horizontally on the row holding pixel `y`.
    fn render_text(&self, area: Rect, buf: &mut Buffer, y: f32, line: Line<'_>) {
        let row = self.row(y);
        if row < 0 || row >= i32::from(area.height) {
            return;
        }
        let rect = Rect::new(area.x, area.y + row as u16, area.width, 1);
        Paragraph::new(line).alignment(Alignment::Center).render(rect, buf);
    }

    fn render_score(&self, area: Rect, buf: &mut Buffer) {
        let text = format!("Score: {}", self.session.score());
        MultiLine::new(&[text.as_str()])
            .offset(self.col(10.0), self.row(10.0))
            .style(Style::default().fg(game::TEXT_COLOR).add_modifier(Modifier::BOLD))
            .render(area, buf);
    }

    fn render_start(&self, area: Rect, buf: &mut Buffer) {
        let height = self.session.viewport().height();
        let style = Style::default().fg(game::TEXT_COLOR).add_modifier(Modifier::BOLD);
        self.render_text(area, buf, height / 3.0, Line::styled(TITLE_TEXT, style));
        self.render_text(area, buf, height / 2.0, Line::styled(JUMP_HINT, style));
        self.render_text(area, buf, height / 1.5, Line::styled(START_HINT, style));
    }

    fn render_game_over(&self, area: Rect, buf: &mut Buffer) {
        let viewport = self.session.viewport();
        let (width, height) = (viewport.width(), viewport.height());
        let text = Style::default().fg(game::TEXT_COLOR).add_modifier(Modifier::BOLD);

        self.render_text(area, buf, height / 3.0, Line::styled(GAME_OVER_TEXT, text));

        let button = Hitbox::new(width / 2.0 - game::BUTTON_WIDTH / 2.0, height / 2.0, game::BUTTON_WIDTH, game::BUTTON_HEIGHT);
        if let Some(cells) = self.cells(&button, area) {
            Block::default().style(Style::default().bg(game::BUTTON_COLOR)).render(cells, buf);
        }
        let label = Style::default().fg(Color::Black).bg(game::BUTTON_COLOR);
        self.render_text(area, buf, height / 2.0 + game::BUTTON_HEIGHT / 2.0, Line::styled(RETRY_HINT, label));

        let score = format!("Final Score: {}", self.session.score());
        self.render_text(area, buf, height / 2.0 + game::FINAL_SCORE_OFFSET, Line::styled(score, text));
    }
}

impl Widget for Scene<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        Block::default().style(Style::default().bg(game::SKY_COLOR)).render(area, buf);

        match self.session.phase() {
            Phase::Start => {
                self.render_pipes(area, buf);
                self.render_start(area, buf);
            },
            Phase::Playing => {
                self.render_bird(area, buf);
                self.render_pipes(area, buf);
                self.render_score(area, buf);
            },
            Phase::GameOver => self.render_game_over(area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        components::rows,
        game::{Tuning, Viewport},
    };

    fn display() -> Display {
        Display { cell_width: 8.0, cell_height: 16.0 }
    }

    /// 50x37 cells, 400x592 pixels.
    fn setup() -> (Session, Rect) {
        let tuning = Tuning::default();
        let viewport = Viewport::new(400.0, 592.0, &tuning).unwrap();
        (Session::new(tuning, viewport, StdRng::seed_from_u64(3)), Rect::new(0, 0, 50, 37))
    }

    fn render(session: &Session, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        let display = display();
        Scene::new(session, &display).render(area, &mut buf);
        buf
    }

    fn row_with(rows: &[String], text: &str) -> Option<usize> {
        rows.iter().position(|row| row.contains(text))
    }

    #[test]
    fn test_sprite_follows_flap() {
        let (mut session, _) = setup();
        assert_eq!(Sprite::of(session.bird()), Sprite::Resting);
        session.activate();
        session.activate();
        assert_eq!(Sprite::of(session.bird()), Sprite::Flapping);
        assert_ne!(Sprite::Resting.lines(), Sprite::Flapping.lines());
    }

    #[test]
    fn test_start_screen() {
        let (session, area) = setup();
        let rows = rows(&render(&session, area));
        // 592 / 3 = 197.3 px is row 12, 296 px is row 18, 394.7 px is row 24.
        assert_eq!(row_with(&rows, TITLE_TEXT), Some(12));
        assert_eq!(row_with(&rows, JUMP_HINT), Some(18));
        assert_eq!(row_with(&rows, START_HINT), Some(24));
        assert_eq!(row_with(&rows, "Score"), None);
    }

    #[test]
    fn test_playing_screen() {
        let (mut session, area) = setup();
        session.activate();
        session.tick();
        let buf = render(&session, area);
        let rows = rows(&buf);

        assert_eq!(row_with(&rows, "Score: 1"), Some(0));
        assert_eq!(row_with(&rows, TITLE_TEXT), None);

        // The sprite starts at column 12 (100 px / 8) and row 18, its beak is on the middle row.
        let bird_rows: Vec<usize> =
            rows.iter().enumerate().filter(|(_, row)| row.contains('>')).map(|(index, _)| index).collect();
        assert_eq!(bird_rows, vec![19]);
        assert_eq!(buf.cell((18, 19)).map(|cell| cell.fg), Some(game::BIRD_COLOR));
    }

    #[test]
    fn test_pipes_leave_the_gap_open() {
        let (mut session, area) = setup();
        {
            let (_, pipes) = session.parts_mut();
            pipes.push(crate::game::Pipe::new(200.0, 192.0));
        }
        let rows = rows(&render(&session, area));

        // Columns 25..38 hold the pipe, the gap covers rows 12..27 (192..442 px).
        let column = |row: usize| rows[row].chars().skip(25).take(12).collect::<String>();
        assert_eq!(column(0), "|".repeat(12));
        assert_eq!(column(11), "█".repeat(12));
        assert_eq!(column(12).trim(), "");
        assert_eq!(column(26).trim(), "");
        assert_eq!(column(27), "█".repeat(12));
        assert_eq!(column(36), "|".repeat(12));
        assert!(rows[5].chars().take(25).all(|c| c == ' '));
    }

    #[test]
    fn test_game_over_screen() {
        let (mut session, area) = setup();
        session.activate();
        session.parts_mut().0.place(1000.0, 0.0);
        session.tick();
        assert_eq!(session.phase(), Phase::GameOver);

        let buf = render(&session, area);
        let rows = rows(&buf);
        assert_eq!(row_with(&rows, GAME_OVER_TEXT), Some(12));
        // Button spans 296..356 px, rows 18..23, label on 326 px.
        assert_eq!(row_with(&rows, RETRY_HINT), Some(20));
        assert_eq!(row_with(&rows, "Final Score: 1"), Some(24));
        assert_eq!(buf.cell((25, 18)).map(|cell| cell.bg), Some(game::BUTTON_COLOR));
        assert_eq!(buf.cell((25, 17)).map(|cell| cell.bg), Some(game::SKY_COLOR));
        assert!(!rows[0].contains("Score"));
    }

    #[test]
    fn test_follows_viewport() {
        let (mut session, _) = setup();
        let tuning = session.tuning().clone();
        session.resize(Viewport::new(800.0, 800.0, &tuning).unwrap());
        let rows = rows(&render(&session, Rect::new(0, 0, 100, 50)));
        // 800 / 3 = 266.7 px is row 16.
        assert_eq!(row_with(&rows, TITLE_TEXT), Some(16));
    }
}
