use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng};
use ratatui::prelude::Rect;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::{
    action::Action,
    config::Config,
    constants::game::{INITIAL_HEIGHT, INITIAL_WIDTH},
    game::{GameError, Session, Viewport},
    tui, ui,
};

pub struct App {
    config: Config,
    tick_rate: f64,
    frame_rate: f64,
    should_quit: bool,
    should_suspend: bool,
    session: Session,
    resize_error: Option<GameError>,
}

impl App {
    /// The session starts on a nominal playfield, the first resize replaces it with the terminal's.
    pub fn new(config: Config, seed: Option<u64>) -> Result<Self> {
        let (tick_rate, frame_rate) = (config.tick_rate, config.frame_rate);
        let tuning = config.tuning.clone();
        let viewport = Viewport::new(INITIAL_WIDTH, INITIAL_HEIGHT, &tuning)?;
        let rng = match seed {
            Some(seed) => {
                info!(seed, "seeding pipe gaps");
                StdRng::seed_from_u64(seed)
            },
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            tick_rate,
            frame_rate,
            should_quit: false,
            should_suspend: false,
            session: Session::new(tuning, viewport, rng),
            resize_error: None,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?;
        tui.tick_rate(self.tick_rate);
        tui.frame_rate(self.frame_rate);
        tui.enter()?;

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Init => {
                        let size = tui.size()?;
                        action_tx.send(Action::Resize(size.width, size.height))?;
                    },
                    tui::Event::Closed => action_tx.send(Action::Quit)?,
                    tui::Event::Error => action_tx.send(Action::Error("terminal event stream failed".to_string()))?,
                    tui::Event::Tick => action_tx.send(Action::Tick)?,
                    tui::Event::Render => action_tx.send(Action::Render)?,
                    tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                    tui::Event::Key(key) => {
                        if let Some(action) = Action::from_key_event(key) {
                            debug!("Got action: {action}");
                            action_tx.send(action)?;
                        }
                    },
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    debug!("{action:?}");
                }
                match action {
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        self.resize(w, h);
                        self.render(&mut tui)?;
                    },
                    Action::Render => self.render(&mut tui)?,
                    ref action => self.update(action),
                }
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = tui::Tui::new()?;
                tui.tick_rate(self.tick_rate);
                tui.frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    /// Everything that does not need the terminal.
    fn update(&mut self, action: &Action) {
        match action {
            Action::Tick => {
                if self.resize_error.is_none() {
                    self.session.tick();
                }
            },
            Action::Activate => {
                if self.resize_error.is_none() {
                    self.session.activate();
                }
            },
            Action::Quit => self.should_quit = true,
            Action::Suspend => self.should_suspend = true,
            Action::Resume => self.should_suspend = false,
            Action::Error(message) => {
                error!("{message}");
                self.should_quit = true;
            },
            Action::Render | Action::Resize(..) => {},
        }
    }

    /// A terminal too small for the pipes freezes the game until it grows again.
    fn resize(&mut self, width: u16, height: u16) {
        match ui::viewport_for(Rect::new(0, 0, width, height), &self.config.display, self.session.tuning()) {
            Ok(viewport) => {
                if self.resize_error.take().is_some() {
                    info!(width, height, "terminal large enough again");
                }
                self.session.resize(viewport);
            },
            Err(e) => {
                warn!(width, height, "{e}");
                self.resize_error = Some(e);
            },
        }
    }

    fn render(&self, tui: &mut tui::Tui) -> Result<()> {
        tui.draw(|f| ui::draw(f, &self.session, &self.config.display, self.resize_error.as_ref()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::game::Phase;

    fn config() -> Config {
        Config::defaults().unwrap().build().unwrap().try_deserialize().unwrap()
    }

    fn app() -> App {
        let config = config();
        App::new(config, Some(7)).unwrap()
    }

    #[test]
    fn test_starts_on_nominal_playfield() {
        let app = app();
        assert_eq!(app.session.phase(), Phase::Start);
        assert_eq!(app.session.viewport().width(), INITIAL_WIDTH);
        assert_eq!(app.session.viewport().height(), INITIAL_HEIGHT);
    }

    #[test]
    fn test_rejects_tuning_that_cannot_fit() {
        let mut config = config();
        config.tuning.pipe_gap = 600.0;
        assert!(App::new(config, None).is_err());
    }

    #[test]
    fn test_activate_and_tick() {
        let mut app = app();
        app.update(&Action::Activate);
        app.update(&Action::Tick);
        assert_eq!(app.session.phase(), Phase::Playing);
        assert_eq!(app.session.score(), 1);
    }

    #[test]
    fn test_small_terminal_freezes_game() {
        let mut app = app();
        app.update(&Action::Activate);
        app.resize(40, 10);
        assert!(app.resize_error.is_some());

        app.update(&Action::Tick);
        app.update(&Action::Activate);
        assert_eq!(app.session.score(), 0);
        assert_eq!(app.session.bird().velocity(), 0.0);

        app.resize(52, 39);
        assert_eq!(app.resize_error, None);
        assert_eq!(app.session.viewport().height(), 592.0);
        app.update(&Action::Tick);
        assert_eq!(app.session.score(), 1);
    }

    #[test]
    fn test_quit_suspend_resume() {
        let mut app = app();
        app.update(&Action::Suspend);
        assert!(app.should_suspend);
        app.update(&Action::Resume);
        assert!(!app.should_suspend);
        assert!(!app.should_quit);
        app.update(&Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_error_quits() {
        let mut app = app();
        app.update(&Action::Error("boom".to_string()));
        assert!(app.should_quit);
    }
}
