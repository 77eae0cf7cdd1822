use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::game::{Die, GameSession};

use super::board_view;
use super::input::{Buttons, FrameInput, Viewport};
use super::scene::Scene;

pub struct App {
    config_path: PathBuf,
    config: GameConfig,
    session: GameSession,
    die: Die,
    buttons: Buttons,
    viewport: Viewport,
    should_quit: bool,
}

impl App {
    pub fn new(config_path: PathBuf, config: GameConfig, die: Die) -> Self {
        App {
            session: GameSession::new(&config),
            buttons: Buttons::from_config(&config),
            config_path,
            config,
            die,
            viewport: Viewport::default(),
            should_quit: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop, one iteration per frame at the configured rate
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        let mut deadline = Instant::now();

        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            // Re-read each frame so a reset can change the rate
            deadline += self.frame_duration();
            let now = Instant::now();
            if deadline < now {
                // Fell behind; don't try to catch up with a burst of frames
                deadline = now;
            }

            let input = self.collect_input(deadline)?;
            self.step(input);
            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.config.frame_rate.max(1)))
    }

    /// Gather events until the frame deadline
    fn collect_input(&self, deadline: Instant) -> io::Result<FrameInput> {
        let mut input = FrameInput::default();
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            let event = event::read()?;
            input.record(&event, &self.viewport, &self.buttons);
        }
        Ok(input)
    }

    /// Apply one frame of input, then advance the game by one tick
    pub fn step(&mut self, input: FrameInput) {
        if input.quit {
            info!("Quit requested");
            self.should_quit = true;
            return;
        }

        if input.roll {
            let amount = self.die.roll();
            let outcome = self.session.request_roll(amount);
            debug!(amount, ?outcome, "Roll requested");
        }

        if input.reset {
            self.reset();
        }

        self.session.tick();
    }

    /// Re-read the configuration and start over
    fn reset(&mut self) {
        match GameConfig::load_or_default(&self.config_path) {
            Ok(config) => self.config = config,
            Err(err) => warn!(
                error = %err,
                path = %self.config_path.display(),
                "Reloading config failed, keeping the previous one"
            ),
        }
        info!("Resetting game");
        self.session = GameSession::new(&self.config);
        self.buttons = Buttons::from_config(&self.config);
    }

    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.viewport = Viewport::new(frame.area());
        let scene = Scene::capture(&self.session);
        board_view::render(frame, &scene, &self.config);
    }
}
