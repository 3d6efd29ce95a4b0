//! Application state and logic.

use super::animation::Animation;
use super::input::Action;
use super::palette::Theme;
use crate::high_score::HighScoreStore;
use crate::session::{GameSession, SessionEvent};
use rand::Rng;
use strictly_2048::Phase;
use tracing::{debug, error};

/// Main application state.
pub struct App<S, R> {
    session: GameSession<S, R>,
    animation: Animation,
    theme: Theme,
    status_message: String,
    should_quit: bool,
}

impl<S: HighScoreStore, R: Rng> App<S, R> {
    /// Creates an application around a running session.
    pub fn new(session: GameSession<S, R>, animation_frames: u8) -> Self {
        Self {
            session,
            animation: Animation::new(animation_frames),
            theme: Theme::default(),
            status_message: "Use the arrow keys to slide the tiles".to_string(),
            should_quit: false,
        }
    }

    /// Starts with the given colour scheme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Gets the colour scheme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession<S, R> {
        &self.session
    }

    /// Gets the move highlight.
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns true when the game over banner should be shown.
    pub fn is_game_over(&self) -> bool {
        self.session.phase() == Phase::GameOver
    }

    /// Applies a player action.
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::Quit => self.should_quit = true,
            Action::Restart => {
                self.session.restart();
                self.animation.reset();
                self.status_message = "New game".to_string();
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.status_message = format!("{} theme", self.theme);
            }
            Action::Move(direction) => match self.session.handle(direction) {
                Ok(SessionEvent::Moved(report)) => {
                    self.animation.start(&report, self.session.board());
                    self.status_message = if report.score_delta > 0 {
                        format!("{} +{}", direction, report.score_delta)
                    } else {
                        direction.to_string()
                    };
                }
                Ok(SessionEvent::GameOver { report, outcome }) => {
                    self.animation.start(&report, self.session.board());
                    self.status_message = format!("{}. Press r to play again", outcome);
                }
                Ok(SessionEvent::Unchanged(direction)) => {
                    self.status_message = format!("Nothing moves {}", direction);
                }
                Ok(SessionEvent::Ignored) => {}
                Err(e) => {
                    error!(error = %e, "Move failed");
                    self.status_message = format!("Move error: {}", e);
                }
            },
        }
    }

    /// Advances the animation by one frame.
    pub fn tick(&mut self) {
        self.animation.tick();
    }
}
