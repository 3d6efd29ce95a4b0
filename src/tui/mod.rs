//! Terminal UI for Strictly 2048

mod animation;
mod app;
mod input;
mod palette;
mod ui;

pub use animation::{Animation, CellEffect};
pub use app::App;
pub use input::{Action, action_for};
pub use palette::Theme;

use crate::config::AppConfig;
use crate::high_score::{FileHighScore, HighScoreStore};
use crate::session::GameSession;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument};

/// Run the TUI until the player quits.
#[instrument(skip_all, fields(size = config.board_size(), seed = ?config.seed()))]
pub fn run_tui(config: AppConfig) -> Result<()> {
    // Log to a file so output doesn't tear the screen
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Strictly 2048 TUI");

    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };
    let store = FileHighScore::new(config.high_score_file().clone());
    let session = GameSession::new(*config.board_size(), store, rng)?;
    let mut app = App::new(session, *config.animation_frames()).with_theme(*config.theme());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, Duration::from_millis(*config.tick_ms()));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => info!(
            score = app.session().score(),
            high_score = app.session().high_score(),
            "TUI exited"
        ),
        Err(e) => error!(error = %e, "TUI loop failed"),
    }
    result
}

fn run_loop<S: HighScoreStore, R: Rng>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S, R>,
    tick: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && let Some(action) = action_for(key)
        {
            debug!(?action, "Key mapped");
            app.apply(action);
        }

        if app.should_quit() {
            return Ok(());
        }

        if last_tick.elapsed() >= tick {
            app.tick();
            last_tick = Instant::now();
        }
    }
}
