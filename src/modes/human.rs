use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use crate::game::{GameConfig, GameEngine, GamePhase, TokioClock};
use crate::input::{InputHandler, KeyAction};
use crate::persistence::ScoreStore;
use crate::render::{Renderer, Screen};

/// Keyboard-driven game in the terminal
pub struct HumanMode<S: ScoreStore> {
    engine: GameEngine<TokioClock, Screen, S>,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl<S: ScoreStore> HumanMode<S> {
    pub fn new(config: GameConfig, store: S) -> Self {
        let renderer = Renderer::new(&config);
        let screen = Screen::new(config.surface_size());
        let engine = GameEngine::new(config, TokioClock::new(), screen, store);

        Self {
            engine,
            renderer,
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Redraw at 30 FPS, independent of the game speed
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick, only while a game is running
                _ = self.engine.clock_mut().tick() => {
                    self.engine.tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.display());
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quit requested");
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => {
                    self.engine.handle_direction_input(direction);
                }
                KeyAction::Confirm => self.confirm(),
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    /// Enter acts as whichever button the current screen shows
    fn confirm(&mut self) {
        match self.engine.state().phase {
            GamePhase::Idle => self.engine.init(),
            GamePhase::GameOver => self.engine.play_again(),
            GamePhase::Running => {}
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
