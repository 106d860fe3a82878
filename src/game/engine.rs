use std::time::Duration;

use rand::{rngs::ThreadRng, Rng};
use tracing::{debug, info, warn};

use super::{
    action::Direction,
    clock::Clock,
    config::GameConfig,
    display::{Display, Fill, Region, TextField},
    state::{CollisionType, GamePhase, GameState, Position, Snake},
};
use crate::persistence::ScoreStore;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No game is running
    Inactive,
    /// Running, but no direction has been chosen yet
    Waiting,
    /// Snake moved one cell
    Moved,
    /// Snake moved onto the food and grew
    Ate,
    /// Snake hit something and the game is over
    Collided(CollisionType),
}

/// The game engine: owns the state of the current game and its collaborators
///
/// Nothing in here runs on its own. The owner waits for the clock and calls
/// [`tick`](Self::tick), and forwards key presses to
/// [`handle_direction_input`](Self::handle_direction_input).
pub struct GameEngine<C, D, S, R = ThreadRng> {
    config: GameConfig,
    state: GameState,
    high_score: u32,
    clock: C,
    display: D,
    store: S,
    rng: R,
}

impl<C: Clock, D: Display, S: ScoreStore> GameEngine<C, D, S, ThreadRng> {
    /// Create an engine showing the start screen
    pub fn new(config: GameConfig, clock: C, display: D, store: S) -> Self {
        Self::with_rng(config, clock, display, store, rand::thread_rng())
    }
}

impl<C: Clock, D: Display, S: ScoreStore, R: Rng> GameEngine<C, D, S, R> {
    /// Create an engine with a caller-provided random source
    pub fn with_rng(config: GameConfig, clock: C, display: D, store: S, rng: R) -> Self {
        let high_score = store.get();
        let start = config.start_position();
        let state = GameState::new(
            Snake::new(start),
            start,
            config.board_size,
            config.initial_tick_ms,
        );

        let mut engine = Self {
            config,
            state,
            high_score,
            clock,
            display,
            store,
            rng,
        };
        engine.show_initial_screen();
        engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Start a new game, discarding whatever state came before
    pub fn init(&mut self) {
        let start = self.config.start_position();
        self.state = GameState::new(
            Snake::new(start),
            start,
            self.config.board_size,
            self.config.initial_tick_ms,
        );
        self.state.phase = GamePhase::Running;

        self.display.set_text(TextField::Score, "0".to_string());
        self.display
            .set_text(TextField::HighScore, self.high_score.to_string());
        self.display.set_visible(Region::GameOver, false);
        self.display.set_visible(Region::StartButton, false);
        self.display.set_visible(Region::Board, true);
        self.display.clear(Fill::Background);

        self.place_food();
        self.clock.start(self.tick_interval());

        info!(high_score = self.high_score, "game started");
    }

    /// Queue a turn for the next tick
    ///
    /// Only turns onto the other axis are accepted, so holding or mashing keys
    /// between ticks can never point the snake back into its neck. Returns
    /// whether the turn was queued.
    pub fn handle_direction_input(&mut self, direction: Direction) -> bool {
        if !self.state.is_running() {
            return false;
        }
        if !direction.turns_from(self.state.direction) {
            return false;
        }
        self.state.pending_direction = Some(direction);
        true
    }

    /// Advance the game by one step
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Inactive;
        }

        self.commit_direction();

        let Some(direction) = self.state.direction else {
            self.render();
            return TickOutcome::Waiting;
        };

        let new_head = self.state.snake.head().moved_in_direction(direction);
        self.state.snake.push_head(new_head);

        // Checked before the tail moves, leaving the collided shape for the
        // last frame
        if let Some(collision) = self.check_collision(new_head) {
            debug!(?collision, x = new_head.x, y = new_head.y, "collision");
            self.game_over();
            return TickOutcome::Collided(collision);
        }

        let outcome = if new_head == self.state.food {
            self.state.score += 1;
            self.display
                .set_text(TextField::Score, self.state.score.to_string());
            self.place_food();

            self.state.tick_interval_ms = self.config.faster(self.state.tick_interval_ms);
            self.clock.start(self.tick_interval());
            debug!(
                score = self.state.score,
                tick_ms = self.state.tick_interval_ms,
                "food eaten"
            );
            TickOutcome::Ate
        } else {
            self.state.snake.pop_tail();
            TickOutcome::Moved
        };

        self.render();
        outcome
    }

    /// Draw the current state onto the display
    pub fn render(&mut self) {
        let tile = self.config.tile_size;
        let size = self.config.square_size();

        self.display.clear(Fill::Background);
        for segment in &self.state.snake.body {
            self.display
                .fill_square(segment.x * tile, segment.y * tile, size, Fill::Snake);
        }
        let food = self.state.food;
        self.display
            .fill_square(food.x * tile, food.y * tile, size, Fill::Food);
    }

    /// Leave the game-over screen for the start screen
    pub fn play_again(&mut self) {
        if self.state.is_running() {
            self.clock.stop();
        }
        self.state.phase = GamePhase::Idle;

        self.display.set_visible(Region::GameOver, false);
        self.display.set_visible(Region::StartButton, true);
        self.display.set_visible(Region::Board, true);
        self.show_initial_screen();
    }

    fn show_initial_screen(&mut self) {
        self.display.clear(Fill::Background);
        self.display
            .set_text(TextField::HighScore, self.high_score.to_string());
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.state.tick_interval_ms)
    }

    fn commit_direction(&mut self) {
        let Some(pending) = self.state.pending_direction else {
            return;
        };
        // A one-cell snake has no neck, so it may turn around
        let reverses = self
            .state
            .direction
            .is_some_and(|current| current.is_opposite(pending));
        if self.state.snake.len() == 1 || !reverses {
            self.state.direction = Some(pending);
        }
    }

    /// `pos` is already the snake's head; the tail has not moved yet
    fn check_collision(&self, pos: Position) -> Option<CollisionType> {
        if !self.state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }
        if self.state.snake.collides_with_body(pos) {
            return Some(CollisionType::SelfCollision);
        }
        None
    }

    /// Put the food on a random cell not covered by the snake
    ///
    /// Rejection sampling with no retry limit: a board completely covered by
    /// the snake would loop forever.
    fn place_food(&mut self) {
        loop {
            let x = self.rng.gen_range(0..self.config.board_size);
            let y = self.rng.gen_range(0..self.config.board_size);
            let pos = Position::new(x, y);

            if !self.state.snake.occupies(pos) {
                self.state.food = pos;
                return;
            }
        }
    }

    fn game_over(&mut self) {
        self.state.phase = GamePhase::GameOver;
        self.clock.stop();

        self.display.set_visible(Region::Board, false);
        self.display.set_visible(Region::GameOver, true);
        self.display
            .set_text(TextField::FinalScore, self.state.score.to_string());

        info!(score = self.state.score, "game over");

        if self.state.score > self.high_score {
            self.high_score = self.state.score;
            if let Err(err) = self.store.set(self.high_score) {
                warn!(error = %err, "failed to save high score");
            }
            self.display
                .set_text(TextField::HighScore, self.high_score.to_string());
            info!(high_score = self.high_score, "new high score");
        }
    }
}
