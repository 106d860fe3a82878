use super::action::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// Create a one-cell snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Create a snake from explicit segments, head first
    #[cfg(test)]
    pub(crate) fn from_segments(body: Vec<Position>) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Check if any segment, head included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Put a new head in front of the current one
    pub fn push_head(&mut self, head: Position) {
        self.body.insert(0, head);
    }

    /// Drop the last segment; a snake never shrinks below one cell
    pub fn pop_tail(&mut self) -> Option<Position> {
        if self.body.len() > 1 {
            self.body.pop()
        } else {
            None
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Start screen, no game has been started since the last reset
    #[default]
    Idle,
    Running,
    GameOver,
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Committed direction; `None` until the first accepted input
    pub direction: Option<Direction>,
    /// Direction queued by input, committed on the next tick
    pub pending_direction: Option<Direction>,
    pub food: Position,
    pub score: u32,
    pub tick_interval_ms: u64,
    pub phase: GamePhase,
    pub board_size: i32,
}

impl GameState {
    /// Create a fresh, not yet running game state
    pub fn new(snake: Snake, food: Position, board_size: i32, tick_interval_ms: u64) -> Self {
        Self {
            snake,
            direction: None,
            pending_direction: None,
            food,
            score: 0,
            tick_interval_ms,
            phase: GamePhase::Idle,
            board_size,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.board_size && pos.y >= 0 && pos.y < self.board_size
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(10, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(10, 10));
        assert!(snake.body_segments().is_empty());
    }

    #[test]
    fn test_push_and_pop() {
        let mut snake = Snake::from_segments(vec![Position::new(5, 5), Position::new(4, 5)]);

        snake.push_head(Position::new(6, 5));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));

        assert_eq!(snake.pop_tail(), Some(Position::new(4, 5)));
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_pop_tail_keeps_last_segment() {
        let mut snake = Snake::new(Position::new(1, 1));
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::from_segments(vec![
            Position::new(5, 5),
            Position::new(4, 5),
            Position::new(3, 5),
        ]);
        assert!(!snake.collides_with_body(Position::new(5, 5))); // head
        assert!(snake.collides_with_body(Position::new(4, 5))); // body
        assert!(!snake.collides_with_body(Position::new(10, 10))); // empty
        assert!(snake.occupies(Position::new(5, 5)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5)),
            Position::new(10, 10),
            20,
            200,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(0, -1)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(Snake::new(Position::new(5, 5)), Position::new(1, 1), 20, 200);
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(!state.is_running());
        assert!(!state.is_over());
        assert_eq!(state.direction, None);
    }
}
