/// Direction the snake can move
///
/// A game that has not received any input yet has no direction at all, which
/// is modelled as `Option<Direction>::None` by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Whether a snake currently heading `current` may queue a turn to `self`.
    ///
    /// Only turns that change the axis of movement are accepted; with no
    /// current direction every turn is.
    pub fn turns_from(&self, current: Option<Direction>) -> bool {
        match current {
            None => true,
            Some(current) => self.is_horizontal() != current.is_horizontal(),
        }
    }
}
