/// What a filled area represents; the surface picks the actual colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fill {
    Background,
    Snake,
    Food,
}

impl Fill {
    /// RGB colour of this fill
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Fill::Background => (0x1a, 0x1a, 0x1a),
            Fill::Snake => (0x4c, 0xaf, 0x50),
            Fill::Food => (0xf4, 0x43, 0x36),
        }
    }
}

/// UI regions that can be shown or hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Board,
    StartButton,
    GameOver,
}

/// Text labels the engine keeps up to date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Score,
    HighScore,
    FinalScore,
}

/// A canvas-like surface plus the handful of UI widgets around it
///
/// Coordinates are surface pixels: cell `(x, y)` starts at
/// `(x * tile_size, y * tile_size)`.
pub trait Display {
    /// Fill the whole surface
    fn clear(&mut self, fill: Fill);

    /// Fill an axis-aligned square with its top-left corner at `(x, y)`
    fn fill_square(&mut self, x: i32, y: i32, size: i32, fill: Fill);

    fn set_visible(&mut self, region: Region, visible: bool);

    fn set_text(&mut self, field: TextField, text: String);
}
