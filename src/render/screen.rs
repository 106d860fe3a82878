use std::collections::HashMap;

use crate::game::{Display, Fill, Region, TextField};

/// One filled square on the surface, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub fill: Fill,
}

impl Square {
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.size && py >= self.y && py < self.y + self.size
    }
}

/// In-memory page: a square drawing surface plus the widgets around it
///
/// Drawing is retained, so a terminal renderer can redraw the last frame at
/// any rate without touching the engine.
#[derive(Debug, Clone)]
pub struct Screen {
    size: i32,
    background: Fill,
    squares: Vec<Square>,
    visible: HashMap<Region, bool>,
    texts: HashMap<TextField, String>,
}

impl Screen {
    /// A blank page with a `size` x `size` pixel surface
    pub fn new(size: i32) -> Self {
        let visible = HashMap::from([
            (Region::Board, true),
            (Region::StartButton, true),
            (Region::GameOver, false),
        ]);
        Self {
            size,
            background: Fill::Background,
            squares: Vec::new(),
            visible,
            texts: HashMap::new(),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn background(&self) -> Fill {
        self.background
    }

    /// Squares drawn since the last clear, in drawing order
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.visible.get(&region).copied().unwrap_or(false)
    }

    /// Current label text; empty until first set
    pub fn text(&self, field: TextField) -> &str {
        self.texts.get(&field).map(String::as_str).unwrap_or("")
    }

    /// What is painted at the centre of grid cell `(col, row)`
    pub fn cell_fill(&self, col: i32, row: i32, tile_size: i32) -> Fill {
        let px = col * tile_size + tile_size / 2;
        let py = row * tile_size + tile_size / 2;
        self.squares
            .iter()
            .rev()
            .find(|square| square.contains(px, py))
            .map(|square| square.fill)
            .unwrap_or(self.background)
    }
}

impl Display for Screen {
    fn clear(&mut self, fill: Fill) {
        self.background = fill;
        self.squares.clear();
    }

    fn fill_square(&mut self, x: i32, y: i32, size: i32, fill: Fill) {
        self.squares.push(Square { x, y, size, fill });
    }

    fn set_visible(&mut self, region: Region, visible: bool) {
        self.visible.insert(region, visible);
    }

    fn set_text(&mut self, field: TextField, text: String) {
        self.texts.insert(field, text);
    }
}
