use serde::{Deserialize, Serialize};

/// Configuration for the playfield and the game loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub width: usize,
    /// Playfield height in pixels
    pub height: usize,
    /// Size of one grid cell in pixels
    pub cell_size: usize,
    /// Initial length of the snake in segments
    pub initial_snake_length: usize,
    /// Target frames per second
    pub frame_rate: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
            cell_size: 10,
            initial_snake_length: 3,
            frame_rate: 30,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom playfield size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a small playfield for testing
    pub fn small() -> Self {
        Self::new(100, 100)
    }
}
