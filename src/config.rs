use thiserror::Error;

use crate::maze::Maze;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("maze width must be at least 1")]
    ZeroWidth,

    #[error("maze height must be at least 1")]
    ZeroHeight,

    #[error("block and space symbols must differ, both are {symbol:?}")]
    IdenticalSymbols { symbol: char },
}

/// Settings for building and drawing a maze, checked before construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    /// Width in cells
    pub width: u16,
    /// Height in cells
    pub height: u16,
    /// Seed for reproducible mazes. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Character for wall blocks in text drawings
    pub block: char,
    /// Character for open space in text drawings
    pub space: char,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 6,
            seed: None,
            block: '*',
            space: ' ',
        }
    }
}

impl MazeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.block == self.space {
            return Err(ConfigError::IdenticalSymbols { symbol: self.block });
        }
        Ok(())
    }

    /// Validates the settings and generates the maze.
    pub fn build(&self) -> Result<Maze, ConfigError> {
        self.validate()?;
        tracing::debug!(
            "[config] building {}x{} maze with seed {:?}",
            self.width,
            self.height,
            self.seed
        );
        Ok(Maze::with_seed(self.width, self.height, self.seed))
    }

    /// Draws `maze` with the configured symbols.
    pub fn draw(&self, maze: &Maze) -> String {
        maze.draw_blocks(self.block, self.space)
    }
}
