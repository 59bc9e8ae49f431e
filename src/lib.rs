//! Random perfect mazes.
//!
//! A maze is a spanning tree over a grid of cells, built by shuffling every wall between
//! adjacent cells and knocking each one down unless union-find says its two sides are already
//! connected. Mazes can be queried in the compact representation (one unit per cell) or in
//! the block representation (walls occupy their own rows and columns), and drawn as text.
//!
//! ```
//! use kruskal_maze::{CompactLocation, Maze, compact_to_block};
//!
//! let maze = Maze::with_seed(5, 6, Some(1));
//! let room = compact_to_block(CompactLocation::new(2, 4));
//! assert!(!maze.has_block_at(room));
//! assert_eq!(maze.draw_blocks('*', ' ').lines().count(), 13);
//! ```

mod config;
pub mod generators;
pub mod maze;

pub use config::{ConfigError, MazeConfig};
pub use maze::{
    BlockCell, BlockLocation, CompactLocation, Direction, Maze, Passages, block_to_compact,
    compact_to_block,
};
