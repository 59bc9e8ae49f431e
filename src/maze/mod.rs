pub mod cell;
pub mod grid;
pub mod location;

use std::fmt;

use crossterm::{queue, style};
use rand::Rng;

use crate::generators::{get_rng, randomized_kruskal};
pub use cell::BlockCell;
pub use grid::{PassageGrid, Passages};
pub use location::{BlockLocation, CompactLocation, Direction, block_to_compact, compact_to_block};

/// A randomly generated perfect maze: exactly one path joins any two cells.
///
/// The maze can be viewed in two representations:
/// - the compact representation, where each cell is one unit and walls are "thin",
///   sitting between cells ([`Maze::ways_from`]);
/// - the block representation, where walls are "fat" and occupy their own rows and
///   columns, so a `width x height` maze spans `blocks_width x blocks_height` blocks
///   ([`Maze::has_block_at`], [`Maze::draw_blocks`]).
///
/// Width and height are assumed to be positive. A zero dimension yields a degenerate maze
/// with no cells; use [`crate::MazeConfig`] to validate dimensions up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    passages: PassageGrid,
    width: u16,
    height: u16,
}

impl Maze {
    /// Creates a new random maze, seeded from the operating system.
    pub fn new(width: u16, height: u16) -> Self {
        Maze::with_seed(width, height, None)
    }

    /// Creates a new random maze, reproducible when a seed is given.
    pub fn with_seed(width: u16, height: u16, seed: Option<u64>) -> Self {
        let mut rng = get_rng(seed);
        Maze::generate(width, height, &mut rng)
    }

    /// Creates a new random maze drawing all randomness from `rng`.
    /// The same random sequence always yields the same maze.
    pub fn generate<R: Rng + ?Sized>(width: u16, height: u16, rng: &mut R) -> Self {
        Maze {
            passages: randomized_kruskal(width, height, rng),
            width,
            height,
        }
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Returns the width of the block representation.
    pub fn blocks_width(&self) -> u32 {
        // n cells in each dimension -> n + 1 walls -> 2n + 1 total
        self.width as u32 * 2 + 1
    }

    /// Returns the height of the block representation.
    pub fn blocks_height(&self) -> u32 {
        self.height as u32 * 2 + 1
    }

    /// Checks if the given compact location is within the bounds of the maze.
    pub fn is_in_bounds(&self, p: CompactLocation) -> bool {
        self.passages.is_in_bounds(p)
    }

    /// The canonical (East/South) passages recorded at `p`.
    pub fn passages_at(&self, p: CompactLocation) -> Passages {
        self.passages.get(p)
    }

    /// Total number of open passages. Always `width * height - 1` for a non-empty maze.
    pub fn passage_count(&self) -> usize {
        self.passages.passage_count()
    }

    /// The directions we can move in from compact location `p`.
    ///
    /// Own passages come first (East, then South), followed by West and North, which are
    /// derived from the neighbors' East and South passages. Empty if `p` is out of bounds.
    pub fn ways_from(&self, p: CompactLocation) -> Vec<Direction> {
        if !self.is_in_bounds(p) {
            return Vec::new();
        }
        let mut ways = self.passages[p].directions().collect::<Vec<_>>();
        if p.x > 0 && self.passages[CompactLocation::new(p.x - 1, p.y)].contains(Passages::EAST) {
            ways.push(Direction::West);
        }
        if p.y > 0 && self.passages[CompactLocation::new(p.x, p.y - 1)].contains(Passages::SOUTH) {
            ways.push(Direction::North);
        }
        ways
    }

    /// The cells reachable from `p` in one step, in the order of [`Maze::ways_from`].
    pub fn neighbors(&self, p: CompactLocation) -> impl Iterator<Item = CompactLocation> + '_ {
        self.ways_from(p)
            .into_iter()
            .filter_map(move |direction| p.step(direction))
    }

    /// Whether there is a wall block at block location `p`.
    ///
    /// Anything outside the block grid is a wall. Pillars (even, even) are always walls and
    /// rooms (odd, odd) never are. The remaining positions sit between two rooms and are
    /// open exactly when the passage between those rooms exists.
    pub fn has_block_at(&self, p: BlockLocation) -> bool {
        if p.x >= self.blocks_width() || p.y >= self.blocks_height() {
            return true;
        }
        match (p.x % 2 == 1, p.y % 2 == 1) {
            // Pillar
            (false, false) => true,
            // Room
            (true, true) => false,
            // Horizontal wall below the room above it; the top border has no room above
            (true, false) => match p.y.checked_sub(1) {
                Some(above) => !self
                    .passages_at(Self::compact_between(p.x / 2, above / 2))
                    .contains(Passages::SOUTH),
                None => true,
            },
            // Vertical wall right of the room to its left; the left border has no room there
            (false, true) => match p.x.checked_sub(1) {
                Some(left) => !self
                    .passages_at(Self::compact_between(left / 2, p.y / 2))
                    .contains(Passages::EAST),
                None => true,
            },
        }
    }

    /// Compact location for block-derived coordinates. Block coordinates of an in-bounds
    /// block halve into the `u16` range; anything else saturates and reads as out of bounds.
    fn compact_between(x: u32, y: u32) -> CompactLocation {
        CompactLocation::new(
            u16::try_from(x).unwrap_or(u16::MAX),
            u16::try_from(y).unwrap_or(u16::MAX),
        )
    }

    /// The terminal cell at block location `p`.
    pub fn block_cell_at(&self, p: BlockLocation) -> BlockCell {
        BlockCell::from(self.has_block_at(p))
    }

    /// Draws the block representation, using `block` for walls and `space` for openings.
    /// Rows are separated by newlines, with no trailing newline.
    pub fn draw_blocks(&self, block: char, space: char) -> String {
        let (width, height) = (self.blocks_width(), self.blocks_height());
        let mut drawing = String::with_capacity((width as usize + 1) * height as usize);
        for y in 0..height {
            if y > 0 {
                drawing.push('\n');
            }
            drawing.extend((0..width).map(|x| {
                if self.has_block_at(BlockLocation::new(x, y)) {
                    block
                } else {
                    space
                }
            }));
        }
        drawing
    }

    /// Queues the styled block representation to `out`, one terminal row per block row.
    pub fn render<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        for y in 0..self.blocks_height() {
            for x in 0..self.blocks_width() {
                queue!(out, style::Print(self.block_cell_at(BlockLocation::new(x, y))))?;
            }
            queue!(out, style::Print("\r\n"))?;
        }
        out.flush()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.draw_blocks('*', ' '))
    }
}
