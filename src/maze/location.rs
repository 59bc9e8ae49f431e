use std::fmt;

/// A location in the compact representation, one unit per maze cell.
///
/// The top-left cell is `(0, 0)`. Moving East increases `x`, moving South increases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompactLocation {
    pub x: u16,
    pub y: u16,
}

/// A location in the block representation, where walls occupy their own rows and columns.
/// A maze of `width x height` cells spans `(2 * width + 1) x (2 * height + 1)` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockLocation {
    pub x: u32,
    pub y: u32,
}

impl CompactLocation {
    pub const fn new(x: u16, y: u16) -> Self {
        CompactLocation { x, y }
    }

    /// The neighboring location one step in `direction`, or `None` if the step leaves the
    /// representable coordinate range. Maze bounds are not checked here.
    pub fn step(self, direction: Direction) -> Option<CompactLocation> {
        let (x, y) = (self.x, self.y);
        let (x, y) = match direction {
            Direction::North => (Some(x), y.checked_sub(1)),
            Direction::East => (x.checked_add(1), Some(y)),
            Direction::South => (Some(x), y.checked_add(1)),
            Direction::West => (x.checked_sub(1), Some(y)),
        };
        Some(CompactLocation::new(x?, y?))
    }
}

impl BlockLocation {
    pub const fn new(x: u32, y: u32) -> Self {
        BlockLocation { x, y }
    }

    /// Whether this block is a room, i.e. the image of some compact cell.
    pub fn is_room(self) -> bool {
        self.x % 2 == 1 && self.y % 2 == 1
    }
}

impl From<(u16, u16)> for CompactLocation {
    fn from((x, y): (u16, u16)) -> Self {
        CompactLocation::new(x, y)
    }
}

impl From<(u32, u32)> for BlockLocation {
    fn from((x, y): (u32, u32)) -> Self {
        BlockLocation::new(x, y)
    }
}

impl fmt::Display for CompactLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for BlockLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Convert a compact cell to its room block.
pub fn compact_to_block(p: CompactLocation) -> BlockLocation {
    // Cannot overflow: 2 * u16::MAX + 1 < u32::MAX
    BlockLocation::new(p.x as u32 * 2 + 1, p.y as u32 * 2 + 1)
}

/// Convert a block back to its compact cell.
/// Returns `None` for wall and pillar blocks, which have no compact counterpart.
pub fn block_to_compact(b: BlockLocation) -> Option<CompactLocation> {
    if !b.is_room() {
        return None;
    }
    let x = u16::try_from(b.x / 2).ok()?;
    let y = u16::try_from(b.y / 2).ok()?;
    Some(CompactLocation::new(x, y))
}

/// A compass direction in compact space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        };
        write!(f, "{}", symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_to_block() {
        assert_eq!(
            compact_to_block(CompactLocation::new(2, 4)),
            BlockLocation::new(5, 9)
        );
        assert_eq!(
            compact_to_block(CompactLocation::new(u16::MAX, 0)),
            BlockLocation::new(2 * u16::MAX as u32 + 1, 1)
        );
    }

    #[test]
    fn test_block_to_compact() {
        assert_eq!(
            block_to_compact(BlockLocation::new(5, 9)),
            Some(CompactLocation::new(2, 4))
        );
        assert_eq!(block_to_compact(BlockLocation::new(5, 8)), None);
        assert_eq!(block_to_compact(BlockLocation::new(4, 9)), None);
        assert_eq!(block_to_compact(BlockLocation::new(0, 0)), None);
        // Odd, but beyond anything a compact location can address
        assert_eq!(block_to_compact(BlockLocation::new(u32::MAX, 1)), None);
    }

    #[test]
    fn test_round_trip() {
        for y in (0..u16::MAX).step_by(997) {
            for x in (0..u16::MAX).step_by(1009) {
                let p = CompactLocation::new(x, y);
                assert_eq!(block_to_compact(compact_to_block(p)), Some(p));
            }
        }
    }

    #[test]
    fn test_non_room_blocks_have_even_coordinate() {
        for y in 0..20 {
            for x in 0..20 {
                let b = BlockLocation::new(x, y);
                if block_to_compact(b).is_none() {
                    assert!(x % 2 == 0 || y % 2 == 0, "{} should be a room", b);
                }
            }
        }
    }

    #[test]
    fn test_step() {
        let origin = CompactLocation::new(0, 0);
        assert_eq!(origin.step(Direction::North), None);
        assert_eq!(origin.step(Direction::West), None);
        assert_eq!(origin.step(Direction::East), Some(CompactLocation::new(1, 0)));
        assert_eq!(origin.step(Direction::South), Some(CompactLocation::new(0, 1)));
        let corner = CompactLocation::new(u16::MAX, u16::MAX);
        assert_eq!(corner.step(Direction::East), None);
        assert_eq!(corner.step(Direction::South), None);
    }

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_direction_display() {
        let symbols = Direction::ALL.map(|d| d.to_string()).concat();
        assert_eq!(symbols, "NESW");
    }
}
