use std::fmt;

use super::location::{CompactLocation, Direction};

/// The set of canonical passages leaving a cell. Only East and South are stored;
/// West and North are derived from the neighboring cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Passages(u8);

impl Passages {
    pub const NONE: Passages = Passages(0);
    pub const EAST: Passages = Passages(0b01);
    pub const SOUTH: Passages = Passages(0b10);

    /// The flag for a canonical direction. `None` for North and West, which are never stored.
    pub fn of(direction: Direction) -> Option<Passages> {
        match direction {
            Direction::East => Some(Passages::EAST),
            Direction::South => Some(Passages::SOUTH),
            Direction::North | Direction::West => None,
        }
    }

    pub fn contains(self, other: Passages) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Passages) {
        self.0 |= other.0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// The stored directions, East before South.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        [
            (Passages::EAST, Direction::East),
            (Passages::SOUTH, Direction::South),
        ]
        .into_iter()
        .filter(move |&(flag, _)| self.contains(flag))
        .map(|(_, direction)| direction)
    }
}

impl fmt::Display for Passages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.directions().try_for_each(|d| write!(f, "{}", d))
    }
}

/// Canonical passages of every compact cell, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageGrid {
    data: Box<[Passages]>,
    width: u16,
    height: u16,
}

impl PassageGrid {
    /// A grid with no open passages.
    pub fn new(width: u16, height: u16) -> Self {
        let data = vec![Passages::NONE; width as usize * height as usize].into_boxed_slice();
        PassageGrid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn is_in_bounds(&self, p: CompactLocation) -> bool {
        p.x < self.width && p.y < self.height
    }

    fn ravel_index(&self, p: CompactLocation) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        p.y as usize * self.width as usize + p.x as usize
    }

    /// Passages of `p`, or none if `p` is outside the grid.
    pub fn get(&self, p: CompactLocation) -> Passages {
        if self.is_in_bounds(p) {
            self.data[self.ravel_index(p)]
        } else {
            Passages::NONE
        }
    }

    /// Open a passage from `p`. Passages are never closed again.
    ///
    /// # Panics
    /// * If `p` is out of bounds
    pub fn open(&mut self, p: CompactLocation, passage: Passages) {
        if !self.is_in_bounds(p) {
            panic!("The given coordinate {} is out of bounds", p);
        }
        let idx = self.ravel_index(p);
        self.data[idx].insert(passage);
    }

    /// Total number of stored passages.
    pub fn passage_count(&self) -> usize {
        self.data.iter().map(|passages| passages.len()).sum()
    }
}

impl std::ops::Index<CompactLocation> for PassageGrid {
    type Output = Passages;

    fn index(&self, index: CompactLocation) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}
