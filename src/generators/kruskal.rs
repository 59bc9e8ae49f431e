use std::fmt;

use rand::{Rng, seq::SliceRandom};

use crate::maze::{CompactLocation, Direction, PassageGrid, Passages};

/// A slot of the goal grid.
///
/// (A union-find node: either a root naming its own set, or a link towards another cell.)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Goal {
    /// The cell is the goal (representative) of its set and holds its own location.
    Root(CompactLocation),
    /// The cell can get to the goal of the given location.
    Pointer(CompactLocation),
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Root(location) => write!(f, "<Goal location: {}>", location),
            Goal::Pointer(location) => write!(f, "<Can get to location {}>", location),
        }
    }
}

/// Union-find over compact cells, stored as a flat row-major grid of [`Goal`]s.
/// Only lives for the duration of one maze build.
struct GoalGrid {
    cells: Box<[Goal]>,
    width: u16,
}

impl GoalGrid {
    /// Every cell starts out as its own goal.
    fn new(width: u16, height: u16) -> Self {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Goal::Root(CompactLocation::new(x, y))))
            .collect();
        GoalGrid { cells, width }
    }

    fn ravel_index(&self, p: CompactLocation) -> usize {
        p.y as usize * self.width as usize + p.x as usize
    }

    /// Find the goal of `p`.
    ///
    /// Mutates the grid: every pointer visited on the way is rewritten to point straight at
    /// the goal (path compression).
    fn resolve(&mut self, p: CompactLocation) -> CompactLocation {
        let mut goal = p;
        while let Goal::Pointer(next) = self.cells[self.ravel_index(goal)] {
            goal = next;
        }

        let mut current = p;
        while let Goal::Pointer(next) = self.cells[self.ravel_index(current)] {
            let idx = self.ravel_index(current);
            self.cells[idx] = Goal::Pointer(goal);
            current = next;
        }

        goal
    }

    /// Set `p1`'s goal to `p2`.
    ///
    /// (Union: the goal of `p1`'s set is relinked to `p2` itself, not to `p2`'s goal, which is
    /// found lazily by the next [`GoalGrid::resolve`].) A no-op when both cells already share
    /// a goal, since relinking the goal into its own set would close a loop.
    fn set_goal(&mut self, p1: CompactLocation, p2: CompactLocation) {
        let goal = self.resolve(p1);
        if self.resolve(p2) == goal {
            return;
        }
        let idx = self.ravel_index(goal);
        self.cells[idx] = Goal::Pointer(p2);
        tracing::trace!("[kruskal] goal {} is now {}", goal, self.cells[idx]);
    }
}

/// Candidate passage between `from` and its East or South neighbor.
#[derive(Debug, Clone, Copy)]
struct Edge {
    from: CompactLocation,
    direction: Direction,
}

impl Edge {
    fn to(self) -> CompactLocation {
        match self.direction {
            Direction::East => CompactLocation::new(self.from.x + 1, self.from.y),
            _ => CompactLocation::new(self.from.x, self.from.y + 1),
        }
    }
}

/// Build the passages of a random perfect maze with a randomized Kruskal pass.
///
/// All East and South edges between adjacent cells are shuffled with `rng`, then each edge is
/// opened unless its two cells are already connected. The result is a spanning tree over the
/// `width x height` grid: `width * height - 1` passages, no cycles, every cell reachable.
pub fn randomized_kruskal<R: Rng + ?Sized>(width: u16, height: u16, rng: &mut R) -> PassageGrid {
    let mut goals = GoalGrid::new(width, height);
    let mut passages = PassageGrid::new(width, height);

    // All East edges, then all South edges
    let mut edges: Vec<Edge> = [Direction::East, Direction::South]
        .into_iter()
        .flat_map(|direction| {
            (0..height)
                .flat_map(move |y| (0..width).map(move |x| CompactLocation::new(x, y)))
                .filter(move |p| match direction {
                    Direction::East => p.x + 1 < width,
                    _ => p.y + 1 < height,
                })
                .map(move |from| Edge { from, direction })
        })
        .collect();
    let candidates = edges.len();

    edges.shuffle(rng);

    for edge in edges {
        let (a, b) = (edge.from, edge.to());
        // Cells already share a goal: opening this edge would close a loop
        if goals.resolve(a) == goals.resolve(b) {
            continue;
        }
        goals.set_goal(a, b);
        if let Some(passage) = Passages::of(edge.direction) {
            passages.open(a, passage);
        }
        tracing::trace!("[kruskal] opened {} from {}", edge.direction, a);
    }

    tracing::debug!(
        "[kruskal] generated {}x{} maze: {} of {} candidate edges opened",
        width,
        height,
        passages.passage_count(),
        candidates
    );
    passages
}
