use std::collections::{HashMap, HashSet};

use crate::grid::{WallMap, BLOCK_SIZE};
use crate::position::Position;

/// Directions wired up by [`ConnectionGraph::build`], in order.
const WIRING_DIRECTIONS: [Position; 4] = [
    Position::new(1, 0),
    Position::new(-1, 0),
    Position::new(0, 1),
    Position::new(0, -1),
];

/// Anchors where a fresh 4x4 block still fits, in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreePositions {
    ordered: Vec<Position>,
    lookup: HashSet<Position>,
}

impl FreePositions {
    pub fn collect(walls: &WallMap) -> Self {
        let ordered: Vec<Position> = walls
            .positions()
            .filter(|p| walls.can_fit_new_block(*p))
            .collect();
        let lookup = ordered.iter().copied().collect();
        Self { ordered, lookup }
    }

    pub fn contains(&self, p: Position) -> bool {
        self.lookup.contains(&p)
    }

    pub fn get(&self, index: usize) -> Option<Position> {
        self.ordered.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.ordered.iter().copied()
    }
}

/// Maps each free anchor to the free anchors that can reach it.
///
/// Derived from a single snapshot of the walls and free positions, so every
/// key and every listed source is a free position of that snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionGraph {
    edges: HashMap<Position, Vec<Position>>,
}

impl ConnectionGraph {
    /// Wires every free anchor away from the walls bounding its 4x4 box.
    pub fn build(walls: &WallMap, free: &FreePositions) -> Self {
        let mut graph = Self::default();
        for pos in free.iter() {
            for dir in WIRING_DIRECTIONS {
                if has_wall_behind(walls, pos, dir) {
                    graph.add_connection(free, pos, dir);
                }
            }
        }
        graph
    }

    /// Records `pos` as a source for every free anchor one or two steps
    /// along `dir`. Diagonal neighbours are only linked when the straight
    /// neighbour beside them is not free itself.
    pub fn add_connection(&mut self, free: &FreePositions, pos: Position, dir: Position) {
        if !free.contains(pos) {
            return;
        }
        let Position { x: dx, y: dy } = dir;
        let swapped = Position::new(dy, dx);

        self.connect(free, pos, pos + dir);
        self.connect(free, pos, pos + dir.scaled(2));

        let diag_minus = pos + dir - swapped;
        let diag_plus = pos + dir + swapped;
        if !free.contains(pos - swapped) {
            self.connect(free, pos, diag_minus);
        }
        if !free.contains(pos + swapped) {
            self.connect(free, pos, diag_plus);
        }
        if !free.contains(diag_minus) {
            self.connect(free, pos, pos + dir.scaled(2) - swapped);
        }
        if !free.contains(diag_plus) {
            self.connect(free, pos, pos + dir.scaled(2) + swapped);
        }
    }

    fn connect(&mut self, free: &FreePositions, source: Position, dest: Position) {
        if free.contains(dest) {
            self.edges.entry(dest).or_default().push(source);
        }
    }

    /// Anchors that reach `dest`, in insertion order.
    pub fn sources(&self, dest: Position) -> &[Position] {
        self.edges.get(&dest).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn destinations(&self) -> impl Iterator<Item = Position> + '_ {
        self.edges.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Whether a wall touches the edge of the 4x4 box at `pos` opposite `dir`.
fn has_wall_behind(walls: &WallMap, pos: Position, dir: Position) -> bool {
    let behind = if dir.x + dir.y > 0 { -1 } else { BLOCK_SIZE };
    (0..BLOCK_SIZE).any(|i| {
        let cell = if dir.x != 0 {
            Position::new(pos.x + behind, pos.y + i)
        } else {
            Position::new(pos.x + i, pos.y + behind)
        };
        walls.is_wall(cell)
    })
}
