use crate::connections::{ConnectionGraph, FreePositions};
use crate::error::TemplateError;
use crate::position::Position;
use crate::template::Template;

/// Side length of a candidate block; its inner 2x2 is what gets carved.
pub const BLOCK_SIZE: i32 = 4;

const INNER_BLOCK: [Position; 4] = [
    Position::new(1, 1),
    Position::new(2, 1),
    Position::new(1, 2),
    Position::new(2, 2),
];

/// The half-width wall bitmap. `rows[y][x]` is `true` for a wall tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallMap {
    width: usize,
    height: usize,
    rows: Vec<Vec<bool>>,
}

impl WallMap {
    pub fn from_template(template: Template) -> Self {
        let width = template.width();
        let height = template.height();
        Self {
            width,
            height,
            rows: template.into_rows(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn is_valid(&self, p: Position) -> bool {
        p.x >= 0 && (p.x as usize) < self.width && p.y >= 0 && (p.y as usize) < self.height
    }

    fn cell(&self, p: Position) -> Option<bool> {
        if self.is_valid(p) {
            Some(self.rows[p.y as usize][p.x as usize])
        } else {
            None
        }
    }

    /// In bounds and floor. Out-of-bounds cells are neither empty nor wall.
    pub fn is_empty(&self, p: Position) -> bool {
        self.cell(p) == Some(false)
    }

    pub fn is_wall(&self, p: Position) -> bool {
        self.cell(p) == Some(true)
    }

    /// Whether the 4x4 box with top-left `p` is in bounds and entirely floor.
    pub fn can_fit_new_block(&self, p: Position) -> bool {
        if !self.is_valid(p) {
            return false;
        }
        let far = Position::new(BLOCK_SIZE - 1, BLOCK_SIZE - 1);
        if !p.checked_add(far).is_some_and(|far| self.is_valid(far)) {
            return false;
        }
        (0..BLOCK_SIZE)
            .flat_map(|dy| (0..BLOCK_SIZE).map(move |dx| Position::new(dx, dy)))
            .all(|offset| self.is_empty(p + offset))
    }

    pub fn is_wall_block_filled(&self, p: Position) -> bool {
        INNER_BLOCK
            .iter()
            .all(|offset| p.checked_add(*offset).is_some_and(|cell| self.is_wall(cell)))
    }

    /// All positions in row-major order, x fastest.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Position::new(x, y)))
    }

    pub fn wall_count(&self) -> usize {
        self.rows.iter().flatten().filter(|w| **w).count()
    }

    fn add_wall_tile(&mut self, p: Position) {
        if self.is_valid(p) {
            self.rows[p.y as usize][p.x as usize] = true;
        }
    }

    /// Carves the inner 2x2 of the block anchored at `p`.
    pub fn add_wall_block(&mut self, p: Position) {
        for offset in INNER_BLOCK {
            if let Some(cell) = p.checked_add(offset) {
                self.add_wall_tile(cell);
            }
        }
    }
}

/// Working state for generating one half-map.
///
/// Owns the wall bitmap, the random source, and the free positions and
/// connection graph of the current run. The latter two are derived from
/// `walls` and rebuilt before every run.
#[derive(Debug)]
pub struct HalfGrid<R> {
    pub(crate) walls: WallMap,
    pub(crate) free_positions: FreePositions,
    pub(crate) connections: ConnectionGraph,
    pub(crate) rng: R,
}

impl<R> HalfGrid<R> {
    pub fn new(template: Template, rng: R) -> Self {
        Self {
            walls: WallMap::from_template(template),
            free_positions: FreePositions::default(),
            connections: ConnectionGraph::default(),
            rng,
        }
    }

    pub fn from_text(
        text: &str,
        width: usize,
        height: usize,
        rng: R,
    ) -> Result<Self, TemplateError> {
        Ok(Self::new(Template::parse(text, width, height)?, rng))
    }

    pub fn width(&self) -> usize {
        self.walls.width()
    }

    pub fn height(&self) -> usize {
        self.walls.height()
    }

    pub fn walls(&self) -> &WallMap {
        &self.walls
    }

    pub fn free_positions(&self) -> &FreePositions {
        &self.free_positions
    }

    pub fn connections(&self) -> &ConnectionGraph {
        &self.connections
    }

    pub fn is_valid(&self, p: Position) -> bool {
        self.walls.is_valid(p)
    }

    pub fn is_empty(&self, p: Position) -> bool {
        self.walls.is_empty(p)
    }

    pub fn is_wall(&self, p: Position) -> bool {
        self.walls.is_wall(p)
    }

    pub fn can_fit_new_block(&self, p: Position) -> bool {
        self.walls.can_fit_new_block(p)
    }

    pub fn is_wall_block_filled(&self, p: Position) -> bool {
        self.walls.is_wall_block_filled(p)
    }

    pub fn collect_valid_starting_positions(&mut self) {
        self.free_positions = FreePositions::collect(&self.walls);
    }

    /// Rebuilds the connection graph from the current free positions.
    pub fn collect_connections(&mut self) {
        self.connections = ConnectionGraph::build(&self.walls, &self.free_positions);
        log::trace!(
            "connection graph: {} destinations from {} free positions",
            self.connections.len(),
            self.free_positions.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str, width: usize, height: usize) -> WallMap {
        WallMap::from_template(Template::parse(text, width, height).unwrap())
    }

    #[test]
    fn out_of_bounds_is_neither_wall_nor_empty() {
        let map = grid("|.\n.|", 2, 2);
        for p in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(2, 0),
            Position::new(0, 2),
        ] {
            assert!(!map.is_valid(p));
            assert!(!map.is_wall(p));
            assert!(!map.is_empty(p));
        }
        assert!(map.is_wall(Position::new(0, 0)));
        assert!(map.is_empty(Position::new(1, 0)));
    }

    #[test]
    fn block_fit_needs_sixteen_empty_cells_in_bounds() {
        let map = grid(
            "
            .....
            .....
            .....
            ....|
            .....",
            5,
            5,
        );
        assert!(map.can_fit_new_block(Position::new(0, 0)));
        assert!(map.can_fit_new_block(Position::new(0, 1)));
        assert!(!map.can_fit_new_block(Position::new(1, 0)));
        assert!(!map.can_fit_new_block(Position::new(1, 1)));
        assert!(!map.can_fit_new_block(Position::new(2, 0)));
        assert!(!map.can_fit_new_block(Position::new(-1, 0)));
    }

    #[test]
    fn predicates_are_false_at_coordinate_extremes() {
        let mut map = WallMap::from_template(Template::classic());
        let before = map.clone();
        for p in [
            Position::new(i32::MAX, 0),
            Position::new(0, i32::MAX),
            Position::new(i32::MAX, i32::MAX),
            Position::new(i32::MIN, 0),
            Position::new(0, i32::MIN),
        ] {
            assert!(!map.is_valid(p));
            assert!(!map.is_wall(p));
            assert!(!map.is_empty(p));
            assert!(!map.can_fit_new_block(p));
            assert!(!map.is_wall_block_filled(p));
            map.add_wall_block(p);
        }
        assert_eq!(map, before);
    }

    #[test]
    fn carving_fills_inner_block_only() {
        let mut map = grid(&".".repeat(16), 4, 4);
        let origin = Position::new(0, 0);
        assert!(!map.is_wall_block_filled(origin));
        map.add_wall_block(origin);
        assert!(map.is_wall_block_filled(origin));
        assert_eq!(map.wall_count(), 4);
        assert!(map.is_empty(Position::new(0, 0)));
        assert!(map.is_wall(Position::new(2, 2)));
        assert!(map.is_empty(Position::new(3, 3)));
    }

    #[test]
    fn carving_clips_at_the_edge() {
        let mut map = grid(&".".repeat(9), 3, 3);
        map.add_wall_block(Position::new(1, 1));
        assert_eq!(map.wall_count(), 1);
        assert!(map.is_wall(Position::new(2, 2)));
    }

    #[test]
    fn positions_are_row_major() {
        let map = grid(&".".repeat(6), 3, 2);
        let order: Vec<_> = map.positions().collect();
        assert_eq!(order[0], Position::new(0, 0));
        assert_eq!(order[1], Position::new(1, 0));
        assert_eq!(order[3], Position::new(0, 1));
        assert_eq!(order.len(), 6);
    }

    #[test]
    fn from_text_rejects_short_template() {
        let result = HalfGrid::from_text("||", 2, 2, ());
        assert!(matches!(result, Err(TemplateError::CellCount { .. })));
    }
}
