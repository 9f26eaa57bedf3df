use std::fmt;

use crate::grid::{HalfGrid, WallMap};

/// The finished, left-right symmetric map: `2 * width` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullMap {
    width: usize,
    height: usize,
    rows: Vec<Vec<bool>>,
}

impl FullMap {
    /// Concatenates each half row with its reflection.
    pub fn from_walls(half: &WallMap) -> Self {
        let rows: Vec<Vec<bool>> = half
            .rows()
            .iter()
            .map(|row| row.iter().chain(row.iter().rev()).copied().collect())
            .collect();
        Self {
            width: half.width() * 2,
            height: half.height(),
            rows,
        }
    }

    pub fn from_half<R>(half: &HalfGrid<R>) -> Self {
        Self::from_walls(half.walls())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    pub fn row(&self, y: usize) -> Option<&[bool]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn wall_count(&self) -> usize {
        self.rows.iter().flatten().filter(|w| **w).count()
    }
}

impl<R> From<HalfGrid<R>> for FullMap {
    fn from(half: HalfGrid<R>) -> Self {
        Self::from_half(&half)
    }
}

/// Walls as `#`, floor as `.`, one line per row.
impl fmt::Display for FullMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for wall in row {
                f.write_str(if *wall { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
