use crate::error::TemplateError;

pub const CLASSIC_WIDTH: usize = 16;
pub const CLASSIC_HEIGHT: usize = 31;

/// Obstacle rows (inclusive) and first obstacle column of the classic board.
const CLASSIC_OBSTACLE_ROWS: (usize, usize) = (12, 16);
const CLASSIC_OBSTACLE_X: usize = 10;

#[cfg(test)]
const CLASSIC_TEXT: &str = "
||||||||||||||||
|...............
|...............
|...............
|...............
|...............
|...............
|...............
|...............
|...............
|...............
|...............
|.........||||||
|.........||||||
|.........||||||
|.........||||||
|.........||||||
|...............
|...............
|...............
|...............
|...............
|...............
|...............
|...............
|...............
|...............
|...............
|...............
|...............
||||||||||||||||
";

const WALL: char = '|';
const FLOOR: char = '.';

/// The seed wall bitmap of a half-grid, parsed from text.
///
/// Only `|` (wall) and `.` (floor) are read; every other character is
/// ignored, so rows may be laid out freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    width: usize,
    height: usize,
    walls: Vec<Vec<bool>>,
}

impl Template {
    pub fn parse(text: &str, width: usize, height: usize) -> Result<Self, TemplateError> {
        if width == 0 || height == 0 {
            return Err(TemplateError::ZeroDimension { width, height });
        }
        let cells: Vec<bool> = text
            .chars()
            .filter(|c| *c == WALL || *c == FLOOR)
            .map(|c| c == WALL)
            .collect();
        let expected = width * height;
        if cells.len() != expected {
            return Err(TemplateError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        let walls = cells.chunks(width).map(|row| row.to_vec()).collect();
        Ok(Self {
            width,
            height,
            walls,
        })
    }

    /// The 16x31 half-board with a closed border on three sides and a
    /// rectangular obstacle on the mirror axis.
    pub fn classic() -> Self {
        let (top, bottom) = CLASSIC_OBSTACLE_ROWS;
        let walls = (0..CLASSIC_HEIGHT)
            .map(|y| {
                (0..CLASSIC_WIDTH)
                    .map(|x| {
                        y == 0
                            || y == CLASSIC_HEIGHT - 1
                            || x == 0
                            || ((top..=bottom).contains(&y) && x >= CLASSIC_OBSTACLE_X)
                    })
                    .collect()
            })
            .collect();
        Self {
            width: CLASSIC_WIDTH,
            height: CLASSIC_HEIGHT,
            walls,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.walls
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().flatten().filter(|w| **w).count()
    }

    pub(crate) fn into_rows(self) -> Vec<Vec<bool>> {
        self.walls
    }
}
