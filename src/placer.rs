use std::collections::HashSet;
use std::fmt;

use crate::grid::HalfGrid;
use crate::position::{Position, RUN_DIRECTIONS};
use crate::random::RandomSource;

const BASE_BLOCKS: usize = 4;
const TURN_BLOCKS: usize = 4;
/// `random % 100` at or below this adds a forced turn and doubles the run.
const LONG_RUN_THRESHOLD: u32 = 35;

/// Outcome of one placement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub anchor: Position,
    /// Blocks carved by the run, the initial block included.
    pub blocks: usize,
    pub turned: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub runs: usize,
    pub blocks: usize,
    pub seed_walls: usize,
    pub final_walls: usize,
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} runs, {} blocks, {} -> {} wall tiles",
            self.runs, self.blocks, self.seed_walls, self.final_walls
        )
    }
}

impl<R: RandomSource> HalfGrid<R> {
    /// Places one run of wall blocks. Returns `false` once no block fits.
    pub fn add_wall(&mut self) -> bool {
        self.place_run().is_some()
    }

    pub fn place_run(&mut self) -> Option<RunReport> {
        self.collect_valid_starting_positions();
        self.collect_connections();
        if self.free_positions.is_empty() {
            return None;
        }
        let index = self.rng.pick_index(self.free_positions.len());
        let anchor = self.free_positions.get(index)?;

        self.walls.add_wall_block(anchor);
        let mut count = self.expand_wall(anchor);

        let mut max_blocks = BASE_BLOCKS;
        let mut turn_blocks = max_blocks;
        if self.rng.next_random() % 100 <= LONG_RUN_THRESHOLD {
            turn_blocks = TURN_BLOCKS;
            max_blocks += turn_blocks;
        }

        let orig = RUN_DIRECTIONS[self.rng.pick_index(RUN_DIRECTIONS.len())];
        let mut dir = orig;
        let mut turned = false;
        let mut i = 0;
        while count < max_blocks {
            let p = anchor + dir.scaled(i);
            if (!turned && count >= turn_blocks) || !self.free_positions.contains(p) {
                turned = true;
                dir = dir.rotated();
                i = 1;
                if dir == orig {
                    break;
                }
                continue;
            }
            if !self.walls.is_wall_block_filled(p) {
                self.walls.add_wall_block(p);
                count += 1 + self.expand_wall(p);
            }
            i += 1;
        }

        let report = RunReport {
            anchor,
            blocks: count + 1,
            turned,
        };
        log::debug!(
            "run at ({}, {}): {} blocks, turned: {}, {} free anchors",
            anchor.x,
            anchor.y,
            report.blocks,
            turned,
            self.free_positions.len()
        );
        Some(report)
    }

    /// Runs placement until the grid is saturated.
    pub fn fill(&mut self) -> GenerationStats {
        let mut stats = GenerationStats {
            seed_walls: self.walls.wall_count(),
            ..GenerationStats::default()
        };
        while let Some(run) = self.place_run() {
            stats.runs += 1;
            stats.blocks += run.blocks;
        }
        stats.final_walls = self.walls.wall_count();
        log::info!("half-grid filled: {stats}");
        stats
    }
}

impl<R> HalfGrid<R> {
    /// Carves every anchor reachable from `start` through the connection
    /// graph, each visited once. Returns how many blocks were newly carved.
    pub fn expand_wall(&mut self, start: Position) -> usize {
        let mut visited = HashSet::from([start]);
        let mut stack = vec![start];
        let mut count = 0;
        while let Some(p) = stack.pop() {
            for &source in self.connections.sources(p) {
                if !visited.insert(source) {
                    continue;
                }
                if !self.walls.is_wall_block_filled(source) {
                    self.walls.add_wall_block(source);
                    count += 1;
                }
                stack.push(source);
            }
        }
        count
    }
}
