//! Procedural generator for symmetric arcade-style maze maps.
//!
//! Walls are carved as 2x2 blocks into a half-width grid, then the half is
//! mirrored to produce the full board:
//!
//! ```no_run
//! use pacman_mazegen::{generate, Pcg32, Template};
//!
//! let map = generate(&Template::classic(), Pcg32::new(2024));
//! print!("{map}");
//! ```

pub mod config;
pub mod connections;
pub mod error;
pub mod grid;
pub mod mirror;
pub mod placer;
pub mod position;
pub mod random;
pub mod template;

pub use connections::{ConnectionGraph, FreePositions};
pub use error::TemplateError;
pub use grid::{HalfGrid, WallMap};
pub use mirror::FullMap;
pub use placer::{GenerationStats, RunReport};
pub use position::Position;
pub use random::{Pcg32, RandomSource};
pub use template::Template;

/// Fills a half-grid seeded from `template` and mirrors it.
pub fn generate<R: RandomSource>(template: &Template, rng: R) -> FullMap {
    generate_with_stats(template, rng).0
}

pub fn generate_with_stats<R: RandomSource>(
    template: &Template,
    rng: R,
) -> (FullMap, GenerationStats) {
    let mut half = HalfGrid::new(template.clone(), rng);
    let stats = half.fill();
    (FullMap::from(half), stats)
}
