use pacman_mazegen::{generate, generate_with_stats, FullMap, HalfGrid, Pcg32, Template};
use proptest::prelude::*;

fn assert_symmetric(map: &FullMap) {
    let w = map.width();
    for y in 0..map.height() {
        for x in 0..w {
            assert_eq!(
                map.is_wall(x, y),
                map.is_wall(w - 1 - x, y),
                "asymmetry at ({x}, {y})"
            );
        }
    }
}

#[test]
fn classic_map_dimensions_and_border() {
    let map = generate(&Template::classic(), Pcg32::new(2024));
    assert_eq!((map.width(), map.height()), (32, 31));
    assert!(map.row(0).unwrap().iter().all(|w| *w));
    assert!(map.row(30).unwrap().iter().all(|w| *w));
    for y in 0..map.height() {
        assert!(map.is_wall(0, y));
        assert!(map.is_wall(31, y));
    }
}

#[test]
fn rows_are_palindromes() {
    let map = generate(&Template::classic(), Pcg32::new(17));
    for row in map.rows() {
        let reversed: Vec<bool> = row.iter().rev().copied().collect();
        assert_eq!(row, &reversed);
    }
}

#[test]
fn carving_is_monotonic_and_terminates() {
    let template = Template::classic();
    let mut grid = HalfGrid::new(template.clone(), Pcg32::new(31337));
    let limit = template.width() * template.height();
    let mut runs = 0;
    let mut before = grid.walls().rows().to_vec();
    while grid.add_wall() {
        runs += 1;
        assert!(runs <= limit, "generation did not terminate");
        let after = grid.walls().rows();
        for (old_row, new_row) in before.iter().zip(after) {
            for (old, new) in old_row.iter().zip(new_row) {
                assert!(!old || *new, "a wall was removed");
            }
        }
        before = after.to_vec();
    }
    assert!(runs > 0);
    assert!(grid.free_positions().is_empty());
}

#[test]
fn compile_time_source_generates_a_symmetric_map() {
    let map = generate(&Template::classic(), Pcg32::compile_time());
    assert_symmetric(&map);
}

#[test]
fn entropy_source_generates_a_symmetric_map() {
    let map = generate(&Template::classic(), rand::thread_rng());
    assert_symmetric(&map);
}

#[test]
fn custom_template_from_text() {
    let text = format!("{}{}{}", "||||||||", "|.......".repeat(8), "||||||||");
    let grid = HalfGrid::from_text(&text, 8, 10, Pcg32::new(4)).unwrap();
    let map = FullMap::from({
        let mut grid = grid;
        grid.fill();
        grid
    });
    assert_eq!((map.width(), map.height()), (16, 10));
    assert_symmetric(&map);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn same_seed_same_map(seed in any::<u64>()) {
        let template = Template::classic();
        let first = generate(&template, Pcg32::new(seed));
        let second = generate(&template, Pcg32::new(seed));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn maps_are_mirror_symmetric(seed in any::<u64>()) {
        let map = generate(&Template::classic(), Pcg32::new(seed));
        let w = map.width();
        for y in 0..map.height() {
            for x in 0..w {
                prop_assert_eq!(map.is_wall(x, y), map.is_wall(w - 1 - x, y));
            }
        }
    }

    #[test]
    fn seed_walls_survive(seed in any::<u64>()) {
        let template = Template::classic();
        let (map, stats) = generate_with_stats(&template, Pcg32::new(seed));
        for (y, row) in template.rows().iter().enumerate() {
            for (x, wall) in row.iter().enumerate() {
                if *wall {
                    prop_assert!(map.is_wall(x, y));
                }
            }
        }
        prop_assert!(stats.final_walls >= stats.seed_walls);
        prop_assert_eq!(map.wall_count(), 2 * stats.final_walls);
        prop_assert!(stats.runs <= template.width() * template.height());
    }
}
