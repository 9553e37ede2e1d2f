use game_of_life::{
    Error, Pattern, SparseGrid, World, neighbors, parse_pattern, presets, will_live,
};

fn sorted(grid: &SparseGrid) -> Vec<(usize, usize)> {
    let mut cells: Vec<_> = grid.iter().collect();
    cells.sort_unstable();
    cells
}

#[test]
fn test_parse_and_run_blinker() {
    let mut world = World::new(5, 5);
    world.apply_pattern(&parse_pattern(".O\n.O\n.O\n\n"), 0, 0).unwrap();

    let first = world.snapshot();
    world.tick();
    assert_eq!(sorted(world.grid()), vec![(0, 1), (1, 1), (2, 1)]);

    world.tick();
    assert_eq!(world.grid(), &*first);
    assert_eq!(world.generation(), 2);
}

#[test]
fn test_pulsar_has_period_three() {
    let mut world = World::new(17, 17);
    world.apply_pattern(&presets::pulsar(), 2, 2).unwrap();
    let start = world.snapshot();

    world.step(1);
    assert_ne!(world.grid(), &*start);
    world.step(2);
    assert_eq!(world.grid(), &*start);
}

#[test]
fn test_glider_dies_against_corner() {
    // Without wraparound a glider hitting the corner turns into a block
    let mut world = World::new(5, 5);
    world.apply_pattern(&presets::glider(), 0, 0).unwrap();
    world.step(20);
    assert_eq!(sorted(world.grid()), vec![(3, 3), (3, 4), (4, 3), (4, 4)]);
}

#[test]
fn test_out_of_bounds_pattern_is_reported() {
    let mut world = World::new(10, 10);
    let result = world.apply_pattern(&presets::lwss(), 6, 0);
    assert!(matches!(result, Err(Error::OutOfBounds { width: 10, height: 10, .. })));
    assert_eq!(world.population(), 0);
}

#[test]
fn test_renderer_queries() {
    let mut world = World::new(4, 3);
    world.apply_pattern(&Pattern::from_cells(vec![(0, 0), (3, 2)]), 0, 0).unwrap();

    let drawn: Vec<String> = (0..world.height())
        .map(|y| {
            (0..world.width())
                .map(|x| if world.is_alive(x, y) { '#' } else { ' ' })
                .collect()
        })
        .collect();
    assert_eq!(drawn, vec!["#   ", "    ", "   #"]);
}

#[test]
fn test_rule_and_neighbors_compose() {
    let grid: SparseGrid = [(0, 0), (2, 0), (0, 2)].into_iter().collect();
    let count = neighbors(1, 1, 3, 3)
        .filter(|&(x, y)| grid.contains(x, y))
        .count() as u8;
    assert_eq!(count, 3);
    assert!(will_live(false, count));
}
