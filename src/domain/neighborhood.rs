//! Neighbor lookup on a bounded, non-wrapping grid.

use super::grid::{Coord, SparseGrid};

/// Offsets in compass order: N, NE, E, SE, S, SW, W, NW
const OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// In-bounds neighbors of `(x, y)` inside `[0, width) x [0, height)`.
///
/// Interior cells have 8 neighbors, edge cells 5 and corners 3. A cell that is
/// itself out of bounds has none. Edges do not wrap.
pub fn neighbors(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = Coord> {
    let in_bounds = x < width && y < height;
    OFFSETS
        .into_iter()
        .filter(move |_| in_bounds)
        .filter_map(move |(dx, dy)| {
            let nx = x.checked_add_signed(dx).filter(|&nx| nx < width)?;
            let ny = y.checked_add_signed(dy).filter(|&ny| ny < height)?;
            Some((nx, ny))
        })
}

/// Count the live neighbors of `(x, y)` in `grid`
pub fn live_neighbor_count(
    grid: &SparseGrid,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> u8 {
    neighbors(x, y, width, height)
        .filter(|&(nx, ny)| grid.contains(nx, ny))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_interior_has_eight() {
        let found: Vec<Coord> = neighbors(2, 2, 5, 5).collect();
        assert_eq!(
            found,
            vec![(2, 1), (3, 1), (3, 2), (3, 3), (2, 3), (1, 3), (1, 2), (1, 1)]
        );
    }

    #[test]
    fn test_corners_have_three() {
        let mut found: Vec<Coord> = neighbors(0, 0, 5, 5).collect();
        found.sort_unstable();
        assert_eq!(found, vec![(0, 1), (1, 0), (1, 1)]);

        assert_eq!(neighbors(4, 0, 5, 5).count(), 3);
        assert_eq!(neighbors(0, 4, 5, 5).count(), 3);
        assert_eq!(neighbors(4, 4, 5, 5).count(), 3);
    }

    #[test]
    fn test_edges_have_five() {
        assert_eq!(neighbors(2, 0, 5, 5).count(), 5);
        assert_eq!(neighbors(0, 2, 5, 5).count(), 5);
        assert_eq!(neighbors(4, 2, 5, 5).count(), 5);
        assert_eq!(neighbors(2, 4, 5, 5).count(), 5);
    }

    #[test]
    fn test_out_of_bounds_has_none() {
        assert_eq!(neighbors(5, 0, 5, 5).count(), 0);
        assert_eq!(neighbors(0, 5, 5, 5).count(), 0);
        assert_eq!(neighbors(0, 0, 0, 0).count(), 0);
    }

    #[test]
    fn test_single_cell_grid() {
        assert_eq!(neighbors(0, 0, 1, 1).count(), 0);
    }

    #[test]
    fn test_no_wraparound() {
        assert!(neighbors(0, 0, 5, 5).all(|(x, y)| x <= 1 && y <= 1));
    }

    #[test]
    fn test_live_neighbor_count() {
        let grid: SparseGrid = [(0, 0), (1, 0), (2, 2), (4, 4)].into_iter().collect();
        assert_eq!(live_neighbor_count(&grid, 1, 1, 5, 5), 3);
        // The cell itself is not counted
        assert_eq!(live_neighbor_count(&grid, 0, 0, 5, 5), 1);
        assert_eq!(live_neighbor_count(&grid, 3, 3, 5, 5), 2);
    }

    proptest! {
        #[test]
        fn test_neighbor_counts_by_position(
            w in 3..20_usize,
            h in 3..20_usize,
            x in 0..25_usize,
            y in 0..25_usize,
        ) {
            let count = neighbors(x, y, w, h).count();
            let on_x_edge = x == 0 || x == w - 1;
            let on_y_edge = y == 0 || y == h - 1;
            let expected = if x >= w || y >= h {
                0
            } else if on_x_edge && on_y_edge {
                3
            } else if on_x_edge || on_y_edge {
                5
            } else {
                8
            };
            prop_assert_eq!(count, expected);
        }
    }
}
