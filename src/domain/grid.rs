use std::collections::HashSet;
use std::collections::hash_set;
use std::iter::Copied;

use metrohash::MetroBuildHasher;

use super::error::{Error, Result};

/// A cell position as `(x, y)`: column first, then row.
pub type Coord = (usize, usize);

/// SparseGrid stores only the cells that are alive.
/// Memory grows with the population, not with the area being simulated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseGrid {
    cells: HashSet<Coord, MetroBuildHasher>,
}

impl SparseGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a cell is alive. Any coordinate may be queried.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells.contains(&(x, y))
    }

    /// Mark a cell alive or dead with no bounds restriction
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if alive {
            self.cells.insert((x, y));
        } else {
            self.cells.remove(&(x, y));
        }
    }

    /// Mark a cell alive or dead, rejecting coordinates outside
    /// `[0, max_x) x [0, max_y)`. A rejected call leaves the grid untouched.
    pub fn set_within(
        &mut self,
        x: usize,
        y: usize,
        alive: bool,
        max_x: usize,
        max_y: usize,
    ) -> Result<()> {
        if x >= max_x || y >= max_y {
            return Err(Error::out_of_bounds(x as i128, y as i128, max_x, max_y));
        }
        self.set(x, y, alive);
        Ok(())
    }

    /// Iterate over live cells in no particular order
    pub fn iter(&self) -> Copied<hash_set::Iter<'_, Coord>> {
        self.cells.iter().copied()
    }

    /// Visit every live cell. The grid is borrowed for the whole walk,
    /// so the visitor cannot mutate it.
    pub fn for_each(&self, visit: impl FnMut(Coord)) {
        self.iter().for_each(visit);
    }

    /// Remove every live cell
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Draw the `width x height` window starting at the origin,
    /// `O` for alive and `.` for dead, one line per row.
    pub fn render(&self, width: usize, height: usize) -> String {
        let mut out = String::with_capacity((width + 1) * height);
        for y in 0..height {
            if y > 0 {
                out.push('\n');
            }
            out.extend((0..width).map(|x| if self.contains(x, y) { 'O' } else { '.' }));
        }
        out
    }
}

impl FromIterator<Coord> for SparseGrid {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Coord> for SparseGrid {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a SparseGrid {
    type Item = Coord;
    type IntoIter = Copied<hash_set::Iter<'a, Coord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
