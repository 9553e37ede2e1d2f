use std::fmt;
use std::sync::Arc;

use log::{debug, trace, warn};
use rand::Rng;

use super::error::{Error, Result};
use super::grid::{Coord, SparseGrid};
use super::neighborhood::live_neighbor_count;
use super::patterns::Pattern;
use super::rules::will_live;

/// Fraction of cells seeded alive by `World::randomize` in the benchmark
pub const DEFAULT_DENSITY: f64 = 0.3;

/// World couples a sparse grid with fixed bounds and advances it one
/// generation at a time.
///
/// Every live cell lies inside `[0, width) x [0, height)`; mutations outside
/// that rectangle are rejected with `Error::OutOfBounds`.
///
/// The grid sits behind an `Arc`. A tick installs a new grid instead of
/// writing into the old one, and single-cell edits copy the grid first if a
/// snapshot still shares it, so a handle from `snapshot` or `tick` never
/// changes after it is handed out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    width: usize,
    height: usize,
    grid: Arc<SparseGrid>,
    generation: u64,
}

impl World {
    /// Create an empty world.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero. Use `World::try_new` to get an
    /// error instead.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "world dimensions must be positive, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            grid: Arc::default(),
            generation: 0,
        }
    }

    /// Create an empty world, rejecting zero dimensions
    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyDimensions { width, height });
        }
        Ok(Self::new(width, height))
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get world dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of ticks since construction or the last reset
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation's live cells
    pub fn grid(&self) -> &SparseGrid {
        &self.grid
    }

    /// Shared handle to the current generation. Later ticks and edits leave
    /// it untouched.
    pub fn snapshot(&self) -> Arc<SparseGrid> {
        Arc::clone(&self.grid)
    }

    pub fn population(&self) -> usize {
        self.grid.len()
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.grid.contains(x, y)
    }

    /// Set a single cell, rejecting coordinates outside the world
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let (width, height) = self.dimensions();
        Arc::make_mut(&mut self.grid).set_within(x, y, alive, width, height)
    }

    /// Mark every cell of `pattern`, shifted by the offset, as alive.
    ///
    /// The offset is always applied, so negative offsets move the pattern up
    /// or left. All cells are checked before any is written: if one lands
    /// outside the world the call fails and the grid is left unchanged.
    pub fn apply_pattern(
        &mut self,
        pattern: &Pattern,
        offset_x: isize,
        offset_y: isize,
    ) -> Result<()> {
        let cells = pattern
            .cells()
            .iter()
            .map(|&(x, y)| self.translate(x, y, offset_x, offset_y))
            .collect::<Result<Vec<Coord>>>()
            .inspect_err(|err| warn!("rejected pattern {:?}: {}", pattern.name, err))?;

        let (width, height) = self.dimensions();
        let grid = Arc::make_mut(&mut self.grid);
        for (x, y) in cells {
            grid.set_within(x, y, true, width, height)?;
        }
        trace!(
            "applied pattern {:?} ({} cells) at ({}, {})",
            pattern.name,
            pattern.len(),
            offset_x,
            offset_y
        );
        Ok(())
    }

    /// Shift a pattern cell by the offset and check it against the bounds
    fn translate(&self, x: usize, y: usize, offset_x: isize, offset_y: isize) -> Result<Coord> {
        // i128 holds every usize + isize sum exactly
        let (nx, ny) = (x as i128 + offset_x as i128, y as i128 + offset_y as i128);
        match (usize::try_from(nx), usize::try_from(ny)) {
            (Ok(ux), Ok(uy)) if ux < self.width && uy < self.height => Ok((ux, uy)),
            _ => Err(Error::out_of_bounds(nx, ny, self.width, self.height)),
        }
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) -> &SparseGrid {
        self.grid = Arc::default();
        self.generation = 0;
        &self.grid
    }

    /// Advance one generation.
    ///
    /// Every cell in the rectangle is evaluated against the current grid and
    /// the results are collected into a new grid, which then replaces the old
    /// one. Dead cells are visited too since they can be born, so the cost is
    /// proportional to the area rather than the population.
    ///
    /// Returns a handle to the new generation.
    pub fn tick(&mut self) -> Arc<SparseGrid> {
        let (width, height) = self.dimensions();
        let current = &self.grid;

        let next: SparseGrid = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|&(x, y)| {
                let neighbors = live_neighbor_count(current, x, y, width, height);
                will_live(current.contains(x, y), neighbors)
            })
            .collect();

        self.grid = Arc::new(next);
        self.generation += 1;
        debug!(
            "generation {}: {} live cells",
            self.generation,
            self.grid.len()
        );
        self.snapshot()
    }

    /// Advance `generations` ticks
    pub fn step(&mut self, generations: u64) -> Arc<SparseGrid> {
        for _ in 0..generations {
            self.tick();
        }
        self.snapshot()
    }

    /// Replace the grid with random cells, each alive with probability
    /// `density`, and reset the generation counter
    pub fn randomize(&mut self, density: f64) {
        self.randomize_with(&mut rand::rng(), density);
    }

    /// Like `randomize`, drawing from the given generator
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let (width, height) = self.dimensions();

        let grid: SparseGrid = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|_| rng.random_bool(density))
            .collect();
        self.grid = Arc::new(grid);
        self.generation = 0;
        debug!(
            "randomized {}x{} world: {} live cells",
            width,
            height,
            self.grid.len()
        );
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grid.render(self.width, self.height))
    }
}
