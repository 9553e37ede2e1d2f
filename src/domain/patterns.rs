use std::convert::Infallible;
use std::str::FromStr;

use super::grid::Coord;

/// Represents a pattern that can be placed on a world.
///
/// Coordinates are relative to the pattern's own top-left corner and carry no
/// bound; they are checked only when the pattern is applied to a world.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    cells: Vec<Coord>,
}

impl Pattern {
    /// Create a new named pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<Coord>) -> Self {
        Self { name, description, cells }
    }

    /// Create an unnamed pattern from alive cell coordinates
    pub fn from_cells(cells: Vec<Coord>) -> Self {
        Self::new("", "", cells)
    }

    /// Alive cells, in the order they were parsed or given
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Width of the bounding box (0 for an empty pattern)
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0)
    }

    /// Height of the bounding box (0 for an empty pattern)
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0)
    }

    fn named(self, name: &'static str, description: &'static str) -> Self {
        Self { name, description, ..self }
    }
}

/// Parse a plain-text grid into a pattern.
///
/// Each `O` contributes its column and row; every other character is dead.
/// Whitespace-only lines are skipped and do not advance the row index. Lines
/// may differ in length.
pub fn parse_pattern(text: &str) -> Pattern {
    let cells = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, c)| c == 'O')
                .map(move |(x, _)| (x, y))
        })
        .collect();
    Pattern::from_cells(cells)
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_pattern(s))
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    const BLOCK: &str = "\
OO
OO";

    const BLINKER: &str = "\
...
OOO
...";

    const TOAD: &str = "\
.OOO
OOO.";

    const BEACON: &str = "\
OO..
O...
...O
..OO";

    const GLIDER: &str = "\
.O.
..O
OOO";

    const LWSS: &str = "\
.O..O
O....
O...O
OOOO.";

    const PULSAR: &str = "\
..OOO...OOO..
.............
O....O.O....O
O....O.O....O
O....O.O....O
..OOO...OOO..
.............
..OOO...OOO..
O....O.O....O
O....O.O....O
O....O.O....O
.............
..OOO...OOO..";

    const R_PENTOMINO: &str = "\
.OO
OO.
.O.";

    const ACORN: &str = "\
.O.....
...O...
OO..OOO";

    const GLIDER_GUN: &str = "\
........................O...........
......................O.O...........
............OO......OO............OO
...........O...O....OO............OO
OO........O.....O...OO..............
OO........O...O.OO....O.O...........
..........O.....O.......O...........
...........O...O....................
............OO......................";

    /// Block - simple still life
    pub fn block() -> Pattern {
        parse_pattern(BLOCK).named("Block", "Still life")
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        parse_pattern(BLINKER).named("Blinker", "Oscillator (period 2)")
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        parse_pattern(TOAD).named("Toad", "Oscillator (period 2)")
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        parse_pattern(BEACON).named("Beacon", "Oscillator (period 2)")
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        parse_pattern(GLIDER).named("Glider", "Moves diagonally (period 4)")
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        parse_pattern(LWSS).named("LWSS", "Lightweight Spaceship (period 4)")
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        parse_pattern(PULSAR).named("Pulsar", "Oscillator (period 3)")
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        parse_pattern(R_PENTOMINO).named("R-pentomino", "Methuselah - stabilizes at gen 1103")
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        parse_pattern(ACORN).named("Acorn", "Methuselah - stabilizes at gen 5206")
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        parse_pattern(GLIDER_GUN).named("Gosper Glider Gun", "Produces gliders (period 30)")
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
            pulsar(),
            r_pentomino(),
            acorn(),
            glider_gun(),
        ]
    }
}
