mod error;
mod grid;
mod neighborhood;
mod patterns;
mod rules;
mod world;

pub use error::{Error, Result};
pub use grid::{Coord, SparseGrid};
pub use neighborhood::{live_neighbor_count, neighbors};
pub use patterns::{Pattern, parse_pattern, presets};
pub use rules::will_live;
pub use world::{DEFAULT_DENSITY, World};
