// Domain layer - simulation engine
pub mod domain;

// Re-exports for convenience
pub use domain::{
    Coord, Error, Pattern, Result, SparseGrid, World, neighbors, parse_pattern, presets,
    will_live,
};
