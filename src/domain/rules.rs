//! Conway's Game of Life rule (B3/S23).

/// Pure function computing a cell's next state:
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn will_live(is_alive_now: bool, live_neighbors: u8) -> bool {
    matches!((is_alive_now, live_neighbors), (true, 2 | 3) | (false, 3))
}
