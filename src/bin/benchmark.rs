//! Measures tick throughput of the sparse engine on square worlds

use std::time::Instant;

use game_of_life::domain::{DEFAULT_DENSITY, World, presets};
use log::{info, warn};

const SIZES: [usize; 5] = [50, 100, 200, 400, 800];
const ITERATIONS: u32 = 20;

/// Average milliseconds per generation on a randomly seeded world
fn benchmark_random(size: usize, iterations: u32) -> (f64, usize) {
    let mut world = World::new(size, size);
    world.randomize(DEFAULT_DENSITY);

    let start = Instant::now();
    for _ in 0..iterations {
        world.tick();
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, world.population())
}

/// Same sweep with a near-empty world: cost tracks area, not population
fn benchmark_sparse(size: usize, iterations: u32) -> f64 {
    let mut world = World::new(size, size);
    if let Err(err) = world.apply_pattern(&presets::glider(), 1, 1) {
        warn!("could not seed {}x{} world: {}", size, size, err);
    }

    let start = Instant::now();
    world.step(iterations as u64);
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    if let Err(err) = simple_logger::init_with_level(log::Level::Info) {
        eprintln!("logger unavailable: {}", err);
    }

    println!("=== Game of Life Tick Benchmark ===\n");
    println!(
        "{:>10} {:>14} {:>14} {:>12} {:>14}",
        "Size", "Random ms", "Glider ms", "Population", "Mcells/sec"
    );
    println!("{:-<70}", "");

    for size in SIZES {
        info!("benchmarking {}x{}", size, size);
        let (random_ms, population) = benchmark_random(size, ITERATIONS);
        let sparse_ms = benchmark_sparse(size, ITERATIONS);
        let cells = (size * size) as f64;

        println!(
            "{:>10} {:>14.3} {:>14.3} {:>12} {:>14.2}",
            format!("{}x{}", size, size),
            random_ms,
            sparse_ms,
            population,
            cells / (random_ms / 1000.0) / 1_000_000.0
        );
    }
}
