//! Timing of the sparse generation step.
//!
//! A fixed population spread over ever larger boards should cost about
//! the same per generation; a random fill scales with the live count.

use std::time::Instant;
use sparse_life::{Life, LifeError, presets};

const SEED: u64 = 0x5eed;

/// Milliseconds per generation for `life`, advanced `iterations` times
fn time_advance(mut life: Life, iterations: u32) -> (f64, usize) {
    let start = Instant::now();
    for _ in 0..iterations {
        life.advance();
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, life.population())
}

/// A 4x4 lattice of gliders in the board's top-left corner
fn sparse_board(size: u32) -> Result<Life, LifeError> {
    let mut life = Life::with_seed(size, size, SEED)?;
    let glider = presets::glider();
    for row in 0..4 {
        for col in 0..4 {
            glider.place_on(&mut life, col * 8 + 2, row * 8 + 2);
        }
    }
    Ok(life)
}

fn random_board(size: u32) -> Result<Life, LifeError> {
    let mut life = Life::with_seed(size, size, SEED)?;
    life.randomize_default();
    Ok(life)
}

fn main() -> anyhow::Result<()> {
    println!("=== Sparse Life Benchmark ===\n");

    let sizes = [64, 256, 1024, 4096, 16384];
    let iterations = 20;

    println!("{:>12} {:>14} {:>10} {:>14} {:>10}",
        "Size", "Gliders ms", "Live", "Random ms", "Live");
    println!("{:-<64}", "");

    for size in sizes {
        let (sparse_ms, sparse_live) = time_advance(sparse_board(size)?, iterations);

        // A random fill of the largest boards holds tens of millions of cells
        let (random_str, random_live) = if size <= 1024 {
            let (ms, live) = time_advance(random_board(size)?, iterations);
            (format!("{:>14.3}", ms), format!("{:>10}", live))
        } else {
            (format!("{:>14}", "-"), format!("{:>10}", "-"))
        };

        println!(
            "{:>12} {:>14.3} {:>10} {} {}",
            format!("{}x{}", size, size),
            sparse_ms,
            sparse_live,
            random_str,
            random_live
        );
    }

    Ok(())
}
