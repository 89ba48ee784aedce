//! Benchmark for per-frame spectral descriptor throughput
//!
//! Runs every descriptor mode over the same stream of synthetic frames at
//! several window sizes and reports the time per frame.

use spectral_descriptors::operations::{DescriptorMode, SpecDesc, SpectralDescriptor};
use spectral_descriptors::{RealVector, SpectralFrame, bins_for_window};
use std::time::Instant;

/// Generate deterministic pseudo-random frames
fn generate_frames(window_size: usize, count: usize) -> Vec<SpectralFrame<f64>> {
    let bins = bins_for_window(window_size);
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    (0..count)
        .map(|_| {
            let magnitude: Vec<f64> = (0..bins).map(|_| next()).collect();
            let phase: Vec<f64> = (0..bins)
                .map(|_| (next() * 2.0 - 1.0) * std::f64::consts::PI)
                .collect();
            SpectralFrame::from_parts(
                RealVector::from_vec(magnitude).expect("non-empty magnitudes"),
                RealVector::from_vec(phase).expect("non-empty phases"),
            )
            .expect("valid frame")
        })
        .collect()
}

/// Benchmark one mode over `frames`
fn benchmark_mode(mode: DescriptorMode, window_size: usize, frames: &[SpectralFrame<f64>]) {
    let mut desc = SpecDesc::<f64>::with_mode(mode, window_size).expect("valid descriptor");

    // Warm up
    for _ in 0..3 {
        let _ = desc.compute_all(frames);
        desc.reset();
    }

    let num_runs = 10;
    let mut times = Vec::with_capacity(num_runs);
    let mut checksum = 0.0;

    for _ in 0..num_runs {
        let start = Instant::now();
        let values = desc.compute_all(frames);
        let elapsed = start.elapsed();
        checksum += values.iter().sum::<f64>();
        desc.reset();
        times.push(elapsed.as_secs_f64() * 1e6 / frames.len() as f64); // microseconds per frame
    }

    times.sort_by(|a, b| a.total_cmp(b));
    let mean = times.iter().sum::<f64>() / times.len() as f64;
    let median = times[times.len() / 2];

    println!(
        "  {:>9}: {:.3}us/frame (median: {:.3}us, range: {:.3}-{:.3}us) checksum={:.3e}",
        mode.name(),
        mean,
        median,
        times[0],
        times[times.len() - 1],
        checksum
    );
}

fn main() {
    println!("Spectral Descriptor Benchmark");
    println!("=============================");

    for window_size in [512usize, 1024, 2048, 4096] {
        let frames = generate_frames(window_size, 200);
        println!(
            "Window {window_size} ({} bins, {} frames):",
            bins_for_window(window_size),
            frames.len()
        );
        for mode in DescriptorMode::ALL {
            benchmark_mode(mode, window_size, &frames);
        }
        println!();
    }

    println!("Benchmark Complete!");
}
