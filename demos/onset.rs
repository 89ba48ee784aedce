use std::f64::consts::PI;

use rustfft::{FftPlanner, num_complex::Complex};
use spectral_descriptors::operations::{DescriptorMode, SpecDesc, SpectralDescriptor};
use spectral_descriptors::{DescriptorResult, SpectralFrame, bins_for_window, window};

const SAMPLE_RATE: f64 = 44_100.0;
const WINDOW_SIZE: usize = 1024;
const HOP_SIZE: usize = 512;

/// Decaying 880 Hz notes struck every half second (120 BPM).
fn note_track(duration_secs: f64) -> Vec<f64> {
    let num_samples = (duration_secs * SAMPLE_RATE) as usize;
    let period = (0.5 * SAMPLE_RATE) as usize;
    (0..num_samples)
        .map(|n| {
            let since_strike = (n % period) as f64 / SAMPLE_RATE;
            (-since_strike * 12.0).exp() * (2.0 * PI * 880.0 * n as f64 / SAMPLE_RATE).sin()
        })
        .collect()
}

fn analyse(signal: &[f64]) -> DescriptorResult<Vec<SpectralFrame<f64>>> {
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(WINDOW_SIZE);
    let win = window::window::<f64>("hanningz", WINDOW_SIZE)?;
    let bins = bins_for_window(WINDOW_SIZE);

    let mut frames = Vec::new();
    let mut start = 0;
    while start + WINDOW_SIZE <= signal.len() {
        let mut buffer: Vec<Complex<f64>> = signal[start..start + WINDOW_SIZE]
            .iter()
            .zip(win.iter())
            .map(|(&x, &w)| Complex::new(x * w, 0.0))
            .collect();
        fft.process(&mut buffer);
        frames.push(SpectralFrame::from_complex(&buffer, bins)?);
        start += HOP_SIZE;
    }
    Ok(frames)
}

pub fn main() -> DescriptorResult<()> {
    let signal = note_track(4.0);
    let frames = analyse(&signal)?;
    println!("{} frames of {} bins", frames.len(), bins_for_window(WINDOW_SIZE));

    for mode in DescriptorMode::ALL {
        let mut desc = SpecDesc::<f64>::with_mode(mode, WINDOW_SIZE)?;
        let values = desc.compute_all(&frames);
        let max = values.iter().cloned().fold(f64::MIN, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        println!("{:>9}: mean={mean:>12.4} max={max:>12.4}", mode.name());

        if mode.is_onset_function() && max > 0.0 {
            // crude local-maximum picking against half the global maximum
            let onsets: Vec<f64> = (1..values.len().saturating_sub(1))
                .filter(|&i| {
                    values[i] > 0.5 * max && values[i] >= values[i - 1] && values[i] > values[i + 1]
                })
                .map(|i| (i * HOP_SIZE) as f64 / SAMPLE_RATE)
                .collect();
            println!("           onsets (s): {onsets:.2?}");
        }
    }

    Ok(())
}
