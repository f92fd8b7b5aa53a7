//! Test signal generation.

use std::f32::consts::PI;

/// Generate a sine tone.
///
/// # Arguments
/// * `sample_rate` - Sample rate in Hz
/// * `frequency` - Tone frequency in Hz
/// * `duration_secs` - Duration in seconds
/// * `amplitude` - Peak amplitude
pub fn sine(sample_rate: f32, frequency: f32, duration_secs: f32, amplitude: f32) -> Vec<f32> {
    let num_samples = (duration_secs * sample_rate) as usize;
    sine_samples(sample_rate, frequency, num_samples, amplitude)
}

/// Generate a sine tone of exactly `num_samples` samples.
pub fn sine_samples(sample_rate: f32, frequency: f32, num_samples: usize, amplitude: f32) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate;
            amplitude * (2.0 * PI * frequency * t).sin()
        })
        .collect()
}
