//! Audio analysis command.

use clap::Args;
use octaver_analysis::{estimate_frequency, peak_db, rms_db, zero_crossing_rate};
use octaver_io::{WavFormat, read_wav, read_wav_info};
use std::path::PathBuf;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.input)?;
    let (samples, spec) = read_wav(&args.input)?;
    let sample_rate = spec.sample_rate as f32;

    let format_str = match info.format {
        WavFormat::Pcm => "PCM",
        WavFormat::IeeeFloat => "IEEE Float",
    };

    println!("File:        {}", args.input.display());
    println!("Format:      {} {}-bit", format_str, info.bits_per_sample);
    println!("Channels:    {}", info.channels);
    println!("Sample Rate: {} Hz", info.sample_rate);
    println!(
        "Duration:    {:.3}s ({} frames)",
        info.duration_secs, info.num_frames
    );
    println!("RMS:         {:.1} dB", rms_db(&samples));
    println!("Peak:        {:.1} dB", peak_db(&samples));
    println!(
        "ZCR:         {:.1} crossings/s",
        zero_crossing_rate(&samples, sample_rate)
    );
    println!(
        "Est. f0:     {:.1} Hz",
        estimate_frequency(&samples, sample_rate)
    );

    Ok(())
}
