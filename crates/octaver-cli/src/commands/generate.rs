//! Test signal generation command.

use clap::{Args, Subcommand};
use octaver_analysis::signal::sine;
use octaver_io::{WavSpec, write_wav};
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a sine tone
    Sine {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "440.0")]
        freq: f32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,

        /// Duration in seconds
        #[arg(long, default_value = "2.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    match args.command {
        GenerateCommand::Sine {
            output,
            freq,
            amplitude,
            duration,
            sample_rate,
        } => {
            if sample_rate == 0 {
                anyhow::bail!("sample rate must be positive");
            }
            if !(0.0..=1.0).contains(&amplitude) {
                anyhow::bail!("amplitude must be within 0-1, got {amplitude}");
            }

            println!("Generating {freq} Hz sine, {duration}s at {sample_rate} Hz...");
            let samples = sine(sample_rate as f32, freq, duration, amplitude);

            let spec = WavSpec {
                channels: 1,
                sample_rate,
                bits_per_sample: 32,
            };
            write_wav(&output, &samples, spec)?;
            println!("Saved to {}", output.display());
        }
    }

    Ok(())
}
