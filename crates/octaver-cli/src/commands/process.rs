//! File-based octaver processing command.

use crate::config::{ProcessSettings, SessionConfig, StrideSetting};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use octaver_analysis::{peak_db, rms_db};
use octaver_core::ParameterInfo;
use octaver_effects::{Diagnostics, Octaver};
use octaver_io::{FileDiagnostics, ProcessingEngine, WavSpec, read_wav, write_wav};
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Gain applied before replication, in dB (-90 to 24; -90 mutes the wet path)
    #[arg(short, long, allow_hyphen_values = true)]
    gain_db: Option<f32>,

    /// Processing block size [default: 512]
    #[arg(long)]
    block_size: Option<usize>,

    /// Which input samples feed the replicator [default: decimate]
    #[arg(long, value_enum)]
    stride: Option<StrideSetting>,

    /// Output bit depth (16, 24, or 32) [default: 32]
    #[arg(long)]
    bit_depth: Option<u16>,

    /// Write a per-block run log to this file
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Session file (TOML); flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl ProcessArgs {
    fn settings(&self) -> anyhow::Result<ProcessSettings> {
        let file = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };
        let flags = SessionConfig {
            gain_db: self.gain_db,
            block_size: self.block_size,
            stride: self.stride,
            bit_depth: self.bit_depth,
            log_file: self.log.clone(),
        };
        Ok(file.merge(flags).resolve()?)
    }
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let settings = args.settings()?;
    tracing::debug!(?settings, "resolved process settings");

    println!("Reading {}...", args.input.display());
    let (samples, spec) = read_wav(&args.input)?;
    let sample_rate = spec.sample_rate as f32;

    println!(
        "  {} samples, {} Hz, {:.2}s",
        samples.len(),
        spec.sample_rate,
        samples.len() as f32 / sample_rate
    );

    let output = match &settings.log_file {
        Some(path) => {
            let octaver = Octaver::with_diagnostics(sample_rate, FileDiagnostics::create(path)?);
            let (output, octaver) = render(octaver, &samples, &settings)?;
            octaver.into_diagnostics().finish()?;
            tracing::info!(path = %path.display(), "run log written");
            println!("Run log written to {}", path.display());
            output
        }
        None => render(Octaver::new(sample_rate), &samples, &settings)?.0,
    };

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        rms_db(&samples),
        peak_db(&samples)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        rms_db(&output),
        peak_db(&output)
    );

    let out_spec = WavSpec {
        channels: 1,
        sample_rate: spec.sample_rate,
        bits_per_sample: settings.bit_depth,
    };

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &output, out_spec)?;
    println!("Done!");

    Ok(())
}

fn render<D: Diagnostics>(
    mut octaver: Octaver<D>,
    samples: &[f32],
    settings: &ProcessSettings,
) -> anyhow::Result<(Vec<f32>, Octaver<D>)> {
    octaver.set_param(0, settings.gain_db);
    octaver.set_stride(settings.stride.into());

    println!(
        "Processing: gain {}, stride {:?}, block {}",
        octaver
            .param_info(0)
            .map_or_else(String::new, |d| d.format_value(octaver.gain_db())),
        settings.stride,
        settings.block_size
    );

    let sample_rate = octaver.sample_rate();
    let mut engine =
        ProcessingEngine::new(octaver, sample_rate).with_block_size(settings.block_size)?;

    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let output = engine.process_buffer_with_progress(samples, |done, _| pb.set_position(done as u64));
    pb.finish_with_message("done");

    Ok((output, engine.into_inner()))
}
