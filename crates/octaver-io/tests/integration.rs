//! Integration tests for octaver-io: WAV files, the block engine and the run
//! log working together.

use octaver_analysis::{count_sign_changes, signal::sine_samples};
use octaver_core::Effect;
use octaver_effects::{EdgeState, NoDiagnostics, Octaver};
use octaver_io::{FileDiagnostics, ProcessingEngine, WavSpec, read_wav, write_wav};
use tempfile::{NamedTempFile, tempdir};

const SAMPLE_RATE: u32 = 48000;

#[test]
fn stereo_file_mixed_to_mono() {
    let file = NamedTempFile::new().unwrap();
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(file.path(), spec).unwrap();
    for (l, r) in [(0.5f32, 0.25f32), (-1.0, 1.0), (0.0, -0.5)] {
        writer.write_sample(l).unwrap();
        writer.write_sample(r).unwrap();
    }
    writer.finalize().unwrap();

    let (mono, loaded) = read_wav(file.path()).unwrap();
    assert_eq!(loaded.channels, 2);
    assert_eq!(mono, [0.375, 0.0, -0.25]);
}

#[test]
fn i16_roundtrip_tolerance() {
    let samples = sine_samples(SAMPLE_RATE as f32, 440.0, 4800, 0.9);
    let spec = WavSpec {
        bits_per_sample: 16,
        ..WavSpec::default()
    };
    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &samples, spec).unwrap();

    let (loaded, loaded_spec) = read_wav(file.path()).unwrap();
    assert_eq!(loaded_spec.bits_per_sample, 16);
    assert_eq!(loaded.len(), samples.len());
    for (a, b) in samples.iter().zip(loaded.iter()) {
        assert!((a - b).abs() < 0.001);
    }
}

#[test]
fn engine_matches_manual_blocks() {
    let input = sine_samples(SAMPLE_RATE as f32, 330.0, 5000, 0.7);

    let mut engine = ProcessingEngine::new(Octaver::new(48000.0), 48000.0)
        .with_block_size(256)
        .unwrap();
    let from_engine = engine.process_buffer(&input);

    let mut manual = Octaver::new(48000.0);
    let mut expected = vec![0.0; input.len()];
    for (i, o) in input.chunks(256).zip(expected.chunks_mut(256)) {
        manual.process_block(i, o);
    }

    assert_eq!(from_engine, expected);
}

#[test]
fn file_to_file_octave_up() {
    let dir = tempdir().unwrap();
    let in_path = dir.path().join("in.wav");
    let out_path = dir.path().join("out.wav");

    let input = sine_samples(SAMPLE_RATE as f32, 220.0, 48000, 0.8);
    write_wav(&in_path, &input, WavSpec::default()).unwrap();

    let (samples, spec) = read_wav(&in_path).unwrap();
    let mut engine = ProcessingEngine::new(Octaver::new(spec.sample_rate as f32), spec.sample_rate as f32);
    let output = engine.process_buffer(&samples);
    write_wav(&out_path, &output, spec).unwrap();

    let (processed, _) = read_wav(&out_path).unwrap();
    assert_eq!(processed.len(), input.len());
    assert!(processed.iter().all(|y| y.is_finite()));
    // Dry bleed keeps the mix from a clean 2x, but it must be well above 1x.
    let ratio = count_sign_changes(&processed) as f32 / count_sign_changes(&input) as f32;
    assert!(ratio > 1.5, "crossing ratio {ratio}");
}

#[test]
fn run_log_written_to_file() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("octaver.log");

    let diagnostics = FileDiagnostics::create(&log_path).unwrap();
    let octaver = Octaver::with_diagnostics(48000.0, diagnostics);
    let mut engine = ProcessingEngine::new(octaver, 48000.0).with_block_size(128).unwrap();

    let mut input = sine_samples(48000.0, 440.0, 512, 0.5);
    input.extend(std::iter::repeat_n(0.0, 128));
    engine.process_buffer(&input);

    let octaver = engine.into_inner();
    assert_eq!(octaver.state(), EdgeState::FirstRun);
    octaver.into_diagnostics().finish().unwrap();

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.starts_with("instantiate\n"));
    assert_eq!(log.matches("RUN: state:").count(), 5);
    assert_eq!(log.matches("end run").count(), 5);
    assert_eq!(log.matches("silence detected").count(), 1);
    assert!(log.contains('\\') && log.contains('/'));
    assert!(log.matches('|').count() > 0);
}

#[test]
fn no_diagnostics_engine_default_block() {
    let mut engine = ProcessingEngine::new(Octaver::with_diagnostics(48000.0, NoDiagnostics), 48000.0);
    let output = engine.process_buffer(&[0.1; 1000]);
    assert_eq!(output.len(), 1000);
    assert_eq!(engine.block_size(), 512);
}
