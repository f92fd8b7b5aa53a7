//! Offline I/O for the octaver.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav`] and [`write_wav`] for loading/saving mono audio
//! - **Block processing**: [`ProcessingEngine`] for running an effect over a whole buffer
//! - **Run log**: [`FileDiagnostics`], a text trace of every block the octaver processes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use octaver_effects::Octaver;
//! use octaver_io::{ProcessingEngine, read_wav, write_wav};
//!
//! # fn main() -> octaver_io::Result<()> {
//! let (samples, spec) = read_wav("input.wav")?;
//!
//! let octaver = Octaver::new(spec.sample_rate as f32);
//! let mut engine = ProcessingEngine::new(octaver, spec.sample_rate as f32);
//! let processed = engine.process_buffer(&samples);
//!
//! write_wav("output.wav", &processed, spec)?;
//! # Ok(())
//! # }
//! ```

mod engine;
mod log;
mod wav;

pub use engine::{DEFAULT_BLOCK_SIZE, ProcessingEngine};
pub use log::FileDiagnostics;
pub use wav::{WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav};

/// Error types for offline I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Block size of zero requested.
    #[error("Invalid block size: {0}")]
    InvalidBlockSize(usize),

    /// Bit depth other than 16, 24 or 32 requested for output.
    #[error("Unsupported bit depth: {0} (expected 16, 24 or 32)")]
    UnsupportedBitDepth(u16),
}

/// Convenience result type for I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
