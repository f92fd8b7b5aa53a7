//! Plain-text run log.
//!
//! [`FileDiagnostics`] renders every block as:
//!
//! ```text
//! RUN: state: 1 size: 12 start: 40 end: 52 last_flip: 44
//! \cccc/cccccc
//! ||||||||||||0000
//! end run
//! ```
//!
//! The header holds the state machine position (`0` first run, `1` rising,
//! `2` falling) and the ring indices at block start. The second line has a
//! `\` for each rising-to-falling flip and a `/` for each falling-to-rising
//! flip, each followed by one `c` per replayed sample. The third line has a
//! `|` for every output sample taken from the ring and a `0` for every
//! underrun. `Buffer overflow` and `silence detected` lines appear where they
//! happen.
//!
//! File I/O has no place on a real-time thread; attach this only to offline
//! processing.

use crate::Result;
use octaver_effects::{BlockSnapshot, Diagnostics, EdgeState};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// [`Diagnostics`] observer that writes a text log.
///
/// Hooks cannot fail, so the first write error is held and every later write
/// is skipped. [`finish`](Self::finish) reports it.
#[derive(Debug)]
pub struct FileDiagnostics<W: Write = BufWriter<File>> {
    writer: W,
    error: Option<io::Error>,
    /// The replication line of the current block has been terminated.
    in_output: bool,
}

impl FileDiagnostics {
    /// Create (truncate) the log file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        tracing::info!(path = %path.display(), "writing octaver run log");
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> FileDiagnostics<W> {
    /// Log into any writer.
    pub fn from_writer(writer: W) -> Self {
        let mut diag = Self {
            writer,
            error: None,
            in_output: false,
        };
        diag.write(format_args!("instantiate\n"));
        diag
    }

    /// Flush, and return the writer or the first error seen.
    pub fn finish(mut self) -> Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err.into());
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write(&mut self, args: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_fmt(args) {
            tracing::warn!(error = %err, "run log write failed, further output dropped");
            self.error = Some(err);
        }
    }

    /// Terminate the replication line once per block.
    fn enter_output(&mut self) {
        if !self.in_output {
            self.in_output = true;
            self.write(format_args!("\n"));
        }
    }
}

fn state_code(state: EdgeState) -> u8 {
    match state {
        EdgeState::FirstRun => 0,
        EdgeState::RisingEdge => 1,
        EdgeState::FallingEdge => 2,
    }
}

impl<W: Write> Diagnostics for FileDiagnostics<W> {
    fn block_started(&mut self, snapshot: &BlockSnapshot) {
        self.in_output = false;
        self.write(format_args!(
            "\nRUN: state: {} size: {} start: {} end: {} last_flip: {}\n",
            state_code(snapshot.state),
            snapshot.fill,
            snapshot.start,
            snapshot.end,
            snapshot.last_flip
        ));
    }

    fn buffer_overflow(&mut self, _fill: usize) {
        self.write(format_args!("Buffer overflow\n"));
    }

    fn edge_flip(&mut self, from: EdgeState, replayed: usize) {
        let marker = if from == EdgeState::RisingEdge { '\\' } else { '/' };
        self.write(format_args!("{marker}"));
        for _ in 0..replayed {
            self.write(format_args!("c"));
        }
    }

    fn output_mixed(&mut self, _position: usize) {
        self.enter_output();
        self.write(format_args!("|"));
    }

    fn output_underrun(&mut self, _position: usize) {
        self.enter_output();
        self.write(format_args!("0"));
    }

    fn silence_detected(&mut self) {
        self.enter_output();
        self.write(format_args!("\nsilence detected\n"));
    }

    fn block_finished(&mut self, _snapshot: &BlockSnapshot) {
        self.enter_output();
        self.write(format_args!("\nend run\n"));
    }
}
