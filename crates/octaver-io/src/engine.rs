//! Block-wise offline processing.

use crate::{Error, Result};
use octaver_core::Effect;

/// Block size used when none is given.
pub const DEFAULT_BLOCK_SIZE: usize = 512;

/// Runs a whole buffer through one effect in fixed-size blocks.
///
/// Blocking matters for the octaver: its silence decision is made per block,
/// so the same input split differently can produce different output. The
/// final block may be shorter than the rest.
pub struct ProcessingEngine<E: Effect> {
    effect: E,
    block_size: usize,
    sample_rate: f32,
}

impl<E: Effect> ProcessingEngine<E> {
    /// Create an engine with [`DEFAULT_BLOCK_SIZE`].
    pub fn new(mut effect: E, sample_rate: f32) -> Self {
        effect.set_sample_rate(sample_rate);
        Self {
            effect,
            block_size: DEFAULT_BLOCK_SIZE,
            sample_rate,
        }
    }

    /// Builder-style block size. Zero is rejected.
    pub fn with_block_size(mut self, block_size: usize) -> Result<Self> {
        self.set_block_size(block_size)?;
        Ok(self)
    }

    /// Set the block size. Zero is rejected.
    pub fn set_block_size(&mut self, block_size: usize) -> Result<()> {
        if block_size == 0 {
            return Err(Error::InvalidBlockSize(block_size));
        }
        self.block_size = block_size;
        Ok(())
    }

    /// Current block size.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Get the sample rate.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Set the sample rate on the engine and the effect.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.effect.set_sample_rate(sample_rate);
    }

    /// The wrapped effect.
    pub fn effect(&self) -> &E {
        &self.effect
    }

    /// The wrapped effect, mutably.
    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }

    /// Consume the engine and return the effect.
    pub fn into_inner(self) -> E {
        self.effect
    }

    /// Current latency of the effect in samples.
    pub fn latency_samples(&self) -> usize {
        self.effect.latency_samples()
    }

    /// Reset the effect.
    pub fn reset(&mut self) {
        self.effect.reset();
    }

    /// Process an entire buffer and return the output.
    pub fn process_buffer(&mut self, input: &[f32]) -> Vec<f32> {
        self.process_buffer_with_progress(input, |_, _| {})
    }

    /// Process an entire buffer, calling `progress(done, total)` after each
    /// block.
    pub fn process_buffer_with_progress<F>(&mut self, input: &[f32], mut progress: F) -> Vec<f32>
    where
        F: FnMut(usize, usize),
    {
        let total = input.len();
        let mut output = vec![0.0; total];
        let mut done = 0;

        tracing::debug!(samples = total, block_size = self.block_size, "processing buffer");

        for (in_chunk, out_chunk) in input
            .chunks(self.block_size)
            .zip(output.chunks_mut(self.block_size))
        {
            self.effect.process_block(in_chunk, out_chunk);
            done += in_chunk.len();
            progress(done, total);
        }

        tracing::debug!(latency = self.effect.latency_samples(), "buffer processed");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the length of every block it sees and passes audio through.
    #[derive(Default)]
    struct BlockRecorder {
        blocks: Vec<usize>,
        sample_rate: f32,
    }

    impl Effect for BlockRecorder {
        fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
            self.blocks.push(input.len());
            output.copy_from_slice(input);
        }

        fn set_sample_rate(&mut self, sample_rate: f32) {
            self.sample_rate = sample_rate;
        }

        fn reset(&mut self) {
            self.blocks.clear();
        }
    }

    #[test]
    fn test_last_block_short() {
        let mut engine = ProcessingEngine::new(BlockRecorder::default(), 44100.0)
            .with_block_size(4)
            .unwrap();
        let input: Vec<f32> = (0..10).map(|i| i as f32).collect();
        let output = engine.process_buffer(&input);

        assert_eq!(output, input);
        assert_eq!(engine.effect().blocks, [4, 4, 2]);
        assert_eq!(engine.effect().sample_rate, 44100.0);
    }

    #[test]
    fn test_zero_block_size_rejected() {
        let engine = ProcessingEngine::new(BlockRecorder::default(), 48000.0);
        assert!(matches!(
            engine.with_block_size(0),
            Err(Error::InvalidBlockSize(0))
        ));
    }

    #[test]
    fn test_progress_reports() {
        let mut engine = ProcessingEngine::new(BlockRecorder::default(), 48000.0)
            .with_block_size(3)
            .unwrap();
        let mut seen = Vec::new();
        engine.process_buffer_with_progress(&[0.0; 7], |done, total| seen.push((done, total)));
        assert_eq!(seen, [(3, 7), (6, 7), (7, 7)]);
    }

    #[test]
    fn test_empty_input() {
        let mut engine = ProcessingEngine::new(BlockRecorder::default(), 48000.0);
        assert!(engine.process_buffer(&[]).is_empty());
        assert!(engine.effect().blocks.is_empty());
        engine.reset();
        assert_eq!(engine.block_size(), DEFAULT_BLOCK_SIZE);
    }
}
