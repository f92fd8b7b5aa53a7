//! Fixed-capacity circular sample store.
//!
//! [`RingBuffer`] is the only storage the octaver touches in its audio path.
//! It owns the sample array plus the `start` (read) and `end` (write) indices
//! and keeps all wrap arithmetic in one place.
//!
//! # Full vs. empty
//!
//! The buffer does not keep a separate count. `len()` is derived from the two
//! indices, so a ring of `capacity` slots holds at most `capacity - 1` unread
//! samples. Pushing into a buffer that already holds `capacity - 1` samples
//! overwrites the oldest unread one: the write lands and `start` is advanced
//! past it. There is no overflow signal.
//!
//! Storage is never cleared. [`RingBuffer::rewind`] only moves the indices
//! back to zero; stale samples stay in place and are unreachable until they
//! are overwritten.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec;
use alloc::vec::Vec;

/// Default capacity used by the octaver (samples).
///
/// About 43 ms at 192 kHz: enough to hold a full half-cycle of a ~12 Hz sine
/// at the highest common sample rate.
pub const DEFAULT_CAPACITY: usize = 8192;

/// Circular buffer of `f32` samples with overwrite-on-full semantics.
///
/// Heap-allocated once at construction, never resized. All operations are
/// O(1) and allocation-free.
///
/// # Example
///
/// ```rust
/// use octaver_core::RingBuffer;
///
/// let mut ring = RingBuffer::new(8);
/// ring.push(0.25);
/// ring.push(-0.5);
/// assert_eq!(ring.len(), 2);
/// assert_eq!(ring.pop(), Some(0.25));
/// assert_eq!(ring.pop(), Some(-0.5));
/// assert_eq!(ring.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer {
    samples: Vec<f32>,
    start: usize,
    end: usize,
}

impl RingBuffer {
    /// Creates a zero-filled ring with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity < 2` (a ring that can never hold a sample).
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 2, "RingBuffer capacity must be >= 2");

        Self {
            samples: vec![0.0; capacity],
            start: 0,
            end: 0,
        }
    }

    /// Number of slots (one more than the number of readable samples it can hold).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// Number of unread samples: `(end - start + capacity) % capacity`.
    #[inline]
    pub fn len(&self) -> usize {
        let cap = self.capacity();
        (self.end + cap - self.start) % cap
    }

    /// `true` when no sample is waiting to be popped.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// `true` when the next push will overwrite the oldest unread sample.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() + 1 >= self.capacity()
    }

    /// Read index (position of the next sample `pop` returns).
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Write index (position the next `push` writes to).
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Index following `index`, wrapped to the capacity.
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    /// Sample stored at `index` (wrapped), regardless of whether it is unread.
    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        self.samples[index % self.capacity()]
    }

    /// Writes `sample` at `end` and advances `end`.
    ///
    /// If the ring was full, `start` is advanced as well so the oldest
    /// unread sample is dropped.
    #[inline]
    pub fn push(&mut self, sample: f32) {
        self.samples[self.end] = sample;
        self.end = self.next_index(self.end);
        if self.end == self.start {
            self.start = self.next_index(self.start);
        }
    }

    /// Reads the sample at `start` and advances `start`.
    ///
    /// Returns `None` when the ring is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }
        let sample = self.samples[self.start];
        self.start = self.next_index(self.start);
        Some(sample)
    }

    /// Moves both indices back to zero without touching storage.
    pub fn rewind(&mut self) {
        self.start = 0;
        self.end = 0;
    }
}

impl Default for RingBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut ring = RingBuffer::new(16);
        for i in 0..10 {
            ring.push(i as f32);
        }
        assert_eq!(ring.len(), 10);
        for i in 0..10 {
            assert_eq!(ring.pop(), Some(i as f32));
        }
        assert!(ring.is_empty());
    }

    #[test]
    fn test_pop_empty_is_none() {
        let mut ring = RingBuffer::new(4);
        assert_eq!(ring.pop(), None);
        assert_eq!(ring.start(), 0);
    }

    #[test]
    fn test_len_wraps() {
        let mut ring = RingBuffer::new(4);
        for _ in 0..3 {
            ring.push(1.0);
            ring.pop();
        }
        // start == end == 3
        ring.push(2.0);
        ring.push(3.0);
        assert_eq!(ring.end(), 1);
        assert_eq!(ring.len(), 2);
    }

    #[test]
    fn test_overwrite_drops_oldest() {
        let mut ring = RingBuffer::new(4);
        for i in 0..5 {
            ring.push(i as f32);
        }
        // Holds at most capacity - 1
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.pop(), Some(2.0));
        assert_eq!(ring.pop(), Some(3.0));
        assert_eq!(ring.pop(), Some(4.0));
        assert_eq!(ring.pop(), None);
    }

    #[test]
    fn test_is_full() {
        let mut ring = RingBuffer::new(4);
        ring.push(0.0);
        ring.push(0.0);
        assert!(!ring.is_full());
        ring.push(0.0);
        assert!(ring.is_full());
    }

    #[test]
    fn test_rewind_keeps_storage() {
        let mut ring = RingBuffer::new(8);
        ring.push(0.5);
        ring.push(0.75);
        ring.rewind();
        assert_eq!(ring.len(), 0);
        assert_eq!(ring.start(), 0);
        assert_eq!(ring.end(), 0);
        assert_eq!(ring.get(1), 0.75);
    }

    #[test]
    fn test_index_helpers() {
        let ring = RingBuffer::new(8);
        assert_eq!(ring.next_index(7), 0);
        assert_eq!(ring.next_index(3), 4);
    }

    #[test]
    #[should_panic]
    fn test_zero_capacity_panics() {
        let _ = RingBuffer::new(0);
    }
}
