//! Lock-free control values shared between host threads.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// A single f32 control value, bit-cast into an `AtomicU32`.
///
/// Clones share the same value: the host keeps one handle to write and the
/// plugin holds another to read. Neither side ever blocks.
#[derive(Debug, Clone)]
pub struct ControlPort {
    value: Arc<AtomicU32>,
}

impl ControlPort {
    /// Create a control holding `value`.
    pub fn new(value: f32) -> Self {
        Self {
            value: Arc::new(AtomicU32::new(value.to_bits())),
        }
    }

    /// Read the current value (lock-free).
    #[inline]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.value.load(Ordering::Acquire))
    }

    /// Write a new value (lock-free). Stored as given, NaN included.
    #[inline]
    pub fn set(&self, value: f32) {
        self.value.store(value.to_bits(), Ordering::Release);
    }
}

impl Default for ControlPort {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_value() {
        let host = ControlPort::new(-6.0);
        let plugin = host.clone();
        assert_eq!(plugin.get(), -6.0);
        host.set(12.5);
        assert_eq!(plugin.get(), 12.5);
    }

    #[test]
    fn test_bit_exact() {
        let port = ControlPort::default();
        for v in [f32::MIN_POSITIVE, -0.0, f32::MAX, -90.0] {
            port.set(v);
            assert_eq!(port.get().to_bits(), v.to_bits());
        }
    }

    #[test]
    fn test_cross_thread_write() {
        let port = ControlPort::new(0.0);
        let writer = port.clone();
        std::thread::spawn(move || writer.set(3.0)).join().unwrap();
        assert_eq!(port.get(), 3.0);
    }
}
