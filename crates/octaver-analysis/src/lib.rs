//! Octaver Analysis - offline measurements for checking octave-up output
//!
//! - [`zero_crossing`] - Sign-change counting, crossing rate, fundamental estimate
//! - [`dynamics`] - RMS and peak levels
//! - [`signal`] - Test tone generation
//!
//! Half-wave replication doubles the zero-crossing rate of its input, so a
//! crossing count is all that is needed to see whether an octave was added.
//!
//! ## Example
//!
//! ```rust
//! use octaver_analysis::{signal::sine, zero_crossing::estimate_frequency};
//!
//! let tone = sine(48000.0, 440.0, 1.0, 0.5);
//! let f0 = estimate_frequency(&tone, 48000.0);
//! assert!((f0 - 440.0).abs() < 2.0);
//! ```

pub mod dynamics;
pub mod signal;
pub mod zero_crossing;

pub use dynamics::{peak, peak_db, rms, rms_db};
pub use octaver_core::linear_to_db;
pub use zero_crossing::{count_sign_changes, estimate_frequency, zero_crossing_rate};
