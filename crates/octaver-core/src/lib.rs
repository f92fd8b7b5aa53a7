//! Octaver Core - DSP primitives for the octave-up effect
//!
//! This crate provides the building blocks the octaver's real-time path is
//! made of. Nothing here allocates after construction.
//!
//! # Core Abstractions
//!
//! - [`Effect`] - Block-processing trait every effect implements
//! - [`ParameterInfo`] / [`ParamDescriptor`] - Introspectable host controls
//! - [`RingBuffer`] - Fixed-capacity circular sample store with
//!   overwrite-on-full semantics
//!
//! ## Utilities
//!
//! - [`gain_coefficient`] - Control-port gain law with a hard mute below -90 dB
//! - [`db_to_linear`] / [`linear_to_db`]
//!
//! # no_std Support
//!
//! Disable the default `std` feature for embedded targets:
//!
//! ```toml
//! [dependencies]
//! octaver-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod effect;
pub mod math;
pub mod param_info;
pub mod ring_buffer;

pub use effect::Effect;
pub use math::{MUTE_FLOOR_DB, db_to_linear, gain_coefficient, linear_to_db};
pub use param_info::{ParamDescriptor, ParamId, ParamUnit, ParameterInfo};
pub use ring_buffer::{DEFAULT_CAPACITY, RingBuffer};
