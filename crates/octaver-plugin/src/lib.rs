//! Host plugin adapter for the octaver.
//!
//! Models the lifecycle a plugin host drives, as a safe Rust API:
//!
//! | Host call | Here |
//! |-----------|------|
//! | descriptor lookup | [`descriptor`] |
//! | instantiate | [`OctaverPlugin::instantiate`] |
//! | connect port | [`OctaverPlugin::connect_control`]; audio buffers are passed to `run` |
//! | activate / deactivate | [`OctaverPlugin::activate`] / [`OctaverPlugin::deactivate`] |
//! | run | [`OctaverPlugin::run`] |
//! | extension data | [`OctaverPlugin::extension_data`] |
//! | cleanup | `Drop` |
//!
//! The gain control is a [`ControlPort`]: an f32 stored as bits in an
//! `AtomicU32`, written by the host from any thread and read once per block
//! by `run`. All allocation happens in `instantiate`.
//!
//! # Example
//!
//! ```rust
//! use octaver_plugin::{ControlPort, OctaverPlugin, PortIndex, descriptor};
//!
//! let desc = descriptor(0).expect("one plugin");
//! let mut plugin = OctaverPlugin::instantiate(desc, 48000.0)?;
//!
//! let gain = ControlPort::new(-6.0);
//! plugin.connect_control(PortIndex::Gain, gain.clone())?;
//! plugin.activate();
//!
//! let input = [0.25f32; 64];
//! let mut output = [0.0f32; 64];
//! plugin.run(&input, &mut output)?;
//! # Ok::<(), octaver_plugin::PluginError>(())
//! ```

mod control;
mod descriptor;
mod plugin;

pub use control::ControlPort;
pub use descriptor::{
    PLUGIN_URI, PluginDescriptor, PortDirection, PortIndex, PortInfo, PortKind, descriptor,
};
pub use plugin::OctaverPlugin;

/// Errors reported to the host.
///
/// The effect itself never fails; these cover misuse of the lifecycle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PluginError {
    /// Descriptor does not describe this plugin.
    #[error("unknown plugin URI: {0}")]
    UnknownPlugin(&'static str),

    /// Sample rate not finite and positive.
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(f64),

    /// Port index out of range.
    #[error("unknown port index: {0}")]
    UnknownPort(u32),

    /// Control binding requested for an audio port.
    #[error("port {0:?} is not a control port")]
    NotAControlPort(PortIndex),

    /// Input and output buffers differ in length.
    #[error("port buffer mismatch: input has {input} samples, output has {output}")]
    PortMismatch {
        /// Input buffer length.
        input: usize,
        /// Output buffer length.
        output: usize,
    },

    /// `run` called outside activate/deactivate.
    #[error("plugin instance is not active")]
    NotActive,
}
