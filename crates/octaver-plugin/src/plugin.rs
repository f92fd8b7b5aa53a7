//! Plugin instance lifecycle.

use crate::control::ControlPort;
use crate::descriptor::{PLUGIN_URI, PluginDescriptor, PortIndex};
use crate::PluginError;
use octaver_core::{Effect, ParameterInfo};
use octaver_effects::Octaver;
use std::any::Any;

/// One plugin instance.
///
/// Created by [`instantiate`](Self::instantiate), released on drop.
/// `activate` and `deactivate` only toggle whether `run` is accepted; the
/// effect state is untouched by either.
#[derive(Debug)]
pub struct OctaverPlugin {
    octaver: Octaver,
    gain: Option<ControlPort>,
    active: bool,
    sample_rate: f64,
}

impl OctaverPlugin {
    /// Create an instance for `descriptor` at `sample_rate`.
    ///
    /// This is where the ring buffer is allocated; nothing later allocates.
    pub fn instantiate(
        descriptor: &PluginDescriptor,
        sample_rate: f64,
    ) -> Result<Self, PluginError> {
        if descriptor.uri != PLUGIN_URI {
            return Err(PluginError::UnknownPlugin(descriptor.uri));
        }
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(PluginError::InvalidSampleRate(sample_rate));
        }

        tracing::info!(uri = descriptor.uri, sample_rate, "instantiate");

        Ok(Self {
            octaver: Octaver::new(sample_rate as f32),
            gain: None,
            active: false,
            sample_rate,
        })
    }

    /// Bind a control value to a control port.
    ///
    /// Audio ports are not bound here; their buffers are passed to
    /// [`run`](Self::run).
    pub fn connect_control(
        &mut self,
        port: PortIndex,
        control: ControlPort,
    ) -> Result<(), PluginError> {
        match port {
            PortIndex::Gain => {
                self.gain = Some(control);
                Ok(())
            }
            PortIndex::Input | PortIndex::Output => Err(PluginError::NotAControlPort(port)),
        }
    }

    /// [`connect_control`](Self::connect_control) with a raw host port number.
    pub fn connect_port(&mut self, index: u32, control: ControlPort) -> Result<(), PluginError> {
        self.connect_control(PortIndex::try_from(index)?, control)
    }

    /// Allow `run`.
    pub fn activate(&mut self) {
        tracing::debug!("activate");
        self.active = true;
    }

    /// Disallow `run`.
    pub fn deactivate(&mut self) {
        tracing::debug!("deactivate");
        self.active = false;
    }

    /// Whether `run` is currently accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Process one block.
    ///
    /// The gain control is read once, before any sample, and handed to the
    /// effect as is. With no control connected the last value (initially
    /// 0 dB) stays in effect.
    pub fn run(&mut self, input: &[f32], output: &mut [f32]) -> Result<(), PluginError> {
        if !self.active {
            return Err(PluginError::NotActive);
        }
        if input.len() != output.len() {
            return Err(PluginError::PortMismatch {
                input: input.len(),
                output: output.len(),
            });
        }

        if let Some(gain) = &self.gain {
            self.octaver.set_param(0, gain.get());
        }
        self.octaver.process_block(input, output);
        Ok(())
    }

    /// Extension interfaces. None are provided.
    pub fn extension_data(uri: &str) -> Option<&'static dyn Any> {
        tracing::trace!(uri, "extension query");
        None
    }

    /// The wrapped effect.
    pub fn octaver(&self) -> &Octaver {
        &self.octaver
    }

    /// Sample rate passed to `instantiate`.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

impl Drop for OctaverPlugin {
    fn drop(&mut self) {
        tracing::debug!("cleanup");
    }
}
