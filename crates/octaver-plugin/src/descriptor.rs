//! Static plugin description: URI, ports and their ranges.

use crate::PluginError;

/// Identifier the host uses for this plugin.
pub const PLUGIN_URI: &str = "http://lv2plug.in/plugins/justOneOctaveUp";

/// Port indices, in the order the host numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortIndex {
    /// Gain control in dB.
    Gain = 0,
    /// Mono audio input.
    Input = 1,
    /// Mono audio output.
    Output = 2,
}

impl TryFrom<u32> for PortIndex {
    type Error = PluginError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(PortIndex::Gain),
            1 => Ok(PortIndex::Input),
            2 => Ok(PortIndex::Output),
            other => Err(PluginError::UnknownPort(other)),
        }
    }
}

/// What flows through a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortKind {
    /// One f32 per block.
    Control,
    /// One f32 per sample.
    Audio,
}

/// Which way data flows through a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    /// Host to plugin.
    Input,
    /// Plugin to host.
    Output,
}

/// Description of one port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortInfo {
    /// Port number.
    pub index: PortIndex,
    /// Machine-readable symbol.
    pub symbol: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Control or audio.
    pub kind: PortKind,
    /// Input or output.
    pub direction: PortDirection,
    /// `(min, max, default)` for control ports.
    pub range: Option<(f32, f32, f32)>,
}

/// Static description of the plugin.
#[derive(Debug)]
pub struct PluginDescriptor {
    /// Plugin URI.
    pub uri: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Ports in index order.
    pub ports: &'static [PortInfo],
}

impl PluginDescriptor {
    /// Port info by index.
    pub fn port(&self, index: PortIndex) -> &PortInfo {
        &self.ports[index as usize]
    }
}

static PORTS: [PortInfo; 3] = [
    PortInfo {
        index: PortIndex::Gain,
        symbol: "gain",
        name: "Gain",
        kind: PortKind::Control,
        direction: PortDirection::Input,
        range: Some((-90.0, 24.0, 0.0)),
    },
    PortInfo {
        index: PortIndex::Input,
        symbol: "in",
        name: "In",
        kind: PortKind::Audio,
        direction: PortDirection::Input,
        range: None,
    },
    PortInfo {
        index: PortIndex::Output,
        symbol: "out",
        name: "Out",
        kind: PortKind::Audio,
        direction: PortDirection::Output,
        range: None,
    },
];

static DESCRIPTOR: PluginDescriptor = PluginDescriptor {
    uri: PLUGIN_URI,
    name: "Just One Octave Up",
    ports: &PORTS,
};

/// Descriptor by index. Only index 0 exists.
pub fn descriptor(index: u32) -> Option<&'static PluginDescriptor> {
    match index {
        0 => Some(&DESCRIPTOR),
        _ => None,
    }
}
