//! Parameter introspection for host-facing controls.
//!
//! Effects expose their controls through the [`ParameterInfo`] trait, indexed
//! from zero. Each control is described by a [`ParamDescriptor`] carrying the
//! display metadata, valid range and a stable [`ParamId`] that plugin glue and
//! session files refer to.
//!
//! # Example
//!
//! ```rust
//! use octaver_core::{ParameterInfo, ParamDescriptor, ParamId};
//!
//! struct SimpleGain {
//!     gain_db: f32,
//! }
//!
//! impl ParameterInfo for SimpleGain {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::gain_db("Gain", "Gain", -60.0, 12.0, 0.0)
//!                 .with_id(ParamId(100), "gain_level")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         match index {
//!             0 => self.gain_db,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if index == 0 {
//!             self.gain_db = value.clamp(-60.0, 12.0);
//!         }
//!     }
//! }
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::format;
use alloc::string::String;

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` must never change for a given parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Trait for effects that expose introspectable parameters.
///
/// Out-of-range indices are ignored by `set_param` and read as `0.0` by
/// `get_param`.
pub trait ParameterInfo {
    /// Number of parameters. Valid indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Descriptor for the parameter at `index`, `None` if out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current value of the parameter at `index`.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the parameter at `index`.
    ///
    /// Whether out-of-range values are clamped is up to the implementation.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against the descriptor's `name`, `short_name` and `string_id`.
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }

    /// Finds a parameter index by its stable [`ParamId`].
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}

/// Display and validation metadata for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display.
    pub name: &'static str,

    /// Short name for hardware displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value.
    pub min: f32,

    /// Maximum allowed value.
    pub max: f32,

    /// Value on construction.
    pub default: f32,

    /// Recommended step increment for encoder-based control.
    pub step: f32,

    /// Stable numeric ID. Default: `ParamId(0)` (unassigned).
    pub id: ParamId,

    /// Stable string ID used in session files, e.g. `"oct_gain"`.
    pub string_id: &'static str,
}

impl ParamDescriptor {
    /// Gain parameter with custom name and range (decibels).
    pub const fn gain_db(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Decibels,
            min,
            max,
            default,
            step: 0.5,
            id: ParamId(0),
            string_id: "",
        }
    }

    /// Sets the stable parameter ID and string ID.
    ///
    /// ```rust
    /// use octaver_core::{ParamDescriptor, ParamId};
    ///
    /// let desc = ParamDescriptor::gain_db("Gain", "Gain", -90.0, 24.0, 0.0)
    ///     .with_id(ParamId(100), "oct_gain");
    /// assert_eq!(desc.id, ParamId(100));
    /// assert_eq!(desc.string_id, "oct_gain");
    /// ```
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Formats a value with this parameter's unit suffix.
    ///
    /// ```rust
    /// use octaver_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::gain_db("Gain", "Gain", -90.0, 24.0, 0.0);
    /// assert_eq!(desc.format_value(-6.0), "-6.0 dB");
    /// ```
    pub fn format_value(&self, value: f32) -> String {
        match self.unit {
            ParamUnit::Decibels => format!("{:.1}{}", value, self.unit.suffix()),
            ParamUnit::Percent => format!("{:.0}{}", value, self.unit.suffix()),
            ParamUnit::None => format!("{:.2}", value),
        }
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Decibels (dB).
    Decibels,
    /// Percentage (%).
    Percent,
    /// Dimensionless.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Decibels => " dB",
            ParamUnit::Percent => "%",
            ParamUnit::None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestEffect {
        gain: f32,
    }

    impl ParameterInfo for TestEffect {
        fn param_count(&self) -> usize {
            1
        }

        fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
            match index {
                0 => Some(
                    ParamDescriptor::gain_db("Gain", "Gain", -60.0, 12.0, 0.0)
                        .with_id(ParamId(100), "test_gain"),
                ),
                _ => None,
            }
        }

        fn get_param(&self, index: usize) -> f32 {
            match index {
                0 => self.gain,
                _ => 0.0,
            }
        }

        fn set_param(&mut self, index: usize, value: f32) {
            if index == 0 {
                self.gain = value;
            }
        }
    }

    #[test]
    fn test_out_of_bounds_index() {
        let mut effect = TestEffect { gain: 3.0 };
        assert_eq!(effect.get_param(99), 0.0);
        effect.set_param(99, 42.0);
        assert_eq!(effect.get_param(0), 3.0);
        assert!(effect.param_info(1).is_none());
    }

    #[test]
    fn test_find_by_name_and_id() {
        let effect = TestEffect { gain: 0.0 };
        assert_eq!(effect.find_param_by_name("gain"), Some(0));
        assert_eq!(effect.find_param_by_name("TEST_GAIN"), Some(0));
        assert_eq!(effect.find_param_by_name("mix"), None);
        assert_eq!(effect.param_index_by_id(ParamId(100)), Some(0));
        assert_eq!(effect.param_index_by_id(ParamId(7)), None);
    }

    #[test]
    fn test_format_value() {
        let desc = ParamDescriptor::gain_db("Gain", "Gain", -90.0, 24.0, 0.0);
        assert_eq!(desc.format_value(3.3), "3.3 dB");
        assert_eq!(ParamUnit::Percent.suffix(), "%");
    }
}
