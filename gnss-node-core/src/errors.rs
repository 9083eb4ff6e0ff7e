//! Error Types for Configuration Failures
//!
//! ## Design Philosophy
//!
//! Configuration is read once, at node startup, and a bad value there means the
//! operator has to fix a parameter file. Nothing in this module is transient, so
//! nothing is retryable:
//!
//! 1. **Fatal by construction**: every variant aborts the caller's startup
//!    sequence. There is no "warning" variant.
//!
//! 2. **Locatable**: each variant carries the offending key. For sequence
//!    parameters the key is suffixed with the element index (`rates[2]`) so the
//!    operator can find the exact entry.
//!
//! 3. **Absence is not an error**: accessors report a missing key through
//!    `Option` or a default. Only the "require boolean" path turns absence
//!    into a [`ConfigError::WrongType`] with `found: None`.
//!
//! ## Error Categories
//!
//! ### Range violations ([`ConfigErrorKind::Range`])
//! - `OutOfRange`: value outside an inclusive `[min, max]` bound, either an
//!   explicit one or the representable range of the target integer type
//! - `BelowMinimum`: value under an explicit lower bound
//!
//! ### Type violations ([`ConfigErrorKind::Type`])
//! - `WrongType`: stored value is not of the requested kind, or is missing
//!   where a value is required
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use gnss_node_core::{ConfigError, ConfigErrorKind};
//! use gnss_node_core::params::{get_uint, MemoryParamStore, ParamValue};
//!
//! let store = MemoryParamStore::new().with_param("meas_rate", ParamValue::Int(70_000));
//!
//! match get_uint::<u16, _>(&store, "meas_rate") {
//!     Ok(Some(_rate)) => {}
//!     Ok(None) => {
//!         // Not configured - receiver keeps its own default
//!     }
//!     Err(e) if e.kind() == ConfigErrorKind::Range => {
//!         assert_eq!(e.key(), "meas_rate");
//!     }
//!     Err(_) => unreachable!(),
//! }
//! ```

use alloc::string::String;

use thiserror_no_std::Error;

use crate::params::ParamKind;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// The two failure classes of the configuration layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    /// A present value lies outside its allowed bound
    Range,
    /// A stored value has the wrong type, or a required value is missing
    Type,
}

/// Configuration errors
///
/// Bounds are kept in their display form so one error type can describe
/// violations of any comparable type (`u8`, `i32`, `f64`, ...).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Value outside an inclusive range
    #[error("Invalid settings: {name} must be in range [{min}, {max}].")]
    OutOfRange {
        /// Parameter name, with `[i]` suffix for sequence elements
        name: String,
        /// Element position when the value came from a sequence
        index: Option<usize>,
        /// The rejected value
        value: String,
        /// Inclusive lower bound
        min: String,
        /// Inclusive upper bound
        max: String,
    },

    /// Value under a lower bound
    #[error("Invalid settings: {name} must be >= {min}")]
    BelowMinimum {
        /// Parameter name
        name: String,
        /// The rejected value
        value: String,
        /// Inclusive lower bound
        min: String,
    },

    /// Stored value has the wrong type (or is absent where one is required)
    #[error("Required parameter '{name}' has the wrong type (expected {expected})")]
    WrongType {
        /// Parameter name
        name: String,
        /// Kind the caller asked for
        expected: ParamKind,
        /// Kind actually stored; `None` when the key is missing
        found: Option<ParamKind>,
    },
}

impl ConfigError {
    /// Which half of the taxonomy this error belongs to
    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            Self::OutOfRange { .. } | Self::BelowMinimum { .. } => ConfigErrorKind::Range,
            Self::WrongType { .. } => ConfigErrorKind::Type,
        }
    }

    /// Offending key, including any `[i]` element suffix
    pub fn key(&self) -> &str {
        match self {
            Self::OutOfRange { name, .. }
            | Self::BelowMinimum { name, .. }
            | Self::WrongType { name, .. } => name,
        }
    }

    /// Element index for sequence violations (`rates[2]` -> `Some(2)`)
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::OutOfRange { index, .. } => *index,
            Self::BelowMinimum { .. } | Self::WrongType { .. } => None,
        }
    }

    pub(crate) fn wrong_type(name: &str, expected: ParamKind, found: Option<ParamKind>) -> Self {
        Self::WrongType {
            name: String::from(name),
            expected,
            found,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { name, min, max, .. } => defmt::write!(
                fmt,
                "{=str} must be in [{=str}, {=str}]",
                name.as_str(),
                min.as_str(),
                max.as_str()
            ),
            Self::BelowMinimum { name, min, .. } => {
                defmt::write!(fmt, "{=str} must be >= {=str}", name.as_str(), min.as_str())
            }
            Self::WrongType { name, expected, .. } => {
                defmt::write!(fmt, "{=str}: expected {=str}", name.as_str(), expected.name())
            }
        }
    }
}
