//! Core utilities for GNSS receiver nodes
//!
//! Two small pieces the receiver driver leans on:
//! - bounds-checked configuration retrieval from an external parameter store
//!   ([`params`], built on the checks in [`validators`])
//! - UTC calendar-to-Unix-seconds conversion for stamping fixes ([`time`])
//!
//! Key constraints:
//! - `no_std` + `alloc`, so the same code runs on the receiver host and on
//!   a microcontroller bridge
//! - Configuration mistakes fail loudly, never clamp or truncate
//! - No timezone state anywhere
//!
//! ```no_run
//! use gnss_node_core::params::{get_uint_or_default, MemoryParamStore};
//! use gnss_node_core::time::{to_utc_seconds, CalendarTimestamp};
//!
//! let store = MemoryParamStore::new();
//!
//! // Startup: a bad value aborts initialization
//! let nav_rate: u16 = match get_uint_or_default(&store, "nav_rate", 1) {
//!     Ok(rate) => rate,
//!     Err(e) => panic!("{e}"),
//! };
//!
//! // Per fix
//! let stamp = to_utc_seconds(&CalendarTimestamp::new(2024, 1, 1, 0, 0, 0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod logging;

pub mod constants;
pub mod errors;
pub mod params;
pub mod time;
pub mod validators;

// Public API
pub use errors::{ConfigError, ConfigErrorKind, ConfigResult};
pub use params::{MemoryParamStore, ParamKind, ParamStore, ParamValue};
pub use time::{to_utc_seconds, CalendarFields, CalendarTimestamp};
pub use validators::{check_min, check_range, check_range_each};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
