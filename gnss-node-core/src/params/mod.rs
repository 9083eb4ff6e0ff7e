//! Parameter Store Access
//!
//! ## Overview
//!
//! A receiver node pulls its whole configuration from an external parameter
//! store at startup: serial settings, measurement and navigation rates, the
//! dynamic model, enabled constellations, SBAS PRN masks, feature switches.
//! This module turns those loosely typed entries into checked Rust values.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ driver startup (receiver configuration)      │
//! └──────────────┬───────────────────────────────┘
//!                │ get_uint / get_int / *_vector / declare_boolean
//! ┌──────────────▼───────────────────────────────┐
//! │ accessor, boolean                            │
//! │   range-check against target type, narrow    │
//! └──────────────┬───────────────────────────────┘
//!                │ get_param / set_param / has_param
//! ┌──────────────▼───────────────────────────────┐
//! │ ParamStore (external, or MemoryParamStore)   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//!
//! Range and type errors are configuration mistakes. They are returned to the
//! caller, which is expected to abort initialization; nothing here retries,
//! clamps or truncates.
//!
//! ## Usage Example
//!
//! ```rust
//! use gnss_node_core::params::{
//!     declare_boolean, get_boolean, get_uint_or_default, get_uint_vector, MemoryParamStore,
//! };
//!
//! let mut store = MemoryParamStore::new()
//!     .with_param("rate", 4i64)
//!     .with_param("sbas/prns", vec![120i64, 124]);
//!
//! let meas_rate: u16 = get_uint_or_default(&store, "rate", 1)?;
//! let prns: Option<Vec<u8>> = get_uint_vector(&store, "sbas/prns")?;
//! let sbas = declare_boolean(&mut store, "sbas/enable", false)?;
//!
//! assert_eq!(meas_rate, 4);
//! assert_eq!(prns, Some(vec![120, 124]));
//! assert!(!sbas);
//! assert!(!get_boolean(&store, "sbas/enable")?);
//! # Ok::<(), gnss_node_core::ConfigError>(())
//! ```

pub mod accessor;
pub mod boolean;
pub mod store;
pub mod value;

pub use accessor::{
    get_int, get_int_or_default, get_int_vector, get_integer_at_least, get_integer_in_range,
    get_uint, get_uint_or_default, get_uint_vector, IntegerParam, SignedParam, UnsignedParam,
};
pub use boolean::{declare_boolean, get_boolean};
pub use store::{MemoryParamStore, ParamStore};
pub use value::{ParamKind, ParamValue};
