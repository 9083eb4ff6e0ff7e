//! Bounds-Checked Integer Retrieval
//!
//! ## Overview
//!
//! The store keeps every integer as `i64`. Receiver configuration fields are
//! much narrower: a measurement rate is a `u16`, a dynamic model a `u8`, a
//! time-pulse delay an `i32`. Casting the raw value straight down would turn a
//! typo like `300` for a `u8` field into `44` on the wire. Every accessor here
//! therefore range-checks the raw value against the target type first and only
//! narrows once it is known to fit:
//!
//! ```text
//! store["dynamic_model"] = 300 (i64)
//!        │
//!        ▼
//! check_range(300, u8::MIN, u8::MAX, "dynamic_model")
//!        │
//!        ├── in range  → Ok(Some(v as u8))
//!        └── otherwise → Err(ConfigError::OutOfRange)   (never truncated)
//! ```
//!
//! ## Absence
//!
//! A missing key is not an error. The plain accessors return `Ok(None)`; the
//! `_or_default` variants substitute the caller's default. A key holding some
//! other kind (a string where an integer belongs) is a
//! [`ConfigError::WrongType`].
//!
//! ## Signedness
//!
//! `get_uint` only accepts unsigned targets and `get_int` only signed ones, so
//! a call site states which one it means. Both share the same range logic.
//!
//! ## Example
//!
//! ```rust
//! use gnss_node_core::params::{get_uint, get_uint_or_default, get_int_vector, MemoryParamStore};
//!
//! let store = MemoryParamStore::new()
//!     .with_param("rate", 4i64)
//!     .with_param("tmode3/offsets", vec![-120i64, 0, 35]);
//!
//! assert_eq!(get_uint::<u16, _>(&store, "rate")?, Some(4));
//! assert_eq!(get_uint_or_default::<u8, _>(&store, "dynamic_model", 0)?, 0);
//! assert_eq!(get_int_vector::<i16, _>(&store, "tmode3/offsets")?, Some(vec![-120, 0, 35]));
//! # Ok::<(), gnss_node_core::ConfigError>(())
//! ```

use alloc::vec::Vec;
use core::fmt::Display;

use crate::{
    errors::{ConfigError, ConfigResult},
    validators::{check_min, check_range, check_range_each},
};

use super::{
    store::ParamStore,
    value::{ParamKind, ParamValue},
};

mod sealed {
    pub trait Sealed: Sized {
        /// Narrow a raw store integer already known to fit
        fn narrow(raw: i64) -> Self;
    }
}

/// Integer widths a parameter can be narrowed to
pub trait IntegerParam: Copy + PartialOrd + Display + sealed::Sealed {
    /// Smallest representable value, widened
    const MIN: i128;
    /// Largest representable value, widened
    const MAX: i128;
}

/// Unsigned integer targets (`u8`..`u64`, `usize`)
pub trait UnsignedParam: IntegerParam {}

/// Signed integer targets (`i8`..`i64`, `isize`)
pub trait SignedParam: IntegerParam {}

macro_rules! integer_param {
    ($marker:ident: $($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {
                #[inline]
                fn narrow(raw: i64) -> Self {
                    raw as $t
                }
            }

            impl IntegerParam for $t {
                const MIN: i128 = <$t>::MIN as i128;
                const MAX: i128 = <$t>::MAX as i128;
            }

            impl $marker for $t {}
        )*
    };
}

integer_param!(UnsignedParam: u8, u16, u32, u64, usize);
integer_param!(SignedParam: i8, i16, i32, i64, isize);

/// Read an unsigned integer, checked against `T`'s range
///
/// Returns `Ok(None)` when the key is absent.
pub fn get_uint<T, S>(store: &S, key: &str) -> ConfigResult<Option<T>>
where
    T: UnsignedParam,
    S: ParamStore + ?Sized,
{
    get_integer(store, key)
}

/// Read a signed integer, checked against `T`'s range
///
/// Returns `Ok(None)` when the key is absent.
pub fn get_int<T, S>(store: &S, key: &str) -> ConfigResult<Option<T>>
where
    T: SignedParam,
    S: ParamStore + ?Sized,
{
    get_integer(store, key)
}

/// Read an unsigned integer, or `default` when absent
pub fn get_uint_or_default<T, S>(store: &S, key: &str, default: T) -> ConfigResult<T>
where
    T: UnsignedParam,
    S: ParamStore + ?Sized,
{
    get_integer_or_default(store, key, default)
}

/// Read a signed integer, or `default` when absent
pub fn get_int_or_default<T, S>(store: &S, key: &str, default: T) -> ConfigResult<T>
where
    T: SignedParam,
    S: ParamStore + ?Sized,
{
    get_integer_or_default(store, key, default)
}

/// Read an unsigned integer sequence, every element checked against `T`
///
/// Order is preserved. A bad element is reported as `key[i]`.
pub fn get_uint_vector<T, S>(store: &S, key: &str) -> ConfigResult<Option<Vec<T>>>
where
    T: UnsignedParam,
    S: ParamStore + ?Sized,
{
    get_integer_vector(store, key)
}

/// Read a signed integer sequence, every element checked against `T`
pub fn get_int_vector<T, S>(store: &S, key: &str) -> ConfigResult<Option<Vec<T>>>
where
    T: SignedParam,
    S: ParamStore + ?Sized,
{
    get_integer_vector(store, key)
}

/// Read an integer that must also be at least `min`
///
/// Useful for fields whose floor is tighter than the type's, such as a
/// measurement period with a receiver-imposed minimum.
pub fn get_integer_at_least<T, S>(store: &S, key: &str, min: T) -> ConfigResult<Option<T>>
where
    T: IntegerParam,
    S: ParamStore + ?Sized,
{
    let value = get_integer::<T, S>(store, key)?;
    if let Some(value) = value {
        check_min(value, min, key).map_err(warn_rejected)?;
    }
    Ok(value)
}

/// Read an integer that must also lie in `[min, max]`
pub fn get_integer_in_range<T, S>(store: &S, key: &str, min: T, max: T) -> ConfigResult<Option<T>>
where
    T: IntegerParam,
    S: ParamStore + ?Sized,
{
    let value = get_integer::<T, S>(store, key)?;
    if let Some(value) = value {
        check_range(value, min, max, key).map_err(warn_rejected)?;
    }
    Ok(value)
}

fn get_integer<T, S>(store: &S, key: &str) -> ConfigResult<Option<T>>
where
    T: IntegerParam,
    S: ParamStore + ?Sized,
{
    let raw = match store.get_param(key) {
        None => {
            log_debug!("parameter '{}' not set", key);
            return Ok(None);
        }
        Some(ParamValue::Int(raw)) => raw,
        Some(other) => {
            return Err(warn_rejected(ConfigError::wrong_type(
                key,
                ParamKind::Int,
                Some(other.kind()),
            )))
        }
    };

    check_range(i128::from(raw), T::MIN, T::MAX, key).map_err(warn_rejected)?;
    Ok(Some(T::narrow(raw)))
}

fn get_integer_or_default<T, S>(store: &S, key: &str, default: T) -> ConfigResult<T>
where
    T: IntegerParam,
    S: ParamStore + ?Sized,
{
    match get_integer(store, key)? {
        Some(value) => Ok(value),
        None => {
            log_debug!("parameter '{}' defaulted to {}", key, default);
            Ok(default)
        }
    }
}

fn get_integer_vector<T, S>(store: &S, key: &str) -> ConfigResult<Option<Vec<T>>>
where
    T: IntegerParam,
    S: ParamStore + ?Sized,
{
    let raw = match store.get_param(key) {
        None => {
            log_debug!("parameter '{}' not set", key);
            return Ok(None);
        }
        Some(ParamValue::IntList(raw)) => raw,
        Some(other) => {
            return Err(warn_rejected(ConfigError::wrong_type(
                key,
                ParamKind::IntList,
                Some(other.kind()),
            )))
        }
    };

    let wide: Vec<i128> = raw.iter().copied().map(i128::from).collect();
    check_range_each(&wide, T::MIN, T::MAX, key).map_err(warn_rejected)?;
    Ok(Some(raw.into_iter().map(T::narrow).collect()))
}

fn warn_rejected(err: ConfigError) -> ConfigError {
    log_warn!("{}", err);
    err
}
