//! Boolean parameters
//!
//! Feature switches (`enable_sbas`, `publish/nav/pvt`, ...) are declared once
//! at startup with a default, then read wherever the node needs them. Unlike
//! the integer accessors, absence is never silently tolerated here: after
//! [`declare_boolean`] the key exists, so a later [`get_boolean`] that finds
//! nothing means the startup contract was broken.

use super::{
    store::ParamStore,
    value::{ParamKind, ParamValue},
};
use crate::errors::{ConfigError, ConfigResult};

/// Ensure `name` holds a boolean, writing `default` if it is absent
///
/// Returns the stored value, which is `default` only if the key was missing.
/// An existing non-boolean value is left untouched and reported as
/// [`ConfigError::WrongType`]; so is a store that does not return the value
/// it was just given.
pub fn declare_boolean<S>(store: &mut S, name: &str, default: bool) -> ConfigResult<bool>
where
    S: ParamStore + ?Sized,
{
    if !store.has_param(name) {
        log_debug!("declaring parameter '{}' = {}", name, default);
        store.set_param(name, ParamValue::Bool(default));
    }

    get_boolean(&*store, name)
}

/// Read a boolean that must be present
pub fn get_boolean<S>(store: &S, name: &str) -> ConfigResult<bool>
where
    S: ParamStore + ?Sized,
{
    let stored = store.get_param(name);
    match stored.as_ref().and_then(ParamValue::as_bool) {
        Some(value) => Ok(value),
        None => {
            let err = ConfigError::wrong_type(name, ParamKind::Bool, stored.map(|v| v.kind()));
            log_warn!("{}", err);
            Err(err)
        }
    }
}
