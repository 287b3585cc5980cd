//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write glue so state modules can persist
//! records without touching `web-sys` directly. Outside the browser every
//! read misses and every write is a no-op.

use serde::Serialize;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `raw` under `key`, replacing any previous value.
pub fn save_raw(key: &str, raw: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(key, raw).is_err() {
            log::warn!("localStorage write rejected for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, raw);
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => save_raw(key, &raw),
        Err(e) => log::warn!("failed to encode {key}: {e}"),
    }
}
