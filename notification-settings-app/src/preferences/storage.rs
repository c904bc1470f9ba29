//! Browser `localStorage` backend for the notification settings store.

use notification_settings::{BackendError, SettingsBackend};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Stores settings in `window.localStorage`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BrowserLocalStorage;

impl SettingsBackend for BrowserLocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, BackendError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), BackendError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}

/// Gets `window.localStorage`. Browsers may refuse access entirely, e.g. when site data is
/// blocked, so every step is checked.
fn local_storage() -> Result<Storage, BackendError> {
    web_sys::window()
        .ok_or_else(|| BackendError::Unavailable("Window was None".into()))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| {
            BackendError::Unavailable("window.localStorage was null or undefined".into())
        })
}

fn js_error(value: JsValue) -> BackendError {
    BackendError::Js(format!("{:?}", value))
}
