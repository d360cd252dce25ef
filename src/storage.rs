//! Browser Storage
//!
//! `KeyValueStore` backed by `window.localStorage`.

use mission_core::{KeyValueStore, MissionError, MissionResult};
use wasm_bindgen::JsValue;

/// Local storage handle. Looked up on every call, so it holds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> MissionResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| MissionError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| MissionError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> MissionResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> MissionResult<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> MissionError {
    MissionError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
