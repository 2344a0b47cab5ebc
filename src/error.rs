//! UI Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type UiResult<T> = Result<T, UiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    #[error("capability unavailable: {0}")]
    Unavailable(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        UiError::Js(text)
    }
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::Config(err.to_string())
    }
}
