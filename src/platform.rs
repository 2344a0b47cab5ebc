//! Browser Capabilities
//!
//! `navigator.share` and `navigator.clipboard` are looked up at call time
//! through `Reflect`, so missing APIs read as unavailable instead of throwing.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::{UiError, UiResult};
use crate::models::ShareRequest;
use crate::share::SharePlatform;

/// The real browser
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPlatform;

fn navigator() -> Option<JsValue> {
    web_sys::window().map(|w| w.navigator().into())
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
}

fn clipboard() -> Option<JsValue> {
    let clipboard = Reflect::get(&navigator()?, &JsValue::from_str("clipboard")).ok()?;
    if clipboard.is_undefined() || clipboard.is_null() {
        None
    } else {
        Some(clipboard)
    }
}

async fn await_call(this: &JsValue, function: &Function, arg: &JsValue) -> UiResult<()> {
    let promise: Promise = function.call1(this, arg)?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

impl SharePlatform for BrowserPlatform {
    fn can_share(&self) -> bool {
        navigator().and_then(|n| method(&n, "share")).is_some()
    }

    async fn share(&self, request: &ShareRequest) -> UiResult<()> {
        let navigator = navigator().ok_or(UiError::Unavailable("navigator"))?;
        let share = method(&navigator, "share").ok_or(UiError::Unavailable("navigator.share"))?;
        let data = serde_wasm_bindgen::to_value(request).map_err(|e| UiError::Js(e.to_string()))?;
        await_call(&navigator, &share, &data).await
    }

    fn has_clipboard(&self) -> bool {
        clipboard().and_then(|c| method(&c, "writeText")).is_some()
    }

    async fn write_clipboard(&self, text: &str) -> UiResult<()> {
        let clipboard = clipboard().ok_or(UiError::Unavailable("navigator.clipboard"))?;
        let write = method(&clipboard, "writeText").ok_or(UiError::Unavailable("clipboard.writeText"))?;
        await_call(&clipboard, &write, &JsValue::from_str(text)).await
    }

    fn open_tab(&self, url: &str) -> UiResult<()> {
        let window = web_sys::window().ok_or(UiError::Unavailable("window"))?;
        match window.open_with_url_and_target(url, "_blank")? {
            Some(_) => Ok(()),
            None => Err(UiError::Js("window.open was blocked".to_string())),
        }
    }
}
