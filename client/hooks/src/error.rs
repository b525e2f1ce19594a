//! Errors surfaced to the hosting page.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure modes of the hooks.
///
/// Converted to a `JsValue` at the export boundary so the JS shim sees a
/// plain error message.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("no window in this context")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document is not an HTML document")]
    NotHtmlDocument,

    #[error("malformed {event} payload: {reason}")]
    BadPayload { event: &'static str, reason: String },

    #[error("browser call failed: {0}")]
    Browser(String),
}

impl From<HookError> for JsValue {
    fn from(err: HookError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<JsValue> for HookError {
    fn from(err: JsValue) -> Self {
        let message = err
            .as_string()
            .or_else(|| js_sys::JSON::stringify(&err).ok().and_then(|s| s.as_string()))
            .unwrap_or_else(|| format!("{err:?}"));
        HookError::Browser(message)
    }
}
