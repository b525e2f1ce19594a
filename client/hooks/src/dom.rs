//! Thin access layer over the browser APIs the hooks touch.

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Window};

use lv_protocol::Cookie;

use crate::error::HookError;

pub(crate) fn window() -> Result<Window, HookError> {
    web_sys::window().ok_or(HookError::NoWindow)
}

fn html_document() -> Result<HtmlDocument, HookError> {
    window()?
        .document()
        .ok_or(HookError::NoDocument)?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| HookError::NotHtmlDocument)
}

/// Writes one cookie through `document.cookie`.
pub(crate) fn write_cookie(cookie: &Cookie) -> Result<(), HookError> {
    html_document()?.set_cookie(&cookie.to_cookie_string())?;
    Ok(())
}

/// The current origin, e.g. `https://example.com`.
pub(crate) fn origin() -> Result<String, HookError> {
    Ok(window()?.location().origin()?)
}

/// Replaces the current page, dropping it from session history.
pub(crate) fn replace_location(url: &str) -> Result<(), HookError> {
    window()?.location().replace(url)?;
    Ok(())
}

/// Current wall-clock time in Unix seconds, from the host page's clock.
pub(crate) fn now_secs() -> f64 {
    js_sys::Date::now() / 1000.0
}
