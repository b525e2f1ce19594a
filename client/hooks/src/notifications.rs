//! Auto-dismissing notifications.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use lv_protocol::{DismissNotification, DISMISS_NOTIFICATION};

use crate::context::HookContext;
use crate::dom;

/// How long a notification stays on screen before it asks the server to
/// dismiss it, in milliseconds.
const DISMISS_DELAY_MS: i32 = 3000;

/// Attribute carrying the notification identifier.
const ID_ATTRIBUTE: &str = "data-id";

/// Hook for notification elements that dismiss themselves.
///
/// Mounting schedules a single `dismiss_notification` push carrying the
/// element's `data-id`. The pending timer is owned by the instance and
/// cancelled if the element is torn down before it fires, so an unmounted
/// notification never reports back.
#[wasm_bindgen]
pub struct AutoDismissNotification {
    timer: Option<i32>,
    // Keeps the scheduled callback alive until it fires or is cancelled.
    _dismiss: Closure<dyn FnMut()>,
}

#[wasm_bindgen]
impl AutoDismissNotification {
    /// Called by the JS shim from the hook's `mounted()` callback.
    pub fn mounted(ctx: HookContext) -> Result<AutoDismissNotification, JsValue> {
        let dismiss = Closure::<dyn FnMut()>::new(move || {
            let payload = DismissNotification {
                id: ctx.el().get_attribute(ID_ATTRIBUTE),
            };
            // Absent ids cross the wire as null, not undefined.
            let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
            match payload.serialize(&serializer) {
                Ok(value) => ctx.push_event(DISMISS_NOTIFICATION, value),
                Err(err) => web_sys::console::error_1(&err.into()),
            }
        });

        let timer = dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            dismiss.as_ref().unchecked_ref(),
            DISMISS_DELAY_MS,
        )?;

        Ok(Self {
            timer: Some(timer),
            _dismiss: dismiss,
        })
    }

    /// Called by the JS shim from the hook's `destroyed()` callback.
    /// Cancels the dismiss timer; a no-op once the timer has fired.
    pub fn destroyed(&mut self) {
        if let Some(timer) = self.timer.take() {
            if let Ok(window) = dom::window() {
                window.clear_timeout_with_handle(timer);
            }
        }
    }
}
