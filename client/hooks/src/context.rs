//! Imported surface of the framework's hook object.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// The hook object the framework passes to lifecycle callbacks
    /// (`this` inside a JS hook). Only the members the hooks use are
    /// bound here.
    pub type HookContext;

    /// The element the hook is attached to.
    #[wasm_bindgen(method, getter)]
    pub fn el(this: &HookContext) -> Element;

    /// Pushes a named event to the owning server-side process.
    #[wasm_bindgen(method, js_name = pushEvent)]
    pub fn push_event(this: &HookContext, event: &str, payload: JsValue);

    /// Registers a handler for a named event pushed by the server.
    #[wasm_bindgen(method, js_name = handleEvent)]
    pub fn handle_event(this: &HookContext, event: &str, callback: &js_sys::Function);
}
