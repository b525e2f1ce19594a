//! Client-side hooks for the LiveView front end, compiled to WebAssembly.
//!
//! Each exported type backs one JS hook. The JS shim stays one line per
//! lifecycle callback and hands the framework's hook object (`this`)
//! straight to the exported constructor:
//!
//! ```js
//! import { AutoDismissNotification, LoginSession } from "lv-client-hooks";
//!
//! export const Hooks = {
//!   AutoDismissNotification: {
//!     mounted() { this.hook = AutoDismissNotification.mounted(this); },
//!     destroyed() { this.hook.destroyed(); this.hook.free(); },
//!   },
//!   LoginSession: {
//!     mounted() { this.hook = LoginSession.mounted(this); },
//!   },
//! };
//! ```

use wasm_bindgen::prelude::*;

mod context;
mod dom;
mod error;
mod login;
mod notifications;

pub use context::HookContext;
pub use error::HookError;
pub use login::LoginSession;
pub use notifications::AutoDismissNotification;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
