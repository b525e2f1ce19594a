//! Login session hook: cookie writes driven by server events.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use lv_protocol::{
    Cookie, SetCookieAuth, SetJwtCookie, COOKIE_PATH, JWT_COOKIE_NAME, SESSION_TTL_SECS,
    SET_COOKIE_AUTH, SET_JWT_COOKIE, TICKET_COOKIE_NAME, USERNAME_COOKIE_NAME,
};

use crate::context::HookContext;
use crate::dom;
use crate::error::HookError;

/// Hook for the login element.
///
/// Mounting registers handlers for the two cookie events the server pushes
/// during sign-in. The handler closures are leaked on purpose: they must
/// outlive this instance, and the framework drops its references to them
/// together with the element.
#[wasm_bindgen]
pub struct LoginSession;

#[wasm_bindgen]
impl LoginSession {
    /// Called by the JS shim from the hook's `mounted()` callback.
    pub fn mounted(ctx: HookContext) -> Result<LoginSession, JsValue> {
        let on_cookie_auth = Closure::<dyn FnMut(JsValue)>::new(|payload: JsValue| {
            if let Err(err) = handle_cookie_auth(payload) {
                web_sys::console::error_1(&JsValue::from(err));
            }
        });
        ctx.handle_event(SET_COOKIE_AUTH, on_cookie_auth.as_ref().unchecked_ref());
        on_cookie_auth.forget();

        let on_jwt_cookie = Closure::<dyn FnMut(JsValue)>::new(|payload: JsValue| {
            if let Err(err) = handle_jwt_cookie(payload) {
                web_sys::console::error_1(&JsValue::from(err));
            }
        });
        ctx.handle_event(SET_JWT_COOKIE, on_jwt_cookie.as_ref().unchecked_ref());
        on_jwt_cookie.forget();

        Ok(LoginSession)
    }
}

/// Stores the `ticket` and `username` cookies, then reloads the page with
/// the ticket in the query string.
fn handle_cookie_auth(payload: JsValue) -> Result<(), HookError> {
    let auth: SetCookieAuth =
        serde_wasm_bindgen::from_value(payload).map_err(|err| HookError::BadPayload {
            event: SET_COOKIE_AUTH,
            reason: err.to_string(),
        })?;

    let now = dom::now_secs();
    for cookie in session_cookies(&auth, now) {
        dom::write_cookie(&cookie)?;
    }

    dom::replace_location(&ticket_redirect_url(&dom::origin()?, &auth.ticket))
}

/// Stores the JWT cookie.
fn handle_jwt_cookie(payload: JsValue) -> Result<(), HookError> {
    let jwt: SetJwtCookie =
        serde_wasm_bindgen::from_value(payload).map_err(|err| HookError::BadPayload {
            event: SET_JWT_COOKIE,
            reason: err.to_string(),
        })?;

    if jwt.http_only {
        web_sys::console::log_1(
            &"jwt_token: HttpOnly can only be set by the server response, storing without it"
                .into(),
        );
    }

    dom::write_cookie(&jwt_cookie(&jwt, dom::now_secs()))
}

/// The `ticket` and `username` cookies for one sign-in, expiring
/// [`SESSION_TTL_SECS`] after `now_secs`.
fn session_cookies(auth: &SetCookieAuth, now_secs: f64) -> [Cookie; 2] {
    let expires = now_secs + SESSION_TTL_SECS;
    [
        Cookie::new(TICKET_COOKIE_NAME, &auth.ticket)
            .path(COOKIE_PATH)
            .expires(expires),
        Cookie::new(USERNAME_COOKIE_NAME, &auth.username)
            .path(COOKIE_PATH)
            .expires(expires),
    ]
}

/// The `jwt_token` cookie, expiring `max_age` seconds after `now_secs`.
fn jwt_cookie(jwt: &SetJwtCookie, now_secs: f64) -> Cookie {
    Cookie::new(JWT_COOKIE_NAME, &jwt.token)
        .path(COOKIE_PATH)
        .expires(now_secs + jwt.max_age)
        .secure(jwt.secure)
        .http_only(jwt.http_only)
}

/// Post-login URL: the current origin with the ticket as query parameter.
fn ticket_redirect_url(origin: &str, ticket: &str) -> String {
    format!("{origin}?ticket={}", urlencoding::encode(ticket))
}
