//! Named events exchanged with the server-side process.
//!
//! Event names and payload field names are wire contracts shared with the
//! server; they must not be renamed. Payloads with missing credential
//! fields fail deserialization and the event is rejected, rather than
//! producing a malformed cookie or a navigation URL containing `undefined`.

use serde::{Deserialize, Serialize};

/// Inbound event: store the session ticket cookies and reload the page.
pub const SET_COOKIE_AUTH: &str = "setCookieAuth";

/// Inbound event: store the JWT in a cookie.
pub const SET_JWT_COOKIE: &str = "set_jwt_cookie";

/// Outbound event: ask the server to dismiss a notification.
pub const DISMISS_NOTIFICATION: &str = "dismiss_notification";

/// Lifetime of the `ticket` and `username` cookies, in seconds.
pub const SESSION_TTL_SECS: f64 = 2.0 * 60.0 * 60.0;

/// Payload of [`SET_COOKIE_AUTH`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCookieAuth {
    /// Opaque session credential issued by the server.
    pub ticket: String,
    /// Display name of the signed-in user.
    pub username: String,
}

/// Payload of [`SET_JWT_COOKIE`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetJwtCookie {
    /// The signed JWT to store.
    pub token: String,
    /// Cookie lifetime in seconds from the time of the write.
    pub max_age: f64,
    /// Server intent only; `document.cookie` cannot set `HttpOnly`.
    #[serde(default)]
    pub http_only: bool,
    /// Append the `secure` attribute to the cookie.
    #[serde(default)]
    pub secure: bool,
}

/// Payload of [`DISMISS_NOTIFICATION`].
///
/// `id` comes from the notification element's `data-id` attribute and is
/// forwarded as-is, `null` included, so the server sees exactly what the
/// DOM held.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DismissNotification {
    /// Identifier of the notification to dismiss.
    pub id: Option<String>,
}
