//! The cookie record written through `document.cookie`.
//!
//! A [`Cookie`] is assembled by the login hook and rendered with
//! [`Cookie::to_cookie_string`] into the assignment form the browser
//! accepts. Values are percent-encoded on render, so opaque credentials
//! cannot break the cookie syntax.

use chrono::DateTime;

/// Path under which the login cookies are stored.
pub const COOKIE_PATH: &str = "/";

/// Name of the session ticket cookie.
pub const TICKET_COOKIE_NAME: &str = "ticket";

/// Name of the username cookie.
pub const USERNAME_COOKIE_NAME: &str = "username";

/// Name of the JWT cookie.
pub const JWT_COOKIE_NAME: &str = "jwt_token";

/// A browser cookie.
#[derive(Debug, Clone)]
pub struct Cookie {
    /// Cookie name
    pub name: String,

    /// Cookie value, percent-encoded on render
    pub value: String,

    /// Unix timestamp in seconds (negative means session cookie)
    pub expires: Option<f64>,

    /// Path for the cookie
    pub path: Option<String>,

    /// Whether the cookie requires HTTPS
    pub secure: bool,

    /// Server intent to make the cookie HTTP-only. The `HttpOnly`
    /// attribute only exists in the `Set-Cookie` response header; a
    /// `document.cookie` write cannot carry it, so this field is never
    /// rendered.
    pub http_only: bool,
}

impl Cookie {
    /// Creates a new session cookie with the given name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            expires: None,
            path: None,
            secure: false,
            http_only: false,
        }
    }

    /// Sets the expiration timestamp (Unix seconds).
    pub fn expires(mut self, expires: f64) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Sets the path for the cookie.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets whether the cookie requires HTTPS.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Records the server's HTTP-only intent.
    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    /// Renders the `document.cookie` assignment string.
    ///
    /// The value is percent-encoded. A non-negative `expires` renders as
    /// an IMF-fixdate; a negative one renders nothing, leaving a session
    /// cookie. `; secure` is appended only when set.
    pub fn to_cookie_string(&self) -> String {
        let mut out = format!("{}={}", self.name, urlencoding::encode(&self.value));

        if let Some(expires) = self.expires {
            if expires >= 0.0 {
                if let Some(date) = format_http_date(expires) {
                    out.push_str("; expires=");
                    out.push_str(&date);
                }
            }
        }

        if let Some(path) = &self.path {
            out.push_str("; path=");
            out.push_str(path);
        }

        if self.secure {
            out.push_str("; secure");
        }

        out
    }
}

/// Formats a Unix timestamp in seconds as an RFC 7231 IMF-fixdate,
/// e.g. `Tue, 07 Nov 2023 10:00:00 GMT`.
fn format_http_date(secs: f64) -> Option<String> {
    let date = DateTime::from_timestamp(secs as i64, 0)?;
    Some(date.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
}
