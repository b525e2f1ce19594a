//! Wire types for the LiveView hook events.
//!
//! This crate contains the serde-serializable payloads exchanged with the
//! server-side process and the cookie record the login hook writes. These
//! types represent the "protocol layer" - the shapes of data as they cross
//! the client/server and client/browser boundaries.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond serialization
//! - **1:1 with the wire**: Field names match the event payloads exactly
//! - **Browser-free**: No wasm dependency, so everything tests natively
//!
//! The hook behaviors built on top of these types live in `lv-client-hooks`.

pub mod cookie;
pub mod events;

pub use cookie::*;
pub use events::*;
