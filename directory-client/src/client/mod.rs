//! HTTP transports
//!
//! [`HttpClient`] is the seam between typed API calls and the wire.
//! [`NetworkHttpClient`] talks to a running server over reqwest;
//! [`OneshotHttpClient`] drives an in-process axum Router.

mod http;
#[cfg(feature = "in-process")]
mod http_oneshot;

pub use self::http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
