//! Transport layer for the Harmonic SDK.

pub mod http;

pub use http::{ApiRequest, HttpTransport, API_KEY_PARAM};
