//! # Harmonic SDK
//!
//! Rust client for the Harmonic company and people intelligence API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use harmonic_sdk::{CredentialStore, HarmonicClient, HarmonicResult, Page};
//!
//! #[tokio::main]
//! async fn main() -> HarmonicResult<()> {
//!     let credentials = CredentialStore::shared();
//!     let client = HarmonicClient::builder()
//!         .credentials(credentials.clone())
//!         .build()?;
//!
//!     // The key can be supplied at any point before the first call.
//!     credentials.set("your-api-key");
//!
//!     let companies = client.companies().search("robotics", &Page::first()).await?;
//!     println!("{companies:#}");
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod transport;

pub use api::{Page, ProbeOutcome, ProbeRecord};
pub use client::{HarmonicClient, HarmonicClientBuilder};
pub use config::{AuthScheme, ClientConfig};
pub use credential::{Credential, CredentialStore};
pub use error::{FailureKind, HarmonicError, HarmonicResult};
