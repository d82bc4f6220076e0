//! Runtime holder for the API key.

use crate::error::{HarmonicError, HarmonicResult};
use std::fmt;
use std::sync::{Arc, RwLock};

/// An API key. Only its fingerprint is ever printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw key, for placing on outbound requests only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Short prefix that is safe to log.
    pub fn fingerprint(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 4 {
            "****".to_string()
        } else {
            format!("{}…", chars[..4].iter().collect::<String>())
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.fingerprint()).finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fingerprint())
    }
}

/// Process-lifetime slot for the current credential.
///
/// Starts empty. `set` replaces the value (last write wins); readers get a
/// clone, so a request already under way keeps the key it started with.
#[derive(Debug, Default)]
pub struct CredentialStore {
    slot: RwLock<Option<Credential>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for the common shared form.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Store a key. No format validation is performed.
    pub fn set(&self, key: impl Into<String>) -> Credential {
        let credential = Credential::new(key);
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(credential.clone());
        credential
    }

    pub fn is_set(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    pub fn current(&self) -> HarmonicResult<Credential> {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .ok_or(HarmonicError::MissingCredential)
    }
}
