//! Credential handling
//!
//! Passwords are wrapped in [`Secret`] so they are zeroized on drop and
//! redacted from any `Debug` output. Log statements must never format the
//! inner value.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string whose contents are zeroized on drop and hidden from `Debug`
#[derive(Clone, Default, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the inner value for use in a request
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(****)")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Account credentials for the authorization service
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub user_id: String,
    pub password: Secret,
}

impl Credentials {
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: Secret::new(password),
        }
    }
}
