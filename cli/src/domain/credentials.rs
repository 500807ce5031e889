//! Credential value types. `Debug` never prints a secret.

use std::fmt;

/// Identity plus secret used for one authentication purpose.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialPair {
    username: String,
    password: String,
}

impl CredentialPair {
    #[must_use]
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Source-control access token.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self(token)
    }

    /// The raw token, for embedding in a clone URL.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}
