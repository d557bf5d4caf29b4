// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Meridian Bearer-Token Authentication Library
//!
//! Every Meridian API call carries an `Authorization: Bearer` header.
//! Where that token comes from differs by integration style:
//!
//! - **Personal access tokens** are long-lived strings copied from the
//!   developer portal. [`StaticTokens`] wraps one, typically loaded from
//!   the `MERIDIAN_ACCESS_TOKEN` environment variable.
//! - **Integration (OAuth) tokens** are short-lived. [`TokenManager`]
//!   holds a refresh token and exchanges it at `POST /v1/access_token`
//!   for an access token, caching the result until shortly before it
//!   expires.
//!
//! The HTTP session in `meridian-client` is generic over the
//! [`TokenProvider`] trait, so either style (or a custom source such as
//! a secrets manager) plugs in without the session knowing which.
//!
//! Tokens are held as [`SecretString`] so they are redacted from Debug
//! output and zeroized on drop.
//!
//! # Example
//!
//! ```ignore
//! use meridian_auth::{OAuthConfig, StaticTokens, TokenManager, TokenProvider};
//!
//! // Personal token from the environment:
//! let provider = StaticTokens::from_env()?;
//!
//! // Or an OAuth integration:
//! let provider = TokenManager::new(OAuthConfig::new(
//!     "C1b2c3d4",
//!     "0b5bd1b...",
//!     "MmVhNWU...",
//! ))?;
//!
//! let token = provider.bearer_token().await?;
//! ```

use async_trait::async_trait;
use secrecy::SecretString;

pub mod error;
mod oauth;

pub use error::AuthError;
pub use oauth::{DEFAULT_TOKEN_URL, OAuthConfig, TokenManager, Tokens};

/// Environment variable holding a personal access token
pub const ACCESS_TOKEN_ENV: &str = "MERIDIAN_ACCESS_TOKEN";

/// Source of bearer tokens for API requests.
///
/// Implementations must be cheap to call: the session asks for a token
/// on every request, so anything expensive (a grant exchange, a secrets
/// manager read) belongs behind a cache like the one in
/// [`TokenManager`]. Dyn-compatible so sessions can hold
/// `Arc<dyn TokenProvider>`.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return a token currently valid for API requests
    async fn bearer_token(&self) -> Result<SecretString, AuthError>;
}

/// A fixed personal access token.
#[derive(Clone)]
pub struct StaticTokens {
    access: SecretString,
}

impl StaticTokens {
    /// Wrap an existing token string
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            access: SecretString::from(token.into()),
        }
    }

    /// Load the token from `MERIDIAN_ACCESS_TOKEN`
    pub fn from_env() -> Result<Self, AuthError> {
        match std::env::var(ACCESS_TOKEN_ENV) {
            Ok(token) if !token.is_empty() => Ok(Self::new(token)),
            _ => Err(AuthError::MissingToken(ACCESS_TOKEN_ENV)),
        }
    }
}

impl std::fmt::Debug for StaticTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokens").finish_non_exhaustive()
    }
}

#[async_trait]
impl TokenProvider for StaticTokens {
    async fn bearer_token(&self) -> Result<SecretString, AuthError> {
        Ok(self.access.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[tokio::test]
    async fn static_tokens_returns_the_configured_token() {
        let provider = StaticTokens::new("ZDI3MzY0");
        let token = provider.bearer_token().await.unwrap();
        assert_eq!(token.expose_secret(), "ZDI3MzY0");
    }

    #[test]
    fn static_tokens_debug_does_not_leak() {
        let provider = StaticTokens::new("ZDI3MzY0");
        let rendered = format!("{provider:?}");
        assert!(!rendered.contains("ZDI3MzY0"));
    }
}
