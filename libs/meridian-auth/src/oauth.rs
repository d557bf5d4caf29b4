// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! OAuth integration-token management
//!
//! Integrations hold a long-lived refresh token and exchange it for
//! short-lived access tokens via the `refresh_token` grant. The token
//! endpoint is the one Meridian endpoint that takes a form-encoded body
//! and answers in snake_case.

use crate::{AuthError, TokenProvider};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tokio::sync::Mutex;
use url::Url;

/// Token endpoint of the production service
pub const DEFAULT_TOKEN_URL: &str = "https://api.meridian.cloud/v1/access_token";

/// Refresh this many seconds before the access token actually expires
const EXPIRY_MARGIN_SECS: i64 = 300;

/// Timeout for token endpoint requests
const TOKEN_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Token set returned by the token endpoint.
///
/// Deserialize-only: secrecy deliberately does not implement `Serialize`
/// for secret strings, so a token set cannot be accidentally logged or
/// re-serialized.
#[derive(Debug, Deserialize)]
pub struct Tokens {
    /// The bearer token to present on API requests
    pub access_token: SecretString,
    /// Seconds until `access_token` expires
    pub expires_in: u64,
    /// Replacement refresh token, if the service rotated it
    #[serde(default)]
    pub refresh_token: Option<SecretString>,
    /// Seconds until the refresh token expires
    #[serde(default)]
    pub refresh_token_expires_in: Option<u64>,
    /// Always "Bearer" today
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Configuration for an OAuth integration
pub struct OAuthConfig {
    /// Token endpoint URL
    pub token_url: Url,
    /// Integration client id
    pub client_id: String,
    /// Integration client secret
    pub client_secret: SecretString,
    /// Long-lived refresh token
    pub refresh_token: SecretString,
}

impl OAuthConfig {
    /// Configuration against the production token endpoint
    // DEFAULT_TOKEN_URL is a valid literal; parsing it cannot fail.
    #[allow(clippy::unwrap_used)]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            token_url: Url::parse(DEFAULT_TOKEN_URL).unwrap(),
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
            refresh_token: SecretString::from(refresh_token.into()),
        }
    }

    /// Point at a different token endpoint (testing, staging)
    pub fn with_token_url(mut self, token_url: Url) -> Self {
        self.token_url = token_url;
        self
    }
}

impl std::fmt::Debug for OAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthConfig")
            .field("token_url", &self.token_url.as_str())
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

struct CachedToken {
    access: SecretString,
    expires_at: DateTime<Utc>,
}

/// Caching token provider backed by the `refresh_token` grant.
///
/// The first `bearer_token` call performs the grant exchange; later
/// calls reuse the cached access token until it is within
/// `EXPIRY_MARGIN_SECS` of expiry. The cache lock is held across the
/// exchange so concurrent callers coalesce into a single request.
pub struct TokenManager {
    http: reqwest::Client,
    config: OAuthConfig,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenManager {
    /// Create a manager with its own HTTP client
    pub fn new(config: OAuthConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(TOKEN_REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("meridian-auth/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            config,
            cached: Mutex::new(None),
        })
    }

    /// Perform the `refresh_token` grant exchange
    async fn refresh(&self) -> Result<CachedToken, AuthError> {
        let form = [
            ("grant_type", "refresh_token"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.expose_secret()),
            ("refresh_token", self.config.refresh_token.expose_secret()),
        ];
        let response = self
            .http
            .post(self.config.token_url.clone())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message")?.as_str().map(str::to_string))
                .unwrap_or(body);
            return Err(AuthError::Grant { status, message });
        }

        let tokens: Tokens = serde_json::from_str(&body).map_err(AuthError::Decode)?;
        let expires_at = Utc::now() + chrono::Duration::seconds(tokens.expires_in as i64);
        tracing::debug!(
            client_id = %self.config.client_id,
            expires_in = tokens.expires_in,
            "refreshed access token"
        );
        Ok(CachedToken {
            access: tokens.access_token,
            expires_at,
        })
    }
}

#[async_trait]
impl TokenProvider for TokenManager {
    async fn bearer_token(&self) -> Result<SecretString, AuthError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            let refresh_at = token.expires_at - chrono::Duration::seconds(EXPIRY_MARGIN_SECS);
            if Utc::now() < refresh_at {
                return Ok(token.access.clone());
            }
        }

        let fresh = self.refresh().await?;
        let access = fresh.access.clone();
        *cached = Some(fresh);
        Ok(access)
    }
}
