// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Access token types
//!
//! The token endpoint is plain OAuth 2.0: the request is form-encoded
//! (`grant_type`, `client_id`, `client_secret`, and either `code` +
//! `redirect_uri` or `refresh_token`) and the response is snake_case
//! JSON, unlike the camelCase used everywhere else.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response from `POST /v1/access_token`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TokenResponse {
    /// The bearer token to present on subsequent calls
    pub access_token: String,
    /// Seconds until `access_token` expires
    pub expires_in: u64,
    /// Token for obtaining the next access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Seconds until `refresh_token` expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token_expires_in: Option<u64>,
    /// Always "Bearer" today
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}
