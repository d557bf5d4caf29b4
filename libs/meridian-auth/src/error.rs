// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for meridian-auth

use thiserror::Error;

/// Errors that can occur while obtaining a bearer token
#[derive(Error, Debug)]
pub enum AuthError {
    /// No token was configured where one was required
    #[error("No access token configured: set {0}")]
    MissingToken(&'static str),

    /// The HTTP request to the token endpoint failed
    #[error("Token endpoint request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The token endpoint rejected the grant
    #[error("Token endpoint returned {status}: {message}")]
    Grant {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The token endpoint answered 2xx with an unexpected body
    #[error("Token response did not match the expected shape: {0}")]
    Decode(#[source] serde_json::Error),
}
