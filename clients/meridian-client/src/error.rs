// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client error type

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Errors returned by Meridian API operations
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced an HTTP response (connect failure,
    /// timeout, TLS error). The service may or may not have seen it.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Could not obtain a bearer token for the request
    #[error("authentication failed: {0}")]
    Auth(#[from] meridian_auth::AuthError),

    /// The service answered with a non-success status
    #[error("{url} returned {status}: {message}")]
    Api {
        status: StatusCode,
        url: Url,
        /// Message from the error body, or the raw body if it was not
        /// the documented error shape
        message: String,
        /// Service-side correlation id, when the body carried one
        tracking_id: Option<String>,
    },

    /// A request URL could not be built
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A list response carried a `Link` header the client could not follow
    #[error("bad pagination link: {0}")]
    Pagination(#[from] meridian_pagination::LinkError),

    /// A success response body did not match the expected shape
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Status code of the API error, if this is one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the service reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status_and_message() {
        let err = Error::Api {
            status: StatusCode::NOT_FOUND,
            url: "https://api.meridian.cloud/v1/people/P404"
                .parse()
                .unwrap(),
            message: "Person not found".to_string(),
            tracking_id: Some("MERIDIAN_a1b2".to_string()),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("404"));
        assert!(rendered.contains("Person not found"));
        assert!(err.is_not_found());
    }

    #[test]
    fn transport_errors_have_no_status() {
        let err = Error::Url(url::ParseError::EmptyHost);
        assert!(err.status().is_none());
        assert!(!err.is_not_found());
    }
}
