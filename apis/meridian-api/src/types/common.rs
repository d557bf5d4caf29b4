// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Common types used across the Meridian API

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// RFC 3339 timestamp, always UTC on the wire
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Envelope for list responses
///
/// Every Meridian list endpoint wraps its results in `{"items": [...]}`.
/// Continuation is carried out-of-band in an RFC 5988 `Link` response
/// header with `rel="next"`, not in the body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ItemPage<T> {
    /// Items on this page, in server order
    pub items: Vec<T>,
}

/// Meridian error response body
///
/// This matches the error format returned by the Meridian service, which
/// differs from Dropshot's default error format. All fields may be absent
/// depending on which layer of the service produced the error, so decode
/// is best-effort everywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Human-readable error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Individual error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetail>>,
    /// Opaque request id for support escalation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
}

/// One entry in the `errors` array of an error response
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    /// Description of the specific failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
