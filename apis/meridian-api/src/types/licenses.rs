// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! License types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A license pool in the organization
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct License {
    /// Opaque license id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Product name (e.g. "Meridian Calling - Professional")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Seats purchased
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_units: Option<u64>,
    /// Seats currently assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumed_units: Option<u64>,
    /// Seats assigned to people
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumed_by_users: Option<u64>,
    /// Seats assigned to workspaces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumed_by_workspaces: Option<u64>,
    /// Subscription the pool was purchased under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
}

/// Query parameters for listing licenses
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListLicensesQuery {
    /// Organization to list licenses for (admin-only; defaults to the
    /// caller's organization)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Offset into the result set; generated by the server in next links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
}

/// Path parameter for license operations
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct LicensePath {
    /// Opaque license id
    pub license_id: String,
}
