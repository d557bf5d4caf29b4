// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Workspace (shared room/desk) types

use super::common::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Physical kind of a workspace
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum WorkspaceType {
    /// Kind not recorded
    NotSet,
    /// 1-2 person focus room
    Focus,
    /// 2-5 person huddle space
    Huddle,
    /// Bookable meeting room
    MeetingRoom,
    /// Open-plan area
    Open,
    /// Individual hot desk
    Desk,
    Other,
}

/// Calling feature level provisioned on a workspace
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum CallingType {
    /// No calling
    None,
    /// Free SIP calling only
    FreeCalling,
    /// Full Meridian Calling with a number from a location dial plan
    MeridianCalling,
}

/// A workspace: a shared physical space devices are placed in
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// Opaque workspace id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Organization id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    /// Location the workspace sits in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// SIP address for calling into the workspace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip_address: Option<String>,
    /// Seating capacity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Physical kind
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub workspace_type: Option<WorkspaceType>,
    /// Calling feature level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calling: Option<CallingType>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
}

/// Body for creating or replacing a workspace
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRequest {
    /// Display name
    pub display_name: String,
    /// Location to place the workspace in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Seating capacity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Physical kind
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub workspace_type: Option<WorkspaceType>,
    /// Calling feature level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calling: Option<CallingType>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkspaceRequest {
    /// Request with only a display name set
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            location_id: None,
            capacity: None,
            workspace_type: None,
            calling: None,
            notes: None,
        }
    }
}

/// Query parameters for listing workspaces
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkspacesQuery {
    /// Only workspaces in this location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Only workspaces whose name starts with this value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Only workspaces at this calling feature level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calling: Option<CallingType>,
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Offset into the result set; generated by the server in next links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
}

/// Path parameter for workspace operations
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct WorkspacePath {
    /// Opaque workspace id
    pub workspace_id: String,
}
