// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Meeting types
//!
//! A "meeting series" is the recurring container; a "scheduled meeting"
//! is one planned occurrence; a "meeting" is one actual (started or
//! ended) instance. List calls default to series.

use super::common::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which layer of the series/occurrence/instance model a record is
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
pub enum MeetingType {
    /// The recurring container
    MeetingSeries,
    /// A planned occurrence of a series
    ScheduledMeeting,
    /// An actual started or ended instance
    Meeting,
}

/// Lifecycle state of a meeting
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
pub enum MeetingState {
    /// Series with at least one future occurrence
    Active,
    /// Occurrence that has not started yet
    Scheduled,
    /// Occurrence within the join-ahead window
    Ready,
    /// Guests are waiting in the lobby
    Lobby,
    /// Meeting is underway
    InProgress,
    /// Meeting finished
    Ended,
    /// Occurrence that never started
    Missed,
    /// Series with no future occurrences
    Expired,
}

/// A meeting record
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Opaque meeting id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-dialable meeting number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_number: Option<String>,
    /// Meeting title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Agenda text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    /// Join password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Record kind
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub meeting_type: Option<MeetingType>,
    /// Lifecycle state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<MeetingState>,
    /// IANA timezone the meeting was scheduled in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Scheduled start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Timestamp>,
    /// Scheduled end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Timestamp>,
    /// Host person id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_user_id: Option<String>,
    /// Host display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_display_name: Option<String>,
    /// Host email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    /// Browser join link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_link: Option<String>,
    /// SIP join address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip_address: Option<String>,
    /// Start recording automatically
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_auto_record_meeting: Option<bool>,
    /// Let any signed-in user become a cohost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_any_user_to_be_co_host: Option<bool>,
}

/// An invitee on a meeting create/update body
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetingInvitee {
    /// Invitee email
    pub email: String,
    /// Display name to show before the invitee signs in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Invite as cohost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co_host: Option<bool>,
}

/// Body for scheduling or replacing a meeting
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRequest {
    /// Meeting title
    pub title: String,
    /// Scheduled start
    pub start: Timestamp,
    /// Scheduled end
    pub end: Timestamp,
    /// Agenda text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    /// Join password; generated by the service when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// IANA timezone for start/end display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Start recording automatically
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_auto_record_meeting: Option<bool>,
    /// Let any signed-in user become a cohost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_any_user_to_be_co_host: Option<bool>,
    /// Initial invitee list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitees: Option<Vec<MeetingInvitee>>,
}

/// Query parameters for listing meetings
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListMeetingsQuery {
    /// Only records for this meeting number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_number: Option<String>,
    /// Only records starting at or after this instant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Timestamp>,
    /// Only records starting before this instant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Timestamp>,
    /// Which record kind to return (defaults to series)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_type: Option<MeetingType>,
    /// Only records in this state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<MeetingState>,
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Offset into the result set; generated by the server in next links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
}

/// Path parameter for meeting operations
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct MeetingPath {
    /// Opaque meeting id
    pub meeting_id: String,
}
