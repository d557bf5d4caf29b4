// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Calling administration types: call queues, call forwarding, numbers
//!
//! Unlike the messaging surfaces, the calling configuration API uses
//! SCREAMING_SNAKE_CASE for its enum vocabularies. That asymmetry is
//! the vendor's, preserved here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How a queue distributes calls to agents
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueRoutingPolicy {
    /// Round-robin through agents, remembering the last position
    Circular,
    /// Top-down through the agent list on every call
    Regular,
    /// Ring all agents at once
    Simultaneous,
    /// Random, weighted by per-agent percentages
    Weighted,
    /// Longest-idle agent first
    Uniform,
}

/// Ring cadence used for distinctive alerting
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RingPattern {
    Normal,
    LongLong,
    ShortShortLong,
    ShortLongShort,
}

/// An extra number that reaches a queue, with its alerting cadence
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlternateNumber {
    /// The alternate number in E.164 format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Cadence used when calls arrive via this number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring_pattern: Option<RingPattern>,
}

/// An agent assigned to a queue
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueueAgent {
    /// Person or workspace id of the agent
    pub id: String,
    /// Routing weight, only meaningful under the weighted policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

/// A call queue
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallQueue {
    /// Opaque queue id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Queue name, unique within its location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Location the queue belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Location name, denormalized for org-wide listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    /// Directory number of the queue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Extension of the queue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Distribution policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_policy: Option<QueueRoutingPolicy>,
    /// Whether the queue takes calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Announcement language tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// IANA timezone for schedule evaluation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Extra numbers that reach the queue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_numbers: Option<Vec<AlternateNumber>>,
    /// Assigned agents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<QueueAgent>>,
}

/// Body for creating or replacing a call queue
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueueRequest {
    /// Queue name, unique within the location
    pub name: String,
    /// Directory number; at least one of number or extension is required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Extension; at least one of number or extension is required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Distribution policy (defaults to circular)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_policy: Option<QueueRoutingPolicy>,
    /// Whether the queue takes calls (defaults to enabled)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Announcement language tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Extra numbers that reach the queue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_numbers: Option<Vec<AlternateNumber>>,
    /// Agents to assign
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<QueueAgent>>,
}

impl QueueRequest {
    /// Request with only a name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: None,
            extension: None,
            routing_policy: None,
            enabled: None,
            language_code: None,
            alternate_numbers: None,
            agents: None,
        }
    }
}

/// Query parameters for the org-wide queue listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListQueuesQuery {
    /// Only queues in this location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Only queues whose name starts with this value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Offset into the result set; generated by the server in next links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
}

/// Path parameters for queue collection operations within a location
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct QueueLocationPath {
    /// Location the queue belongs to
    pub location_id: String,
}

/// Path parameters for operations on one queue
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct QueuePath {
    /// Location the queue belongs to
    pub location_id: String,
    /// Opaque queue id
    pub queue_id: String,
}

/// One forwarding rule (always / busy)
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForwardingRule {
    /// Whether the rule is in effect
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Destination number or SIP URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Send to the destination's voicemail instead of ringing it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_voicemail_enabled: Option<bool>,
}

/// The no-answer forwarding rule, which also carries the ring count
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoAnswerRule {
    /// Whether the rule is in effect
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Destination number or SIP URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Rings before the call forwards (2-20)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_rings: Option<u32>,
    /// Send to the destination's voicemail instead of ringing it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_voicemail_enabled: Option<bool>,
}

/// The three user-controlled forwarding rules
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallForwarding {
    /// Forward every call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always: Option<ForwardingRule>,
    /// Forward when the line is busy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub busy: Option<ForwardingRule>,
    /// Forward after the configured number of rings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_answer: Option<NoAnswerRule>,
}

/// Call forwarding settings for a person
///
/// The same shape is used for reads and full-replace writes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallForwardingSettings {
    /// The user-controlled rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_forwarding: Option<CallForwarding>,
    /// Forwarding applied when the person's devices are unreachable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_continuity: Option<ForwardingRule>,
}

/// Activation state of a phone number
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberState {
    Active,
    Inactive,
}

/// What kind of entity a number is assigned to
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberOwnerType {
    People,
    Workspace,
    CallQueue,
    AutoAttendant,
}

/// Location summary embedded in a number listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NumberLocation {
    /// Opaque location id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Location name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Owner summary embedded in a number listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NumberOwner {
    /// Opaque owner id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owner kind
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub owner_type: Option<NumberOwnerType>,
    /// Owner first name (people)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Owner last name (people)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Owner display name (workspaces, queues, attendants)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// One phone number in the organization's inventory
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberListing {
    /// The number in E.164 format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Extension mapped to the number, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Activation state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<NumberState>,
    /// Whether this is the location's main number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_number: Option<bool>,
    /// Whether this is a toll-free number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toll_free_number: Option<bool>,
    /// Location the number belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<NumberLocation>,
    /// Entity the number is assigned to; absent for unassigned numbers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<NumberOwner>,
}

/// Query parameters for the number inventory listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListNumbersQuery {
    /// Only numbers in this location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Only numbers assigned to this kind of owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_type: Option<NumberOwnerType>,
    /// Only numbers in this activation state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<NumberState>,
    /// Only numbers containing this digit substring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Offset into the result set; generated by the server in next links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ring_pattern_uses_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&RingPattern::ShortShortLong).unwrap(),
            r#""SHORT_SHORT_LONG""#
        );
        assert_eq!(RingPattern::LongLong.to_string(), "LONG_LONG");
        assert_eq!(
            "SHORT_LONG_SHORT".parse::<RingPattern>().unwrap(),
            RingPattern::ShortLongShort
        );
    }

    #[test]
    fn queue_request_minimal_body() {
        let req = QueueRequest::new("Sales");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, serde_json::json!({"name": "Sales"}));
    }

    #[test]
    fn forwarding_settings_round_trip() {
        let body = r#"{
            "callForwarding": {
                "always": {"enabled": false},
                "busy": {
                    "enabled": true,
                    "destination": "+14085551000",
                    "destinationVoicemailEnabled": false
                },
                "noAnswer": {
                    "enabled": true,
                    "destination": "2001",
                    "numberOfRings": 3
                }
            },
            "businessContinuity": {"enabled": false}
        }"#;
        let settings: CallForwardingSettings = serde_json::from_str(body).unwrap();
        let forwarding = settings.call_forwarding.as_ref().unwrap();
        assert_eq!(
            forwarding.no_answer.as_ref().unwrap().number_of_rings,
            Some(3)
        );

        let reparsed: CallForwardingSettings =
            serde_json::from_value(serde_json::to_value(&settings).unwrap()).unwrap();
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            serde_json::to_value(&reparsed).unwrap()
        );
    }

    #[test]
    fn number_listing_nested_owner() {
        let body = r#"{
            "phoneNumber": "+14085551000",
            "state": "ACTIVE",
            "mainNumber": true,
            "location": {"id": "L1", "name": "San Jose"},
            "owner": {"id": "Q1", "type": "CALL_QUEUE", "displayName": "Sales"}
        }"#;
        let listing: PhoneNumberListing = serde_json::from_str(body).unwrap();
        assert_eq!(listing.state, Some(NumberState::Active));
        assert_eq!(
            listing.owner.as_ref().unwrap().owner_type,
            Some(NumberOwnerType::CallQueue)
        );
    }
}
