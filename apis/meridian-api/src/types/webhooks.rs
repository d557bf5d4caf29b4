// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Webhook types

use super::common::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Resource a webhook subscribes to
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
pub enum WebhookResource {
    /// Fire for every supported resource
    All,
    /// Room membership changes
    Memberships,
    /// Messages posted to rooms
    Messages,
    /// Room create/update/delete
    Rooms,
    /// Meeting lifecycle changes
    Meetings,
    /// Telephony call events
    TelephonyCalls,
}

/// Event filter for a webhook
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WebhookEvent {
    /// Fire for every supported event
    All,
    Created,
    Updated,
    Deleted,
}

/// Delivery status of a webhook
///
/// The service disables webhooks whose target fails for an extended
/// period; re-enabling is done through an update.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WebhookStatus {
    Active,
    Inactive,
}

/// A webhook registration
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Opaque webhook id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// User-supplied name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL events are POSTed to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    /// Subscribed resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<WebhookResource>,
    /// Subscribed event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<WebhookEvent>,
    /// Resource filter expression (e.g. `roomId=...`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Shared secret used to sign deliveries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Delivery status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WebhookStatus>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// Organization id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    /// Person who created the webhook
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Application the webhook belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Whether the creator or the org owns the registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
}

/// Body for creating a webhook
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    /// User-supplied name
    pub name: String,
    /// URL events are POSTed to; must be https
    pub target_url: String,
    /// Resource to subscribe to
    pub resource: WebhookResource,
    /// Event to subscribe to
    pub event: WebhookEvent,
    /// Resource filter expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Shared secret used to sign deliveries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Body for updating a webhook
///
/// Name and target are always required; status can be flipped back to
/// active to resume a webhook the service disabled.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookUpdate {
    /// User-supplied name
    pub name: String,
    /// URL events are POSTed to; must be https
    pub target_url: String,
    /// Replace the delivery secret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Set the delivery status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WebhookStatus>,
}

/// Query parameters for listing webhooks
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListWebhooksQuery {
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Offset into the result set; generated by the server in next links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
}

/// Path parameter for webhook operations
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct WebhookPath {
    /// Opaque webhook id
    pub webhook_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_request_serializes_required_and_skips_none() {
        let req = WebhookRequest {
            name: "build-events".to_string(),
            target_url: "https://ci.example.com/hook".to_string(),
            resource: WebhookResource::Messages,
            event: WebhookEvent::Created,
            filter: None,
            secret: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "build-events",
                "targetUrl": "https://ci.example.com/hook",
                "resource": "messages",
                "event": "created",
            })
        );
    }

    #[test]
    fn resource_strings_match_wire_format() {
        assert_eq!(WebhookResource::TelephonyCalls.to_string(), "telephonyCalls");
        assert_eq!(
            "telephonyCalls".parse::<WebhookResource>().unwrap(),
            WebhookResource::TelephonyCalls
        );
        assert_eq!(
            serde_json::to_string(&WebhookResource::All).unwrap(),
            r#""all""#
        );
    }
}
