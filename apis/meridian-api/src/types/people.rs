// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! People (user) types

use super::common::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Presence status of a person
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
pub enum PersonStatus {
    /// Active within the last ten minutes
    Active,
    /// Currently in a call
    Call,
    /// Inactive
    Inactive,
    /// Currently in a meeting
    Meeting,
    /// Out of office auto-reply is set
    OutOfOffice,
    /// Invited but has not signed in yet
    Pending,
    /// Status could not be determined
    Unknown,
}

/// Kind of account behind a person record
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
pub enum PersonType {
    /// A human user
    Person,
    /// A bot account
    Bot,
    /// An application service account
    Appuser,
}

/// Kind of phone number attached to a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum PhoneNumberType {
    Work,
    Mobile,
    Fax,
    Extension,
}

/// A phone number entry on a person record
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    /// Kind of number
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub number_type: Option<PhoneNumberType>,
    /// The number in E.164 format where possible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A person (user) in the organization
///
/// Every field is optional: the service omits fields the caller's scopes
/// do not grant, and admin-only fields are absent for non-admin callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Opaque person id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Email addresses (the first entry is primary)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
    /// Phone numbers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<PhoneNumber>>,
    /// Extension in the calling dial plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Calling location id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Full display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Nickname, if distinct from the first name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Organization id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    /// Role ids held by this person (admin-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    /// License ids assigned to this person (admin-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licenses: Option<Vec<String>>,
    /// Department (admin-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Manager display name (admin-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    /// Manager person id (admin-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    /// Job title (admin-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// Last modification timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Timestamp>,
    /// Last activity timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<Timestamp>,
    /// Presence status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PersonStatus>,
    /// Account type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub person_type: Option<PersonType>,
    /// Invite sent but not yet accepted (admin-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_pending: Option<bool>,
    /// Sign-in allowed (admin-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_enabled: Option<bool>,
}

/// Body for creating or replacing a person
///
/// Update is a full replace: fields left out of the body are cleared on
/// the server, so callers updating a person should start from the result
/// of a get.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonRequest {
    /// Email addresses; exactly one is required today
    pub emails: Vec<String>,
    /// Phone numbers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<PhoneNumber>>,
    /// Extension in the calling dial plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Calling location id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Full display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Organization id (defaults to the caller's organization)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    /// Role ids to grant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    /// License ids to assign
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licenses: Option<Vec<String>>,
    /// Department
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Job title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl PersonRequest {
    /// Minimal request: one email address, everything else defaulted
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            emails: vec![email.into()],
            phone_numbers: None,
            extension: None,
            location_id: None,
            display_name: None,
            first_name: None,
            last_name: None,
            avatar: None,
            org_id: None,
            roles: None,
            licenses: None,
            department: None,
            title: None,
        }
    }
}

/// Query parameters for listing people
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPeopleQuery {
    /// Only people with this email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Only people whose name starts with this value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Comma-separated list of person ids (up to 85)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Only people in this calling location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Offset into the result set; generated by the server in next links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
}

/// Path parameter for person operations
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct PersonPath {
    /// Opaque person id
    pub person_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn person_none_fields_are_omitted() {
        let person = Person {
            id: Some("P1".to_string()),
            display_name: Some("Ada Lovelace".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&person).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["displayName", "id"]);
    }

    #[test]
    fn person_round_trips_through_json() {
        let body = r#"{
            "id": "UGVvcGxlLTEyMw",
            "emails": ["ada@example.com"],
            "phoneNumbers": [{"type": "work", "value": "+14085551212"}],
            "displayName": "Ada Lovelace",
            "orgId": "T3JnLTE",
            "created": "2024-01-15T08:30:00.000Z",
            "status": "outOfOffice",
            "type": "person"
        }"#;
        let person: Person = serde_json::from_str(body).unwrap();
        assert_eq!(person.status, Some(PersonStatus::OutOfOffice));
        assert_eq!(person.person_type, Some(PersonType::Person));

        let reparsed: Person =
            serde_json::from_value(serde_json::to_value(&person).unwrap()).unwrap();
        assert_eq!(
            serde_json::to_value(&person).unwrap(),
            serde_json::to_value(&reparsed).unwrap()
        );
    }

    #[test]
    fn person_ignores_unknown_fields() {
        let body = r#"{"id": "P1", "someFutureField": {"nested": true}}"#;
        let person: Person = serde_json::from_str(body).unwrap();
        assert_eq!(person.id.as_deref(), Some("P1"));
    }

    #[test]
    fn status_strings_match_wire_format() {
        assert_eq!(PersonStatus::OutOfOffice.to_string(), "outOfOffice");
        assert_eq!(
            serde_json::to_string(&PersonStatus::OutOfOffice).unwrap(),
            r#""outOfOffice""#
        );
        assert_eq!("call".parse::<PersonStatus>().unwrap(), PersonStatus::Call);
    }
}
