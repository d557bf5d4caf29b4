// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Stub Meridian server for testing
//!
//! This crate provides a Dropshot-based HTTP server that implements the
//! Meridian API trait against an in-memory store seeded from JSON
//! fixtures. It can be used for:
//!
//! - Integration testing of meridian-client without vendor credentials
//! - End-to-end testing of the meridian CLI
//! - Local development and demos
//!
//! The store starts from the fixture files and then mutates freely:
//! records created through the API are held in memory until the server
//! exits. List endpoints reproduce the real service's pagination
//! contract, an `{"items": [...]}` envelope plus an RFC 5988 `Link`
//! header with `rel="next"` carrying a relative continuation URL.
//!
//! Authentication is checked on every endpoint except the token
//! endpoint itself: requests must carry `Authorization: Bearer` with
//! either [`STUB_ACCESS_TOKEN`] or a token previously minted through
//! `POST /v1/access_token` using the [`STUB_CLIENT_ID`] /
//! [`STUB_CLIENT_SECRET`] / [`STUB_REFRESH_TOKEN`] credentials.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use meridian_api::{
    CallForwardingSettings, CallQueue, Device, License, Location, Meeting, Organization, Person,
    PhoneNumberListing, Room, Webhook, Workspace,
};
use tokio::sync::Mutex;

mod handlers;

pub use handlers::StubMeridianApi;

/// Access token the stub always accepts, for tests that do not exercise
/// the OAuth grant flow
pub const STUB_ACCESS_TOKEN: &str = "stub-integration-access-token";

/// Client id of the stub's only registered OAuth integration
pub const STUB_CLIENT_ID: &str = "C3f9e2d41a7b85c6f0d12e34a56b78c9d0e1f2a3b";

/// Client secret paired with [`STUB_CLIENT_ID`]
pub const STUB_CLIENT_SECRET: &str = "fb7c1d92e4a6085b3cf0d1e2a3b4c5d6e7f8a9b0c1d2e3f4a5b6c7d8e9f0a1b2";

/// Refresh token the stub's token endpoint exchanges for access tokens
pub const STUB_REFRESH_TOKEN: &str = "stub-refresh-token-1";

// ============================================================================
// Server Context
// ============================================================================

/// Mutable record store behind the stub's endpoints
///
/// Fixture-seeded collections keep their file order, which is the order
/// list endpoints page through.
#[derive(Debug, Default)]
pub(crate) struct Store {
    pub(crate) people: Vec<Person>,
    pub(crate) rooms: Vec<Room>,
    pub(crate) meetings: Vec<Meeting>,
    pub(crate) webhooks: Vec<Webhook>,
    pub(crate) devices: Vec<Device>,
    pub(crate) workspaces: Vec<Workspace>,
    pub(crate) locations: Vec<Location>,
    pub(crate) licenses: Vec<License>,
    pub(crate) organizations: Vec<Organization>,
    pub(crate) queues: Vec<CallQueue>,
    pub(crate) numbers: Vec<PhoneNumberListing>,
    /// Per-person call forwarding settings, keyed by person id
    pub(crate) forwarding: HashMap<String, CallForwardingSettings>,
    /// Access tokens minted by the token endpoint this run
    pub(crate) issued_tokens: HashSet<String>,
}

/// Context for the stub Meridian server
#[derive(Debug)]
pub struct StubContext {
    pub(crate) store: Mutex<Store>,
}

impl StubContext {
    /// Create a stub context by loading fixture data from JSON files
    ///
    /// Each fixture file holds a JSON array in the service's wire format
    /// (camelCase field names). Missing files are treated as empty
    /// collections, so a minimal fixtures directory is fine.
    pub fn from_fixtures(fixtures_dir: &Path) -> Result<Self> {
        let people: Vec<Person> = load_fixture(fixtures_dir, "people.json")?;
        let rooms: Vec<Room> = load_fixture(fixtures_dir, "rooms.json")?;
        let devices: Vec<Device> = load_fixture(fixtures_dir, "devices.json")?;
        let locations: Vec<Location> = load_fixture(fixtures_dir, "locations.json")?;
        let licenses: Vec<License> = load_fixture(fixtures_dir, "licenses.json")?;
        let organizations: Vec<Organization> =
            load_fixture(fixtures_dir, "organizations.json")?;
        let numbers: Vec<PhoneNumberListing> = load_fixture(fixtures_dir, "numbers.json")?;

        tracing::info!(
            people = people.len(),
            rooms = rooms.len(),
            devices = devices.len(),
            locations = locations.len(),
            numbers = numbers.len(),
            "loaded stub fixtures"
        );

        Ok(Self {
            store: Mutex::new(Store {
                people,
                rooms,
                devices,
                locations,
                licenses,
                organizations,
                numbers,
                ..Default::default()
            }),
        })
    }

    /// Number of people currently in the store
    pub async fn person_count(&self) -> usize {
        self.store.lock().await.people.len()
    }
}

fn load_fixture<T: serde::de::DeserializeOwned>(
    fixtures_dir: &Path,
    name: &str,
) -> Result<Vec<T>> {
    let path = fixtures_dir.join(name);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Create the Dropshot API description for the stub server
pub fn api_description() -> Result<dropshot::ApiDescription<std::sync::Arc<StubContext>>, String> {
    meridian_api::meridian_api_mod::api_description::<StubMeridianApi>().map_err(|e| e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures_dir() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    #[tokio::test]
    async fn loads_fixtures() {
        let ctx = StubContext::from_fixtures(&fixtures_dir()).expect("load fixtures");
        let store = ctx.store.lock().await;

        assert_eq!(store.people.len(), 6);
        assert_eq!(store.locations.len(), 2);
        assert_eq!(store.licenses.len(), 2);
        assert_eq!(store.organizations.len(), 1);
        assert_eq!(store.numbers.len(), 3);
        assert_eq!(store.rooms.len(), 2);
        assert_eq!(store.devices.len(), 2);

        // The first person is the owner of the stub access token.
        let me = store.people.first().expect("people seeded");
        assert_eq!(
            me.emails.as_deref().and_then(|e| e.first().map(String::as_str)),
            Some("nora.reid@atelier-kite.example")
        );

        // Mutable collections start empty.
        assert!(store.meetings.is_empty());
        assert!(store.webhooks.is_empty());
        assert!(store.queues.is_empty());
        assert!(store.issued_tokens.is_empty());
    }

    #[test]
    fn missing_fixture_files_load_as_empty() {
        let ctx = StubContext::from_fixtures(Path::new("/nonexistent-fixtures"))
            .expect("missing directory is fine");
        let store = ctx.store.try_lock().expect("fresh store");
        assert!(store.people.is_empty());
    }

    #[test]
    fn api_description_registers_every_endpoint() {
        api_description().expect("api description builds");
    }
}
