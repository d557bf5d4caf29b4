// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Telephony integration tests against meridian-stub-server
//!
//! Queues live under their location, so these tests exercise the
//! nested `telephony/config/locations/{id}/queues` path shape as well
//! as the flat number inventory and per-person forwarding settings.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use futures_util::TryStreamExt;
use meridian_client::{
    CallForwarding, CallForwardingSettings, CallQueue, ForwardingRule, ListLocationsQuery,
    ListNumbersQuery, ListQueuesQuery, Location, MeridianClient, NoAnswerRule, NumberState,
    PhoneNumberListing, QueueRequest, QueueRoutingPolicy,
};
use pretty_assertions::assert_eq;

/// Start the stub server on an ephemeral port and return it together
/// with a client already pointed at it.
async fn start_stub()
-> Option<(dropshot::HttpServer<Arc<meridian_stub_server::StubContext>>, MeridianClient)> {
    // The workspace builds reqwest without a default TLS provider, so
    // one has to be installed before any client is built. See the
    // rustls notes in the workspace Cargo.toml.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let fixtures_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../services/meridian-stub-server/fixtures");

    let context =
        Arc::new(meridian_stub_server::StubContext::from_fixtures(&fixtures_dir).unwrap());

    let api = meridian_stub_server::api_description().expect("stub api description");

    let config = dropshot::ConfigDropshot {
        bind_address: "127.0.0.1:0".parse().unwrap(),
        default_request_body_max_bytes: 1024 * 1024,
        default_handler_task_mode: dropshot::HandlerTaskMode::Detached,
        ..Default::default()
    };

    let log = dropshot::ConfigLogging::StderrTerminal {
        level: dropshot::ConfigLoggingLevel::Warn,
    }
    .to_logger("meridian-telephony-test")
    .expect("stub logger");

    let server = match dropshot::HttpServerStarter::new(&config, api, context, &log) {
        Ok(starter) => starter.start(),
        Err(e) => {
            eprintln!("skipping telephony test: failed to start stub: {}", e);
            return None;
        }
    };

    // Give server a moment to be ready
    tokio::time::sleep(Duration::from_millis(50)).await;

    let client = MeridianClient::builder()
        .access_token(meridian_stub_server::STUB_ACCESS_TOKEN)
        .base_url(format!("http://{}/v1", server.local_addr()))
        .build()
        .expect("client against stub");

    Some((server, client))
}

/// Fixture location used for queue tests
async fn main_campus(client: &MeridianClient) -> Location {
    let found: Vec<Location> = client
        .locations()
        .list(ListLocationsQuery {
            name: Some("Main Campus".to_string()),
            ..Default::default()
        })
        .try_collect()
        .await
        .expect("list locations by name");
    assert_eq!(found.len(), 1, "fixtures seed exactly one Main Campus");
    found.into_iter().next().expect("main campus location")
}

#[tokio::test]
async fn create_queue_lands_in_its_location() {
    let Some((server, client)) = start_stub().await else {
        return;
    };
    let queues = client.telephony().queues();

    let location = main_campus(&client).await;
    let location_id = location.id.expect("fixture location has an id");

    let mut request = QueueRequest::new("Sales");
    request.extension = Some("5100".to_string());

    let created = queues
        .create(&location_id, &request)
        .await
        .expect("create queue");
    let queue_id = created.id.clone().expect("created queue has an id");
    assert_eq!(created.name.as_deref(), Some("Sales"));
    assert_eq!(created.location_id.as_deref(), Some(location_id.as_str()));
    assert_eq!(created.extension.as_deref(), Some("5100"));

    let fetched = queues
        .get(&location_id, &queue_id)
        .await
        .expect("get queue under its location");
    assert_eq!(fetched.id.as_deref(), Some(queue_id.as_str()));
    assert_eq!(fetched.name.as_deref(), Some("Sales"));

    // The org-wide listing filtered to the location shows it too.
    let listed: Vec<CallQueue> = client
        .telephony()
        .queues()
        .list(ListQueuesQuery {
            location_id: Some(location_id.clone()),
            ..Default::default()
        })
        .try_collect()
        .await
        .expect("list queues in the location");
    assert!(
        listed.iter().any(|q| q.id.as_deref() == Some(queue_id.as_str())),
        "created queue appears in the location listing"
    );

    server.close().await.expect("stop stub");
}

#[tokio::test]
async fn queue_update_is_a_full_replace() {
    let Some((server, client)) = start_stub().await else {
        return;
    };
    let queues = client.telephony().queues();

    let location = main_campus(&client).await;
    let location_id = location.id.expect("fixture location has an id");

    let created = queues
        .create(&location_id, &QueueRequest::new("Support"))
        .await
        .expect("create queue");
    let queue_id = created.id.expect("created queue has an id");

    let mut replacement = QueueRequest::new("Support");
    replacement.routing_policy = Some(QueueRoutingPolicy::Weighted);
    queues
        .update(&location_id, &queue_id, &replacement)
        .await
        .expect("update queue");

    let fetched = queues
        .get(&location_id, &queue_id)
        .await
        .expect("get updated queue");
    assert_eq!(fetched.routing_policy, Some(QueueRoutingPolicy::Weighted));
    assert_eq!(fetched.name.as_deref(), Some("Support"));

    server.close().await.expect("stop stub");
}

#[tokio::test]
async fn queue_delete_removes_it() {
    let Some((server, client)) = start_stub().await else {
        return;
    };
    let queues = client.telephony().queues();

    let location = main_campus(&client).await;
    let location_id = location.id.expect("fixture location has an id");

    let created = queues
        .create(&location_id, &QueueRequest::new("Overflow"))
        .await
        .expect("create queue");
    let queue_id = created.id.expect("created queue has an id");

    queues
        .delete(&location_id, &queue_id)
        .await
        .expect("delete queue");

    let err = queues
        .get(&location_id, &queue_id)
        .await
        .expect_err("deleted queue is gone");
    assert!(err.is_not_found(), "expected a 404, got {}", err);

    server.close().await.expect("stop stub");
}

#[tokio::test]
async fn forwarding_settings_roundtrip() {
    let Some((server, client)) = start_stub().await else {
        return;
    };
    let forwarding = client.telephony().forwarding();

    let me = client.people().me().await.expect("get own person");
    let person_id = me.id.expect("own person has an id");

    // Nothing configured yet: the settings read back empty, not as an
    // error.
    let initial = forwarding
        .get(&person_id)
        .await
        .expect("read default settings");
    assert!(initial.call_forwarding.is_none());

    let settings = CallForwardingSettings {
        call_forwarding: Some(CallForwarding {
            always: Some(ForwardingRule {
                enabled: Some(true),
                destination: Some("+15551230100".to_string()),
                destination_voicemail_enabled: Some(false),
            }),
            busy: None,
            no_answer: Some(NoAnswerRule {
                enabled: Some(true),
                destination: Some("+15551230101".to_string()),
                number_of_rings: Some(4),
                destination_voicemail_enabled: Some(true),
            }),
        }),
        business_continuity: Some(ForwardingRule {
            enabled: Some(false),
            destination: None,
            destination_voicemail_enabled: None,
        }),
    };

    forwarding
        .update(&person_id, &settings)
        .await
        .expect("store forwarding settings");

    let read_back = forwarding
        .get(&person_id)
        .await
        .expect("read stored settings");
    let rules = read_back.call_forwarding.expect("rules were stored");

    let always = rules.always.expect("always rule survives");
    assert_eq!(always.enabled, Some(true));
    assert_eq!(always.destination.as_deref(), Some("+15551230100"));

    let no_answer = rules.no_answer.expect("no-answer rule survives");
    assert_eq!(no_answer.number_of_rings, Some(4));
    assert_eq!(no_answer.destination_voicemail_enabled, Some(true));

    assert!(rules.busy.is_none(), "unset rules stay unset");

    let continuity = read_back
        .business_continuity
        .expect("business continuity survives");
    assert_eq!(continuity.enabled, Some(false));

    server.close().await.expect("stop stub");
}

#[tokio::test]
async fn forwarding_for_unknown_person_is_not_found() {
    let Some((server, client)) = start_stub().await else {
        return;
    };

    let err = client
        .telephony()
        .forwarding()
        .get("bWVyaWRpYW46Ly91cy9QRU9QTEUvbm8tc3VjaC1wZXJzb24")
        .await
        .expect_err("unknown person must not resolve");
    assert!(err.is_not_found());

    server.close().await.expect("stop stub");
}

#[tokio::test]
async fn number_inventory_lists_and_filters() {
    let Some((server, client)) = start_stub().await else {
        return;
    };
    let numbers = client.telephony().numbers();

    let all: Vec<PhoneNumberListing> = numbers
        .list(ListNumbersQuery::default())
        .try_collect()
        .await
        .expect("list the whole inventory");
    assert_eq!(all.len(), 3, "all fixture numbers");

    let main: Vec<&PhoneNumberListing> =
        all.iter().filter(|n| n.main_number == Some(true)).collect();
    assert_eq!(main.len(), 1, "fixtures seed one main number");
    assert_eq!(main[0].phone_number.as_deref(), Some("+15551230100"));

    let active: Vec<PhoneNumberListing> = numbers
        .list(ListNumbersQuery {
            state: Some(NumberState::Active),
            ..Default::default()
        })
        .try_collect()
        .await
        .expect("list active numbers");
    assert_eq!(active.len(), 2, "one fixture number is inactive");
    for number in &active {
        assert_eq!(number.state, Some(NumberState::Active));
    }

    server.close().await.expect("stop stub");
}
