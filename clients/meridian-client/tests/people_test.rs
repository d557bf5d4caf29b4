// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! People integration tests against meridian-stub-server
//!
//! Each test boots its own stub on an ephemeral port with a fresh copy
//! of the fixtures, so tests can create and delete records freely.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future;
use futures_util::{StreamExt, TryStreamExt};
use meridian_client::{Error, ListPeopleQuery, MeridianClient, Person, PersonRequest};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;

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
    .to_logger("meridian-client-test")
    .expect("stub logger");

    let server = match dropshot::HttpServerStarter::new(&config, api, context, &log) {
        Ok(starter) => starter.start(),
        Err(e) => {
            eprintln!("skipping client test: failed to start stub: {}", e);
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

fn person_ids(people: &[Person]) -> Vec<String> {
    people.iter().filter_map(|p| p.id.clone()).collect()
}

#[tokio::test]
async fn list_yields_every_person_exactly_once_in_order() {
    let Some((server, client)) = start_stub().await else {
        return;
    };

    let everyone: Vec<Person> = client
        .people()
        .list(ListPeopleQuery::default())
        .try_collect()
        .await
        .expect("list people");
    assert_eq!(everyone.len(), 6, "all fixture people in one page");

    // A page size of two forces the stream through the next-link chain;
    // the result must be the same people in the same order.
    let paged: Vec<Person> = client
        .people()
        .list(ListPeopleQuery {
            max: Some(2),
            ..Default::default()
        })
        .try_collect()
        .await
        .expect("list people in pages of two");

    assert_eq!(person_ids(&everyone), person_ids(&paged));

    let unique: HashSet<String> = person_ids(&paged).into_iter().collect();
    assert_eq!(unique.len(), paged.len(), "no person may appear twice");

    server.close().await.expect("stop stub");
}

#[tokio::test]
async fn bounded_take_stops_early() {
    let Some((server, client)) = start_stub().await else {
        return;
    };

    let first_three: Vec<Person> = client
        .people()
        .list(ListPeopleQuery {
            max: Some(2),
            ..Default::default()
        })
        .take(3)
        .try_collect()
        .await
        .expect("take three people");

    assert_eq!(first_three.len(), 3);

    server.close().await.expect("stop stub");
}

#[tokio::test]
async fn list_filters_by_email() {
    let Some((server, client)) = start_stub().await else {
        return;
    };

    let found: Vec<Person> = client
        .people()
        .list(ListPeopleQuery {
            email: Some("maya.chen@atelier-kite.example".to_string()),
            ..Default::default()
        })
        .try_collect()
        .await
        .expect("list people by email");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].display_name.as_deref(), Some("Maya Chen"));

    server.close().await.expect("stop stub");
}

#[tokio::test]
async fn me_is_the_token_owner() {
    let Some((server, client)) = start_stub().await else {
        return;
    };

    let me = client.people().me().await.expect("get own person");
    assert_eq!(
        me.emails,
        Some(vec!["nora.reid@atelier-kite.example".to_string()])
    );
    assert!(me.id.is_some());

    server.close().await.expect("stop stub");
}

#[tokio::test]
async fn person_create_update_delete_roundtrip() {
    let Some((server, client)) = start_stub().await else {
        return;
    };
    let people = client.people();

    let mut request = PersonRequest::new("quinn.harper@atelier-kite.example");
    request.display_name = Some("Quinn Harper".to_string());
    request.first_name = Some("Quinn".to_string());
    request.last_name = Some("Harper".to_string());

    let created = people.create(&request).await.expect("create person");
    let id = created.id.clone().expect("created person has an id");
    assert_eq!(created.display_name.as_deref(), Some("Quinn Harper"));
    assert_eq!(
        created.emails,
        Some(vec!["quinn.harper@atelier-kite.example".to_string()])
    );

    let fetched = people.get(&id).await.expect("get created person");
    assert_eq!(fetched.id.as_deref(), Some(id.as_str()));
    assert_eq!(fetched.display_name, created.display_name);

    // Full replace: the new body carries every field that should survive.
    request.display_name = Some("Quinn H. Harper".to_string());
    let updated = people.update(&id, &request).await.expect("update person");
    assert_eq!(updated.id.as_deref(), Some(id.as_str()));
    assert_eq!(updated.display_name.as_deref(), Some("Quinn H. Harper"));

    people.delete(&id).await.expect("delete person");
    let err = people.get(&id).await.expect_err("deleted person is gone");
    assert!(err.is_not_found(), "expected a 404, got {}", err);

    server.close().await.expect("stop stub");
}

#[tokio::test]
async fn concurrent_gets_share_one_client() {
    let Some((server, client)) = start_stub().await else {
        return;
    };

    let everyone: Vec<Person> = client
        .people()
        .list(ListPeopleQuery::default())
        .try_collect()
        .await
        .expect("list people");
    let ids = person_ids(&everyone);
    assert_eq!(ids.len(), everyone.len(), "every fixture person has an id");

    let people = client.people();
    let fetched = future::try_join_all(ids.iter().map(|id| people.get(id)))
        .await
        .expect("fan out gets");

    for (person, id) in fetched.iter().zip(&ids) {
        assert_eq!(person.id.as_deref(), Some(id.as_str()));
    }

    server.close().await.expect("stop stub");
}

#[tokio::test]
async fn unknown_person_maps_to_an_api_error() {
    let Some((server, client)) = start_stub().await else {
        return;
    };

    let err = client
        .people()
        .get("bWVyaWRpYW46Ly91cy9QRU9QTEUvbm8tc3VjaC1wZXJzb24")
        .await
        .expect_err("unknown id must not resolve");

    assert!(err.is_not_found());
    match err {
        Error::Api { status, message, .. } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(!message.is_empty(), "error body message is surfaced");
        }
        other => panic!("expected Error::Api, got {:?}", other),
    }

    server.close().await.expect("stop stub");
}

#[tokio::test]
async fn wrong_token_is_rejected() {
    let Some((server, _client)) = start_stub().await else {
        return;
    };

    let impostor = MeridianClient::builder()
        .access_token("not-a-token-the-stub-issued")
        .base_url(format!("http://{}/v1", server.local_addr()))
        .build()
        .expect("client with a bogus token");

    let err = impostor
        .people()
        .me()
        .await
        .expect_err("stub must reject unknown tokens");
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));

    server.close().await.expect("stop stub");
}
