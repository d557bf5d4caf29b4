// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Integration tests for the OAuth token manager using meridian-stub-server
//!
//! These tests spin up the stub server and drive the `refresh_token` grant
//! against its token endpoint. The stub mints a unique access token per
//! grant, which is what lets us tell a cached token from a re-fetched one.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use meridian_auth::{AuthError, OAuthConfig, TokenManager, TokenProvider};
use secrecy::ExposeSecret;

/// Start the stub server on an ephemeral port, returning the running
/// server and the URL of its token endpoint.
async fn start_stub() -> Option<(dropshot::HttpServer<Arc<meridian_stub_server::StubContext>>, url::Url)>
{
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
    .to_logger("meridian-auth-test")
    .expect("stub logger");

    let server = match dropshot::HttpServerStarter::new(&config, api, context, &log) {
        Ok(starter) => starter.start(),
        Err(e) => {
            eprintln!("skipping oauth test: failed to start stub: {}", e);
            return None;
        }
    };

    let base_url: url::Url = format!("http://{}/v1/access_token", server.local_addr())
        .parse()
        .unwrap();

    // Give server a moment to be ready
    tokio::time::sleep(Duration::from_millis(50)).await;

    Some((server, base_url))
}

#[tokio::test]
async fn token_manager_caches_access_token_across_calls() {
    let Some((server, token_url)) = start_stub().await else {
        return;
    };

    let config = OAuthConfig::new(
        meridian_stub_server::STUB_CLIENT_ID,
        meridian_stub_server::STUB_CLIENT_SECRET,
        meridian_stub_server::STUB_REFRESH_TOKEN,
    )
    .with_token_url(token_url.clone());
    let manager = TokenManager::new(config).expect("token manager");

    let first = manager.bearer_token().await.expect("first grant");
    let second = manager.bearer_token().await.expect("cached token");
    assert_eq!(
        first.expose_secret(),
        second.expose_secret(),
        "second call should reuse the cached token"
    );

    // A fresh manager performs its own grant, and the stub mints a unique
    // token per grant. If the two managers agreed, the assertion above
    // would prove nothing.
    let config = OAuthConfig::new(
        meridian_stub_server::STUB_CLIENT_ID,
        meridian_stub_server::STUB_CLIENT_SECRET,
        meridian_stub_server::STUB_REFRESH_TOKEN,
    )
    .with_token_url(token_url);
    let other = TokenManager::new(config).expect("second manager");
    let theirs = other.bearer_token().await.expect("second grant");
    assert_ne!(first.expose_secret(), theirs.expose_secret());

    server.close().await.expect("shutdown stub");
}

#[tokio::test]
async fn token_manager_surfaces_rejected_grant() {
    let Some((server, token_url)) = start_stub().await else {
        return;
    };

    let config = OAuthConfig::new(
        meridian_stub_server::STUB_CLIENT_ID,
        meridian_stub_server::STUB_CLIENT_SECRET,
        "not-the-refresh-token",
    )
    .with_token_url(token_url);
    let manager = TokenManager::new(config).expect("token manager");

    match manager.bearer_token().await {
        Err(AuthError::Grant { status, message }) => {
            assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
            assert!(!message.is_empty(), "grant rejection should carry a message");
        }
        other => panic!("expected grant rejection, got {:?}", other.map(|_| "token")),
    }

    server.close().await.expect("shutdown stub");
}
