// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Standalone stub Meridian server for testing and development
//!
//! Run with:
//! ```bash
//! cargo run -p meridian-stub-server
//! ```
//!
//! Then point the CLI at it:
//! ```bash
//! meridian --url http://localhost:9090/v1 --token stub-integration-access-token people list
//! ```

use anyhow::Result;
use dropshot::{ConfigDropshot, ConfigLogging, ConfigLoggingLevel, HttpServerStarter};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use meridian_stub_server::{STUB_ACCESS_TOKEN, StubContext, api_description};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "meridian_stub_server=info,dropshot=info".to_string()),
        ))
        .init();

    let log_config = ConfigLogging::StderrTerminal {
        level: ConfigLoggingLevel::Info,
    };
    let log = log_config.to_logger("meridian-stub-server")?;

    // Load fixture data
    let fixtures_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    let context = Arc::new(StubContext::from_fixtures(&fixtures_dir)?);

    tracing::info!("Loaded {} people from fixtures", context.person_count().await);

    // Configure the server
    let config = ConfigDropshot {
        bind_address: SocketAddr::from((Ipv4Addr::LOCALHOST, 9090)),
        default_request_body_max_bytes: 1024 * 1024,
        default_handler_task_mode: dropshot::HandlerTaskMode::Detached,
        ..Default::default()
    };

    // Create and start the server
    let api = api_description().map_err(|e| anyhow::anyhow!(e))?;
    let server = HttpServerStarter::new(&config, api, context, &log)
        .map_err(|e| anyhow::anyhow!("Failed to create server: {}", e))?
        .start();

    tracing::info!("Stub Meridian server listening on http://localhost:9090");
    tracing::info!("Accepted bearer token: {}", STUB_ACCESS_TOKEN);
    tracing::info!("Example endpoints:");
    tracing::info!("  POST /v1/access_token");
    tracing::info!("  GET /v1/people?max=...");
    tracing::info!("  GET /v1/people/{{person_id}}");
    tracing::info!("  GET /v1/rooms");
    tracing::info!("  GET /v1/telephony/config/numbers");

    server
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
