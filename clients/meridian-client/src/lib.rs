// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Meridian API Client Library
//!
//! This client provides typed async access to the Meridian collaboration
//! platform's REST API: people, rooms, meetings, webhooks, devices,
//! workspaces and calling administration.
//!
//! A client is cheap to clone and hands out one API child per resource
//! area. All children share one REST session, so connection pooling and
//! authentication are set up once.
//!
//! ## Usage
//!
//! ```ignore
//! use futures_util::TryStreamExt;
//! use meridian_client::{ListPeopleQuery, MeridianClient};
//!
//! let client = MeridianClient::from_env()?;
//!
//! // Item operations are one awaited call each.
//! let me = client.people().me().await?;
//!
//! // List operations return a lazy stream that follows pagination
//! // links; collect it, or stop early and pay for no extra pages.
//! let people: Vec<_> = client
//!     .people()
//!     .list(ListPeopleQuery::default())
//!     .try_collect()
//!     .await?;
//! ```
//!
//! Concurrency is left to the caller: every operation is a plain future,
//! so fanning out is `try_join_all` over the calls. The client never
//! retries; transport and API errors propagate as [`Error`].

use std::sync::Arc;
use std::time::Duration;

use url::Url;

mod endpoint;
mod error;
mod session;

pub mod devices;
pub mod licenses;
pub mod locations;
pub mod meetings;
pub mod organizations;
pub mod people;
pub mod rooms;
pub mod telephony;
pub mod webhooks;
pub mod workspaces;

pub use devices::Devices;
pub use error::Error;
pub use licenses::Licenses;
pub use locations::Locations;
pub use meetings::Meetings;
pub use organizations::Organizations;
pub use people::People;
pub use rooms::Rooms;
pub use telephony::Telephony;
pub use webhooks::Webhooks;
pub use workspaces::Workspaces;

use session::RestSession;

// Re-export auth types for convenience
pub use meridian_auth::{
    ACCESS_TOKEN_ENV, AuthError, OAuthConfig, StaticTokens, TokenManager, TokenProvider,
};

// Re-export types from the API crate for convenience
pub use meridian_api::{
    // Device types
    ActivationCode,
    ActivationCodeRequest,
    // Location types
    Address,
    AlternateNumber,
    // Call forwarding types
    CallForwarding,
    CallForwardingSettings,
    // Call queue types
    CallQueue,
    CallingType,
    ConnectionStatus,
    Device,
    DevicePath,
    DeviceType,
    // Common types
    ErrorDetail,
    ErrorResponse,
    ForwardingRule,
    ItemPage,
    License,
    LicensePath,
    ListDevicesQuery,
    ListLicensesQuery,
    ListLocationsQuery,
    ListMeetingsQuery,
    ListNumbersQuery,
    ListOrganizationsQuery,
    ListPeopleQuery,
    ListQueuesQuery,
    ListRoomsQuery,
    ListWebhooksQuery,
    ListWorkspacesQuery,
    Location,
    LocationPath,
    LocationRequest,
    // Meeting types
    Meeting,
    MeetingInvitee,
    MeetingPath,
    MeetingRequest,
    MeetingState,
    MeetingType,
    NoAnswerRule,
    // Number inventory types
    NumberLocation,
    NumberOwner,
    NumberOwnerType,
    NumberState,
    // Organization types
    Organization,
    OrganizationPath,
    // People types
    Person,
    PersonPath,
    PersonRequest,
    PersonStatus,
    PersonType,
    PhoneNumber,
    PhoneNumberListing,
    PhoneNumberType,
    QueueAgent,
    QueueLocationPath,
    QueuePath,
    QueueRequest,
    QueueRoutingPolicy,
    RingPattern,
    // Room types
    Room,
    RoomPath,
    RoomRequest,
    RoomSortBy,
    RoomType,
    Timestamp,
    // Auth types
    TokenResponse,
    // Webhook types
    Webhook,
    WebhookEvent,
    WebhookPath,
    WebhookRequest,
    WebhookResource,
    WebhookStatus,
    WebhookUpdate,
    // Workspace types
    Workspace,
    WorkspacePath,
    WorkspaceRequest,
    WorkspaceType,
};

/// Production API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.meridian.cloud/v1/";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "MERIDIAN_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for [`MeridianClient`]
pub struct Builder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    tokens: Option<Arc<dyn TokenProvider>>,
}

impl Builder {
    fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("meridian-rust/", env!("CARGO_PKG_VERSION")).to_string(),
            tokens: None,
        }
    }

    /// Point the client at a different API base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Per-request timeout (default 30 seconds)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Authenticate every request with a fixed access token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.tokens = Some(Arc::new(StaticTokens::new(token)));
        self
    }

    /// Authenticate with a token provider, e.g. a [`TokenManager`]
    /// refreshing integration tokens
    pub fn token_provider(mut self, tokens: Arc<dyn TokenProvider>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<MeridianClient, Error> {
        let tokens = self
            .tokens
            .ok_or(AuthError::MissingToken(ACCESS_TOKEN_ENV))?;
        let base: Url = self.base_url.parse()?;
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;
        let session = RestSession::new(http, base, tokens)?;
        Ok(MeridianClient {
            session: Arc::new(session),
        })
    }
}

/// Client for the Meridian REST API
#[derive(Clone)]
pub struct MeridianClient {
    session: Arc<RestSession>,
}

impl MeridianClient {
    /// Start building a client
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Client against the production API with a fixed access token
    pub fn new(access_token: impl Into<String>) -> Result<Self, Error> {
        Self::builder().access_token(access_token).build()
    }

    /// Client configured from the environment.
    ///
    /// Reads the access token from `MERIDIAN_ACCESS_TOKEN` and, when
    /// set, the base URL from `MERIDIAN_URL`.
    pub fn from_env() -> Result<Self, Error> {
        let tokens = StaticTokens::from_env()?;
        let mut builder = Self::builder().token_provider(Arc::new(tokens));
        if let Ok(base) = std::env::var(BASE_URL_ENV) {
            if !base.is_empty() {
                builder = builder.base_url(base);
            }
        }
        builder.build()
    }

    /// The API base URL this client talks to
    pub fn base_url(&self) -> &Url {
        self.session.base_url()
    }

    /// People API
    pub fn people(&self) -> People {
        People::new(Arc::clone(&self.session))
    }

    /// Rooms API
    pub fn rooms(&self) -> Rooms {
        Rooms::new(Arc::clone(&self.session))
    }

    /// Meetings API
    pub fn meetings(&self) -> Meetings {
        Meetings::new(Arc::clone(&self.session))
    }

    /// Webhooks API
    pub fn webhooks(&self) -> Webhooks {
        Webhooks::new(Arc::clone(&self.session))
    }

    /// Devices API
    pub fn devices(&self) -> Devices {
        Devices::new(Arc::clone(&self.session))
    }

    /// Workspaces API
    pub fn workspaces(&self) -> Workspaces {
        Workspaces::new(Arc::clone(&self.session))
    }

    /// Locations API
    pub fn locations(&self) -> Locations {
        Locations::new(Arc::clone(&self.session))
    }

    /// Licenses API
    pub fn licenses(&self) -> Licenses {
        Licenses::new(Arc::clone(&self.session))
    }

    /// Organizations API
    pub fn organizations(&self) -> Organizations {
        Organizations::new(Arc::clone(&self.session))
    }

    /// Calling administration APIs
    pub fn telephony(&self) -> Telephony {
        Telephony::new(Arc::clone(&self.session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The workspace builds reqwest without a default TLS provider, so
    // one has to be installed before any client is built. See the
    // rustls notes in the workspace Cargo.toml.
    fn install_test_tls_provider() {
        let _ = rustls::crypto::ring::default_provider().install_default();
    }

    #[test]
    fn builder_without_tokens_is_an_auth_error() {
        let result = MeridianClient::builder().build();
        assert!(matches!(result, Err(Error::Auth(_))));
    }

    #[test]
    fn builder_defaults_to_production_base_url() {
        install_test_tls_provider();
        let client = MeridianClient::new("token").unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_gains_a_trailing_slash() {
        install_test_tls_provider();
        let client = MeridianClient::builder()
            .access_token("token")
            .base_url("https://stub.example.com/v1")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "https://stub.example.com/v1/");
    }

    #[test]
    fn builder_rejects_unparseable_base_url() {
        let result = MeridianClient::builder()
            .access_token("token")
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(Error::Url(_))));
    }
}
