// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Meridian API Trait Definition
//!
//! **IMPORTANT**: This trait defines a *subset* of the Meridian
//! collaboration cloud REST API (v1). This is NOT a complete Meridian API
//! definition - it only includes the endpoints the SDK in
//! `clients/meridian-client` depends on.
//!
//! The actual Meridian API is implemented by the vendor's servers. This
//! trait exists to:
//! 1. Document the exact API surface we depend on
//! 2. Enable the in-memory stub implementation used by integration tests
//! 3. Pin the wire types the SDK serializes against
//!
//! Conventions of the real service that matter here:
//! - Every endpoint except `POST /v1/access_token` requires an
//!   `Authorization: Bearer` header.
//! - List responses are wrapped in an `{"items": [...]}` envelope and,
//!   when more results exist, carry an RFC 5988 `Link` response header
//!   with `rel="next"`. Because Dropshot's typed responses cannot attach
//!   that header, list endpoints are declared with raw
//!   `Response<Body>` results.
//! - The continuation link is opaque to clients. The `start` query
//!   parameter appears only inside server-generated links.

use dropshot::{
    Body, HttpError, HttpResponseCreated, HttpResponseDeleted, HttpResponseOk,
    HttpResponseUpdatedNoContent, Path, Query, RequestContext, TypedBody, UntypedBody,
};
use http::Response;

pub mod types;
pub use types::*;

/// Meridian REST API v1 (Subset)
///
/// The surface is organized into the following areas:
/// - Access tokens (OAuth 2.0 grant exchange)
/// - People
/// - Rooms
/// - Meetings
/// - Webhooks
/// - Devices
/// - Workspaces
/// - Locations
/// - Licenses
/// - Organizations
/// - Calling administration (queues, forwarding, number inventory)
#[dropshot::api_description]
pub trait MeridianApi {
    /// Context type for request handlers
    type Context: Send + Sync + 'static;

    // ========================================================================
    // Access Token Endpoints
    // ========================================================================

    /// Exchange an OAuth grant for tokens
    ///
    /// The body is form-encoded (`application/x-www-form-urlencoded`),
    /// not JSON: `grant_type` is `authorization_code` or `refresh_token`,
    /// with `client_id`, `client_secret`, and either `code` +
    /// `redirect_uri` or `refresh_token`. Declared as an untyped body
    /// because Dropshot's typed extractors assume JSON here.
    #[endpoint {
        method = POST,
        path = "/v1/access_token",
        tags = ["auth"],
    }]
    async fn create_access_token(
        rqctx: RequestContext<Self::Context>,
        body: UntypedBody,
    ) -> Result<HttpResponseOk<TokenResponse>, HttpError>;

    // ========================================================================
    // People Endpoints
    // ========================================================================

    /// List people
    ///
    /// Admins may list the whole organization; non-admins must filter by
    /// `email`, `displayName`, or `id`. Paginated via the `Link` header.
    #[endpoint {
        method = GET,
        path = "/v1/people",
        tags = ["people"],
    }]
    async fn list_people(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListPeopleQuery>,
    ) -> Result<Response<Body>, HttpError>;

    /// Create a person (admin-only)
    #[endpoint {
        method = POST,
        path = "/v1/people",
        tags = ["people"],
    }]
    async fn create_person(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<PersonRequest>,
    ) -> Result<HttpResponseCreated<Person>, HttpError>;

    /// Get a person by id
    ///
    /// The special id `me` resolves to the person the access token
    /// belongs to, which is how the service documents
    /// `GET /v1/people/me`.
    #[endpoint {
        method = GET,
        path = "/v1/people/{person_id}",
        tags = ["people"],
    }]
    async fn get_person(
        rqctx: RequestContext<Self::Context>,
        path: Path<PersonPath>,
    ) -> Result<HttpResponseOk<Person>, HttpError>;

    /// Replace a person (admin-only)
    ///
    /// Full replace: omitted body fields are cleared on the server.
    #[endpoint {
        method = PUT,
        path = "/v1/people/{person_id}",
        tags = ["people"],
    }]
    async fn update_person(
        rqctx: RequestContext<Self::Context>,
        path: Path<PersonPath>,
        body: TypedBody<PersonRequest>,
    ) -> Result<HttpResponseOk<Person>, HttpError>;

    /// Remove a person from the organization (admin-only)
    #[endpoint {
        method = DELETE,
        path = "/v1/people/{person_id}",
        tags = ["people"],
    }]
    async fn delete_person(
        rqctx: RequestContext<Self::Context>,
        path: Path<PersonPath>,
    ) -> Result<HttpResponseDeleted, HttpError>;

    // ========================================================================
    // Room Endpoints
    // ========================================================================

    /// List rooms the caller belongs to
    ///
    /// Paginated via the `Link` header.
    #[endpoint {
        method = GET,
        path = "/v1/rooms",
        tags = ["rooms"],
    }]
    async fn list_rooms(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListRoomsQuery>,
    ) -> Result<Response<Body>, HttpError>;

    /// Create a room
    #[endpoint {
        method = POST,
        path = "/v1/rooms",
        tags = ["rooms"],
    }]
    async fn create_room(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<RoomRequest>,
    ) -> Result<HttpResponseCreated<Room>, HttpError>;

    /// Get a room by id
    #[endpoint {
        method = GET,
        path = "/v1/rooms/{room_id}",
        tags = ["rooms"],
    }]
    async fn get_room(
        rqctx: RequestContext<Self::Context>,
        path: Path<RoomPath>,
    ) -> Result<HttpResponseOk<Room>, HttpError>;

    /// Replace a room
    #[endpoint {
        method = PUT,
        path = "/v1/rooms/{room_id}",
        tags = ["rooms"],
    }]
    async fn update_room(
        rqctx: RequestContext<Self::Context>,
        path: Path<RoomPath>,
        body: TypedBody<RoomRequest>,
    ) -> Result<HttpResponseOk<Room>, HttpError>;

    /// Delete a room
    #[endpoint {
        method = DELETE,
        path = "/v1/rooms/{room_id}",
        tags = ["rooms"],
    }]
    async fn delete_room(
        rqctx: RequestContext<Self::Context>,
        path: Path<RoomPath>,
    ) -> Result<HttpResponseDeleted, HttpError>;

    // ========================================================================
    // Meeting Endpoints
    // ========================================================================

    /// List meetings
    ///
    /// Returns series by default; set `meetingType` to list occurrences
    /// or instances. Paginated via the `Link` header.
    #[endpoint {
        method = GET,
        path = "/v1/meetings",
        tags = ["meetings"],
    }]
    async fn list_meetings(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListMeetingsQuery>,
    ) -> Result<Response<Body>, HttpError>;

    /// Schedule a meeting
    #[endpoint {
        method = POST,
        path = "/v1/meetings",
        tags = ["meetings"],
    }]
    async fn create_meeting(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<MeetingRequest>,
    ) -> Result<HttpResponseCreated<Meeting>, HttpError>;

    /// Get a meeting by id
    #[endpoint {
        method = GET,
        path = "/v1/meetings/{meeting_id}",
        tags = ["meetings"],
    }]
    async fn get_meeting(
        rqctx: RequestContext<Self::Context>,
        path: Path<MeetingPath>,
    ) -> Result<HttpResponseOk<Meeting>, HttpError>;

    /// Replace a meeting
    #[endpoint {
        method = PUT,
        path = "/v1/meetings/{meeting_id}",
        tags = ["meetings"],
    }]
    async fn update_meeting(
        rqctx: RequestContext<Self::Context>,
        path: Path<MeetingPath>,
        body: TypedBody<MeetingRequest>,
    ) -> Result<HttpResponseOk<Meeting>, HttpError>;

    /// Cancel a meeting
    #[endpoint {
        method = DELETE,
        path = "/v1/meetings/{meeting_id}",
        tags = ["meetings"],
    }]
    async fn delete_meeting(
        rqctx: RequestContext<Self::Context>,
        path: Path<MeetingPath>,
    ) -> Result<HttpResponseDeleted, HttpError>;

    // ========================================================================
    // Webhook Endpoints
    // ========================================================================

    /// List the caller's webhooks
    ///
    /// Paginated via the `Link` header.
    #[endpoint {
        method = GET,
        path = "/v1/webhooks",
        tags = ["webhooks"],
    }]
    async fn list_webhooks(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListWebhooksQuery>,
    ) -> Result<Response<Body>, HttpError>;

    /// Register a webhook
    #[endpoint {
        method = POST,
        path = "/v1/webhooks",
        tags = ["webhooks"],
    }]
    async fn create_webhook(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<WebhookRequest>,
    ) -> Result<HttpResponseCreated<Webhook>, HttpError>;

    /// Get a webhook by id
    #[endpoint {
        method = GET,
        path = "/v1/webhooks/{webhook_id}",
        tags = ["webhooks"],
    }]
    async fn get_webhook(
        rqctx: RequestContext<Self::Context>,
        path: Path<WebhookPath>,
    ) -> Result<HttpResponseOk<Webhook>, HttpError>;

    /// Update a webhook
    ///
    /// Also the path for re-activating a webhook the service disabled
    /// after sustained delivery failures.
    #[endpoint {
        method = PUT,
        path = "/v1/webhooks/{webhook_id}",
        tags = ["webhooks"],
    }]
    async fn update_webhook(
        rqctx: RequestContext<Self::Context>,
        path: Path<WebhookPath>,
        body: TypedBody<WebhookUpdate>,
    ) -> Result<HttpResponseOk<Webhook>, HttpError>;

    /// Delete a webhook
    #[endpoint {
        method = DELETE,
        path = "/v1/webhooks/{webhook_id}",
        tags = ["webhooks"],
    }]
    async fn delete_webhook(
        rqctx: RequestContext<Self::Context>,
        path: Path<WebhookPath>,
    ) -> Result<HttpResponseDeleted, HttpError>;

    // ========================================================================
    // Device Endpoints
    // ========================================================================

    /// List devices
    ///
    /// Paginated via the `Link` header.
    #[endpoint {
        method = GET,
        path = "/v1/devices",
        tags = ["devices"],
    }]
    async fn list_devices(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListDevicesQuery>,
    ) -> Result<Response<Body>, HttpError>;

    /// Get a device by id
    #[endpoint {
        method = GET,
        path = "/v1/devices/{device_id}",
        tags = ["devices"],
    }]
    async fn get_device(
        rqctx: RequestContext<Self::Context>,
        path: Path<DevicePath>,
    ) -> Result<HttpResponseOk<Device>, HttpError>;

    /// Unregister a device
    #[endpoint {
        method = DELETE,
        path = "/v1/devices/{device_id}",
        tags = ["devices"],
    }]
    async fn delete_device(
        rqctx: RequestContext<Self::Context>,
        path: Path<DevicePath>,
    ) -> Result<HttpResponseDeleted, HttpError>;

    /// Create a device activation code
    ///
    /// The code is typed into a factory-reset device to register it into
    /// a workspace or for a person. Clients POST to the literal path
    /// `/v1/devices/activationCode`; it is declared here through the
    /// variable segment because Dropshot's router refuses a literal
    /// segment alongside the variable one used by the device endpoints
    /// above. Implementations must reject any other segment value.
    #[endpoint {
        method = POST,
        path = "/v1/devices/{device_id}",
        tags = ["devices"],
    }]
    async fn create_device_activation_code(
        rqctx: RequestContext<Self::Context>,
        path: Path<DevicePath>,
        body: TypedBody<ActivationCodeRequest>,
    ) -> Result<HttpResponseCreated<ActivationCode>, HttpError>;

    // ========================================================================
    // Workspace Endpoints
    // ========================================================================

    /// List workspaces
    ///
    /// Paginated via the `Link` header.
    #[endpoint {
        method = GET,
        path = "/v1/workspaces",
        tags = ["workspaces"],
    }]
    async fn list_workspaces(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListWorkspacesQuery>,
    ) -> Result<Response<Body>, HttpError>;

    /// Create a workspace
    #[endpoint {
        method = POST,
        path = "/v1/workspaces",
        tags = ["workspaces"],
    }]
    async fn create_workspace(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<WorkspaceRequest>,
    ) -> Result<HttpResponseCreated<Workspace>, HttpError>;

    /// Get a workspace by id
    #[endpoint {
        method = GET,
        path = "/v1/workspaces/{workspace_id}",
        tags = ["workspaces"],
    }]
    async fn get_workspace(
        rqctx: RequestContext<Self::Context>,
        path: Path<WorkspacePath>,
    ) -> Result<HttpResponseOk<Workspace>, HttpError>;

    /// Replace a workspace
    #[endpoint {
        method = PUT,
        path = "/v1/workspaces/{workspace_id}",
        tags = ["workspaces"],
    }]
    async fn update_workspace(
        rqctx: RequestContext<Self::Context>,
        path: Path<WorkspacePath>,
        body: TypedBody<WorkspaceRequest>,
    ) -> Result<HttpResponseOk<Workspace>, HttpError>;

    /// Delete a workspace
    #[endpoint {
        method = DELETE,
        path = "/v1/workspaces/{workspace_id}",
        tags = ["workspaces"],
    }]
    async fn delete_workspace(
        rqctx: RequestContext<Self::Context>,
        path: Path<WorkspacePath>,
    ) -> Result<HttpResponseDeleted, HttpError>;

    // ========================================================================
    // Location Endpoints
    // ========================================================================

    /// List locations
    ///
    /// Paginated via the `Link` header.
    #[endpoint {
        method = GET,
        path = "/v1/locations",
        tags = ["locations"],
    }]
    async fn list_locations(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListLocationsQuery>,
    ) -> Result<Response<Body>, HttpError>;

    /// Create a location
    #[endpoint {
        method = POST,
        path = "/v1/locations",
        tags = ["locations"],
    }]
    async fn create_location(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<LocationRequest>,
    ) -> Result<HttpResponseCreated<Location>, HttpError>;

    /// Get a location by id
    #[endpoint {
        method = GET,
        path = "/v1/locations/{location_id}",
        tags = ["locations"],
    }]
    async fn get_location(
        rqctx: RequestContext<Self::Context>,
        path: Path<LocationPath>,
    ) -> Result<HttpResponseOk<Location>, HttpError>;

    /// Replace a location
    ///
    /// There is no delete: locations anchor dial plans and can only be
    /// retired by the vendor.
    #[endpoint {
        method = PUT,
        path = "/v1/locations/{location_id}",
        tags = ["locations"],
    }]
    async fn update_location(
        rqctx: RequestContext<Self::Context>,
        path: Path<LocationPath>,
        body: TypedBody<LocationRequest>,
    ) -> Result<HttpResponseOk<Location>, HttpError>;

    // ========================================================================
    // License Endpoints
    // ========================================================================

    /// List license pools
    ///
    /// Paginated via the `Link` header.
    #[endpoint {
        method = GET,
        path = "/v1/licenses",
        tags = ["licenses"],
    }]
    async fn list_licenses(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListLicensesQuery>,
    ) -> Result<Response<Body>, HttpError>;

    /// Get a license pool by id
    #[endpoint {
        method = GET,
        path = "/v1/licenses/{license_id}",
        tags = ["licenses"],
    }]
    async fn get_license(
        rqctx: RequestContext<Self::Context>,
        path: Path<LicensePath>,
    ) -> Result<HttpResponseOk<License>, HttpError>;

    // ========================================================================
    // Organization Endpoints
    // ========================================================================

    /// List organizations visible to the caller
    ///
    /// Most callers see exactly one. Partner admins see every managed
    /// organization. Paginated via the `Link` header.
    #[endpoint {
        method = GET,
        path = "/v1/organizations",
        tags = ["organizations"],
    }]
    async fn list_organizations(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListOrganizationsQuery>,
    ) -> Result<Response<Body>, HttpError>;

    /// Get an organization by id
    #[endpoint {
        method = GET,
        path = "/v1/organizations/{org_id}",
        tags = ["organizations"],
    }]
    async fn get_organization(
        rqctx: RequestContext<Self::Context>,
        path: Path<OrganizationPath>,
    ) -> Result<HttpResponseOk<Organization>, HttpError>;

    // ========================================================================
    // Calling Administration: Call Queues
    // ========================================================================

    /// List call queues across the organization
    ///
    /// The read side is org-wide; the write side is location-scoped.
    /// Paginated via the `Link` header.
    #[endpoint {
        method = GET,
        path = "/v1/telephony/config/queues",
        tags = ["telephony"],
    }]
    async fn list_queues(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListQueuesQuery>,
    ) -> Result<Response<Body>, HttpError>;

    /// Create a call queue in a location
    #[endpoint {
        method = POST,
        path = "/v1/telephony/config/locations/{location_id}/queues",
        tags = ["telephony"],
    }]
    async fn create_queue(
        rqctx: RequestContext<Self::Context>,
        path: Path<QueueLocationPath>,
        body: TypedBody<QueueRequest>,
    ) -> Result<HttpResponseCreated<CallQueue>, HttpError>;

    /// Get a call queue
    #[endpoint {
        method = GET,
        path = "/v1/telephony/config/locations/{location_id}/queues/{queue_id}",
        tags = ["telephony"],
    }]
    async fn get_queue(
        rqctx: RequestContext<Self::Context>,
        path: Path<QueuePath>,
    ) -> Result<HttpResponseOk<CallQueue>, HttpError>;

    /// Replace a call queue's configuration
    #[endpoint {
        method = PUT,
        path = "/v1/telephony/config/locations/{location_id}/queues/{queue_id}",
        tags = ["telephony"],
    }]
    async fn update_queue(
        rqctx: RequestContext<Self::Context>,
        path: Path<QueuePath>,
        body: TypedBody<QueueRequest>,
    ) -> Result<HttpResponseUpdatedNoContent, HttpError>;

    /// Delete a call queue
    #[endpoint {
        method = DELETE,
        path = "/v1/telephony/config/locations/{location_id}/queues/{queue_id}",
        tags = ["telephony"],
    }]
    async fn delete_queue(
        rqctx: RequestContext<Self::Context>,
        path: Path<QueuePath>,
    ) -> Result<HttpResponseDeleted, HttpError>;

    // ========================================================================
    // Calling Administration: Call Forwarding
    // ========================================================================

    /// Read a person's call forwarding settings
    #[endpoint {
        method = GET,
        path = "/v1/people/{person_id}/features/callForwarding",
        tags = ["telephony"],
    }]
    async fn get_call_forwarding(
        rqctx: RequestContext<Self::Context>,
        path: Path<PersonPath>,
    ) -> Result<HttpResponseOk<CallForwardingSettings>, HttpError>;

    /// Replace a person's call forwarding settings
    ///
    /// Full replace of the settings object; rules omitted from the body
    /// are reset to their defaults.
    #[endpoint {
        method = PUT,
        path = "/v1/people/{person_id}/features/callForwarding",
        tags = ["telephony"],
    }]
    async fn update_call_forwarding(
        rqctx: RequestContext<Self::Context>,
        path: Path<PersonPath>,
        body: TypedBody<CallForwardingSettings>,
    ) -> Result<HttpResponseUpdatedNoContent, HttpError>;

    // ========================================================================
    // Calling Administration: Number Inventory
    // ========================================================================

    /// List the organization's phone number inventory
    ///
    /// Paginated via the `Link` header.
    #[endpoint {
        method = GET,
        path = "/v1/telephony/config/numbers",
        tags = ["telephony"],
    }]
    async fn list_numbers(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListNumbersQuery>,
    ) -> Result<Response<Body>, HttpError>;
}
