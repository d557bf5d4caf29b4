// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Endpoint implementations for the stub Meridian server
//!
//! Every handler locks the store, checks the bearer token, then works
//! on the in-memory collections. List handlers reproduce the service's
//! offset pagination: the `start` parameter is generated here in
//! relative `Link` headers and never taken from client code directly.

use std::collections::HashMap;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use dropshot::{
    Body, ClientErrorStatusCode, HttpError, HttpResponseCreated, HttpResponseDeleted,
    HttpResponseOk, HttpResponseUpdatedNoContent, Path, Query, RequestContext, TypedBody,
    UntypedBody,
};
use http::Response;
use meridian_api::{
    ActivationCode, ActivationCodeRequest, CallForwardingSettings, CallQueue, CallingType, Device,
    DevicePath, ItemPage, License, LicensePath, ListDevicesQuery, ListLicensesQuery,
    ListLocationsQuery, ListMeetingsQuery, ListNumbersQuery, ListOrganizationsQuery,
    ListPeopleQuery, ListQueuesQuery, ListRoomsQuery, ListWebhooksQuery,
    ListWorkspacesQuery, Location, LocationPath,
    LocationRequest, Meeting, MeetingPath, MeetingRequest, MeetingState, MeetingType, Organization,
    OrganizationPath, Person, PersonPath, PersonRequest, PersonStatus, PersonType,
    QueueLocationPath, QueuePath, QueueRequest, Room, RoomPath, RoomRequest, RoomSortBy, RoomType,
    TokenResponse, Webhook, WebhookPath, WebhookRequest, WebhookStatus, WebhookUpdate, Workspace,
    WorkspacePath, WorkspaceRequest, WorkspaceType,
};
use uuid::Uuid;

use crate::{
    STUB_ACCESS_TOKEN, STUB_CLIENT_ID, STUB_CLIENT_SECRET, STUB_REFRESH_TOKEN, Store, StubContext,
};

/// Page size applied when a list request does not set `max`
const DEFAULT_PAGE_SIZE: usize = 100;

/// Lifetime of minted access tokens, in seconds (14 days)
const ACCESS_TOKEN_TTL_SECS: u64 = 1_209_600;

/// Lifetime reported for the refresh token, in seconds (90 days)
const REFRESH_TOKEN_TTL_SECS: u64 = 7_776_000;

// ============================================================================
// Helpers
// ============================================================================

impl Store {
    fn default_org_id(&self) -> Option<String> {
        self.organizations.first().and_then(|org| org.id.clone())
    }

    /// The first fixture person acts as the owner of every accepted
    /// token.
    fn token_owner(&self) -> Option<&Person> {
        self.people.first()
    }
}

/// Mint an id in the service's format: base64url over an internal
/// resource URI.
fn mint_id(kind: &str) -> String {
    URL_SAFE_NO_PAD.encode(format!("meridian://us/{}/{}", kind, Uuid::new_v4()))
}

fn not_found(what: &str, id: &str) -> HttpError {
    HttpError::for_not_found(None, format!("{} not found: {}", what, id))
}

fn unauthorized() -> HttpError {
    HttpError::for_client_error(
        None,
        ClientErrorStatusCode::UNAUTHORIZED,
        "invalid or expired access token".to_string(),
    )
}

/// Every endpoint except the token grant requires a bearer token the
/// stub knows about.
fn require_bearer(
    rqctx: &RequestContext<Arc<StubContext>>,
    store: &Store,
) -> Result<(), HttpError> {
    let header = rqctx
        .request
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    match header.strip_prefix("Bearer ") {
        Some(token) if token == STUB_ACCESS_TOKEN || store.issued_tokens.contains(token) => Ok(()),
        _ => Err(unauthorized()),
    }
}

/// Resolve one page out of `total` filtered records, returning the index
/// range to serve and the offset of the following page if one exists.
fn page_bounds(
    total: usize,
    max: Option<u32>,
    start: Option<u32>,
) -> (std::ops::Range<usize>, Option<u32>) {
    let size = max.map_or(DEFAULT_PAGE_SIZE, |m| m.max(1) as usize);
    let begin = start.map_or(0, |s| s as usize).min(total);
    let end = (begin + size).min(total);
    let next = (end < total).then(|| end as u32);
    (begin..end, next)
}

/// Build the relative continuation URL for a `Link` header.
///
/// Filters are carried through under their wire names so every page of
/// a filtered listing stays filtered.
fn page_link(path: &str, carried: &[(&str, String)], max: Option<u32>, next_start: u32) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in carried {
        query.append_pair(name, value);
    }
    if let Some(max) = max {
        query.append_pair("max", &max.to_string());
    }
    query.append_pair("start", &next_start.to_string());
    format!("{}?{}", path, query.finish())
}

/// Serialize one page into the `{"items": [...]}` envelope, attaching
/// the `Link` header when more results remain.
fn list_response<T: serde::Serialize>(
    items: Vec<T>,
    next: Option<String>,
) -> Result<Response<Body>, HttpError> {
    let body = serde_json::to_string(&ItemPage { items })
        .map_err(|e| HttpError::for_internal_error(format!("serializing list page: {}", e)))?;
    let mut response = Response::builder()
        .status(http::StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "application/json");
    if let Some(next) = next {
        response = response.header(http::header::LINK, format!("<{}>; rel=\"next\"", next));
    }
    response
        .body(body.into())
        .map_err(|e| HttpError::for_internal_error(format!("building list response: {}", e)))
}

// ============================================================================
// Record Construction
// ============================================================================

fn person_from_request(
    id: String,
    created: meridian_api::Timestamp,
    org_id: Option<String>,
    request: PersonRequest,
) -> Person {
    Person {
        id: Some(id),
        emails: Some(request.emails),
        phone_numbers: request.phone_numbers,
        extension: request.extension,
        location_id: request.location_id,
        display_name: request.display_name,
        nick_name: None,
        first_name: request.first_name,
        last_name: request.last_name,
        avatar: request.avatar,
        org_id: request.org_id.or(org_id),
        roles: request.roles,
        licenses: request.licenses,
        department: request.department,
        manager: None,
        manager_id: None,
        title: request.title,
        created: Some(created),
        last_modified: Some(Utc::now()),
        last_activity: None,
        status: Some(PersonStatus::Active),
        person_type: Some(PersonType::Person),
        invite_pending: Some(false),
        login_enabled: Some(true),
    }
}

fn room_from_request(
    id: String,
    creator_id: Option<String>,
    org_id: Option<String>,
    request: RoomRequest,
) -> Room {
    let now = Utc::now();
    Room {
        id: Some(id),
        title: Some(request.title),
        room_type: Some(RoomType::Group),
        is_locked: request.is_locked.or(Some(false)),
        team_id: request.team_id,
        last_activity: Some(now),
        creator_id,
        created: Some(now),
        owner_id: org_id,
        classification_id: request.classification_id,
        is_public: request.is_public.or(Some(false)),
        description: request.description,
    }
}

fn meeting_from_request(id: String, host: Option<&Person>, request: MeetingRequest) -> Meeting {
    let number: u128 = Uuid::new_v4().as_u128() % 100_000_000_000;
    Meeting {
        id: Some(id),
        meeting_number: Some(format!("{:011}", number)),
        title: Some(request.title),
        agenda: request.agenda,
        password: Some(
            request
                .password
                .unwrap_or_else(|| Uuid::new_v4().simple().to_string()[..10].to_string()),
        ),
        meeting_type: Some(MeetingType::MeetingSeries),
        state: Some(MeetingState::Active),
        timezone: request.timezone.or_else(|| Some("UTC".to_string())),
        start: Some(request.start),
        end: Some(request.end),
        host_user_id: host.and_then(|p| p.id.clone()),
        host_display_name: host.and_then(|p| p.display_name.clone()),
        host_email: host.and_then(|p| p.emails.as_deref().and_then(|e| e.first().cloned())),
        web_link: Some(format!("https://meet.meridian.cloud/j/{:011}", number)),
        sip_address: Some(format!("{:011}@meet.meridian.cloud", number)),
        enabled_auto_record_meeting: request.enabled_auto_record_meeting.or(Some(false)),
        allow_any_user_to_be_co_host: request.allow_any_user_to_be_co_host.or(Some(false)),
    }
}

fn webhook_from_request(
    id: String,
    org_id: Option<String>,
    created_by: Option<String>,
    request: WebhookRequest,
) -> Webhook {
    Webhook {
        id: Some(id),
        name: Some(request.name),
        target_url: Some(request.target_url),
        resource: Some(request.resource),
        event: Some(request.event),
        filter: request.filter,
        secret: request.secret,
        status: Some(WebhookStatus::Active),
        created: Some(Utc::now()),
        org_id,
        created_by,
        app_id: Some(
            "bWVyaWRpYW46Ly91cy9BUFBMSUNBVElPTi8xZjJlM2Q0Yy01YjZhLTQ3OTgtOGM5ZC0wZTFmMmEzYjRjNWQ"
                .to_string(),
        ),
        owned_by: Some("creator".to_string()),
    }
}

fn workspace_from_request(id: String, org_id: Option<String>, request: WorkspaceRequest) -> Workspace {
    Workspace {
        id: Some(id),
        org_id,
        location_id: request.location_id,
        display_name: Some(request.display_name),
        sip_address: None,
        capacity: request.capacity,
        workspace_type: request.workspace_type.or(Some(WorkspaceType::NotSet)),
        calling: request.calling.or(Some(CallingType::FreeCalling)),
        notes: request.notes,
        created: Some(Utc::now()),
    }
}

fn location_from_request(id: String, org_id: Option<String>, request: LocationRequest) -> Location {
    Location {
        id: Some(id),
        name: Some(request.name),
        org_id,
        time_zone: request.time_zone,
        preferred_language: request.preferred_language,
        address: request.address,
        notes: request.notes,
    }
}

fn queue_from_request(
    id: String,
    location_id: String,
    location_name: Option<String>,
    time_zone: Option<String>,
    request: QueueRequest,
) -> CallQueue {
    CallQueue {
        id: Some(id),
        name: Some(request.name),
        location_id: Some(location_id),
        location_name,
        phone_number: request.phone_number,
        extension: request.extension,
        routing_policy: request.routing_policy,
        enabled: request.enabled.or(Some(true)),
        language_code: request.language_code,
        time_zone,
        alternate_numbers: request.alternate_numbers,
        agents: request.agents,
    }
}

// ============================================================================
// API Implementation
// ============================================================================

/// Marker type for the stub Meridian API implementation
pub enum StubMeridianApi {}

impl meridian_api::MeridianApi for StubMeridianApi {
    type Context = Arc<StubContext>;

    async fn create_access_token(
        rqctx: RequestContext<Self::Context>,
        body: UntypedBody,
    ) -> Result<HttpResponseOk<TokenResponse>, HttpError> {
        let raw = body.as_str()?;
        let params: HashMap<String, String> = url::form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect();
        let param = |name: &str| params.get(name).map(String::as_str).unwrap_or("");

        if param("grant_type") != "refresh_token" {
            return Err(HttpError::for_bad_request(
                None,
                format!("unsupported grant_type: {:?}", param("grant_type")),
            ));
        }
        if param("client_id") != STUB_CLIENT_ID || param("client_secret") != STUB_CLIENT_SECRET {
            return Err(HttpError::for_bad_request(
                None,
                "invalid client credentials".to_string(),
            ));
        }
        if param("refresh_token") != STUB_REFRESH_TOKEN {
            return Err(HttpError::for_bad_request(
                None,
                "invalid refresh token".to_string(),
            ));
        }

        // Each grant mints a distinct token, which lets tests tell a
        // cached token apart from a fresh one.
        let access_token = format!("stub-access-{}", Uuid::new_v4());
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        store.issued_tokens.insert(access_token.clone());
        tracing::debug!(tokens = store.issued_tokens.len(), "minted access token");

        Ok(HttpResponseOk(TokenResponse {
            access_token,
            expires_in: ACCESS_TOKEN_TTL_SECS,
            refresh_token: Some(STUB_REFRESH_TOKEN.to_string()),
            refresh_token_expires_in: Some(REFRESH_TOKEN_TTL_SECS),
            token_type: Some("Bearer".to_string()),
        }))
    }

    // ------------------------------------------------------------------
    // People
    // ------------------------------------------------------------------

    async fn list_people(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListPeopleQuery>,
    ) -> Result<Response<Body>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let query = query.into_inner();

        let matching: Vec<Person> = store
            .people
            .iter()
            .filter(|p| {
                query.email.as_ref().is_none_or(|email| {
                    p.emails
                        .as_deref()
                        .unwrap_or_default()
                        .iter()
                        .any(|e| e == email)
                })
            })
            .filter(|p| {
                query.display_name.as_ref().is_none_or(|prefix| {
                    p.display_name
                        .as_deref()
                        .is_some_and(|name| name.starts_with(prefix.as_str()))
                })
            })
            .filter(|p| {
                query.id.as_ref().is_none_or(|ids| {
                    p.id.as_deref()
                        .is_some_and(|pid| ids.split(',').any(|i| i.trim() == pid))
                })
            })
            .filter(|p| {
                query
                    .location_id
                    .as_ref()
                    .is_none_or(|loc| p.location_id.as_deref() == Some(loc.as_str()))
            })
            .cloned()
            .collect();

        let (range, next_start) = page_bounds(matching.len(), query.max, query.start);
        let items = matching[range].to_vec();

        let mut carried: Vec<(&str, String)> = Vec::new();
        if let Some(v) = &query.email {
            carried.push(("email", v.clone()));
        }
        if let Some(v) = &query.display_name {
            carried.push(("displayName", v.clone()));
        }
        if let Some(v) = &query.id {
            carried.push(("id", v.clone()));
        }
        if let Some(v) = &query.location_id {
            carried.push(("locationId", v.clone()));
        }
        let link = next_start.map(|s| page_link("/v1/people", &carried, query.max, s));

        list_response(items, link)
    }

    async fn create_person(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<PersonRequest>,
    ) -> Result<HttpResponseCreated<Person>, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let request = body.into_inner();

        let duplicate = store.people.iter().any(|p| {
            p.emails
                .as_deref()
                .unwrap_or_default()
                .iter()
                .any(|e| request.emails.contains(e))
        });
        if duplicate {
            return Err(HttpError::for_client_error(
                None,
                ClientErrorStatusCode::CONFLICT,
                "email address is already in use".to_string(),
            ));
        }

        let org_id = store.default_org_id();
        let person = person_from_request(mint_id("PEOPLE"), Utc::now(), org_id, request);
        store.people.push(person.clone());
        Ok(HttpResponseCreated(person))
    }

    async fn get_person(
        rqctx: RequestContext<Self::Context>,
        path: Path<PersonPath>,
    ) -> Result<HttpResponseOk<Person>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let person = if path.person_id == "me" {
            store.token_owner()
        } else {
            store
                .people
                .iter()
                .find(|p| p.id.as_deref() == Some(path.person_id.as_str()))
        };
        let person = person.ok_or_else(|| not_found("person", &path.person_id))?;
        Ok(HttpResponseOk(person.clone()))
    }

    async fn update_person(
        rqctx: RequestContext<Self::Context>,
        path: Path<PersonPath>,
        body: TypedBody<PersonRequest>,
    ) -> Result<HttpResponseOk<Person>, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();
        let request = body.into_inner();

        let position = store
            .people
            .iter()
            .position(|p| p.id.as_deref() == Some(path.person_id.as_str()))
            .ok_or_else(|| not_found("person", &path.person_id))?;

        let org_id = store.default_org_id();
        let created = store.people[position].created;
        let mut replacement =
            person_from_request(path.person_id.clone(), Utc::now(), org_id, request);
        replacement.created = created;
        store.people[position] = replacement.clone();
        Ok(HttpResponseOk(replacement))
    }

    async fn delete_person(
        rqctx: RequestContext<Self::Context>,
        path: Path<PersonPath>,
    ) -> Result<HttpResponseDeleted, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let position = store
            .people
            .iter()
            .position(|p| p.id.as_deref() == Some(path.person_id.as_str()))
            .ok_or_else(|| not_found("person", &path.person_id))?;
        store.people.remove(position);
        store.forwarding.remove(&path.person_id);
        Ok(HttpResponseDeleted())
    }

    // ------------------------------------------------------------------
    // Rooms
    // ------------------------------------------------------------------

    async fn list_rooms(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListRoomsQuery>,
    ) -> Result<Response<Body>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let query = query.into_inner();

        let mut matching: Vec<Room> = store
            .rooms
            .iter()
            .filter(|r| {
                query
                    .team_id
                    .as_ref()
                    .is_none_or(|team| r.team_id.as_deref() == Some(team.as_str()))
            })
            .filter(|r| query.room_type.is_none_or(|kind| r.room_type == Some(kind)))
            .cloned()
            .collect();

        if let Some(sort) = query.sort_by {
            match sort {
                RoomSortBy::Id => matching.sort_by(|a, b| a.id.cmp(&b.id)),
                RoomSortBy::Lastactivity => {
                    matching.sort_by(|a, b| b.last_activity.cmp(&a.last_activity))
                }
                RoomSortBy::Created => matching.sort_by(|a, b| b.created.cmp(&a.created)),
            }
        }

        let (range, next_start) = page_bounds(matching.len(), query.max, query.start);
        let items = matching[range].to_vec();

        let mut carried: Vec<(&str, String)> = Vec::new();
        if let Some(v) = &query.team_id {
            carried.push(("teamId", v.clone()));
        }
        if let Some(v) = query.room_type {
            carried.push(("type", v.to_string()));
        }
        if let Some(v) = query.sort_by {
            carried.push(("sortBy", v.to_string()));
        }
        let link = next_start.map(|s| page_link("/v1/rooms", &carried, query.max, s));

        list_response(items, link)
    }

    async fn create_room(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<RoomRequest>,
    ) -> Result<HttpResponseCreated<Room>, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let request = body.into_inner();

        let creator_id = store.token_owner().and_then(|p| p.id.clone());
        let org_id = store.default_org_id();
        let room = room_from_request(mint_id("ROOM"), creator_id, org_id, request);
        store.rooms.push(room.clone());
        Ok(HttpResponseCreated(room))
    }

    async fn get_room(
        rqctx: RequestContext<Self::Context>,
        path: Path<RoomPath>,
    ) -> Result<HttpResponseOk<Room>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let room = store
            .rooms
            .iter()
            .find(|r| r.id.as_deref() == Some(path.room_id.as_str()))
            .ok_or_else(|| not_found("room", &path.room_id))?;
        Ok(HttpResponseOk(room.clone()))
    }

    async fn update_room(
        rqctx: RequestContext<Self::Context>,
        path: Path<RoomPath>,
        body: TypedBody<RoomRequest>,
    ) -> Result<HttpResponseOk<Room>, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();
        let request = body.into_inner();

        let position = store
            .rooms
            .iter()
            .position(|r| r.id.as_deref() == Some(path.room_id.as_str()))
            .ok_or_else(|| not_found("room", &path.room_id))?;

        let existing = store.rooms[position].clone();
        let mut replacement = room_from_request(
            path.room_id.clone(),
            existing.creator_id.clone(),
            existing.owner_id.clone(),
            request,
        );
        replacement.created = existing.created;
        replacement.room_type = existing.room_type;
        store.rooms[position] = replacement.clone();
        Ok(HttpResponseOk(replacement))
    }

    async fn delete_room(
        rqctx: RequestContext<Self::Context>,
        path: Path<RoomPath>,
    ) -> Result<HttpResponseDeleted, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let position = store
            .rooms
            .iter()
            .position(|r| r.id.as_deref() == Some(path.room_id.as_str()))
            .ok_or_else(|| not_found("room", &path.room_id))?;
        store.rooms.remove(position);
        Ok(HttpResponseDeleted())
    }

    // ------------------------------------------------------------------
    // Meetings
    // ------------------------------------------------------------------

    async fn list_meetings(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListMeetingsQuery>,
    ) -> Result<Response<Body>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let query = query.into_inner();

        let matching: Vec<Meeting> = store
            .meetings
            .iter()
            .filter(|m| {
                query
                    .meeting_number
                    .as_ref()
                    .is_none_or(|number| m.meeting_number.as_deref() == Some(number.as_str()))
            })
            .filter(|m| {
                query
                    .from
                    .is_none_or(|from| m.start.is_some_and(|start| start >= from))
            })
            .filter(|m| {
                query
                    .to
                    .is_none_or(|to| m.start.is_some_and(|start| start <= to))
            })
            .filter(|m| {
                query
                    .meeting_type
                    .is_none_or(|kind| m.meeting_type == Some(kind))
            })
            .filter(|m| query.state.is_none_or(|state| m.state == Some(state)))
            .cloned()
            .collect();

        let (range, next_start) = page_bounds(matching.len(), query.max, query.start);
        let items = matching[range].to_vec();

        let mut carried: Vec<(&str, String)> = Vec::new();
        if let Some(v) = &query.meeting_number {
            carried.push(("meetingNumber", v.clone()));
        }
        if let Some(v) = query.from {
            carried.push(("from", v.to_rfc3339()));
        }
        if let Some(v) = query.to {
            carried.push(("to", v.to_rfc3339()));
        }
        if let Some(v) = query.meeting_type {
            carried.push(("meetingType", v.to_string()));
        }
        if let Some(v) = query.state {
            carried.push(("state", v.to_string()));
        }
        let link = next_start.map(|s| page_link("/v1/meetings", &carried, query.max, s));

        list_response(items, link)
    }

    async fn create_meeting(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<MeetingRequest>,
    ) -> Result<HttpResponseCreated<Meeting>, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let request = body.into_inner();

        if request.end <= request.start {
            return Err(HttpError::for_bad_request(
                None,
                "meeting end must be after its start".to_string(),
            ));
        }

        let host = store.token_owner().cloned();
        let meeting = meeting_from_request(mint_id("MEETING"), host.as_ref(), request);
        store.meetings.push(meeting.clone());
        Ok(HttpResponseCreated(meeting))
    }

    async fn get_meeting(
        rqctx: RequestContext<Self::Context>,
        path: Path<MeetingPath>,
    ) -> Result<HttpResponseOk<Meeting>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let meeting = store
            .meetings
            .iter()
            .find(|m| m.id.as_deref() == Some(path.meeting_id.as_str()))
            .ok_or_else(|| not_found("meeting", &path.meeting_id))?;
        Ok(HttpResponseOk(meeting.clone()))
    }

    async fn update_meeting(
        rqctx: RequestContext<Self::Context>,
        path: Path<MeetingPath>,
        body: TypedBody<MeetingRequest>,
    ) -> Result<HttpResponseOk<Meeting>, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();
        let request = body.into_inner();

        if request.end <= request.start {
            return Err(HttpError::for_bad_request(
                None,
                "meeting end must be after its start".to_string(),
            ));
        }

        let position = store
            .meetings
            .iter()
            .position(|m| m.id.as_deref() == Some(path.meeting_id.as_str()))
            .ok_or_else(|| not_found("meeting", &path.meeting_id))?;

        let existing = store.meetings[position].clone();
        let mut replacement = meeting_from_request(path.meeting_id.clone(), None, request);
        replacement.meeting_number = existing.meeting_number.clone();
        replacement.web_link = existing.web_link.clone();
        replacement.sip_address = existing.sip_address.clone();
        replacement.host_user_id = existing.host_user_id.clone();
        replacement.host_display_name = existing.host_display_name.clone();
        replacement.host_email = existing.host_email.clone();
        store.meetings[position] = replacement.clone();
        Ok(HttpResponseOk(replacement))
    }

    async fn delete_meeting(
        rqctx: RequestContext<Self::Context>,
        path: Path<MeetingPath>,
    ) -> Result<HttpResponseDeleted, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let position = store
            .meetings
            .iter()
            .position(|m| m.id.as_deref() == Some(path.meeting_id.as_str()))
            .ok_or_else(|| not_found("meeting", &path.meeting_id))?;
        store.meetings.remove(position);
        Ok(HttpResponseDeleted())
    }

    // ------------------------------------------------------------------
    // Webhooks
    // ------------------------------------------------------------------

    async fn list_webhooks(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListWebhooksQuery>,
    ) -> Result<Response<Body>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let query = query.into_inner();

        let matching = store.webhooks.clone();
        let (range, next_start) = page_bounds(matching.len(), query.max, query.start);
        let items = matching[range].to_vec();
        let link = next_start.map(|s| page_link("/v1/webhooks", &[], query.max, s));

        list_response(items, link)
    }

    async fn create_webhook(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<WebhookRequest>,
    ) -> Result<HttpResponseCreated<Webhook>, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let request = body.into_inner();

        let org_id = store.default_org_id();
        let created_by = store.token_owner().and_then(|p| p.id.clone());
        let webhook = webhook_from_request(mint_id("WEBHOOK"), org_id, created_by, request);
        store.webhooks.push(webhook.clone());
        Ok(HttpResponseCreated(webhook))
    }

    async fn get_webhook(
        rqctx: RequestContext<Self::Context>,
        path: Path<WebhookPath>,
    ) -> Result<HttpResponseOk<Webhook>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let webhook = store
            .webhooks
            .iter()
            .find(|w| w.id.as_deref() == Some(path.webhook_id.as_str()))
            .ok_or_else(|| not_found("webhook", &path.webhook_id))?;
        Ok(HttpResponseOk(webhook.clone()))
    }

    async fn update_webhook(
        rqctx: RequestContext<Self::Context>,
        path: Path<WebhookPath>,
        body: TypedBody<WebhookUpdate>,
    ) -> Result<HttpResponseOk<Webhook>, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();
        let update = body.into_inner();

        let position = store
            .webhooks
            .iter()
            .position(|w| w.id.as_deref() == Some(path.webhook_id.as_str()))
            .ok_or_else(|| not_found("webhook", &path.webhook_id))?;

        let webhook = &mut store.webhooks[position];
        webhook.name = Some(update.name);
        webhook.target_url = Some(update.target_url);
        if update.secret.is_some() {
            webhook.secret = update.secret;
        }
        if let Some(status) = update.status {
            webhook.status = Some(status);
        }
        Ok(HttpResponseOk(webhook.clone()))
    }

    async fn delete_webhook(
        rqctx: RequestContext<Self::Context>,
        path: Path<WebhookPath>,
    ) -> Result<HttpResponseDeleted, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let position = store
            .webhooks
            .iter()
            .position(|w| w.id.as_deref() == Some(path.webhook_id.as_str()))
            .ok_or_else(|| not_found("webhook", &path.webhook_id))?;
        store.webhooks.remove(position);
        Ok(HttpResponseDeleted())
    }

    // ------------------------------------------------------------------
    // Devices
    // ------------------------------------------------------------------

    async fn list_devices(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListDevicesQuery>,
    ) -> Result<Response<Body>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let query = query.into_inner();

        let matching: Vec<Device> = store
            .devices
            .iter()
            .filter(|d| {
                query
                    .person_id
                    .as_ref()
                    .is_none_or(|person| d.person_id.as_deref() == Some(person.as_str()))
            })
            .filter(|d| {
                query
                    .workspace_id
                    .as_ref()
                    .is_none_or(|ws| d.workspace_id.as_deref() == Some(ws.as_str()))
            })
            .filter(|d| {
                query
                    .connection_status
                    .is_none_or(|status| d.connection_status == Some(status))
            })
            .filter(|d| {
                query
                    .product
                    .as_ref()
                    .is_none_or(|product| d.product.as_deref() == Some(product.as_str()))
            })
            .cloned()
            .collect();

        let (range, next_start) = page_bounds(matching.len(), query.max, query.start);
        let items = matching[range].to_vec();

        let mut carried: Vec<(&str, String)> = Vec::new();
        if let Some(v) = &query.person_id {
            carried.push(("personId", v.clone()));
        }
        if let Some(v) = &query.workspace_id {
            carried.push(("workspaceId", v.clone()));
        }
        if let Some(v) = query.connection_status {
            carried.push(("connectionStatus", v.to_string()));
        }
        if let Some(v) = &query.product {
            carried.push(("product", v.clone()));
        }
        let link = next_start.map(|s| page_link("/v1/devices", &carried, query.max, s));

        list_response(items, link)
    }

    async fn get_device(
        rqctx: RequestContext<Self::Context>,
        path: Path<DevicePath>,
    ) -> Result<HttpResponseOk<Device>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let device = store
            .devices
            .iter()
            .find(|d| d.id.as_deref() == Some(path.device_id.as_str()))
            .ok_or_else(|| not_found("device", &path.device_id))?;
        Ok(HttpResponseOk(device.clone()))
    }

    async fn delete_device(
        rqctx: RequestContext<Self::Context>,
        path: Path<DevicePath>,
    ) -> Result<HttpResponseDeleted, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let position = store
            .devices
            .iter()
            .position(|d| d.id.as_deref() == Some(path.device_id.as_str()))
            .ok_or_else(|| not_found("device", &path.device_id))?;
        store.devices.remove(position);
        Ok(HttpResponseDeleted())
    }

    async fn create_device_activation_code(
        rqctx: RequestContext<Self::Context>,
        path: Path<DevicePath>,
        body: TypedBody<ActivationCodeRequest>,
    ) -> Result<HttpResponseCreated<ActivationCode>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        // The only POST below /v1/devices is the literal activationCode
        // path; see the API trait for why it arrives as a variable.
        if path.device_id != "activationCode" {
            return Err(not_found("devices operation", &path.device_id));
        }

        let request = body.into_inner();
        if request.workspace_id.is_none() && request.person_id.is_none() {
            return Err(HttpError::for_bad_request(
                None,
                "workspaceId or personId is required".to_string(),
            ));
        }

        let code: u128 = Uuid::new_v4().as_u128() % 10_000_000_000_000_000;
        Ok(HttpResponseCreated(ActivationCode {
            id: Some(mint_id("ACTIVATION_CODE")),
            code: Some(format!("{:016}", code)),
            expiry_time: Some(Utc::now() + chrono::Duration::days(1)),
        }))
    }

    // ------------------------------------------------------------------
    // Workspaces
    // ------------------------------------------------------------------

    async fn list_workspaces(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListWorkspacesQuery>,
    ) -> Result<Response<Body>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let query = query.into_inner();

        let matching: Vec<Workspace> = store
            .workspaces
            .iter()
            .filter(|w| {
                query
                    .location_id
                    .as_ref()
                    .is_none_or(|loc| w.location_id.as_deref() == Some(loc.as_str()))
            })
            .filter(|w| {
                query.display_name.as_ref().is_none_or(|prefix| {
                    w.display_name
                        .as_deref()
                        .is_some_and(|name| name.starts_with(prefix.as_str()))
                })
            })
            .filter(|w| query.calling.is_none_or(|calling| w.calling == Some(calling)))
            .cloned()
            .collect();

        let (range, next_start) = page_bounds(matching.len(), query.max, query.start);
        let items = matching[range].to_vec();

        let mut carried: Vec<(&str, String)> = Vec::new();
        if let Some(v) = &query.location_id {
            carried.push(("locationId", v.clone()));
        }
        if let Some(v) = &query.display_name {
            carried.push(("displayName", v.clone()));
        }
        if let Some(v) = query.calling {
            carried.push(("calling", v.to_string()));
        }
        let link = next_start.map(|s| page_link("/v1/workspaces", &carried, query.max, s));

        list_response(items, link)
    }

    async fn create_workspace(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<WorkspaceRequest>,
    ) -> Result<HttpResponseCreated<Workspace>, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let request = body.into_inner();

        let org_id = store.default_org_id();
        let workspace = workspace_from_request(mint_id("WORKSPACE"), org_id, request);
        store.workspaces.push(workspace.clone());
        Ok(HttpResponseCreated(workspace))
    }

    async fn get_workspace(
        rqctx: RequestContext<Self::Context>,
        path: Path<WorkspacePath>,
    ) -> Result<HttpResponseOk<Workspace>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let workspace = store
            .workspaces
            .iter()
            .find(|w| w.id.as_deref() == Some(path.workspace_id.as_str()))
            .ok_or_else(|| not_found("workspace", &path.workspace_id))?;
        Ok(HttpResponseOk(workspace.clone()))
    }

    async fn update_workspace(
        rqctx: RequestContext<Self::Context>,
        path: Path<WorkspacePath>,
        body: TypedBody<WorkspaceRequest>,
    ) -> Result<HttpResponseOk<Workspace>, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();
        let request = body.into_inner();

        let position = store
            .workspaces
            .iter()
            .position(|w| w.id.as_deref() == Some(path.workspace_id.as_str()))
            .ok_or_else(|| not_found("workspace", &path.workspace_id))?;

        let existing = store.workspaces[position].clone();
        let mut replacement =
            workspace_from_request(path.workspace_id.clone(), existing.org_id.clone(), request);
        replacement.created = existing.created;
        replacement.sip_address = existing.sip_address.clone();
        store.workspaces[position] = replacement.clone();
        Ok(HttpResponseOk(replacement))
    }

    async fn delete_workspace(
        rqctx: RequestContext<Self::Context>,
        path: Path<WorkspacePath>,
    ) -> Result<HttpResponseDeleted, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let position = store
            .workspaces
            .iter()
            .position(|w| w.id.as_deref() == Some(path.workspace_id.as_str()))
            .ok_or_else(|| not_found("workspace", &path.workspace_id))?;
        store.workspaces.remove(position);
        Ok(HttpResponseDeleted())
    }

    // ------------------------------------------------------------------
    // Locations
    // ------------------------------------------------------------------

    async fn list_locations(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListLocationsQuery>,
    ) -> Result<Response<Body>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let query = query.into_inner();

        let matching: Vec<Location> = store
            .locations
            .iter()
            .filter(|l| {
                query.name.as_ref().is_none_or(|prefix| {
                    l.name
                        .as_deref()
                        .is_some_and(|name| name.starts_with(prefix.as_str()))
                })
            })
            .cloned()
            .collect();

        let (range, next_start) = page_bounds(matching.len(), query.max, query.start);
        let items = matching[range].to_vec();

        let mut carried: Vec<(&str, String)> = Vec::new();
        if let Some(v) = &query.name {
            carried.push(("name", v.clone()));
        }
        let link = next_start.map(|s| page_link("/v1/locations", &carried, query.max, s));

        list_response(items, link)
    }

    async fn create_location(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<LocationRequest>,
    ) -> Result<HttpResponseCreated<Location>, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let request = body.into_inner();

        let org_id = store.default_org_id();
        let location = location_from_request(mint_id("LOCATION"), org_id, request);
        store.locations.push(location.clone());
        Ok(HttpResponseCreated(location))
    }

    async fn get_location(
        rqctx: RequestContext<Self::Context>,
        path: Path<LocationPath>,
    ) -> Result<HttpResponseOk<Location>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let location = store
            .locations
            .iter()
            .find(|l| l.id.as_deref() == Some(path.location_id.as_str()))
            .ok_or_else(|| not_found("location", &path.location_id))?;
        Ok(HttpResponseOk(location.clone()))
    }

    async fn update_location(
        rqctx: RequestContext<Self::Context>,
        path: Path<LocationPath>,
        body: TypedBody<LocationRequest>,
    ) -> Result<HttpResponseOk<Location>, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();
        let request = body.into_inner();

        let position = store
            .locations
            .iter()
            .position(|l| l.id.as_deref() == Some(path.location_id.as_str()))
            .ok_or_else(|| not_found("location", &path.location_id))?;

        let org_id = store.locations[position].org_id.clone();
        let replacement = location_from_request(path.location_id.clone(), org_id, request);
        store.locations[position] = replacement.clone();

        // Queues denormalize their location's name; keep them agreeing.
        let location_name = replacement.name.clone();
        for queue in &mut store.queues {
            if queue.location_id.as_deref() == Some(path.location_id.as_str()) {
                queue.location_name = location_name.clone();
            }
        }
        Ok(HttpResponseOk(replacement))
    }

    // ------------------------------------------------------------------
    // Licenses
    // ------------------------------------------------------------------

    async fn list_licenses(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListLicensesQuery>,
    ) -> Result<Response<Body>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let query = query.into_inner();

        // Licenses belong to the fixture org; filtering for any other
        // org finds nothing.
        let org_matches = query
            .org_id
            .as_ref()
            .is_none_or(|org| store.default_org_id().as_deref() == Some(org.as_str()));
        let matching: Vec<License> = if org_matches {
            store.licenses.clone()
        } else {
            Vec::new()
        };

        let (range, next_start) = page_bounds(matching.len(), query.max, query.start);
        let items = matching[range].to_vec();

        let mut carried: Vec<(&str, String)> = Vec::new();
        if let Some(v) = &query.org_id {
            carried.push(("orgId", v.clone()));
        }
        let link = next_start.map(|s| page_link("/v1/licenses", &carried, query.max, s));

        list_response(items, link)
    }

    async fn get_license(
        rqctx: RequestContext<Self::Context>,
        path: Path<LicensePath>,
    ) -> Result<HttpResponseOk<License>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let license = store
            .licenses
            .iter()
            .find(|l| l.id.as_deref() == Some(path.license_id.as_str()))
            .ok_or_else(|| not_found("license", &path.license_id))?;
        Ok(HttpResponseOk(license.clone()))
    }

    // ------------------------------------------------------------------
    // Organizations
    // ------------------------------------------------------------------

    async fn list_organizations(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListOrganizationsQuery>,
    ) -> Result<Response<Body>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let query = query.into_inner();

        let matching = store.organizations.clone();
        let (range, next_start) = page_bounds(matching.len(), query.max, query.start);
        let items = matching[range].to_vec();
        let link = next_start.map(|s| page_link("/v1/organizations", &[], query.max, s));

        list_response(items, link)
    }

    async fn get_organization(
        rqctx: RequestContext<Self::Context>,
        path: Path<OrganizationPath>,
    ) -> Result<HttpResponseOk<Organization>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let organization = store
            .organizations
            .iter()
            .find(|o| o.id.as_deref() == Some(path.org_id.as_str()))
            .ok_or_else(|| not_found("organization", &path.org_id))?;
        Ok(HttpResponseOk(organization.clone()))
    }

    // ------------------------------------------------------------------
    // Calling administration: queues
    // ------------------------------------------------------------------

    async fn list_queues(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListQueuesQuery>,
    ) -> Result<Response<Body>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let query = query.into_inner();

        let matching: Vec<CallQueue> = store
            .queues
            .iter()
            .filter(|q| {
                query
                    .location_id
                    .as_ref()
                    .is_none_or(|loc| q.location_id.as_deref() == Some(loc.as_str()))
            })
            .filter(|q| {
                query.name.as_ref().is_none_or(|prefix| {
                    q.name
                        .as_deref()
                        .is_some_and(|name| name.starts_with(prefix.as_str()))
                })
            })
            .cloned()
            .collect();

        let (range, next_start) = page_bounds(matching.len(), query.max, query.start);
        let items = matching[range].to_vec();

        let mut carried: Vec<(&str, String)> = Vec::new();
        if let Some(v) = &query.location_id {
            carried.push(("locationId", v.clone()));
        }
        if let Some(v) = &query.name {
            carried.push(("name", v.clone()));
        }
        let link =
            next_start.map(|s| page_link("/v1/telephony/config/queues", &carried, query.max, s));

        list_response(items, link)
    }

    async fn create_queue(
        rqctx: RequestContext<Self::Context>,
        path: Path<QueueLocationPath>,
        body: TypedBody<QueueRequest>,
    ) -> Result<HttpResponseCreated<CallQueue>, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();
        let request = body.into_inner();

        let (location_name, time_zone) = {
            let location = store
                .locations
                .iter()
                .find(|l| l.id.as_deref() == Some(path.location_id.as_str()))
                .ok_or_else(|| not_found("location", &path.location_id))?;
            (location.name.clone(), location.time_zone.clone())
        };

        let queue = queue_from_request(
            mint_id("CALL_QUEUE"),
            path.location_id,
            location_name,
            time_zone,
            request,
        );
        store.queues.push(queue.clone());
        Ok(HttpResponseCreated(queue))
    }

    async fn get_queue(
        rqctx: RequestContext<Self::Context>,
        path: Path<QueuePath>,
    ) -> Result<HttpResponseOk<CallQueue>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let queue = store
            .queues
            .iter()
            .find(|q| {
                q.location_id.as_deref() == Some(path.location_id.as_str())
                    && q.id.as_deref() == Some(path.queue_id.as_str())
            })
            .ok_or_else(|| not_found("call queue", &path.queue_id))?;
        Ok(HttpResponseOk(queue.clone()))
    }

    async fn update_queue(
        rqctx: RequestContext<Self::Context>,
        path: Path<QueuePath>,
        body: TypedBody<QueueRequest>,
    ) -> Result<HttpResponseUpdatedNoContent, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();
        let request = body.into_inner();

        let position = store
            .queues
            .iter()
            .position(|q| {
                q.location_id.as_deref() == Some(path.location_id.as_str())
                    && q.id.as_deref() == Some(path.queue_id.as_str())
            })
            .ok_or_else(|| not_found("call queue", &path.queue_id))?;

        let existing = store.queues[position].clone();
        store.queues[position] = queue_from_request(
            path.queue_id,
            path.location_id,
            existing.location_name.clone(),
            existing.time_zone.clone(),
            request,
        );
        Ok(HttpResponseUpdatedNoContent())
    }

    async fn delete_queue(
        rqctx: RequestContext<Self::Context>,
        path: Path<QueuePath>,
    ) -> Result<HttpResponseDeleted, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        let position = store
            .queues
            .iter()
            .position(|q| {
                q.location_id.as_deref() == Some(path.location_id.as_str())
                    && q.id.as_deref() == Some(path.queue_id.as_str())
            })
            .ok_or_else(|| not_found("call queue", &path.queue_id))?;
        store.queues.remove(position);
        Ok(HttpResponseDeleted())
    }

    // ------------------------------------------------------------------
    // Calling administration: forwarding
    // ------------------------------------------------------------------

    async fn get_call_forwarding(
        rqctx: RequestContext<Self::Context>,
        path: Path<PersonPath>,
    ) -> Result<HttpResponseOk<CallForwardingSettings>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();

        if !store
            .people
            .iter()
            .any(|p| p.id.as_deref() == Some(path.person_id.as_str()))
        {
            return Err(not_found("person", &path.person_id));
        }

        // A person with nothing configured reads back as empty settings,
        // not as an error.
        let settings = store
            .forwarding
            .get(&path.person_id)
            .cloned()
            .unwrap_or_default();
        Ok(HttpResponseOk(settings))
    }

    async fn update_call_forwarding(
        rqctx: RequestContext<Self::Context>,
        path: Path<PersonPath>,
        body: TypedBody<CallForwardingSettings>,
    ) -> Result<HttpResponseUpdatedNoContent, HttpError> {
        let ctx = rqctx.context();
        let mut store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let path = path.into_inner();
        let settings = body.into_inner();

        if !store
            .people
            .iter()
            .any(|p| p.id.as_deref() == Some(path.person_id.as_str()))
        {
            return Err(not_found("person", &path.person_id));
        }

        store.forwarding.insert(path.person_id, settings);
        Ok(HttpResponseUpdatedNoContent())
    }

    // ------------------------------------------------------------------
    // Calling administration: number inventory
    // ------------------------------------------------------------------

    async fn list_numbers(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListNumbersQuery>,
    ) -> Result<Response<Body>, HttpError> {
        let ctx = rqctx.context();
        let store = ctx.store.lock().await;
        require_bearer(&rqctx, &store)?;
        let query = query.into_inner();

        let matching: Vec<_> = store
            .numbers
            .iter()
            .filter(|n| {
                query.location_id.as_ref().is_none_or(|loc| {
                    n.location.as_ref().and_then(|l| l.id.as_deref()) == Some(loc.as_str())
                })
            })
            .filter(|n| {
                query.owner_type.is_none_or(|kind| {
                    n.owner.as_ref().and_then(|o| o.owner_type) == Some(kind)
                })
            })
            .filter(|n| query.state.is_none_or(|state| n.state == Some(state)))
            .filter(|n| {
                query.phone_number.as_ref().is_none_or(|fragment| {
                    n.phone_number
                        .as_deref()
                        .is_some_and(|pn| pn.contains(fragment.as_str()))
                })
            })
            .cloned()
            .collect();

        let (range, next_start) = page_bounds(matching.len(), query.max, query.start);
        let items = matching[range].to_vec();

        let mut carried: Vec<(&str, String)> = Vec::new();
        if let Some(v) = &query.location_id {
            carried.push(("locationId", v.clone()));
        }
        if let Some(v) = query.owner_type {
            carried.push(("ownerType", v.to_string()));
        }
        if let Some(v) = query.state {
            carried.push(("state", v.to_string()));
        }
        if let Some(v) = &query.phone_number {
            carried.push(("phoneNumber", v.clone()));
        }
        let link =
            next_start.map(|s| page_link("/v1/telephony/config/numbers", &carried, query.max, s));

        list_response(items, link)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_bounds_chains_through_the_collection() {
        // Three pages of two over five records.
        let (range, next) = page_bounds(5, Some(2), None);
        assert_eq!(range, 0..2);
        assert_eq!(next, Some(2));

        let (range, next) = page_bounds(5, Some(2), Some(2));
        assert_eq!(range, 2..4);
        assert_eq!(next, Some(4));

        let (range, next) = page_bounds(5, Some(2), Some(4));
        assert_eq!(range, 4..5);
        assert_eq!(next, None);
    }

    #[test]
    fn page_bounds_with_no_max_serves_everything() {
        let (range, next) = page_bounds(7, None, None);
        assert_eq!(range, 0..7);
        assert_eq!(next, None);
    }

    #[test]
    fn page_bounds_clamps_offsets_past_the_end() {
        let (range, next) = page_bounds(3, Some(10), Some(50));
        assert_eq!(range, 3..3);
        assert_eq!(next, None);
    }

    #[test]
    fn page_bounds_treats_zero_max_as_one() {
        let (range, next) = page_bounds(3, Some(0), None);
        assert_eq!(range, 0..1);
        assert_eq!(next, Some(1));
    }

    #[test]
    fn page_link_keeps_filters_under_wire_names() {
        let carried = [("displayName", "Quinn H".to_string())];
        let link = page_link("/v1/people", &carried, Some(2), 4);
        assert_eq!(link, "/v1/people?displayName=Quinn+H&max=2&start=4");
    }

    #[test]
    fn page_link_without_filters_is_bare() {
        let link = page_link("/v1/webhooks", &[], None, 100);
        assert_eq!(link, "/v1/webhooks?start=100");
    }

    #[test]
    fn minted_ids_decode_to_resource_uris() {
        let id = mint_id("PEOPLE");
        let decoded = URL_SAFE_NO_PAD.decode(&id).expect("base64url id");
        let uri = String::from_utf8(decoded).expect("utf8 uri");
        assert!(uri.starts_with("meridian://us/PEOPLE/"));
    }
}
