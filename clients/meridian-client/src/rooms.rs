// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Rooms API

use std::sync::Arc;

use futures_util::stream::BoxStream;
use meridian_api::{ListRoomsQuery, Room, RoomRequest};

use crate::Error;
use crate::endpoint::{ApiChild, paginate};
use crate::session::RestSession;

/// Rooms collection, bound to the `rooms` endpoint prefix
#[derive(Clone)]
pub struct Rooms {
    session: Arc<RestSession>,
}

impl ApiChild for Rooms {
    const PREFIX: &'static str = "rooms";

    fn session(&self) -> &Arc<RestSession> {
        &self.session
    }
}

impl Rooms {
    pub(crate) fn new(session: Arc<RestSession>) -> Self {
        Self { session }
    }

    /// List rooms visible to the current token
    pub fn list(&self, query: ListRoomsQuery) -> BoxStream<'static, Result<Room, Error>> {
        let first = self
            .collection_url()
            .and_then(|url| self.session.url_with_query(url, &query));
        paginate(&self.session, first)
    }

    /// Create a group room with the caller as first member
    pub async fn create(&self, room: &RoomRequest) -> Result<Room, Error> {
        let url = self.collection_url()?;
        self.session.post_json(url, room).await
    }

    /// Get a room by id
    pub async fn get(&self, room_id: &str) -> Result<Room, Error> {
        let url = self.item_url(&[room_id])?;
        self.session.get_json(url).await
    }

    /// Replace a room's details
    pub async fn update(&self, room_id: &str, room: &RoomRequest) -> Result<Room, Error> {
        let url = self.item_url(&[room_id])?;
        self.session.put_json(url, room).await
    }

    /// Delete a room and its content
    pub async fn delete(&self, room_id: &str) -> Result<(), Error> {
        let url = self.item_url(&[room_id])?;
        self.session.delete(url).await
    }
}
