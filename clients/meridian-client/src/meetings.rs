// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Meetings API
//!
//! A scheduled meeting belongs to a series; listing with a meeting
//! number returns the series plus its scheduled occurrences. The id
//! passed to `get`, `update` and `delete` picks which level to act on.

use std::sync::Arc;

use futures_util::stream::BoxStream;
use meridian_api::{ListMeetingsQuery, Meeting, MeetingRequest};

use crate::Error;
use crate::endpoint::{ApiChild, paginate};
use crate::session::RestSession;

/// Meetings collection, bound to the `meetings` endpoint prefix
#[derive(Clone)]
pub struct Meetings {
    session: Arc<RestSession>,
}

impl ApiChild for Meetings {
    const PREFIX: &'static str = "meetings";

    fn session(&self) -> &Arc<RestSession> {
        &self.session
    }
}

impl Meetings {
    pub(crate) fn new(session: Arc<RestSession>) -> Self {
        Self { session }
    }

    /// List meetings matching the query
    pub fn list(&self, query: ListMeetingsQuery) -> BoxStream<'static, Result<Meeting, Error>> {
        let first = self
            .collection_url()
            .and_then(|url| self.session.url_with_query(url, &query));
        paginate(&self.session, first)
    }

    /// Schedule a meeting
    pub async fn create(&self, meeting: &MeetingRequest) -> Result<Meeting, Error> {
        let url = self.collection_url()?;
        self.session.post_json(url, meeting).await
    }

    /// Get a meeting, series or occurrence by id
    pub async fn get(&self, meeting_id: &str) -> Result<Meeting, Error> {
        let url = self.item_url(&[meeting_id])?;
        self.session.get_json(url).await
    }

    /// Replace a meeting's schedule and settings
    pub async fn update(&self, meeting_id: &str, meeting: &MeetingRequest) -> Result<Meeting, Error> {
        let url = self.item_url(&[meeting_id])?;
        self.session.put_json(url, meeting).await
    }

    /// Cancel a meeting
    pub async fn delete(&self, meeting_id: &str) -> Result<(), Error> {
        let url = self.item_url(&[meeting_id])?;
        self.session.delete(url).await
    }
}
