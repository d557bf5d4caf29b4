// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Call queue configuration
//!
//! Queues are scoped to a location: creation and item operations take
//! the owning location id, while the list endpoint spans the whole
//! organization.

use std::sync::Arc;

use futures_util::stream::BoxStream;
use meridian_api::{CallQueue, ListQueuesQuery, QueueRequest};

use crate::Error;
use crate::endpoint::{ApiChild, paginate};
use crate::session::RestSession;

/// Call queues, bound to the `telephony/config` endpoint prefix
#[derive(Clone)]
pub struct CallQueues {
    session: Arc<RestSession>,
}

impl ApiChild for CallQueues {
    const PREFIX: &'static str = "telephony/config";

    fn session(&self) -> &Arc<RestSession> {
        &self.session
    }
}

impl CallQueues {
    pub(crate) fn new(session: Arc<RestSession>) -> Self {
        Self { session }
    }

    /// List call queues across all locations
    pub fn list(&self, query: ListQueuesQuery) -> BoxStream<'static, Result<CallQueue, Error>> {
        let first = self
            .item_url(&["queues"])
            .and_then(|url| self.session.url_with_query(url, &query));
        paginate(&self.session, first)
    }

    /// Create a call queue in a location
    pub async fn create(
        &self,
        location_id: &str,
        queue: &QueueRequest,
    ) -> Result<CallQueue, Error> {
        let url = self.item_url(&["locations", location_id, "queues"])?;
        self.session.post_json(url, queue).await
    }

    /// Get a call queue's configuration
    pub async fn get(&self, location_id: &str, queue_id: &str) -> Result<CallQueue, Error> {
        let url = self.item_url(&["locations", location_id, "queues", queue_id])?;
        self.session.get_json(url).await
    }

    /// Replace a call queue's configuration.
    ///
    /// The service answers 204; call [`CallQueues::get`] to observe the
    /// applied settings.
    pub async fn update(
        &self,
        location_id: &str,
        queue_id: &str,
        queue: &QueueRequest,
    ) -> Result<(), Error> {
        let url = self.item_url(&["locations", location_id, "queues", queue_id])?;
        self.session.put_no_content(url, queue).await
    }

    /// Delete a call queue
    pub async fn delete(&self, location_id: &str, queue_id: &str) -> Result<(), Error> {
        let url = self.item_url(&["locations", location_id, "queues", queue_id])?;
        self.session.delete(url).await
    }
}
