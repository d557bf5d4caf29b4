// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! People API
//!
//! Create, read, update and remove the people in an organization.
//! Admin-scoped tokens see the whole directory; personal tokens see
//! themselves and the people they share rooms with.

use std::sync::Arc;

use futures_util::stream::BoxStream;
use meridian_api::{ListPeopleQuery, Person, PersonRequest};

use crate::Error;
use crate::endpoint::{ApiChild, paginate};
use crate::session::RestSession;

/// People collection, bound to the `people` endpoint prefix
#[derive(Clone)]
pub struct People {
    session: Arc<RestSession>,
}

impl ApiChild for People {
    const PREFIX: &'static str = "people";

    fn session(&self) -> &Arc<RestSession> {
        &self.session
    }
}

impl People {
    pub(crate) fn new(session: Arc<RestSession>) -> Self {
        Self { session }
    }

    /// List people, following pagination lazily.
    ///
    /// Items arrive in server order. The first page is fetched on first
    /// poll; later pages only as the stream is consumed, so a bounded
    /// `take` never pays for pages past its bound.
    pub fn list(&self, query: ListPeopleQuery) -> BoxStream<'static, Result<Person, Error>> {
        let first = self
            .collection_url()
            .and_then(|url| self.session.url_with_query(url, &query));
        paginate(&self.session, first)
    }

    /// Create a person
    ///
    /// Requires an admin token. The email address must not already be
    /// in use in the organization.
    pub async fn create(&self, person: &PersonRequest) -> Result<Person, Error> {
        let url = self.collection_url()?;
        self.session.post_json(url, person).await
    }

    /// Get a person by id
    pub async fn get(&self, person_id: &str) -> Result<Person, Error> {
        let url = self.item_url(&[person_id])?;
        self.session.get_json(url).await
    }

    /// Get the person the current token belongs to
    pub async fn me(&self) -> Result<Person, Error> {
        let url = self.item_url(&["me"])?;
        self.session.get_json(url).await
    }

    /// Replace a person's details.
    ///
    /// This is a full replace, not a patch: include every field that
    /// should survive the update.
    pub async fn update(&self, person_id: &str, person: &PersonRequest) -> Result<Person, Error> {
        let url = self.item_url(&[person_id])?;
        self.session.put_json(url, person).await
    }

    /// Remove a person from the organization
    pub async fn delete(&self, person_id: &str) -> Result<(), Error> {
        let url = self.item_url(&[person_id])?;
        self.session.delete(url).await
    }
}
