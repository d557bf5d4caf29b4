// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Locations API
//!
//! Locations anchor dial plans and number assignments, so the API has
//! no delete operation; unused locations are left in place.

use std::sync::Arc;

use futures_util::stream::BoxStream;
use meridian_api::{ListLocationsQuery, Location, LocationRequest};

use crate::Error;
use crate::endpoint::{ApiChild, paginate};
use crate::session::RestSession;

/// Locations collection, bound to the `locations` endpoint prefix
#[derive(Clone)]
pub struct Locations {
    session: Arc<RestSession>,
}

impl ApiChild for Locations {
    const PREFIX: &'static str = "locations";

    fn session(&self) -> &Arc<RestSession> {
        &self.session
    }
}

impl Locations {
    pub(crate) fn new(session: Arc<RestSession>) -> Self {
        Self { session }
    }

    /// List locations
    pub fn list(&self, query: ListLocationsQuery) -> BoxStream<'static, Result<Location, Error>> {
        let first = self
            .collection_url()
            .and_then(|url| self.session.url_with_query(url, &query));
        paginate(&self.session, first)
    }

    /// Create a location
    pub async fn create(&self, location: &LocationRequest) -> Result<Location, Error> {
        let url = self.collection_url()?;
        self.session.post_json(url, location).await
    }

    /// Get a location by id
    pub async fn get(&self, location_id: &str) -> Result<Location, Error> {
        let url = self.item_url(&[location_id])?;
        self.session.get_json(url).await
    }

    /// Replace a location's details
    pub async fn update(
        &self,
        location_id: &str,
        location: &LocationRequest,
    ) -> Result<Location, Error> {
        let url = self.item_url(&[location_id])?;
        self.session.put_json(url, location).await
    }
}
