// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Licenses API (read-only)

use std::sync::Arc;

use futures_util::stream::BoxStream;
use meridian_api::{License, ListLicensesQuery};

use crate::Error;
use crate::endpoint::{ApiChild, paginate};
use crate::session::RestSession;

/// Licenses collection, bound to the `licenses` endpoint prefix
#[derive(Clone)]
pub struct Licenses {
    session: Arc<RestSession>,
}

impl ApiChild for Licenses {
    const PREFIX: &'static str = "licenses";

    fn session(&self) -> &Arc<RestSession> {
        &self.session
    }
}

impl Licenses {
    pub(crate) fn new(session: Arc<RestSession>) -> Self {
        Self { session }
    }

    /// List license allotments for an organization
    pub fn list(&self, query: ListLicensesQuery) -> BoxStream<'static, Result<License, Error>> {
        let first = self
            .collection_url()
            .and_then(|url| self.session.url_with_query(url, &query));
        paginate(&self.session, first)
    }

    /// Get a license by id
    pub async fn get(&self, license_id: &str) -> Result<License, Error> {
        let url = self.item_url(&[license_id])?;
        self.session.get_json(url).await
    }
}
