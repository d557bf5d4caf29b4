// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Organizations API (read-only)
//!
//! Most tokens see exactly one organization: their own. Partner admin
//! tokens see every organization they manage.

use std::sync::Arc;

use futures_util::stream::BoxStream;
use meridian_api::{ListOrganizationsQuery, Organization};

use crate::Error;
use crate::endpoint::{ApiChild, paginate};
use crate::session::RestSession;

/// Organizations collection, bound to the `organizations` endpoint prefix
#[derive(Clone)]
pub struct Organizations {
    session: Arc<RestSession>,
}

impl ApiChild for Organizations {
    const PREFIX: &'static str = "organizations";

    fn session(&self) -> &Arc<RestSession> {
        &self.session
    }
}

impl Organizations {
    pub(crate) fn new(session: Arc<RestSession>) -> Self {
        Self { session }
    }

    /// List organizations visible to the token
    pub fn list(
        &self,
        query: ListOrganizationsQuery,
    ) -> BoxStream<'static, Result<Organization, Error>> {
        let first = self
            .collection_url()
            .and_then(|url| self.session.url_with_query(url, &query));
        paginate(&self.session, first)
    }

    /// Get an organization by id
    pub async fn get(&self, org_id: &str) -> Result<Organization, Error> {
        let url = self.item_url(&[org_id])?;
        self.session.get_json(url).await
    }
}
