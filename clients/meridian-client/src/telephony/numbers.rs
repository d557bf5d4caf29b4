// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Phone number inventory (read-only)

use std::sync::Arc;

use futures_util::stream::BoxStream;
use meridian_api::{ListNumbersQuery, PhoneNumberListing};

use crate::Error;
use crate::endpoint::{ApiChild, paginate};
use crate::session::RestSession;

/// Number inventory, bound to the `telephony/config` endpoint prefix
#[derive(Clone)]
pub struct Numbers {
    session: Arc<RestSession>,
}

impl ApiChild for Numbers {
    const PREFIX: &'static str = "telephony/config";

    fn session(&self) -> &Arc<RestSession> {
        &self.session
    }
}

impl Numbers {
    pub(crate) fn new(session: Arc<RestSession>) -> Self {
        Self { session }
    }

    /// List the organization's phone numbers with their assignments
    pub fn list(
        &self,
        query: ListNumbersQuery,
    ) -> BoxStream<'static, Result<PhoneNumberListing, Error>> {
        let first = self
            .item_url(&["numbers"])
            .and_then(|url| self.session.url_with_query(url, &query));
        paginate(&self.session, first)
    }
}
