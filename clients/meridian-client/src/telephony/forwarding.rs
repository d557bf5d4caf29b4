// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Per-person call forwarding settings

use std::sync::Arc;

use meridian_api::CallForwardingSettings;

use crate::Error;
use crate::endpoint::ApiChild;
use crate::session::RestSession;

/// Call forwarding settings, addressed per person under the `people`
/// endpoint prefix
#[derive(Clone)]
pub struct Forwarding {
    session: Arc<RestSession>,
}

impl ApiChild for Forwarding {
    const PREFIX: &'static str = "people";

    fn session(&self) -> &Arc<RestSession> {
        &self.session
    }
}

impl Forwarding {
    pub(crate) fn new(session: Arc<RestSession>) -> Self {
        Self { session }
    }

    /// Get a person's call forwarding settings
    pub async fn get(&self, person_id: &str) -> Result<CallForwardingSettings, Error> {
        let url = self.item_url(&[person_id, "features", "callForwarding"])?;
        self.session.get_json(url).await
    }

    /// Replace a person's call forwarding settings.
    ///
    /// Full replace: rules omitted from the settings object are reset
    /// to their defaults, not left as they were.
    pub async fn update(
        &self,
        person_id: &str,
        settings: &CallForwardingSettings,
    ) -> Result<(), Error> {
        let url = self.item_url(&[person_id, "features", "callForwarding"])?;
        self.session.put_no_content(url, settings).await
    }
}
