// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Devices API

use std::sync::Arc;

use futures_util::stream::BoxStream;
use meridian_api::{ActivationCode, ActivationCodeRequest, Device, ListDevicesQuery};

use crate::Error;
use crate::endpoint::{ApiChild, paginate};
use crate::session::RestSession;

/// Devices collection, bound to the `devices` endpoint prefix
#[derive(Clone)]
pub struct Devices {
    session: Arc<RestSession>,
}

impl ApiChild for Devices {
    const PREFIX: &'static str = "devices";

    fn session(&self) -> &Arc<RestSession> {
        &self.session
    }
}

impl Devices {
    pub(crate) fn new(session: Arc<RestSession>) -> Self {
        Self { session }
    }

    /// List registered devices
    pub fn list(&self, query: ListDevicesQuery) -> BoxStream<'static, Result<Device, Error>> {
        let first = self
            .collection_url()
            .and_then(|url| self.session.url_with_query(url, &query));
        paginate(&self.session, first)
    }

    /// Get a device by id
    pub async fn get(&self, device_id: &str) -> Result<Device, Error> {
        let url = self.item_url(&[device_id])?;
        self.session.get_json(url).await
    }

    /// Remove a device registration
    pub async fn delete(&self, device_id: &str) -> Result<(), Error> {
        let url = self.item_url(&[device_id])?;
        self.session.delete(url).await
    }

    /// Generate an activation code.
    ///
    /// The code is entered on the device to register it against the
    /// workspace or person in the request. Codes expire; the expiry
    /// time comes back alongside the code.
    pub async fn create_activation_code(
        &self,
        request: &ActivationCodeRequest,
    ) -> Result<ActivationCode, Error> {
        let url = self.item_url(&["activationCode"])?;
        self.session.post_json(url, request).await
    }
}
