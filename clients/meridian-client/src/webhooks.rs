// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Webhooks API
//!
//! Webhooks deliver resource change notifications to a target URL.
//! A webhook that keeps failing delivery is moved to `inactive` by the
//! service; updating it with `status: active` re-arms it.

use std::sync::Arc;

use futures_util::stream::BoxStream;
use meridian_api::{ListWebhooksQuery, Webhook, WebhookRequest, WebhookUpdate};

use crate::Error;
use crate::endpoint::{ApiChild, paginate};
use crate::session::RestSession;

/// Webhooks collection, bound to the `webhooks` endpoint prefix
#[derive(Clone)]
pub struct Webhooks {
    session: Arc<RestSession>,
}

impl ApiChild for Webhooks {
    const PREFIX: &'static str = "webhooks";

    fn session(&self) -> &Arc<RestSession> {
        &self.session
    }
}

impl Webhooks {
    pub(crate) fn new(session: Arc<RestSession>) -> Self {
        Self { session }
    }

    /// List the token's webhooks
    pub fn list(&self, query: ListWebhooksQuery) -> BoxStream<'static, Result<Webhook, Error>> {
        let first = self
            .collection_url()
            .and_then(|url| self.session.url_with_query(url, &query));
        paginate(&self.session, first)
    }

    /// Register a webhook
    pub async fn create(&self, webhook: &WebhookRequest) -> Result<Webhook, Error> {
        let url = self.collection_url()?;
        self.session.post_json(url, webhook).await
    }

    /// Get a webhook by id
    pub async fn get(&self, webhook_id: &str) -> Result<Webhook, Error> {
        let url = self.item_url(&[webhook_id])?;
        self.session.get_json(url).await
    }

    /// Update a webhook's name, target URL, secret or status.
    ///
    /// The resource and event filters are fixed at creation; register a
    /// new webhook to change them.
    pub async fn update(&self, webhook_id: &str, webhook: &WebhookUpdate) -> Result<Webhook, Error> {
        let url = self.item_url(&[webhook_id])?;
        self.session.put_json(url, webhook).await
    }

    /// Delete a webhook
    pub async fn delete(&self, webhook_id: &str) -> Result<(), Error> {
        let url = self.item_url(&[webhook_id])?;
        self.session.delete(url).await
    }
}
