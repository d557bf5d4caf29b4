// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Endpoint prefix binding for API children
//!
//! Every API child (people, rooms, call queues, ...) is a thin handle on
//! the shared [`RestSession`], bound to one endpoint prefix. The child
//! declares its prefix once; URL construction and pagination plumbing
//! live here.

use std::sync::Arc;

use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use serde::de::DeserializeOwned;
use url::Url;

use crate::Error;
use crate::session::RestSession;

/// An API child bound to a fixed endpoint prefix under the base URL
pub(crate) trait ApiChild {
    /// Path prefix under the API base, without leading or trailing slash
    const PREFIX: &'static str;

    fn session(&self) -> &Arc<RestSession>;

    /// URL of the child's collection root
    fn collection_url(&self) -> Result<Url, Error> {
        self.session().endpoint_url(Self::PREFIX, &[])
    }

    /// URL of an item below the child's prefix
    fn item_url(&self, segments: &[&str]) -> Result<Url, Error> {
        self.session().endpoint_url(Self::PREFIX, segments)
    }
}

/// Stream the items of a list endpoint, following `Link` headers.
///
/// The first page is fetched when the stream is first polled, and each
/// following page only once the items before it have been consumed. An
/// error building the first URL comes back as the first stream item.
pub(crate) fn paginate<T>(
    session: &Arc<RestSession>,
    first: Result<Url, Error>,
) -> BoxStream<'static, Result<T, Error>>
where
    T: DeserializeOwned + Send + 'static,
{
    let session = Arc::clone(session);
    meridian_pagination::follow(first, move |url| {
        let session = Arc::clone(&session);
        async move { session.fetch_page(url).await }
    })
    .boxed()
}
