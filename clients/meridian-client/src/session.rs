// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shared REST session
//!
//! One session backs every API child handed out by a client. It owns the
//! HTTP connection pool, the base URL, and the token provider, and it is
//! the single place where requests gain their `Authorization` header and
//! responses are checked and decoded.
//!
//! The session performs exactly one HTTP request per operation. There is
//! no retry or backoff layer; transport errors and non-success statuses
//! propagate to the caller, who owns that policy.

use std::sync::Arc;

use meridian_api::{ErrorResponse, ItemPage};
use meridian_auth::TokenProvider;
use meridian_pagination::Page;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::Error;

pub(crate) struct RestSession {
    http: reqwest::Client,
    base: Url,
    tokens: Arc<dyn TokenProvider>,
}

impl RestSession {
    /// Create a session over a prepared HTTP client.
    ///
    /// The base URL is normalized to end with a slash so endpoint paths
    /// append below it rather than replacing its last segment.
    pub(crate) fn new(
        http: reqwest::Client,
        mut base: Url,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, Error> {
        if base.cannot_be_a_base() {
            return Err(Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { http, base, tokens })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base
    }

    /// URL for an endpoint prefix plus item segments.
    ///
    /// The prefix is a fixed path like `telephony/config` and is used
    /// as-is; each segment is percent-encoded, so caller-supplied ids
    /// cannot alter the path structure.
    pub(crate) fn endpoint_url(&self, prefix: &str, segments: &[&str]) -> Result<Url, Error> {
        let mut path = String::from(prefix);
        for segment in segments {
            path.push('/');
            path.push_str(&urlencoding::encode(segment));
        }
        Ok(self.base.join(&path)?)
    }

    /// Bake query parameters into a URL.
    ///
    /// Fields that are `None` are left out entirely, so the request line
    /// carries only the filters the caller actually set.
    pub(crate) fn url_with_query<Q: Serialize>(&self, url: Url, query: &Q) -> Result<Url, Error> {
        let request = self.http.get(url).query(query).build()?;
        Ok(request.url().clone())
    }

    /// Send a request with the bearer token attached.
    ///
    /// Non-success responses are turned into [`Error::Api`], pulling the
    /// message and tracking id out of the error body when the service
    /// sent its documented shape and falling back to the raw text when
    /// it did not.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
        let token = self.tokens.bearer_token().await?;
        let request = request.bearer_auth(token.expose_secret()).build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!(%method, %url, "sending API request");
        let response = self.http.execute(request).await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        let mut message = String::new();
        let mut tracking_id = None;
        if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(&body) {
            if let Some(m) = parsed.message {
                message = m;
            } else if let Some(description) = parsed
                .errors
                .iter()
                .flatten()
                .filter_map(|e| e.description.clone())
                .next()
            {
                message = description;
            }
            tracking_id = parsed.tracking_id;
        }
        if message.is_empty() {
            message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("no response body").to_string()
            } else {
                body.trim().to_string()
            };
        }

        tracing::warn!(%status, %url, "API request failed");
        Err(Error::Api {
            status,
            url,
            message,
            tracking_id,
        })
    }

    async fn decode<T: DeserializeOwned>(url: Url, response: reqwest::Response) -> Result<T, Error> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::Decode { url, source })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let response = self.send(self.http.get(url.clone())).await?;
        Self::decode(url, response).await
    }

    pub(crate) async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.http.post(url.clone()).json(body)).await?;
        Self::decode(url, response).await
    }

    pub(crate) async fn put_json<B, T>(&self, url: Url, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.http.put(url.clone()).json(body)).await?;
        Self::decode(url, response).await
    }

    /// PUT where the service answers 204 with no body
    pub(crate) async fn put_no_content<B>(&self, url: Url, body: &B) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        self.send(self.http.put(url).json(body)).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        self.send(self.http.delete(url)).await?;
        Ok(())
    }

    /// Fetch one page of a list endpoint: the `items` envelope from the
    /// body plus the next-page URL from the `Link` header.
    pub(crate) async fn fetch_page<T: DeserializeOwned>(&self, url: Url) -> Result<Page<T>, Error> {
        let response = self.send(self.http.get(url.clone())).await?;
        let next = meridian_pagination::next_link(response.headers(), &url)?;
        let page: ItemPage<T> = Self::decode(url, response).await?;
        Ok(Page {
            items: page.items,
            next,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_api::ListPeopleQuery;
    use meridian_auth::StaticTokens;

    // The workspace builds reqwest without a default TLS provider, so
    // one has to be installed before any client is built. See the
    // rustls notes in the workspace Cargo.toml.
    fn install_test_tls_provider() {
        let _ = rustls::crypto::ring::default_provider().install_default();
    }

    fn session(base: &str) -> RestSession {
        install_test_tls_provider();
        RestSession::new(
            reqwest::Client::new(),
            base.parse().unwrap(),
            Arc::new(StaticTokens::new("test-token")),
        )
        .unwrap()
    }

    #[test]
    fn endpoint_url_appends_below_the_base_path() {
        let session = session("https://api.example.com/v1");
        let url = session.endpoint_url("people", &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/people");

        let url = session.endpoint_url("people", &["P1"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/people/P1");
    }

    #[test]
    fn endpoint_url_keeps_prefix_slashes_but_encodes_segments() {
        let session = session("https://api.example.com/v1/");
        let url = session
            .endpoint_url("telephony/config", &["locations", "L1", "queues"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/telephony/config/locations/L1/queues"
        );

        let url = session.endpoint_url("people", &["a/b c"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/people/a%2Fb%20c");
    }

    #[test]
    fn url_with_query_writes_only_set_fields() {
        let session = session("https://api.example.com/v1");
        let url = session.endpoint_url("people", &[]).unwrap();

        let query = ListPeopleQuery {
            email: Some("user@example.com".to_string()),
            max: Some(2),
            ..Default::default()
        };
        let url = session.url_with_query(url, &query).unwrap();
        assert_eq!(url.query(), Some("email=user%40example.com&max=2"));
    }

    #[test]
    fn url_with_query_leaves_empty_queries_off() {
        let session = session("https://api.example.com/v1");
        let url = session.endpoint_url("rooms", &[]).unwrap();
        let url = session
            .url_with_query(url, &meridian_api::ListRoomsQuery::default())
            .unwrap();
        assert_eq!(url.query(), None);
        assert_eq!(url.as_str(), "https://api.example.com/v1/rooms");
    }

    #[test]
    fn non_hierarchical_base_is_rejected() {
        install_test_tls_provider();
        let result = RestSession::new(
            reqwest::Client::new(),
            "mailto:ops@example.com".parse().unwrap(),
            Arc::new(StaticTokens::new("test-token")),
        );
        assert!(matches!(result, Err(Error::Url(_))));
    }
}
