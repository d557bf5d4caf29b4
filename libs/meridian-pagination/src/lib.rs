// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Link-Header Pagination Library
//!
//! Meridian list endpoints return one page of results per request. When
//! more results exist, the response carries an RFC 5988 `Link` header:
//!
//! ```text
//! Link: <https://api.meridian.cloud/v1/people?start=200&max=100>; rel="next"
//! ```
//!
//! The target URL is opaque: clients must follow it verbatim rather than
//! construct their own offsets. This library provides the two pieces a
//! client needs:
//!
//! - [`next_link`] extracts the `rel="next"` target from response
//!   headers, resolving relative references against the request URL.
//! - [`follow`] turns a page-fetching closure into a lazy
//!   [`Stream`](futures_util::Stream) of items. Nothing is fetched until
//!   the stream is polled, at most one request is in flight, and no
//!   request is issued past the last page the consumer actually reads.
//!
//! Each item is yielded exactly once, in server order. The first failed
//! fetch ends the stream with that error.

use futures_util::stream::{self, Stream, TryStreamExt};
use http::HeaderMap;
use http::header::LINK;
use std::future::Future;
use thiserror::Error;
use url::Url;

/// Errors from `Link` header parsing
#[derive(Error, Debug)]
pub enum LinkError {
    /// A `Link` header contained bytes that are not valid UTF-8
    #[error("Link header is not valid UTF-8")]
    InvalidHeader,

    /// The `rel="next"` target could not be parsed as a URL
    #[error("Invalid next link {link:?}: {source}")]
    InvalidUrl {
        link: String,
        #[source]
        source: url::ParseError,
    },
}

/// One decoded page of results
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items on this page, in server order
    pub items: Vec<T>,
    /// Absolute URL of the next page, if the server advertised one
    pub next: Option<Url>,
}

/// Extract the `rel="next"` target from response headers.
///
/// Handles the header forms servers actually send: multiple `Link`
/// headers, multiple comma-separated link-values within one header,
/// quoted and unquoted `rel` parameters, and `rel` values that list
/// several relation types (`rel="prev next"`). Commas inside the
/// `<...>` target do not split link-values. Relative targets are
/// resolved against `base`, the URL the request was sent to.
///
/// Returns `Ok(None)` when no `next` relation is present.
pub fn next_link(headers: &HeaderMap, base: &Url) -> Result<Option<Url>, LinkError> {
    for header in headers.get_all(LINK) {
        let value = header.to_str().map_err(|_| LinkError::InvalidHeader)?;
        for link_value in split_link_values(value) {
            if let Some(target) = parse_link_value(link_value) {
                return base
                    .join(target)
                    .map(Some)
                    .map_err(|source| LinkError::InvalidUrl {
                        link: target.to_string(),
                        source,
                    });
            }
        }
    }
    Ok(None)
}

/// Split a `Link` header into link-values on commas outside `<...>`.
fn split_link_values(value: &str) -> impl Iterator<Item = &str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (idx, ch) in value.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&value[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);
    parts.into_iter()
}

/// Parse one link-value, returning the target if its rel includes `next`.
fn parse_link_value(link_value: &str) -> Option<&str> {
    let rest = link_value.trim().strip_prefix('<')?;
    let (target, params) = rest.split_once('>')?;

    for param in params.split(';') {
        let mut kv = param.splitn(2, '=');
        let name = kv.next().unwrap_or("").trim();
        let value = kv.next().unwrap_or("").trim().trim_matches('"');
        if name.eq_ignore_ascii_case("rel")
            && value
                .split_ascii_whitespace()
                .any(|rel| rel.eq_ignore_ascii_case("next"))
        {
            return Some(target);
        }
    }
    None
}

/// Lazily stream every item from a paginated listing.
///
/// `first` is the URL of the first page (or the error from building it,
/// which becomes the stream's first and only item). `fetch` issues one
/// GET and decodes one [`Page`]; it is invoked once per page, only as
/// the consumer demands more items.
pub fn follow<T, E, F, Fut>(
    first: Result<Url, E>,
    mut fetch: F,
) -> impl Stream<Item = Result<T, E>>
where
    F: FnMut(Url) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    stream::try_unfold(Some(first), move |state| {
        let step = match state {
            None => None,
            Some(Err(e)) => Some(Err(e)),
            Some(Ok(url)) => Some(Ok(fetch(url))),
        };
        async move {
            match step {
                None => Ok(None),
                Some(Err(e)) => Err(e),
                Some(Ok(page_fut)) => {
                    let Page { items, next } = page_fut.await?;
                    Ok(Some((
                        stream::iter(items.into_iter().map(Ok::<T, E>)),
                        next.map(Ok),
                    )))
                }
            }
        }
    })
    .try_flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use http::HeaderValue;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use test_case::test_case;

    fn base() -> Url {
        Url::parse("https://api.meridian.cloud/v1/people?max=2").unwrap()
    }

    fn headers_with_link(link: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(LINK, HeaderValue::from_str(link).unwrap());
        headers
    }

    #[test_case(
        r#"<https://api.meridian.cloud/v1/people?start=2&max=2>; rel="next""#,
        Some("https://api.meridian.cloud/v1/people?start=2&max=2");
        "absolute quoted rel"
    )]
    #[test_case(
        "</v1/people?start=2&max=2>; rel=next",
        Some("https://api.meridian.cloud/v1/people?start=2&max=2");
        "relative unquoted rel"
    )]
    #[test_case(
        r#"<https://api.meridian.cloud/v1/people?start=0>; rel="prev""#,
        None;
        "prev only"
    )]
    #[test_case(
        r#"<https://x.test/a>; rel="prev", <https://x.test/b>; rel="next""#,
        Some("https://x.test/b");
        "second of two link values"
    )]
    #[test_case(
        r#"<https://x.test/b>; title="page 2"; rel="prev next""#,
        Some("https://x.test/b");
        "rel token list"
    )]
    #[test_case(
        r#"<https://x.test/p?ids=a,b,c&start=4>; rel="next""#,
        Some("https://x.test/p?ids=a,b,c&start=4");
        "comma inside target"
    )]
    #[test_case(
        r#"<https://x.test/b>; REL="Next""#,
        Some("https://x.test/b");
        "case insensitive rel"
    )]
    fn next_link_cases(header: &str, expected: Option<&str>) {
        let found = next_link(&headers_with_link(header), &base()).unwrap();
        assert_eq!(found.map(|u| u.to_string()), expected.map(str::to_string));
    }

    #[test]
    fn next_link_absent_when_no_header() {
        assert!(next_link(&HeaderMap::new(), &base()).unwrap().is_none());
    }

    #[test]
    fn next_link_across_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append(
            LINK,
            HeaderValue::from_static(r#"<https://x.test/a>; rel="prev""#),
        );
        headers.append(
            LINK,
            HeaderValue::from_static(r#"<https://x.test/b>; rel="next""#),
        );
        let found = next_link(&headers, &base()).unwrap();
        assert_eq!(found.unwrap().as_str(), "https://x.test/b");
    }

    #[test]
    fn next_link_rejects_unparseable_target() {
        let headers = headers_with_link(r#"<//:no>; rel="next""#);
        let err = next_link(&headers, &base()).unwrap_err();
        assert!(matches!(err, LinkError::InvalidUrl { .. }));
    }

    fn page_url(start: usize) -> Url {
        Url::parse(&format!("https://x.test/items?start={start}")).unwrap()
    }

    /// Three pages of two items each, keyed by the `start` query param.
    async fn fetch_fixture(url: Url) -> Result<Page<u32>, String> {
        let start: usize = url
            .query_pairs()
            .find(|(k, _)| k == "start")
            .map(|(_, v)| v.parse().unwrap())
            .unwrap_or(0);
        let all: Vec<u32> = (0..6).collect();
        let items = all[start..(start + 2).min(all.len())].to_vec();
        let next = if start + 2 < all.len() {
            Some(page_url(start + 2))
        } else {
            None
        };
        Ok(Page { items, next })
    }

    #[tokio::test]
    async fn follow_yields_every_item_once_in_order() {
        let counter = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&counter);
        let items: Vec<u32> = follow(Ok(page_url(0)), move |url| {
            c.fetch_add(1, Ordering::SeqCst);
            fetch_fixture(url)
        })
        .try_collect()
        .await
        .unwrap();
        assert_eq!(items, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn follow_does_not_fetch_past_consumed_pages() {
        let counter = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&counter);
        let stream = follow(Ok(page_url(0)), move |url| {
            c.fetch_add(1, Ordering::SeqCst);
            fetch_fixture(url)
        });
        let first_two: Vec<Result<u32, String>> = stream.take(2).collect().await;
        assert_eq!(first_two.len(), 2);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn follow_is_lazy_until_polled() {
        let counter = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&counter);
        let stream = follow(Ok(page_url(0)), move |url| {
            c.fetch_add(1, Ordering::SeqCst);
            fetch_fixture(url)
        });
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        drop(stream);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn follow_surfaces_mid_stream_error_and_ends() {
        let mut stream = Box::pin(follow(Ok(page_url(0)), |url| async move {
            let start: usize = url
                .query_pairs()
                .find(|(k, _)| k == "start")
                .map(|(_, v)| v.parse().unwrap())
                .unwrap_or(0);
            if start >= 2 {
                return Err("backend gone".to_string());
            }
            fetch_fixture(url).await
        }));
        assert_eq!(stream.next().await, Some(Ok(0)));
        assert_eq!(stream.next().await, Some(Ok(1)));
        assert_eq!(stream.next().await, Some(Err("backend gone".to_string())));
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test]
    async fn follow_with_failed_first_url_yields_only_that_error() {
        let mut stream = Box::pin(follow(
            Err::<Url, String>("bad url".to_string()),
            |_| async move { fetch_fixture(page_url(0)).await },
        ));
        assert_eq!(stream.next().await, Some(Err("bad url".to_string())));
        assert_eq!(stream.next().await, None);
    }
}
