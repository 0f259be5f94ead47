//! Merged pull request retrieval via the GitHub issue search API.
//!
//! Pages are requested one after another, following the `rel="next"` entry
//! of each response's `Link` header until none remains. A page request that
//! does not return HTTP 200 is logged and ends pagination; whatever was
//! collected up to that point is kept.

mod error;
mod item;
mod link;
mod transport;

pub use error::SearchError;
pub use item::{Label, PullRequestItem};
pub use link::extract_next_url;
pub use transport::{GitHubTransport, RawResponse, SearchTransport};

use crate::query::SearchQuery;
use http::HeaderMap;
use item::SearchResponse;
use tracing::{debug, error, info, warn};
use url::Url;

/// Path of the issue search endpoint relative to the API base URL.
const SEARCH_PATH: &str = "search/issues";

/// One page of search results.
#[derive(Debug, Clone)]
pub struct SearchPage {
    /// Items on this page, in API order. Empty for failed requests.
    pub items: Vec<PullRequestItem>,
    /// Response headers, used to locate the next page.
    pub headers: HeaderMap,
    /// HTTP status of the response.
    pub status: u16,
}

impl SearchPage {
    /// Returns true if the page was served with HTTP 200.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Everything collected by [`fetch_all`].
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    /// All items across pages, in page order then in-page order.
    pub items: Vec<PullRequestItem>,
    /// Number of page requests issued.
    pub pages: usize,
    /// Whether pagination stopped because a page request failed.
    pub truncated: bool,
}

/// Builds the URL of the first search page.
///
/// Format: `{api_url}/search/issues?q={query}&per_page={per_page}`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidUrl`] if the resulting URL is invalid.
pub fn search_url(api_url: &Url, query: &SearchQuery, per_page: u8) -> Result<Url, SearchError> {
    let endpoint = format!("{}/{}", api_url.as_str().trim_end_matches('/'), SEARCH_PATH);
    let url = Url::parse_with_params(
        &endpoint,
        &[
            ("q", query.to_query_string()),
            ("per_page", per_page.to_string()),
        ],
    )?;
    Ok(url)
}

/// Fetches a single page of search results.
///
/// On HTTP 200 the items under `items` are returned (none if the key is
/// absent). Any other status is logged together with the response body and
/// produces an empty page; it is not an error.
///
/// # Errors
///
/// Returns [`SearchError`] if the request could not be performed or a
/// successful body is not valid search JSON.
pub async fn fetch_page<T: SearchTransport>(
    transport: &T,
    url: &Url,
) -> Result<SearchPage, SearchError> {
    let response = transport.get(url).await?;

    if !response.is_ok() {
        error!(
            status = response.status,
            body = %response.body,
            "Search request failed"
        );
        return Ok(SearchPage {
            items: Vec::new(),
            headers: response.headers,
            status: response.status,
        });
    }

    let parsed: SearchResponse = serde_json::from_str(&response.body)?;
    Ok(SearchPage {
        items: parsed.items,
        headers: response.headers,
        status: response.status,
    })
}

/// Fetches every page of results, starting at `first_url`.
///
/// Requests are issued strictly in sequence.
///
/// # Errors
///
/// Returns [`SearchError`] if a request cannot be performed, a body cannot
/// be decoded or a next-page link is not a valid URL.
pub async fn fetch_all<T: SearchTransport>(
    transport: &T,
    first_url: Url,
) -> Result<SearchResults, SearchError> {
    let mut results = SearchResults::default();
    let mut next = Some(first_url);

    while let Some(url) = next {
        debug!(url = %url, "Fetching search page");
        let page = fetch_page(transport, &url).await?;
        results.pages += 1;

        if !page.is_success() {
            warn!(
                status = page.status,
                collected = results.items.len(),
                "Stopping pagination after failed page request"
            );
            results.truncated = true;
            break;
        }

        if !page.items.is_empty() {
            info!(count = page.items.len(), "Fetched pull requests");
        }

        next = extract_next_url(&page.headers)
            .map(|link| Url::parse(&link))
            .transpose()?;
        results.items.extend(page.items);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTransport;

    fn first_url() -> Url {
        Url::parse("https://api.github.com/search/issues?q=test").unwrap()
    }

    #[test]
    fn test_search_url() {
        let api_url = Url::parse("https://api.github.com").unwrap();
        let query = SearchQuery::new("octo/demo", "2025-01-01", "2025-01-31", None);

        let url = search_url(&api_url, &query, 100).unwrap();

        assert_eq!(url.path(), "/search/issues");
        let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            params,
            vec![
                ("q".to_string(), query.to_query_string()),
                ("per_page".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_url_keeps_base_path() {
        let api_url = Url::parse("https://github.example.com/api/v3/").unwrap();
        let query = SearchQuery::new("octo/demo", "2025-01-01", "2025-01-31", None);

        let url = search_url(&api_url, &query, 50).unwrap();

        assert_eq!(url.path(), "/api/v3/search/issues");
    }

    #[tokio::test]
    async fn test_fetch_page_returns_items() {
        let transport = ScriptedTransport::new([RawResponse::new(
            200,
            r#"{"items": [{"number": 1, "title": "One"}, {"number": 2, "title": "Two"}]}"#,
        )
        .with_link(r#"<https://test.com/?page=2>; rel="next""#)]);

        let page = fetch_page(&transport, &first_url()).await.unwrap();

        assert!(page.is_success());
        assert_eq!(
            page.items.iter().map(|i| i.number).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(
            extract_next_url(&page.headers).as_deref(),
            Some("https://test.com/?page=2")
        );
        assert_eq!(transport.requests(), vec![first_url()]);
    }

    #[tokio::test]
    async fn test_fetch_page_missing_items_is_empty() {
        let transport = ScriptedTransport::new([RawResponse::new(200, "{}")]);

        let page = fetch_page(&transport, &first_url()).await.unwrap();

        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_page_not_found_is_empty() {
        let transport =
            ScriptedTransport::new([RawResponse::new(404, r#"{"message": "Not Found"}"#)]);

        let page = fetch_page(&transport, &first_url()).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.status, 404);
    }

    #[tokio::test]
    async fn test_fetch_page_server_error_is_empty() {
        let transport = ScriptedTransport::new([RawResponse::new(500, "")]);

        let page = fetch_page(&transport, &first_url()).await.unwrap();

        assert!(page.items.is_empty());
        assert!(!page.is_success());
    }

    #[tokio::test]
    async fn test_fetch_page_invalid_json() {
        let transport = ScriptedTransport::new([RawResponse::new(200, "<html>")]);

        let result = fetch_page(&transport, &first_url()).await;

        assert!(matches!(result, Err(SearchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_all_follows_next_links() {
        let transport = ScriptedTransport::new([
            RawResponse::new(200, r#"{"items": [{"number": 1, "title": "One"}]}"#)
                .with_link(r#"<https://test.com/page2>; rel="next", <https://test.com/page3>; rel="last""#),
            RawResponse::new(200, r#"{"items": [{"number": 2, "title": "Two"}]}"#)
                .with_link(r#"<https://test.com/page3>; rel="next", <https://test.com/page3>; rel="last""#),
            RawResponse::new(200, r#"{"items": [{"number": 3, "title": "Three"}]}"#)
                .with_link(r#"<https://test.com/page1>; rel="first""#),
        ]);

        let results = fetch_all(&transport, first_url()).await.unwrap();

        assert_eq!(results.pages, 3);
        assert!(!results.truncated);
        assert_eq!(
            results.items.iter().map(|i| i.number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            transport.requests(),
            vec![
                first_url(),
                Url::parse("https://test.com/page2").unwrap(),
                Url::parse("https://test.com/page3").unwrap(),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_all_stops_on_failed_page() {
        let transport = ScriptedTransport::new([
            RawResponse::new(200, r#"{"items": [{"number": 1, "title": "One"}]}"#)
                .with_link(r#"<https://test.com/page2>; rel="next""#),
            RawResponse::new(502, "Bad Gateway")
                .with_link(r#"<https://test.com/page3>; rel="next""#),
            RawResponse::new(200, r#"{"items": [{"number": 3, "title": "Three"}]}"#),
        ]);

        let results = fetch_all(&transport, first_url()).await.unwrap();

        assert_eq!(results.pages, 2);
        assert!(results.truncated);
        assert_eq!(results.items.len(), 1);
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_all_invalid_next_link() {
        let transport = ScriptedTransport::new([RawResponse::new(
            200,
            r#"{"items": []}"#,
        )
        .with_link(r#"<not a url>; rel="next""#)]);

        let result = fetch_all(&transport, first_url()).await;

        assert!(matches!(result, Err(SearchError::InvalidUrl(_))));
    }
}
