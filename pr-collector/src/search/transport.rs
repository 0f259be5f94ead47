//! HTTP transport for search requests.

use super::SearchError;
use crate::config::RunnerConfig;
use http::header::{AUTHORIZATION, LINK};
use http::{HeaderMap, HeaderValue};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use std::future::Future;
use url::Url;

/// An unprocessed HTTP response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Full response header set.
    pub headers: HeaderMap,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// Creates a response with no headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Sets the `Link` header. Values that are not valid header text are ignored.
    pub fn with_link(mut self, link: &str) -> Self {
        if let Ok(value) = HeaderValue::from_str(link) {
            self.headers.insert(LINK, value);
        }
        self
    }

    /// Returns true for HTTP 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Issues a single authenticated GET against a fully-qualified URL.
pub trait SearchTransport {
    /// Performs the request and returns the response regardless of status.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] only when no response could be obtained.
    fn get(&self, url: &Url) -> impl Future<Output = Result<RawResponse, SearchError>> + Send;
}

/// [`SearchTransport`] backed by an octocrab client.
#[derive(Clone)]
pub struct GitHubTransport {
    octocrab: Octocrab,
}

impl GitHubTransport {
    /// Builds a client for the configured API host.
    ///
    /// Requests carry `Authorization: token <TOKEN>` and are sent exactly
    /// once; octocrab's retry layer is disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the octocrab client cannot be built.
    pub fn new(config: &RunnerConfig) -> Result<Self, SearchError> {
        let octocrab = Octocrab::builder()
            .base_uri(config.api_url().as_str())?
            .add_header(AUTHORIZATION, format!("token {}", config.token()))
            .add_retry_config(RetryConfig::None)
            .build()?;
        Ok(Self { octocrab })
    }
}

impl SearchTransport for GitHubTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, SearchError> {
        let response = self.octocrab._get(url.as_str()).await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = self.octocrab.body_to_string(response).await?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SearchQuery;
    use crate::search::{extract_next_url, fetch_page};
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::{Arc, Mutex};

    /// Minimal HTTP/1.1 server answering every request with the same response.
    ///
    /// Returns the base URL and the request heads received so far.
    fn serve(status: &str, extra_headers: &str, body: &str) -> (String, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\n{extra_headers}content-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let received = Arc::clone(&requests);
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut head = String::new();
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                        break;
                    }
                    head.push_str(&line);
                }
                received.lock().unwrap().push(head);
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        (format!("http://{address}"), requests)
    }

    fn transport_for(base_url: &str) -> GitHubTransport {
        let query = SearchQuery::new("octo/demo", "2025-01-01", "2025-01-31", None);
        let config = RunnerConfig::new(query, Some("test-token".to_string()))
            .unwrap()
            .with_api_url(base_url)
            .unwrap();
        GitHubTransport::new(&config).unwrap()
    }

    fn header_value(head: &str, name: &str) -> Option<String> {
        head.lines().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }

    #[tokio::test]
    async fn test_sends_token_authorization() {
        let (base_url, requests) = serve("200 OK", "", r#"{"items": [{"number": 1, "title": "One"}]}"#);
        let transport = transport_for(&base_url);
        let url = Url::parse(&format!("{base_url}/search/issues?q=test")).unwrap();

        let page = fetch_page(&transport, &url).await.unwrap();

        assert_eq!(page.items.len(), 1);
        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].starts_with("GET /search/issues?q=test "));
        assert_eq!(
            header_value(&requests[0], "authorization").as_deref(),
            Some("token test-token")
        );
    }

    #[tokio::test]
    async fn test_not_found_is_returned_as_response() {
        let (base_url, _requests) = serve(
            "404 Not Found",
            "link: <https://api.github.com/page2>; rel=\"next\"\r\n",
            r#"{"message": "Not Found"}"#,
        );
        let transport = transport_for(&base_url);
        let url = Url::parse(&format!("{base_url}/search/issues")).unwrap();

        let response = transport.get(&url).await.unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(response.body, r#"{"message": "Not Found"}"#);
        assert_eq!(
            extract_next_url(&response.headers).as_deref(),
            Some("https://api.github.com/page2")
        );

        let page = fetch_page(&transport, &url).await.unwrap();
        assert_eq!(page.status, 404);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_requested_once() {
        let (base_url, requests) = serve("500 Internal Server Error", "", "{}");
        let transport = transport_for(&base_url);
        let url = Url::parse(&format!("{base_url}/search/issues")).unwrap();

        let page = fetch_page(&transport, &url).await.unwrap();

        assert_eq!(page.status, 500);
        assert!(page.items.is_empty());
        assert_eq!(requests.lock().unwrap().len(), 1);
    }
}
