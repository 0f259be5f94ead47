//! Test doubles for the search transport.
//!
//! [`ScriptedTransport`] answers requests from a fixed list of responses and
//! records every URL it was asked for, so pagination can be exercised without
//! network access.

use crate::search::{RawResponse, SearchError, SearchTransport};
use std::collections::VecDeque;
use std::sync::Mutex;
use url::Url;

/// Transport that replays canned responses in order.
///
/// Once the script is exhausted every further request receives a 404.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    requests: Mutex<Vec<Url>>,
}

impl ScriptedTransport {
    /// Creates a transport that serves `responses` in order.
    pub fn new(responses: impl IntoIterator<Item = RawResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns the URLs requested so far, in order.
    pub fn requests(&self) -> Vec<Url> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl SearchTransport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, SearchError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(url.clone());

        let response = self
            .responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        Ok(response.unwrap_or_else(|| RawResponse::new(404, r#"{"message": "Not Found"}"#)))
    }
}
