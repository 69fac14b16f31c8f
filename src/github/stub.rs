//! In-memory `GithubApi` for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::github::GithubApi;

/// Serves canned JSON per URL and records every URL requested.
/// An unknown URL fails like a malformed upstream body would.
#[derive(Debug, Clone, Default)]
pub struct StubApi {
    responses: Arc<HashMap<String, Value>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: Value) -> Self {
        Arc::make_mut(&mut self.responses).insert(url.to_string(), body);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl GithubApi for StubApi {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some(body) => Ok(body.clone()),
            None => Err(AppError::Decode {
                url: url.to_string(),
                source: <serde_json::Error as serde::de::Error>::custom("no stubbed response"),
            }),
        }
    }
}
