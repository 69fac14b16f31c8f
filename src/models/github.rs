use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event type tag for commits pushed to a repository.
pub const PUSH_EVENT: &str = "PushEvent";

/// One element of `/users/{account}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub language: Option<String>,
    /// Kilobytes
    pub size: u64,
    pub updated_at: String,
}

/// One element of `/users/{account}/events`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn is_push(&self) -> bool {
        self.kind == PUSH_EVENT
    }
}
