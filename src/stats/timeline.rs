//! Push activity over the last 30 days.
//!
//! Walks the account's event feed page by page (newest first) and counts
//! push events per UTC calendar day. The scan stops at the first event
//! older than the window, or at an empty page. Every event is checked
//! against the cutoff with its own timestamp, push or not.
//!
//! Out-of-order or far-reaching feeds would never trip either stop
//! condition, so the scan is capped at `Config::max_event_pages` and
//! reports `PageLimitExceeded` when the cap is hit.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::github::{GithubApi, list_events};
use crate::models::{Event, TimelineDay};

pub const WINDOW_DAYS: i64 = 30;

pub async fn commit_timeline<A: GithubApi>(api: &A, config: &Config, now: DateTime<Utc>) -> Result<Vec<TimelineDay>> {
    let cutoff = now - Duration::days(WINDOW_DAYS);
    let mut timeline = Timeline::default();

    for page in 1..=config.max_event_pages {
        let events = list_events(api, config, page).await?;
        if events.is_empty() {
            tracing::debug!(page, "event feed exhausted");
            return Ok(timeline.into_days());
        }

        if !timeline.record_page(&events, cutoff) {
            tracing::debug!(page, %cutoff, "reached events older than the window");
            return Ok(timeline.into_days());
        }
    }

    Err(AppError::PageLimitExceeded(config.max_event_pages))
}

/// Per-day push counts in first-seen order.
#[derive(Debug, Default)]
struct Timeline {
    days: Vec<TimelineDay>,
    index: HashMap<String, usize>,
}

impl Timeline {
    /// Returns false once an event before `cutoff` is seen; the rest of
    /// the page is skipped.
    fn record_page(&mut self, events: &[Event], cutoff: DateTime<Utc>) -> bool {
        for event in events {
            if event.created_at < cutoff {
                return false;
            }
            if event.is_push() {
                self.add_push(event.created_at.format("%Y-%m-%d").to_string());
            }
        }
        true
    }

    fn add_push(&mut self, date: String) {
        match self.index.get(&date) {
            Some(&i) => self.days[i].count += 1,
            None => {
                self.index.insert(date.clone(), self.days.len());
                self.days.push(TimelineDay { date, count: 1 });
            }
        }
    }

    fn into_days(self) -> Vec<TimelineDay> {
        self.days
    }
}
