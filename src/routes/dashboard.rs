//! Dashboard page.
//!
//! GET|POST / - fetches the account's repositories and event feed, runs the
//! aggregators and renders the result. The request body is never read.
//!
//! Headers: `Cache-Control: public, max-age=<cache_max_age>` and
//! `X-Content-Type-Options: nosniff`.

use askama::Template;
use axum::{
    Router,
    extract::State,
    http::{
        HeaderValue,
        header::{CACHE_CONTROL, X_CONTENT_TYPE_OPTIONS},
    },
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Utc;

use crate::error::{AppError, Result};
use crate::github::GithubApi;
use crate::models::{Dashboard, LanguageShare, MostRecentRepo, Repository};
use crate::routes::AppState;
use crate::stats;

pub fn routes<A: GithubApi>(state: AppState<A>) -> Router {
    Router::new()
        .route("/", get(show_dashboard::<A>).post(show_dashboard::<A>))
        .with_state(state)
}

/// One bar of the activity chart.
#[derive(Debug)]
struct TimelineBar {
    date: String,
    count: u32,
    /// Percent of the busiest day
    width: u32,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    account: String,
    languages: Vec<LanguageShare>,
    timeline: Vec<TimelineBar>,
    repos: Vec<Repository>,
    most_recent: Option<MostRecentRepo>,
    total_repos: usize,
    total_size: f64,
}

impl IndexTemplate {
    fn new(account: &str, dashboard: Dashboard) -> Self {
        let busiest = dashboard.timeline.iter().map(|d| d.count).max().unwrap_or(0).max(1);
        let timeline = dashboard
            .timeline
            .into_iter()
            .map(|day| TimelineBar {
                width: day.count * 100 / busiest,
                date: day.date,
                count: day.count,
            })
            .collect();

        Self {
            account: account.to_string(),
            languages: dashboard.languages,
            timeline,
            repos: dashboard.top_repos,
            most_recent: dashboard.most_recent,
            total_repos: dashboard.total_repos,
            total_size: dashboard.total_size_mb,
        }
    }
}

async fn show_dashboard<A: GithubApi>(State(state): State<AppState<A>>) -> Result<Response> {
    let dashboard = stats::collect(&state.api, &state.config, Utc::now()).await?;
    let html = IndexTemplate::new(&state.config.account, dashboard).render()?;

    let cache_control = HeaderValue::from_str(&format!("public, max-age={}", state.config.cache_max_age))
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok((
        [
            (CACHE_CONTROL, cache_control),
            (X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        ],
        Html(html),
    )
        .into_response())
}
