//! HTTP surface - a single dashboard page.
//!
//! - `dashboard`: GET and POST `/`, renders `templates/index.html`

pub mod dashboard;

use std::sync::Arc;

use axum::Router;

use crate::config::Config;
use crate::github::GithubApi;

/// Per-process state handed to every request. Holds no request data.
#[derive(Debug, Clone)]
pub struct AppState<A> {
    pub config: Arc<Config>,
    pub api: A,
}

impl<A: GithubApi> AppState<A> {
    pub fn new(config: Arc<Config>, api: A) -> Self {
        Self { config, api }
    }
}

pub fn create_router<A: GithubApi>(state: AppState<A>) -> Router {
    Router::new().merge(dashboard::routes(state))
}
