//! Aggregations over the data fetched for one request.
//!
//! - `languages`: share of repositories per primary language
//! - `timeline`: push events per day over the last 30 days (paginated scan)
//! - `top_repos`: the six most recently updated repositories
//! - `summary`: repository count, total size, most recently updated
//!
//! `collect` runs the whole pipeline sequentially; nothing is cached
//! between requests.

pub mod languages;
pub mod summary;
pub mod timeline;
pub mod top_repos;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::github::{GithubApi, list_repositories};
use crate::models::Dashboard;

pub use languages::language_distribution;
pub use summary::repo_stats;
pub use timeline::commit_timeline;
pub use top_repos::top_repositories;

/// Rounds half away from zero to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub async fn collect<A: GithubApi>(api: &A, config: &Config, now: DateTime<Utc>) -> Result<Dashboard> {
    let repos = list_repositories(api, config).await?;
    let timeline = commit_timeline(api, config, now).await?;

    let (total_repos, total_size_mb, most_recent) = match repo_stats(&repos) {
        Ok(stats) => (stats.total_repos, stats.total_size_mb, Some(stats.most_recent)),
        Err(AppError::NoRepositories) => {
            tracing::warn!(account = %config.account, "account has no repositories");
            (0, 0.0, None)
        }
        Err(e) => return Err(e),
    };

    Ok(Dashboard {
        languages: language_distribution(&repos),
        timeline,
        top_repos: top_repositories(&repos),
        total_repos,
        total_size_mb,
        most_recent,
    })
}
