use chrono::NaiveDateTime;

use crate::error::{AppError, Result};
use crate::models::{MostRecentRepo, RepoStats, Repository};
use crate::stats::round2;

const UPDATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Repository count, total size in megabytes and the most recently updated
/// repository. Fails with `NoRepositories` on an empty slice.
pub fn repo_stats(repos: &[Repository]) -> Result<RepoStats> {
    // First of the maxima wins on ties.
    let most_recent = repos
        .iter()
        .reduce(|best, repo| if repo.updated_at > best.updated_at { repo } else { best })
        .ok_or(AppError::NoRepositories)?;

    let total_kb: u64 = repos.iter().map(|r| r.size).sum();

    Ok(RepoStats {
        total_repos: repos.len(),
        total_size_mb: round2(total_kb as f64 / 1024.0),
        most_recent: MostRecentRepo {
            name: most_recent.name.clone(),
            url: most_recent.html_url.clone(),
            updated_at: format_day(&most_recent.updated_at)?,
        },
    })
}

/// `2023-03-01T12:00:00Z` -> `01/03/2023`
fn format_day(timestamp: &str) -> Result<String> {
    let parsed = NaiveDateTime::parse_from_str(timestamp, UPDATED_AT_FORMAT)
        .map_err(|_| AppError::InvalidTimestamp(timestamp.to_string()))?;
    Ok(parsed.format("%d/%m/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, size: u64, updated_at: &str) -> Repository {
        Repository {
            name: name.to_string(),
            html_url: format!("https://github.com/u/{name}"),
            language: Some("Rust".to_string()),
            size,
            updated_at: updated_at.to_string(),
        }
    }

    #[test]
    fn totals_and_most_recent() {
        let repos = [
            repo("repo1", 100, "2023-01-01T00:00:00Z"),
            repo("repo2", 200, "2023-03-01T08:15:00Z"),
            repo("repo3", 300, "2023-02-01T00:00:00Z"),
        ];

        let stats = repo_stats(&repos).unwrap();
        assert_eq!(stats.total_repos, 3);
        assert_eq!(stats.total_size_mb, 0.59);
        assert_eq!(stats.most_recent.name, "repo2");
        assert_eq!(stats.most_recent.url, "https://github.com/u/repo2");
        assert_eq!(stats.most_recent.updated_at, "01/03/2023");
    }

    #[test]
    fn size_is_converted_from_kilobytes() {
        let repos = [repo("a", 1024, "2023-01-01T00:00:00Z"), repo("b", 512, "2023-01-01T00:00:00Z")];
        assert_eq!(repo_stats(&repos).unwrap().total_size_mb, 1.5);
    }

    #[test]
    fn ties_pick_the_first_repository() {
        let repos = [
            repo("first", 1, "2024-06-30T23:59:59Z"),
            repo("second", 1, "2024-06-30T23:59:59Z"),
        ];
        assert_eq!(repo_stats(&repos).unwrap().most_recent.name, "first");
    }

    #[test]
    fn empty_input_is_reported() {
        assert!(matches!(repo_stats(&[]), Err(AppError::NoRepositories)));
    }

    #[test]
    fn malformed_timestamp_is_reported() {
        let repos = [repo("a", 1, "yesterday")];
        assert!(matches!(repo_stats(&repos), Err(AppError::InvalidTimestamp(ts)) if ts == "yesterday"));
    }
}
