use crate::models::Repository;

pub const TOP_REPO_COUNT: usize = 6;

/// Most recently updated repositories, newest first.
///
/// `updated_at` is compared as a string, which is chronological for the
/// provider's fixed `YYYY-MM-DDTHH:MM:SSZ` format. The sort is stable, so
/// ties keep their listing order.
pub fn top_repositories(repos: &[Repository]) -> Vec<Repository> {
    let mut sorted = repos.to_vec();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted.truncate(TOP_REPO_COUNT);
    sorted
}
