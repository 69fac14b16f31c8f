use super::Repository;

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub language: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineDay {
    /// `YYYY-MM-DD`, UTC
    pub date: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MostRecentRepo {
    pub name: String,
    pub url: String,
    /// `DD/MM/YYYY`
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepoStats {
    pub total_repos: usize,
    pub total_size_mb: f64,
    pub most_recent: MostRecentRepo,
}

/// Everything the page shows, computed fresh for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub languages: Vec<LanguageShare>,
    pub timeline: Vec<TimelineDay>,
    pub top_repos: Vec<Repository>,
    pub total_repos: usize,
    pub total_size_mb: f64,
    pub most_recent: Option<MostRecentRepo>,
}
