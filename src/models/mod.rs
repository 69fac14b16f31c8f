//! Data types shared between the API client, aggregators and the page.
//!
//! - `github`: Repository, Event as decoded from the REST API
//! - `dashboard`: LanguageShare, TimelineDay, RepoStats, MostRecentRepo
//!   handed to the template

pub mod dashboard;
pub mod github;

pub use dashboard::*;
pub use github::*;
