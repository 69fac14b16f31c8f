pub mod client;
#[cfg(test)]
pub mod stub;

pub use client::{GithubApi, HttpClient, list_events, list_repositories};
