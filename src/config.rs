//! Runtime configuration.
//!
//! Built once in `main` from the command line (and environment) and shared
//! with the API client and the dashboard route.

use std::path::{Path, PathBuf};

use clap::Parser;

/// GitHub dashboard - language, activity and repository stats for one account
#[derive(Parser, Debug)]
#[command(name = "github-dashboard")]
#[command(about = "Serve a single-page GitHub activity dashboard", long_about = None)]
pub struct Cli {
    /// Personal access token sent as a bearer token
    #[arg(long, env = "GITHUB_ACCESS_TOKEN", hide_env_values = true, default_value = "")]
    pub token: String,

    /// Account whose public data is shown
    #[arg(short, long, env = "GITHUB_USERNAME", default_value = "")]
    pub username: String,

    /// Base URL of the REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to run the server on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Give up on the event feed after this many pages
    #[arg(long, default_value = "10")]
    pub max_event_pages: u32,

    /// Seconds the rendered page may be cached
    #[arg(long, default_value = "86400")]
    pub cache_max_age: u64,
}

/// Loads `KEY=value` lines from `<dir>/.env` into the process environment
/// so the `env` fallbacks on `Cli` pick them up. Variables already set are
/// left alone. Returns the file's path when one was loaded.
pub fn load_env_file(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(".env");
    dotenvy::from_path(&path).ok().map(|()| path)
}

#[derive(Debug, Clone)]
pub struct Config {
    pub access_token: String,
    pub account: String,
    pub api_base_url: String,
    pub max_event_pages: u32,
    pub cache_max_age: u64,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            access_token: cli.token.clone(),
            account: cli.username.clone(),
            api_base_url: cli.api_url.trim_end_matches('/').to_string(),
            max_event_pages: cli.max_event_pages,
            cache_max_age: cli.cache_max_age,
        }
    }

    pub fn repos_url(&self) -> String {
        format!("{}/users/{}/repos", self.api_base_url, self.account)
    }

    pub fn events_url(&self, page: u32) -> String {
        format!("{}/users/{}/events?page={}", self.api_base_url, self.account, page)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            account: String::new(),
            api_base_url: "https://api.github.com".to_string(),
            max_event_pages: 10,
            cache_max_age: 86400,
        }
    }
}
