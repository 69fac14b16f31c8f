//! GitHub REST API client.
//!
//! `GithubApi` is the only seam to the network: one authenticated GET that
//! yields the decoded JSON body. `HttpClient` is the reqwest-backed
//! implementation; tests swap in `github::stub::StubApi`.
//!
//! No retries, no backoff and no timeout. A transport failure, a non-2xx
//! status or a non-JSON body is returned as an error and fails the request.

use std::future::Future;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Event, Repository};

const ACCEPT_V3: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("github-dashboard/", env!("CARGO_PKG_VERSION"));

pub trait GithubApi: Clone + Send + Sync + 'static {
    /// GET `url` and return the JSON body verbatim.
    fn fetch_json(&self, url: &str) -> impl Future<Output = Result<Value>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .map_err(|e| AppError::Config(format!("access token is not a valid header value: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V3));

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

impl GithubApi for HttpClient {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        tracing::debug!(url, "GET");
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.json::<Value>().await?)
    }
}

fn decode<T: DeserializeOwned>(url: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| AppError::Decode {
        url: url.to_string(),
        source,
    })
}

pub async fn list_repositories<A: GithubApi>(api: &A, config: &Config) -> Result<Vec<Repository>> {
    let url = config.repos_url();
    let value = api.fetch_json(&url).await?;
    decode(&url, value)
}

/// One page of the account's event feed, newest first. Pages start at 1.
pub async fn list_events<A: GithubApi>(api: &A, config: &Config, page: u32) -> Result<Vec<Event>> {
    let url = config.events_url(page);
    let value = api.fetch_json(&url).await?;
    decode(&url, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::stub::StubApi;
    use axum::{Json, Router, http::StatusCode, routing::get};
    use serde_json::json;

    fn config() -> Config {
        Config {
            account: "octocat".to_string(),
            api_base_url: "http://api.test".to_string(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn decodes_repositories_and_ignores_extra_fields() {
        let api = StubApi::new().with(
            "http://api.test/users/octocat/repos",
            json!([{
                "name": "hello",
                "html_url": "https://github.com/octocat/hello",
                "language": null,
                "size": 12,
                "updated_at": "2023-01-01T00:00:00Z",
                "stargazers_count": 5
            }]),
        );

        let repos = list_repositories(&api, &config()).await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].language, None);
        assert_eq!(repos[0].size, 12);
    }

    #[tokio::test]
    async fn requests_the_numbered_event_page() {
        let api = StubApi::new().with(
            "http://api.test/users/octocat/events?page=2",
            json!([{ "type": "PushEvent", "created_at": "2023-05-01T10:00:00Z" }]),
        );

        let events = list_events(&api, &config(), 2).await.unwrap();
        assert!(events[0].is_push());
        assert_eq!(api.requests(), vec!["http://api.test/users/octocat/events?page=2"]);
    }

    #[tokio::test]
    async fn object_instead_of_list_is_a_decode_error() {
        let api = StubApi::new().with(
            "http://api.test/users/octocat/repos",
            json!({ "message": "Bad credentials" }),
        );

        let err = list_repositories(&api, &config()).await.unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }));
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let config = Config {
            access_token: "abc\ndef".to_string(),
            ..Config::default()
        };
        assert!(matches!(HttpClient::new(&config), Err(AppError::Config(_))));
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}")
    }

    async fn echo_headers(headers: HeaderMap) -> Json<Value> {
        let echoed = headers
            .iter()
            .map(|(name, value)| (name.to_string(), json!(value.to_str().unwrap_or_default())))
            .collect();
        Json(Value::Object(echoed))
    }

    #[tokio::test]
    async fn sends_auth_accept_and_user_agent_headers() {
        let base = serve(Router::new().route("/echo", get(echo_headers))).await;
        let client = HttpClient::new(&Config {
            access_token: "s3cret".to_string(),
            ..Config::default()
        })
        .unwrap();

        let echoed = client.fetch_json(&format!("{base}/echo")).await.unwrap();

        assert_eq!(echoed["authorization"], "Bearer s3cret");
        assert_eq!(echoed["accept"], "application/vnd.github.v3+json");
        assert_eq!(echoed["user-agent"], USER_AGENT);
    }

    #[tokio::test]
    async fn unauthorized_status_is_an_http_error() {
        let base = serve(Router::new().route("/users/octocat/repos", get(|| async { StatusCode::UNAUTHORIZED }))).await;
        let client = HttpClient::new(&Config::default()).unwrap();

        let err = client
            .fetch_json(&format!("{base}/users/octocat/repos"))
            .await
            .unwrap_err();

        assert!(matches!(&err, AppError::Http(e) if e.status() == Some(reqwest::StatusCode::UNAUTHORIZED)));
    }
}
