use super::model::Contributor;
use super::ContributorPages;
use crate::config::{self, Settings};
use crate::error::{Result, SyncError};
use crate::output::Reporter;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";
const RETRY_AFTER: &str = "retry-after";

/// Blocking client for the repository contributors endpoint
pub struct GitHubClient {
    http: Client,
    base_url: String,
    owner: String,
    repo: String,
    reporter: Reporter,
}

impl GitHubClient {
    pub fn new(settings: &Settings, reporter: Reporter) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(config::ACCEPT));

        match &settings.token {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                    SyncError::Config(format!(
                        "{} contains characters not allowed in an HTTP header",
                        config::TOKEN_ENV
                    ))
                })?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
                reporter.info(format!(
                    "Using authenticated requests with {}",
                    config::TOKEN_ENV
                ));
            }
            None => reporter.warn("Using unauthenticated requests (lower rate limits)"),
        }

        let http = Client::builder()
            .user_agent(config::USER_AGENT)
            .timeout(config::REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: settings.api_url.clone(),
            owner: settings.owner.clone(),
            repo: settings.repo.clone(),
            reporter,
        })
    }

    pub fn contributors_url(&self, page: u32, per_page: u32) -> String {
        format!(
            "{}/repos/{}/{}/contributors?per_page={}&page={}",
            self.base_url, self.owner, self.repo, per_page, page
        )
    }
}

impl ContributorPages for GitHubClient {
    fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Contributor>> {
        let url = self.contributors_url(page, per_page);
        self.reporter.info(format!("Fetching page {} from {}", page, url));

        let response = self.http.get(&url).send()?;
        let body = check_response(response)?;

        let contributors: Vec<Contributor> = serde_json::from_str(&body)?;
        self.reporter.debug(format!(
            "Page {} decoded ({} bytes, {} records)",
            page,
            body.len(),
            contributors.len()
        ));
        Ok(contributors)
    }
}

/// Turn rate limits and non-200 statuses into errors, otherwise return the body
fn check_response(response: Response) -> Result<String> {
    let status = response.status();

    if status == StatusCode::FORBIDDEN
        && header_value(&response, RATE_LIMIT_REMAINING).as_deref() == Some("0")
    {
        return Err(SyncError::RateLimited {
            reset: header_value(&response, RATE_LIMIT_RESET)
                .unwrap_or_else(|| "unknown".to_string()),
        });
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(SyncError::TooManyRequests {
            retry_after: header_value(&response, RETRY_AFTER)
                .unwrap_or_else(|| "unknown".to_string()),
        });
    }

    if status != StatusCode::OK {
        let body = response.text().unwrap_or_default();
        return Err(SyncError::Api {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response.text()?)
}

fn header_value(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
}
