use crate::cli::Cli;
use crate::error::{Result, SyncError};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OWNER: &str = "timlinux";
pub const DEFAULT_REPO: &str = "nixmywindows";
pub const DEFAULT_README: &str = "README.md";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Contributors requested per page (GitHub's maximum)
pub const PER_PAGE: u32 = 100;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const USER_AGENT: &str = "nixmywindows-contributors-generator";
pub const ACCEPT: &str = "application/vnd.github+json";

/// Fully resolved settings for a single run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub owner: String,
    pub repo: String,
    pub token: Option<String>,
    pub api_url: String,
    pub readme: PathBuf,
    pub dry_run: bool,
}

impl Settings {
    /// Build settings from the command line and the process environment
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    /// Build settings with an explicit environment lookup
    pub fn resolve<F>(cli: &Cli, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let owner = cli.owner.trim();
        let repo = cli.repo.trim();

        if owner.is_empty() {
            return Err(SyncError::Config("Repository owner must not be empty".to_string()));
        }
        if repo.is_empty() {
            return Err(SyncError::Config("Repository name must not be empty".to_string()));
        }

        let token = env(TOKEN_ENV)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let api_url = env(API_URL_ENV)
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Settings {
            owner: owner.to_string(),
            repo: repo.to_string(),
            token,
            api_url,
            readme: cli.readme.clone(),
            dry_run: cli.dry_run,
        })
    }

    /// `owner/repo` slug used in log output
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
