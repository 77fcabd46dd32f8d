use std::path::PathBuf;
use thiserror::Error;

/// Main error type for contributors-sync
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API rate limit exceeded! Rate limit resets at: {reset}")]
    RateLimited { reset: String },

    #[error("GitHub API rate limit exceeded (429 Too Many Requests)! Retry after: {retry_after} seconds")]
    TooManyRequests { retry_after: String },

    #[error("GitHub API request failed with status {status}\nResponse: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response from GitHub API: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No contributors found")]
    NoContributors,

    #[error("{} not found", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("Could not find markers {start} and {end}")]
    MarkersNotFound {
        start: &'static str,
        end: &'static str,
    },

    #[error("End marker {end} appears before start marker {start}")]
    MarkersOutOfOrder {
        start: &'static str,
        end: &'static str,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SyncError {
    /// Follow-up advice printed after the error itself
    pub fn hints(&self) -> Vec<String> {
        match self {
            SyncError::RateLimited { .. } => vec![
                "Please set GITHUB_TOKEN environment variable for higher rate limits.".to_string(),
            ],
            SyncError::TooManyRequests { .. } => vec![
                "Please wait before retrying or set GITHUB_TOKEN for higher rate limits."
                    .to_string(),
            ],
            SyncError::MarkersNotFound { start, end } => vec![format!(
                "Please add {} and {} where you want the contributors table.",
                start, end
            )],
            SyncError::DocumentNotFound(_) => {
                vec!["Run from the repository root or pass --readme <PATH>.".to_string()]
            }
            _ => Vec::new(),
        }
    }
}

/// Result type alias for contributors-sync operations
pub type Result<T> = std::result::Result<T, SyncError>;
