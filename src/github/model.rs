use serde::Deserialize;

/// Base for profile links when the API omits `html_url`
pub const PROFILE_BASE_URL: &str = "https://github.com";

/// One entry from `GET /repos/{owner}/{repo}/contributors`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contributor {
    #[serde(default = "unknown_login")]
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub contributions: u64,
}

fn unknown_login() -> String {
    "unknown".to_string()
}

impl Contributor {
    #[cfg(test)]
    pub fn new(login: impl Into<String>, contributions: u64) -> Self {
        Self {
            login: login.into(),
            avatar_url: String::new(),
            html_url: None,
            contributions,
        }
    }

    /// Profile link, synthesized from the login when the API left it out
    pub fn profile_url(&self) -> String {
        match &self.html_url {
            Some(url) => url.clone(),
            None => format!("{}/{}", PROFILE_BASE_URL, self.login),
        }
    }
}
