/// Environment variable naming the API base URL.
pub const API_URL_ENV: &str = "STUDY_SPACES_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim().trim_end_matches('/').to_string() }
    }

    /// Runtime environment first (native), then the value baked in at build
    /// time (web), then [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        std::env::var(API_URL_ENV)
            .ok()
            .or_else(|| option_env!("STUDY_SPACES_API_URL").map(String::from))
            .filter(|url| !url.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes() {
        let config = ApiConfig::new(" https://api.example.edu// ");
        assert_eq!(config.base_url(), "https://api.example.edu");
        assert_eq!(config.endpoint("/api/submissions"), "https://api.example.edu/api/submissions");
    }

    #[test]
    fn default_points_at_local_api() {
        assert_eq!(ApiConfig::default().base_url(), DEFAULT_API_URL);
    }
}
