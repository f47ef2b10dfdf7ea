use serde::{Deserialize, Serialize};

/// Base URL used when the configuration file does not provide one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8082";

/// Application configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Base URL of the task API server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl BoardConfig {
    /// Creates a configuration pointing at the given server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Returns the task collection endpoint, `<base_url>/api/tasks`.
    pub fn tasks_url(&self) -> String {
        format!("{}/api/tasks", self.base_url.trim_end_matches('/'))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = BoardConfig::default();
        assert_eq!(config.tasks_url(), "http://localhost:8082/api/tasks");
    }

    #[test]
    fn test_tasks_url_trims_trailing_slash() {
        let config = BoardConfig::with_base_url("https://example.com/");
        assert_eq!(config.tasks_url(), "https://example.com/api/tasks");
    }

    #[test]
    fn test_missing_field_falls_back_to_default() {
        let config: BoardConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
