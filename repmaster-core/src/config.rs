use std::env;

pub const DEFAULT_DATABASE_URL: &str = "repmaster.db";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Reads `DATABASE_URL` and `REPMASTER_LOG`, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            log_level: env::var("REPMASTER_LOG").unwrap_or(defaults.log_level),
        }
    }

    pub fn with_database_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.database_url = url;
        }
        self
    }

    pub fn with_log_level(mut self, level: Option<String>) -> Self {
        if let Some(level) = level {
            self.log_level = level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_values() {
        let config = Config::default()
            .with_database_url(Some(":memory:".to_string()))
            .with_log_level(None);
        assert_eq!(config.database_url, ":memory:");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
