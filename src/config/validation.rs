use crate::config::types::Config;
use crate::ConfigError;

/// Validates a parsed configuration.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.crawler.crawl_limit == 0 {
        return Err(ConfigError::Validation(
            "crawl-limit must be at least 1".to_string(),
        ));
    }

    if config.user_agent.crawler_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name must not be empty".to_string(),
        ));
    }

    if config.user_agent.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler-version must not be empty".to_string(),
        ));
    }

    Ok(())
}
