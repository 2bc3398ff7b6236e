use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads, parses, and validates a configuration file.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use rockpool::config::load_config;
///
/// let config = load_config(Path::new("rockpool.toml")).unwrap();
/// println!("Crawl limit: {}", config.crawler.crawl_limit);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::DomainMatch;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[crawler]
crawl-limit = 10
domain-match = "suffix"
random-seed = 42

[user-agent]
crawler-name = "TestCrawler"
crawler-version = "1.0"
contact-url = "https://example.com/about"
contact-email = "admin@example.com"

[output]
summary-path = "./summary.md"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.crawl_limit, 10);
        assert_eq!(config.crawler.domain_match, DomainMatch::Suffix);
        assert_eq!(config.crawler.random_seed, Some(42));
        assert_eq!(config.user_agent.crawler_name, "TestCrawler");
        assert_eq!(config.output.summary_path.as_deref(), Some("./summary.md"));
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let config_content = r#"
[crawler]
crawl-limit = 3
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.crawl_limit, 3);
        assert_eq!(config.crawler.domain_match, DomainMatch::Contains);
        assert_eq!(config.user_agent.crawler_name, "Rockpool");
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/rockpool.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_unknown_policy() {
        let config_content = r#"
[crawler]
domain-match = "fuzzy"
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[crawler]
crawl-limit = 0
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
