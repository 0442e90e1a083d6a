use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - API base URL is a non-empty http(s) URL
/// - User agent is not empty
/// - At least one search language is set
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "api.base_url cannot be empty".to_string(),
        ));
    }
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "api.base_url must be an http(s) URL, got '{}'",
            base_url
        )));
    }

    if config.api.user_agent.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "api.user_agent cannot be empty".to_string(),
        ));
    }

    if config.search.languages.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "search.languages cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, SearchConfig};

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_base_url_fails() {
        let config = Config {
            api: ApiConfig {
                base_url: "  ".to_string(),
                ..Default::default()
            },
            search: SearchConfig::default(),
        };
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_non_http_base_url_fails() {
        let config = Config {
            api: ApiConfig {
                base_url: "ftp://api.opensubtitles.com".to_string(),
                ..Default::default()
            },
            search: SearchConfig::default(),
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("http(s)"));
    }

    #[test]
    fn test_validate_empty_user_agent_fails() {
        let config = Config {
            api: ApiConfig {
                user_agent: String::new(),
                ..Default::default()
            },
            search: SearchConfig::default(),
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_languages_fails() {
        let config = Config {
            api: ApiConfig::default(),
            search: SearchConfig {
                languages: String::new(),
            },
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("search.languages"));
    }
}
