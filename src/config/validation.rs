use crate::config::Config;
use crate::ConfigError;

/// Validates the crawl configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.max_depth < 1 {
        return Err(ConfigError::Validation(format!(
            "max_depth must be >= 1, got {}",
            config.max_depth
        )));
    }

    if config.fan_out < 1 || config.fan_out > 100 {
        return Err(ConfigError::Validation(format!(
            "fan_out must be between 1 and 100, got {}",
            config.fan_out
        )));
    }

    if config.render_timeout.is_zero() {
        return Err(ConfigError::Validation(
            "render_timeout must be non-zero".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_depth_rejected() {
        let config = Config {
            max_depth: 0,
            ..Config::default()
        };
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_fan_out_rejected() {
        let config = Config {
            fan_out: 0,
            ..Config::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_excessive_fan_out_rejected() {
        let config = Config {
            fan_out: 101,
            ..Config::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config {
            render_timeout: Duration::ZERO,
            ..Config::default()
        };
        assert!(validate(&config).is_err());
    }
}
