#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_base_url, validate_non_empty_string, validate_range, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Site root of the CWGC register; cemetery links on record pages are
/// relative to it.
pub const CWGC_URL: &str = "http://www.cwgc.org";

const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    CWGC_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClientError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClientError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for ClientConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_base_url("base_url", &self.base_url)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }
        if let Some(user_agent) = &self.user_agent {
            validate_non_empty_string("user_agent", user_agent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url(), CWGC_URL);
        assert_eq!(config.timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml_config() {
        let config = ClientConfig::from_toml_str(
            r#"
base_url = "https://www.cwgc.org"
timeout_seconds = 20
user_agent = "war-graves-research/1.0"
"#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://www.cwgc.org");
        assert_eq!(config.timeout(), Some(Duration::from_secs(20)));
        assert_eq!(config.user_agent(), Some("war-graves-research/1.0"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CWGC_TEST_USER_AGENT", "substituted-agent");

        let config =
            ClientConfig::from_toml_str(r#"user_agent = "${CWGC_TEST_USER_AGENT}""#).unwrap();
        assert_eq!(config.user_agent.as_deref(), Some("substituted-agent"));

        let config =
            ClientConfig::from_toml_str(r#"user_agent = "${CWGC_TEST_UNSET_VARIABLE}""#).unwrap();
        assert_eq!(config.user_agent.as_deref(), Some("${CWGC_TEST_UNSET_VARIABLE}"));

        std::env::remove_var("CWGC_TEST_USER_AGENT");
    }

    #[test]
    fn test_config_validation() {
        let bad_url = ClientConfig {
            base_url: "www.cwgc.org".to_string(),
            ..Default::default()
        };
        assert!(bad_url.validate().is_err());

        let bad_timeout = ClientConfig {
            timeout_seconds: Some(0),
            ..Default::default()
        };
        assert!(bad_timeout.validate().is_err());

        let blank_agent = ClientConfig {
            user_agent: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(blank_agent.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = ClientConfig::from_toml_str("timeout_seconds = \"soon\"").unwrap_err();
        assert!(matches!(err, ClientError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"base_url = \"http://localhost:8080\"\ntimeout_seconds = 5\n")
            .unwrap();

        let config = ClientConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_seconds, Some(5));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ClientConfig::from_file("/nonexistent/cwgc.toml").unwrap_err();
        assert!(matches!(err, ClientError::IoError(_)));
    }
}
