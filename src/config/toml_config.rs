use crate::adapters::http::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::app::OutputFormat;
use crate::config::{DisplaySettings, DEFAULT_AREA, DEFAULT_POSTCODE};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SkipError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration. Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub location: LocationConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub postcode: String,
    pub area: Option<String>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            postcode: DEFAULT_POSTCODE.to_string(),
            area: Some(DEFAULT_AREA.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub format: Option<OutputFormat>,
    pub current_step: Option<u32>,
    pub total_steps: Option<u32>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SkipError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SkipError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn display_settings(&self) -> DisplaySettings {
        let defaults = DisplaySettings::default();
        DisplaySettings {
            format: self.display.format.unwrap_or(defaults.format),
            current_step: self.display.current_step.unwrap_or(defaults.current_step),
            total_steps: self.display.total_steps.unwrap_or(defaults.total_steps),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn postcode(&self) -> &str {
        &self.location.postcode
    }

    fn area(&self) -> Option<&str> {
        self.location.area.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_positive_number("source.timeout_seconds", self.source.timeout_seconds, 1)?;
        self.display_settings().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
endpoint = "https://api.example.com/skips"
timeout_seconds = 10

[location]
postcode = "NR32"
area = "Lowestoft"

[display]
format = "table"
current_step = 3
total_steps = 6
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api_endpoint(), "https://api.example.com/skips");
        assert_eq!(config.timeout_seconds(), 10);
        assert_eq!(config.location_query().label(), "NR32, Lowestoft");
        assert_eq!(config.display_settings().format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.api_endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.postcode(), "LE10");
        assert_eq!(config.area(), Some("Hinckley"));
        assert_eq!(config.display_settings(), DisplaySettings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SKIP_PICKER_TEST_ENDPOINT", "https://test.api.com/skips");

        let toml_content = r#"
[source]
endpoint = "${SKIP_PICKER_TEST_ENDPOINT}"

[location]
postcode = "${SKIP_PICKER_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.endpoint, "https://test.api.com/skips");
        assert_eq!(config.location.postcode, "${SKIP_PICKER_UNSET_VARIABLE}");

        std::env::remove_var("SKIP_PICKER_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[source]
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[display]
total_steps = 9
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let result = TomlConfig::from_toml_str("[source\nendpoint = 1");
        assert!(matches!(result, Err(SkipError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[location]\npostcode = \"CB1\"\narea = \"Cambridge\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.postcode(), "CB1");
        assert_eq!(config.api_endpoint(), DEFAULT_ENDPOINT);
    }
}
