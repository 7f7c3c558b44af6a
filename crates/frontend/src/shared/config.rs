use serde::Deserialize;
use std::collections::HashMap;

use super::error::WidgetError;

/// Настройки виджета
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WidgetConfig {
    pub api_base: String,
    pub enter_delay_ms: u32,
    pub exit_delay_ms: u32,
    pub csv_filename: String,
    pub currency_by_lang: HashMap<String, String>,
}

/// Partial config taken from the host page; every field is optional
#[derive(Debug, Deserialize, Default)]
struct ConfigOverride {
    api_base: Option<String>,
    enter_delay_ms: Option<u32>,
    exit_delay_ms: Option<u32>,
    csv_filename: Option<String>,
    currency_by_lang: Option<HashMap<String, String>>,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
api_base = "/api/v1"
enter_delay_ms = 300
exit_delay_ms = 300
csv_filename = "calculation.csv"

[currency_by_lang]
pl = "PLN"
en = "USD"
ru = "USD"
uk = "PLN"
"#;

impl Default for WidgetConfig {
    fn default() -> Self {
        // Встроенный TOML покрыт тестом ниже
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|_| WidgetConfig {
            api_base: "/api/v1".to_string(),
            enter_delay_ms: 300,
            exit_delay_ms: 300,
            csv_filename: "calculation.csv".to_string(),
            currency_by_lang: HashMap::new(),
        })
    }
}

/// Load configuration, applying a TOML override on top of the defaults
///
/// The override usually comes from the `data-config` attribute of the mount element.
pub fn load_config(overrides: Option<&str>) -> Result<WidgetConfig, WidgetError> {
    let mut config: WidgetConfig = toml::from_str(DEFAULT_CONFIG)?;

    let Some(text) = overrides.filter(|t| !t.trim().is_empty()) else {
        log::info!("Using default embedded configuration");
        return Ok(config);
    };

    let patch: ConfigOverride = toml::from_str(text)?;
    if let Some(api_base) = patch.api_base {
        config.api_base = api_base.trim_end_matches('/').to_string();
    }
    if let Some(ms) = patch.enter_delay_ms {
        config.enter_delay_ms = ms;
    }
    if let Some(ms) = patch.exit_delay_ms {
        config.exit_delay_ms = ms;
    }
    if let Some(name) = patch.csv_filename {
        config.csv_filename = name;
    }
    if let Some(map) = patch.currency_by_lang {
        config.currency_by_lang = map;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<WidgetConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api_base, "/api/v1");
        assert_eq!(config.csv_filename, "calculation.csv");
        assert_eq!(config.currency_by_lang.get("uk").map(String::as_str), Some("PLN"));
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn test_override_is_partial() {
        let config = load_config(Some("api_base = \"https://calc.example.com/api/v1/\"\nexit_delay_ms = 0")).unwrap();
        assert_eq!(config.api_base, "https://calc.example.com/api/v1");
        assert_eq!(config.exit_delay_ms, 0);
        assert_eq!(config.enter_delay_ms, 300);
        assert_eq!(config.currency_by_lang.len(), 4);
    }

    #[test]
    fn test_blank_override_uses_defaults() {
        assert_eq!(load_config(Some("   ")).unwrap(), WidgetConfig::default());
        assert_eq!(load_config(None).unwrap(), WidgetConfig::default());
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        assert!(matches!(
            load_config(Some("exit_delay_ms = \"soon\"")),
            Err(WidgetError::Config(_))
        ));
    }
}
