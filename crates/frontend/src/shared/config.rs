use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub port: u16,
    /// Overrides the location-derived base when set
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub currency_symbol: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                port: 8000,
                base_url: None,
            },
            list: ListConfig {
                default_page_size: 10,
                page_size_options: vec![10, 25, 50, 100],
                currency_symbol: "₹".to_string(),
            },
        }
    }
}

pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(contents)?;
    config.list.default_page_size = config.list.default_page_size.max(1);
    config.list.page_size_options.retain(|size| *size > 0);
    if !config
        .list
        .page_size_options
        .contains(&config.list.default_page_size)
    {
        config.list.page_size_options.push(config.list.default_page_size);
        config.list.page_size_options.sort_unstable();
    }
    Ok(config)
}

/// Load the embedded configuration, falling back to built-in defaults
pub fn load_config() -> Config {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => {
            log::info!("Using embedded configuration (api port {})", config.api.port);
            config
        }
        Err(e) => {
            log::warn!("Embedded configuration is invalid, using defaults: {}", e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_page_size_is_always_selectable() {
        let config = parse_config(
            r#"
            [api]
            port = 9000
            base_url = "https://api.example.com"

            [list]
            default_page_size = 20
            page_size_options = [50, 0, 10]
            currency_symbol = "Rs."
            "#,
        )
        .unwrap();
        assert_eq!(config.list.page_size_options, vec![10, 20, 50]);
        assert_eq!(config.api.base_url.as_deref(), Some("https://api.example.com"));
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[api]\nport = 1").is_err());
    }
}
