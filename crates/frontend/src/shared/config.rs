use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub router: RouterConfig,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RouterConfig {
    /// Mount prefix of every route: empty when served from the site root,
    /// "/generator" when served from a sub-path.
    #[serde(default)]
    pub base_path: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[router]
base_path = ""
"#;

/// Build-time override of `router.base_path`
const BASE_PATH_OVERRIDE: Option<&str> = option_env!("FORM_GENERATOR_BASE_PATH");

/// Load configuration
///
/// Order:
/// 1. Embedded default config
/// 2. `FORM_GENERATOR_BASE_PATH` captured at build time, if set
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    let config = parse_config(DEFAULT_CONFIG, BASE_PATH_OVERRIDE)?;
    log::debug!("Router base path: '{}'", config.router.base_path);
    Ok(config)
}

fn parse_config(contents: &str, base_override: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(contents)?;
    if let Some(base) = base_override {
        config.router.base_path = base.to_string();
    }
    config.router.base_path = normalize_base_path(&config.router.base_path);
    Ok(config)
}

/// Mount prefix from the config provided by `App`
pub fn use_base_path() -> String {
    leptos::prelude::use_context::<AppConfig>()
        .unwrap_or_default()
        .router
        .base_path
}

/// "generator/", "/generator", " /generator/ " -> "/generator"; "" and "/" -> ""
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config.router.base_path, "");
    }

    #[test]
    fn test_base_override() {
        let config = parse_config(DEFAULT_CONFIG, Some("generator/")).unwrap();
        assert_eq!(config.router.base_path, "/generator");

        let config = parse_config("[router]\nbase_path = \"/generator/\"\n", None).unwrap();
        assert_eq!(config.router.base_path, "/generator");
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let config = parse_config("", None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path(" /generator/ "), "/generator");
        assert_eq!(normalize_base_path("apps/generator"), "/apps/generator");
    }
}
