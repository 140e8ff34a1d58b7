// Config module for provider endpoints and lookup behaviour

use crate::constants;
use crate::sources::MatchMode;
use serde::Deserialize;
use std::path::PathBuf;

/// API and website base URLs of one provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub api_url: String,
    pub site_url: String,
}

impl Endpoint {
    pub fn new(api_url: impl Into<String>, site_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            site_url: site_url.into(),
        }
    }
}

/// Runtime configuration
///
/// Every key is optional in `plugfind.toml`; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub match_mode: MatchMode,
    pub modrinth_api_url: String,
    pub modrinth_site_url: String,
    pub hangar_api_url: String,
    pub hangar_site_url: String,
    pub spiget_api_url: String,
    pub spigot_site_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Exact,
            modrinth_api_url: constants::MODRINTH_API_URL.to_string(),
            modrinth_site_url: constants::MODRINTH_SITE_URL.to_string(),
            hangar_api_url: constants::HANGAR_API_URL.to_string(),
            hangar_site_url: constants::HANGAR_SITE_URL.to_string(),
            spiget_api_url: constants::SPIGET_API_URL.to_string(),
            spigot_site_url: constants::SPIGOT_SITE_URL.to_string(),
        }
    }
}

pub fn config_dir() -> String {
    std::env::var("PLUGFIND_DIR").unwrap_or_else(|_| ".".to_string())
}

pub fn config_path() -> PathBuf {
    PathBuf::from(config_dir()).join(constants::CONFIG_FILE)
}

impl Config {
    /// Defaults, then `plugfind.toml` (if present), then `PLUGFIND_*` variables
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(&path)?;
            Self::from_toml(&text)
                .map_err(|e| anyhow::anyhow!("Invalid config file '{}': {}", path.display(), e))?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply overrides looked up by environment variable name
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup("PLUGFIND_MATCH_MODE") {
            self.match_mode = mode.parse()?;
        }

        let urls: [(&str, &mut String); 6] = [
            ("PLUGFIND_MODRINTH_API_URL", &mut self.modrinth_api_url),
            ("PLUGFIND_MODRINTH_SITE_URL", &mut self.modrinth_site_url),
            ("PLUGFIND_HANGAR_API_URL", &mut self.hangar_api_url),
            ("PLUGFIND_HANGAR_SITE_URL", &mut self.hangar_site_url),
            ("PLUGFIND_SPIGET_API_URL", &mut self.spiget_api_url),
            ("PLUGFIND_SPIGOT_SITE_URL", &mut self.spigot_site_url),
        ];
        for (key, slot) in urls {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *slot = value;
            }
        }

        Ok(())
    }

    pub fn modrinth(&self) -> Endpoint {
        Endpoint::new(&self.modrinth_api_url, &self.modrinth_site_url)
    }

    pub fn hangar(&self) -> Endpoint {
        Endpoint::new(&self.hangar_api_url, &self.hangar_site_url)
    }

    pub fn spiget(&self) -> Endpoint {
        Endpoint::new(&self.spiget_api_url, &self.spigot_site_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.match_mode, MatchMode::Exact);
        assert_eq!(config.modrinth().api_url, "https://api.modrinth.com/v2");
        assert_eq!(config.spiget().site_url, "https://www.spigotmc.org");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
match_mode = "first-hit"
hangar_api_url = "http://localhost:8080/api/v1"
"#,
        )
        .unwrap();

        assert_eq!(config.match_mode, MatchMode::FirstHit);
        assert_eq!(config.hangar().api_url, "http://localhost:8080/api/v1");
        assert_eq!(config.hangar().site_url, "https://hangar.papermc.io");
        assert_eq!(config.modrinth_api_url, "https://api.modrinth.com/v2");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml("match_mode = \"fuzzy\"").is_err());
        assert!(Config::from_toml("modrinth_api_url = [").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("PLUGFIND_MATCH_MODE", "first-hit"),
            ("PLUGFIND_SPIGET_API_URL", "http://127.0.0.1:9999"),
            ("PLUGFIND_MODRINTH_API_URL", "  "),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.match_mode, MatchMode::FirstHit);
        assert_eq!(config.spiget().api_url, "http://127.0.0.1:9999");
        // Blank values are ignored
        assert_eq!(config.modrinth().api_url, "https://api.modrinth.com/v2");
    }

    #[test]
    fn test_env_override_bad_match_mode() {
        let mut config = Config::default();
        let result = config.apply_overrides(|key| {
            (key == "PLUGFIND_MATCH_MODE").then(|| "sometimes".to_string())
        });
        assert!(result.is_err());
    }
}
