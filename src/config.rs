use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub providers: ProvidersConfig,

    pub cache: CacheConfig,

    pub enrichment: EnrichmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub unsplash: UnsplashConfig,

    pub pexels: PexelsConfig,

    /// Per-call timeout applied to every provider request (default: 10)
    pub request_timeout_seconds: u32,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            unsplash: UnsplashConfig::default(),
            pexels: PexelsConfig::default(),
            request_timeout_seconds: 10,
        }
    }
}

/// A provider with no key configured is disabled and skipped by the
/// fallback chain without attempting a call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnsplashConfig {
    pub access_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PexelsConfig {
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// How long fetched image lists stay valid (default: 24)
    pub image_ttl_hours: u64,

    /// Entry ceiling before a sweep kicks in (default: 500)
    pub max_entries: usize,

    /// How many of the oldest entries a sweep removes (default: 100)
    pub evict_batch: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            image_ttl_hours: 24,
            max_entries: 500,
            evict_batch: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Images fetched per destination recommendation (default: 4, max 4
    /// since destination records carry four discrete slots)
    pub images_per_destination: usize,

    /// Images fetched per trip activity (default: 2)
    pub images_per_activity: usize,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            images_per_destination: 4,
            images_per_activity: 2,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                let mut config = Self::load_from_path(path)?;
                config.apply_env_overrides();
                return Ok(config);
            }
        }

        info!("No config file found, using defaults");
        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Environment credentials take precedence over the config file so
    /// keys can stay out of committed TOML.
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("UNSPLASH_ACCESS_KEY")
            && !key.is_empty()
        {
            self.providers.unsplash.access_key = Some(key);
        }
        if let Ok(key) = std::env::var("PEXELS_API_KEY")
            && !key.is_empty()
        {
            self.providers.pexels.api_key = Some(key);
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("wayfarr").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".wayfarr").join("config.toml"));
        }

        paths
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = PathBuf::from("config.toml");
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.providers.request_timeout_seconds == 0 {
            anyhow::bail!("Provider request timeout must be > 0");
        }

        if self.enrichment.images_per_destination == 0
            || self.enrichment.images_per_destination > 4
        {
            anyhow::bail!("images_per_destination must be between 1 and 4");
        }

        if self.enrichment.images_per_activity == 0 {
            anyhow::bail!("images_per_activity must be > 0");
        }

        if self.cache.image_ttl_hours == 0 {
            anyhow::bail!("Cache TTL must be > 0");
        }

        if self.cache.evict_batch == 0 || self.cache.evict_batch > self.cache.max_entries {
            anyhow::bail!("Cache evict batch must be > 0 and <= max_entries");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cache.image_ttl_hours, 24);
        assert_eq!(config.enrichment.images_per_destination, 4);
        assert_eq!(config.enrichment.images_per_activity, 2);
    }

    #[test]
    fn providers_default_to_disabled() {
        let config = Config::default();
        assert!(config.providers.unsplash.access_key.is_none());
        assert!(config.providers.pexels.api_key.is_none());
    }

    #[test]
    fn too_many_destination_images_fails_validation() {
        let mut config = Config::default();
        config.enrichment.images_per_destination = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_evict_batch_fails_validation() {
        let mut config = Config::default();
        config.cache.max_entries = 10;
        config.cache.evict_batch = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [providers.pexels]
            api_key = "pk-test"

            [cache]
            image_ttl_hours = 1
            "#,
        )
        .unwrap();

        assert_eq!(config.providers.pexels.api_key.as_deref(), Some("pk-test"));
        assert_eq!(config.cache.image_ttl_hours, 1);
        assert_eq!(config.cache.max_entries, 500);
        assert_eq!(config.enrichment.images_per_destination, 4);
    }
}
