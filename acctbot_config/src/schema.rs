use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Import GeneratorConfig from acctbot_core to avoid duplication
use acctbot_core::GeneratorConfig;

const CONFIG_DIR_NAME: &str = "acctbot";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TelegramConfig {
    #[serde(default = "TelegramConfig::default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub token: String,
    /// Chat IDs allowed to use the bot. Empty allows everyone.
    #[serde(default)]
    pub allow_from: Vec<String>,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            token: String::new(),
            allow_from: Vec::new(),
        }
    }
}

impl TelegramConfig {
    const fn default_enabled() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StoreConfig {
    /// Where records are kept. Defaults to `~/acctbot/user_data.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn resolved_path(&self) -> anyhow::Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_dir()?.join("user_data.json")),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ListingConfig {
    /// How many records the list command shows.
    #[serde(default = "ListingConfig::default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            recent_limit: Self::default_recent_limit(),
        }
    }
}

impl ListingConfig {
    const fn default_recent_limit() -> usize {
        10
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR_NAME))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'acctbot init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config = Self::from_json(&content)?;
        tracing::debug!("Loaded config from {}", config_path.display());

        Ok(config)
    }

    /// Like [`Config::load`], but falls back to defaults when no file exists.
    pub fn load_or_default() -> anyhow::Result<Self> {
        if Self::config_path()?.exists() {
            Self::load()
        } else {
            tracing::info!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Put your BotFather token into \"telegram.token\"");
        println!("   2. Optionally restrict \"telegram.allow_from\" to your chat ID");
        println!("   3. Run 'acctbot telegram' to start the bot");
        println!();
        println!("🔧 Configuration options:");
        println!("   - store.path: where generated accounts are saved (default ~/acctbot/user_data.json)");
        println!("   - generator: birth year range and password special characters");
        println!("   - listing.recent_limit: how many accounts the list shows");
        println!();
        Ok(())
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "telegram": {
    "enabled": true,
    "token": "your-bot-token-here",
    "allow_from": []
  },
  "generator": {
    "birth_year_min": 1970,
    "birth_year_max": 2005,
    "special_chars": "!@#$%^&*"
  },
  "listing": {
    "recent_limit": 10
  }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses() {
        let config = Config::from_json(CONFIG_TEMPLATE).unwrap();
        assert!(config.telegram.enabled);
        assert_eq!(config.telegram.token, "your-bot-token-here");
        assert_eq!(config.generator, GeneratorConfig::default());
        assert_eq!(config.listing.recent_limit, 10);
        assert!(config.store.path.is_none());
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert!(config.telegram.enabled);
        assert!(config.telegram.token.is_empty());
        assert!(config.telegram.allow_from.is_empty());
        assert_eq!(config.generator.birth_year_min, 1970);
        assert_eq!(config.generator.birth_year_max, 2005);
        assert_eq!(config.listing.recent_limit, 10);
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let config = Config::from_json(
            r##"{
                "store": { "path": "/tmp/accounts.json" },
                "generator": { "special_chars": "#" },
                "telegram": { "token": "abc", "allow_from": ["42"] }
            }"##,
        )
        .unwrap();

        assert_eq!(
            config.store.resolved_path().unwrap(),
            PathBuf::from("/tmp/accounts.json")
        );
        assert_eq!(config.generator.special_chars, "#");
        assert_eq!(config.generator.birth_year_max, 2005);
        assert_eq!(config.telegram.allow_from, vec!["42".to_string()]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json("{ \"listing\": ").is_err());
    }
}
