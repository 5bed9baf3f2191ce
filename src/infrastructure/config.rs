use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    core::state::feed::DEFAULT_PAGE_SIZE,
    domain::ChannelId,
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CommentsConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_reactions_enabled")]
    pub reactions_enabled: bool,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_reactions_enabled() -> bool {
    true
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            reactions_enabled: default_reactions_enabled(),
        }
    }
}

/// Who is looking at the feed
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub active_channel_id: Option<ChannelId>,
    #[serde(default)]
    pub my_channel_ids: Vec<ChannelId>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub comments: CommentsConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

impl Config {
    /// Load the embedded defaults overlaid with any user config files
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dirs(&utils::get_data_dir(), &utils::get_config_dir())
    }

    pub fn from_dirs(data_dir: &Path, config_dir: &Path) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5))
            .set_override("_data_dir", data_dir.display().to_string())?
            .set_override("_config_dir", config_dir.display().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("loading config from {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        if cfg.comments.page_size == 0 {
            log::warn!("comments.page_size must be positive, using {DEFAULT_PAGE_SIZE}");
            cfg.comments.page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(cfg)
    }

    /// The embedded defaults alone
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }
}
