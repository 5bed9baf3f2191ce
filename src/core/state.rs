pub mod feed;
pub mod system;
pub mod ui;

use crate::{
    domain::ChannelId,
    infrastructure::config::Config,
};

use feed::{FeedSettings, FeedState};
use system::SystemState;
use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub feed: FeedState,
    pub ui: UiState,
    pub system: SystemState,
}

impl AppState {
    pub fn new(settings: FeedSettings) -> Self {
        Self {
            feed: FeedState::new(settings),
            ..Default::default()
        }
    }

    /// Build the initial state from configuration
    pub fn new_with_config(config: &Config) -> Self {
        let settings = FeedSettings {
            page_size: config.comments.page_size,
            reactions_enabled: config.comments.reactions_enabled,
        };
        let my_channels: Vec<ChannelId> = config.viewer.my_channel_ids.clone();
        Self {
            feed: FeedState::new(settings).with_my_channels(my_channels),
            ..Default::default()
        }
    }
}
