//! Contracts of the external collaborators the feed talks to
//!
//! The comment store owns paged comment records, the reaction store owns
//! like/dislike data, and the preference store persists viewer settings.
//! The controller only ever sees them through these traits, so tests and
//! the demo binary can swap in the in-memory implementations.

use std::str::FromStr;

use async_trait::async_trait;

use crate::domain::{
    ChannelId, CommentId, CommentPage, ContentRef, FeedResult, ReactionSnapshot, SortMode,
};

/// Key under which the comment sort order is persisted
pub const SORT_PREFERENCE_KEY: &str = "comment-sort";

#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Fetch one page of top-level comments
    async fn list_page(
        &self,
        content_ref: &ContentRef,
        page: u32,
        page_size: u32,
        sort_mode: SortMode,
    ) -> FeedResult<CommentPage>;

    /// Drop everything cached for `content_ref`
    fn reset(&self, content_ref: &ContentRef);
}

#[async_trait]
pub trait ReactionStore: Send + Sync {
    /// Load reactions for the given comments as seen by `channel_id`
    async fn fetch_reactions(
        &self,
        comment_ids: &[CommentId],
        channel_id: Option<&ChannelId>,
    ) -> FeedResult<()>;

    /// Read back what is known for the given comments
    fn snapshot(&self, comment_ids: &[CommentId], channel_id: Option<&ChannelId>)
        -> ReactionSnapshot;
}

#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> FeedResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> FeedResult<()>;
}

/// Read the persisted sort mode, falling back to `default` when absent or unreadable
pub async fn load_sort_mode(preferences: &dyn PreferenceStore, default: SortMode) -> SortMode {
    match preferences.get(SORT_PREFERENCE_KEY).await {
        Ok(Some(value)) => SortMode::from_str(&value).unwrap_or_else(|_| {
            log::warn!("Ignoring unknown persisted sort mode {value:?}");
            default
        }),
        Ok(None) => default,
        Err(e) => {
            log::warn!("Failed to read sort preference: {e}");
            default
        }
    }
}

pub async fn save_sort_mode(
    preferences: &dyn PreferenceStore,
    sort_mode: SortMode,
) -> FeedResult<()> {
    preferences
        .set(SORT_PREFERENCE_KEY, &sort_mode.to_string())
        .await
}
