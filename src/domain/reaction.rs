//! Reaction data keyed by comment and viewer channel

use std::collections::HashMap;
use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::comment::{ChannelId, CommentId};

/// Lookup key for reaction data
///
/// Combines a comment id with the active viewer channel, or just the
/// comment id when no channel is active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReactionKey {
    pub comment_id: CommentId,
    pub channel_id: Option<ChannelId>,
}

impl ReactionKey {
    pub fn new(comment_id: CommentId, channel_id: Option<ChannelId>) -> Self {
        Self {
            comment_id,
            channel_id,
        }
    }

    pub fn for_channel(comment_id: &CommentId, channel_id: Option<&ChannelId>) -> Self {
        Self::new(comment_id.clone(), channel_id.cloned())
    }
}

impl fmt::Display for ReactionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.channel_id {
            Some(channel_id) => write!(f, "{}:{}", self.comment_id, channel_id),
            None => write!(f, "{}", self.comment_id),
        }
    }
}

/// Like/dislike totals from other viewers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub likes: u64,
    pub dislikes: u64,
}

impl ReactionCounts {
    pub fn new(likes: u64, dislikes: u64) -> Self {
        Self { likes, dislikes }
    }
}

/// The viewer's own reaction on a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MyReaction {
    pub liked: bool,
    pub disliked: bool,
}

/// Reaction entries indexed by `ReactionKey`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionIndex<T>(pub HashMap<ReactionKey, T>);

impl<T> Deref for ReactionIndex<T> {
    type Target = HashMap<ReactionKey, T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ReactionIndex<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> Default for ReactionIndex<T> {
    fn default() -> Self {
        Self(HashMap::new())
    }
}

impl<T> ReactionIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_entry(&self, comment_id: &CommentId, channel_id: Option<&ChannelId>) -> bool {
        self.0
            .contains_key(&ReactionKey::for_channel(comment_id, channel_id))
    }

    pub fn lookup(&self, comment_id: &CommentId, channel_id: Option<&ChannelId>) -> Option<&T> {
        self.0.get(&ReactionKey::for_channel(comment_id, channel_id))
    }

    pub fn merge(&mut self, other: ReactionIndex<T>) {
        self.0.extend(other.0);
    }
}

/// Reaction data for a batch of comments, as read back from the reaction store
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReactionSnapshot {
    pub mine: ReactionIndex<MyReaction>,
    pub others: ReactionIndex<ReactionCounts>,
}

impl ReactionSnapshot {
    pub fn is_empty(&self) -> bool {
        self.mine.is_empty() && self.others.is_empty()
    }
}

/// Reaction annotation displayed next to a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionSummary {
    pub counts: ReactionCounts,
    pub mine: MyReaction,
}

impl ReactionSummary {
    /// Totals including the viewer's own reaction
    pub fn likes(&self) -> u64 {
        self.counts.likes + u64::from(self.mine.liked)
    }

    pub fn dislikes(&self) -> u64 {
        self.counts.dislikes + u64::from(self.mine.disliked)
    }
}
