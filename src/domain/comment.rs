//! Comment records and the identifiers that scope them

use std::fmt;

use chrono::{DateTime, Local};
use derive_deref::Deref;
use serde::{Deserialize, Serialize};

use super::error::{FeedError, FeedResult};

/// Identifier of the content (a URI) that comments are attached to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentRef(String);

impl TryFrom<String> for ContentRef {
    type Error = FeedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContentRef> for String {
    fn from(value: ContentRef) -> Self {
        value.0
    }
}

impl ContentRef {
    /// Create a content reference, rejecting empty or blank URIs
    pub fn new(uri: impl Into<String>) -> FeedResult<Self> {
        let uri = uri.into();
        if uri.trim().is_empty() {
            return Err(FeedError::EmptyContentRef);
        }
        Ok(Self(uri))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(String);

impl CommentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A single comment as returned by the comment store
///
/// Records are immutable once fetched and are identified by `id`.
/// Field names on the wire follow the comment API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    #[serde(rename = "comment_id")]
    pub id: CommentId,
    #[serde(default)]
    pub parent_id: Option<CommentId>,
    #[serde(default)]
    pub channel_id: Option<ChannelId>,
    #[serde(rename = "channel_name", default)]
    pub author_name: String,
    #[serde(rename = "channel_url", default)]
    pub author_uri: String,
    #[serde(rename = "comment")]
    pub body: String,
    /// Seconds since the unix epoch
    #[serde(rename = "timestamp")]
    pub posted_at: i64,
    #[serde(rename = "is_pinned", default)]
    pub pinned: bool,
    #[serde(default)]
    pub support_amount: f64,
    #[serde(rename = "replies", default)]
    pub direct_reply_count: u32,
}

impl CommentRecord {
    pub fn new(id: impl Into<CommentId>, author_name: impl Into<String>, body: impl Into<String>) -> Self {
        let author_name = author_name.into();
        Self {
            id: id.into(),
            parent_id: None,
            channel_id: None,
            author_uri: format!("lbry://{author_name}"),
            author_name,
            body: body.into(),
            posted_at: 0,
            pinned: false,
            support_amount: 0.0,
            direct_reply_count: 0,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<CommentId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_channel(mut self, channel_id: impl Into<ChannelId>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    pub fn with_posted_at(mut self, posted_at: i64) -> Self {
        self.posted_at = posted_at;
        self
    }

    /// A comment without a parent is a thread root
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Posting time formatted in the local timezone
    pub fn posted_at_local(&self) -> String {
        DateTime::from_timestamp(self.posted_at, 0)
            .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }
}

impl From<String> for CommentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<String> for ChannelId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One page of top-level comments together with the paging totals
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommentPage {
    pub comments: Vec<CommentRecord>,
    pub total_top_level_count: usize,
    pub total_pages: u32,
}
