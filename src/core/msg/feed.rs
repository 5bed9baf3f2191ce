use serde::{Deserialize, Serialize};

use crate::{
    core::state::feed::RequestToken,
    domain::{ChannelId, CommentPage, CommentRecord, ContentRef, ReactionSnapshot, SortMode},
};

/// Messages specific to FeedState
///
/// User intents come from the render surface; the `*Fetched` and
/// `*Failed` variants are completions reported back by the command
/// executor and carry the token of the request they answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeedMsg {
    // Session control
    Initialize {
        content_ref: ContentRef,
        sort_mode: SortMode,
    },
    SortChanged(SortMode),
    Refresh,
    ActiveChannelChanged(Option<ChannelId>),
    LinkedCommentSet(Option<CommentRecord>),

    // Scroll sentinel entered the viewport
    SentinelVisible,

    // Store completions
    PageFetched {
        token: RequestToken,
        page: CommentPage,
    },
    PageFetchFailed {
        token: RequestToken,
        error: String,
    },
    ReactionsFetched {
        token: RequestToken,
        snapshot: ReactionSnapshot,
    },
    ReactionsFetchFailed {
        token: RequestToken,
        error: String,
    },
}

impl FeedMsg {
    /// Messages that start a new session and invalidate the current list
    pub fn is_reset(&self) -> bool {
        matches!(
            self,
            FeedMsg::Initialize { .. } | FeedMsg::SortChanged(_) | FeedMsg::Refresh
        )
    }

    /// Completions arrive from the executor rather than the user
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            FeedMsg::PageFetched { .. }
                | FeedMsg::PageFetchFailed { .. }
                | FeedMsg::ReactionsFetched { .. }
                | FeedMsg::ReactionsFetchFailed { .. }
        )
    }
}
