//! Domain types for the comment feed
//!
//! Plain data and pure functions with no knowledge of the runtime:
//! comment records, reaction indices, sort modes and display ordering.

pub mod comment;
pub mod error;
pub mod ordering;
pub mod reaction;
pub mod sort;
pub mod text;

pub use comment::{ChannelId, CommentId, CommentPage, CommentRecord, ContentRef};
pub use error::{FeedError, FeedResult};
pub use ordering::order_for_display;
pub use reaction::{
    MyReaction, ReactionCounts, ReactionIndex, ReactionKey, ReactionSnapshot, ReactionSummary,
};
pub use sort::SortMode;
