use thiserror::Error;

/// Errors raised by the feed domain and its store back ends
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("content reference must not be empty")]
    EmptyContentRef,

    #[error("unknown sort mode: {0}")]
    UnknownSortMode(String),

    #[error("comment store failure: {0}")]
    CommentStore(String),

    #[error("reaction store failure: {0}")]
    ReactionStore(String),

    #[error("preference store failure: {0}")]
    Preference(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type FeedResult<T> = std::result::Result<T, FeedError>;
