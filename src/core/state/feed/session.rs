//! Session identity and request tokens

use serde::{Deserialize, Serialize};

/// Identifies one fetch within one feed session
///
/// A completion is only applied while its token is the one in flight, so a
/// response for a superseded session or an older request is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestToken {
    pub session: u64,
    pub seq: u64,
}

/// Hands out monotonic request tokens scoped to the current session
#[derive(Debug, Clone, Default)]
pub struct SessionClock {
    session: u64,
    seq: u64,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session, invalidating every token issued so far
    pub fn begin(&mut self) -> u64 {
        self.session += 1;
        self.seq = 0;
        self.session
    }

    pub fn current(&self) -> u64 {
        self.session
    }

    pub fn next_token(&mut self) -> RequestToken {
        self.seq += 1;
        RequestToken {
            session: self.session,
            seq: self.seq,
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.session == self.session
    }
}

/// Lifecycle of a feed session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeedPhase {
    /// No content has been requested yet
    #[default]
    Idle,
    Resetting,
    LoadingPage,
    AwaitingReactions,
    Ready,
    /// Every page has been fetched; left only by a sort change or refresh
    Exhausted,
}
