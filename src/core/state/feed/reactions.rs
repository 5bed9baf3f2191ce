//! Reaction prefetch bookkeeping for the comment feed

use std::collections::BTreeSet;

use crate::domain::{
    ChannelId, CommentId, MyReaction, ReactionCounts, ReactionIndex, ReactionSnapshot,
    ReactionSummary,
};

use super::session::{RequestToken, SessionClock};

/// Result of reconciling the known comments against the reaction indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Nothing is missing; comments may be displayed
    Ready,
    /// The same pending set is already being fetched
    AlreadyInFlight,
    /// A different set is in flight; reconcile again once it lands
    Deferred,
    /// Fetch reactions for exactly these comments
    Fetch {
        token: RequestToken,
        comment_ids: Vec<CommentId>,
    },
}

/// The reaction fetch currently running
#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlight {
    token: RequestToken,
    channel_id: Option<ChannelId>,
    comment_ids: BTreeSet<CommentId>,
}

/// Keeps reaction availability in step with the known comment set
#[derive(Debug, Clone)]
pub struct ReactionSync {
    enabled: bool,
    ready: bool,
    in_flight: Option<InFlight>,
    deferred: bool,
    mine: ReactionIndex<MyReaction>,
    others: ReactionIndex<ReactionCounts>,
}

impl ReactionSync {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ready: !enabled,
            in_flight: None,
            deferred: false,
            mine: ReactionIndex::new(),
            others: ReactionIndex::new(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Drop in-flight bookkeeping, optionally forgetting fetched reactions too
    pub fn reset(&mut self, clear_indices: bool) {
        self.ready = !self.enabled;
        self.in_flight = None;
        self.deferred = false;
        if clear_indices {
            self.mine.clear();
            self.others.clear();
        }
    }

    /// Known comments with neither a "mine" nor an "others" entry for the channel
    pub fn pending_ids<'a>(
        &self,
        known: impl IntoIterator<Item = &'a CommentId>,
        channel_id: Option<&ChannelId>,
    ) -> Vec<CommentId> {
        let mut seen = BTreeSet::new();
        known
            .into_iter()
            .filter(|id| {
                !self.mine.has_entry(id, channel_id) && !self.others.has_entry(id, channel_id)
            })
            .filter(|id| seen.insert((*id).clone()))
            .cloned()
            .collect()
    }

    pub fn reconcile<'a>(
        &mut self,
        known: impl IntoIterator<Item = &'a CommentId>,
        channel_id: Option<&ChannelId>,
        clock: &mut SessionClock,
    ) -> ReconcileOutcome {
        if !self.enabled {
            self.ready = true;
            return ReconcileOutcome::Ready;
        }

        let pending = self.pending_ids(known, channel_id);
        if pending.is_empty() {
            self.ready = true;
            return ReconcileOutcome::Ready;
        }

        let pending_set: BTreeSet<CommentId> = pending.iter().cloned().collect();
        match &self.in_flight {
            // The running fetch only covers the pending set if it is for the same channel
            Some(in_flight)
                if in_flight.comment_ids == pending_set
                    && in_flight.channel_id.as_ref() == channel_id =>
            {
                self.ready = false;
                ReconcileOutcome::AlreadyInFlight
            }
            Some(_) => {
                self.ready = false;
                self.deferred = true;
                ReconcileOutcome::Deferred
            }
            None => {
                let token = clock.next_token();
                self.in_flight = Some(InFlight {
                    token,
                    channel_id: channel_id.cloned(),
                    comment_ids: pending_set,
                });
                self.ready = false;
                ReconcileOutcome::Fetch {
                    token,
                    comment_ids: pending,
                }
            }
        }
    }

    /// Apply a finished reaction fetch
    ///
    /// Returns `None` for a stale token, otherwise whether a deferred
    /// reconcile is owed. Failures pass `None` for the snapshot; readiness
    /// is restored either way.
    pub fn complete(
        &mut self,
        token: RequestToken,
        snapshot: Option<ReactionSnapshot>,
    ) -> Option<bool> {
        match &self.in_flight {
            Some(in_flight) if in_flight.token == token => {}
            _ => return None,
        }

        self.in_flight = None;
        if let Some(snapshot) = snapshot {
            self.mine.merge(snapshot.mine);
            self.others.merge(snapshot.others);
        }
        self.ready = true;
        Some(std::mem::take(&mut self.deferred))
    }

    /// Reaction annotation for a comment, if anything is known about it
    pub fn summary(
        &self,
        comment_id: &CommentId,
        channel_id: Option<&ChannelId>,
    ) -> Option<ReactionSummary> {
        let counts = self.others.lookup(comment_id, channel_id);
        let mine = self.mine.lookup(comment_id, channel_id);
        if counts.is_none() && mine.is_none() {
            return None;
        }
        Some(ReactionSummary {
            counts: counts.copied().unwrap_or_default(),
            mine: mine.copied().unwrap_or_default(),
        })
    }
}
