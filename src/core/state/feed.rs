//! Comment feed controller state
//!
//! Drives paged retrieval of top-level comments for one piece of content
//! and keeps reaction data in step with the comments that have been
//! fetched. Every transition is a method that mutates the state and returns
//! the commands to execute; nothing here performs I/O.
//!
//! A session is one `(ContentRef, SortMode)` pair. Initialising, changing
//! the sort or refreshing starts a new session, and any response carrying a
//! token from an older session is discarded.

use std::collections::HashSet;

use crate::{
    core::{
        cmd::{Cmd, PageRequest},
        msg::feed::FeedMsg,
    },
    domain::{
        order_for_display, ChannelId, CommentId, CommentPage, CommentRecord, ContentRef,
        ReactionSnapshot, ReactionSummary, SortMode,
    },
};

mod pagination;
mod reactions;
mod session;

pub use pagination::PaginationState;
pub use reactions::{ReactionSync, ReconcileOutcome};
pub use session::{FeedPhase, RequestToken, SessionClock};

/// Default number of top-level comments per page
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Settings that stay fixed for the lifetime of the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSettings {
    pub page_size: u32,
    pub reactions_enabled: bool,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            reactions_enabled: true,
        }
    }
}

/// One comment as handed to the render surface
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub comment: CommentRecord,
    pub reactions: Option<ReactionSummary>,
    pub is_mine: bool,
    pub is_linked: bool,
}

/// Everything the render surface needs to draw the feed
#[derive(Debug, Clone, PartialEq)]
pub struct FeedView {
    pub items: Vec<FeedItem>,
    pub is_loading: bool,
    pub has_more: bool,
    pub total_count: usize,
    pub sort_mode: SortMode,
    pub reactions_enabled: bool,
    pub error: Option<String>,
    pub phase: FeedPhase,
}

impl FeedView {
    /// Sort toggles only make sense with reactions and more than one comment
    pub fn shows_sort_toggles(&self) -> bool {
        self.reactions_enabled && self.total_count > 1
    }

    pub fn shows_empty_state(&self) -> bool {
        self.total_count == 0 && !self.is_loading && self.error.is_none()
    }

    pub fn shows_sentinel(&self) -> bool {
        self.is_loading || self.has_more
    }
}

#[derive(Debug, Clone)]
pub struct FeedState {
    settings: FeedSettings,
    content_ref: Option<ContentRef>,
    sort_mode: SortMode,
    clock: SessionClock,
    phase: FeedPhase,
    pagination: PaginationState,
    reactions: ReactionSync,

    // Comments accumulated for the session, in store order
    comments: Vec<CommentRecord>,
    known_ids: HashSet<CommentId>,
    // Prefix of `comments` whose reactions have settled
    visible_len: usize,
    total_count: usize,

    linked_comment: Option<CommentRecord>,
    active_channel: Option<ChannelId>,
    my_channels: Vec<ChannelId>,
    last_error: Option<String>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new(FeedSettings::default())
    }
}

impl FeedState {
    pub fn new(settings: FeedSettings) -> Self {
        Self {
            settings,
            content_ref: None,
            sort_mode: SortMode::default_for(settings.reactions_enabled),
            clock: SessionClock::new(),
            phase: FeedPhase::Idle,
            pagination: PaginationState::new(settings.page_size),
            reactions: ReactionSync::new(settings.reactions_enabled),
            comments: Vec::new(),
            known_ids: HashSet::new(),
            visible_len: 0,
            total_count: 0,
            linked_comment: None,
            active_channel: None,
            my_channels: Vec::new(),
            last_error: None,
        }
    }

    pub fn with_my_channels(mut self, my_channels: Vec<ChannelId>) -> Self {
        self.my_channels = my_channels;
        self
    }

    pub fn settings(&self) -> FeedSettings {
        self.settings
    }

    pub fn content_ref(&self) -> Option<&ContentRef> {
        self.content_ref.as_ref()
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn session(&self) -> u64 {
        self.clock.current()
    }

    pub fn page_number(&self) -> u32 {
        self.pagination.page_number()
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.pagination.total_pages()
    }

    pub fn is_page_loading(&self) -> bool {
        self.pagination.is_loading()
    }

    pub fn is_ready(&self) -> bool {
        self.reactions.is_ready()
    }

    pub fn has_more(&self) -> bool {
        self.pagination.has_more()
    }

    /// A page or reaction request is awaiting its completion
    pub fn is_busy(&self) -> bool {
        self.pagination.is_loading() || self.reactions.is_fetching()
    }

    pub fn comments(&self) -> &[CommentRecord] {
        &self.comments
    }

    /// Comments eligible for display, before reordering
    pub fn visible_comments(&self) -> &[CommentRecord] {
        &self.comments[..self.visible_len]
    }

    /// Number of rows the render surface will show
    pub fn visible_len(&self) -> usize {
        if self.visible_len == 0 {
            return 0;
        }
        match &self.linked_comment {
            Some(linked)
                if linked.is_top_level() && !self.visible_comments().iter().any(|c| c.id == linked.id) =>
            {
                self.visible_len + 1
            }
            _ => self.visible_len,
        }
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn active_channel(&self) -> Option<&ChannelId> {
        self.active_channel.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Feed-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: FeedMsg) -> Vec<Cmd> {
        match msg {
            FeedMsg::Initialize {
                content_ref,
                sort_mode,
            } => self.initialize(content_ref, sort_mode),
            FeedMsg::SentinelVisible => self.on_more_needed(),
            FeedMsg::SortChanged(sort_mode) => self.on_sort_changed(sort_mode),
            FeedMsg::Refresh => self.refresh(),
            FeedMsg::ActiveChannelChanged(channel_id) => self.set_active_channel(channel_id),
            FeedMsg::LinkedCommentSet(comment) => self.set_linked_comment(comment),
            FeedMsg::PageFetched { token, page } => self.on_page_fetched(token, page),
            FeedMsg::PageFetchFailed { token, error } => self.on_page_failed(token, error),
            FeedMsg::ReactionsFetched { token, snapshot } => {
                self.on_reactions_settled(token, Some(snapshot))
            }
            FeedMsg::ReactionsFetchFailed { token, error } => {
                log::warn!("Reaction fetch failed, showing comments without reactions: {error}");
                self.on_reactions_settled(token, None)
            }
        }
    }

    /// Start a session for `content_ref` and request its first page
    pub fn initialize(&mut self, content_ref: ContentRef, sort_mode: SortMode) -> Vec<Cmd> {
        let content_changed = self.content_ref.as_ref() != Some(&content_ref);
        self.content_ref = Some(content_ref);
        self.sort_mode = sort_mode;
        self.begin_session(content_changed)
    }

    /// Request the next page when the sentinel comes into view
    pub fn on_more_needed(&mut self) -> Vec<Cmd> {
        let Some(content_ref) = self.content_ref.clone() else {
            return vec![];
        };
        if self.pagination.is_loading()
            || !self.reactions.is_ready()
            || self.pagination.is_stalled()
        {
            return vec![];
        }
        if !self.pagination.has_more() {
            if self.phase == FeedPhase::Ready {
                self.transition(FeedPhase::Exhausted);
            }
            return vec![];
        }

        let token = self.clock.next_token();
        let page = self.pagination.advance(token);
        self.transition(FeedPhase::LoadingPage);
        vec![Cmd::FetchPage {
            token,
            request: PageRequest {
                content_ref,
                page,
                page_size: self.pagination.page_size(),
                sort_mode: self.sort_mode,
            },
        }]
    }

    /// Switch ordering; everything fetched for the old ordering is discarded
    pub fn on_sort_changed(&mut self, sort_mode: SortMode) -> Vec<Cmd> {
        if sort_mode == self.sort_mode {
            return vec![];
        }
        self.sort_mode = sort_mode;

        let mut cmds = vec![
            Cmd::PersistSortMode { sort_mode },
            Cmd::LogInfo {
                message: format!("Sorting comments by {}", sort_mode.label()),
            },
        ];
        if self.content_ref.is_some() {
            cmds.extend(self.begin_session(false));
        }
        cmds
    }

    /// Reload from page one, refetching reactions as well
    pub fn refresh(&mut self) -> Vec<Cmd> {
        if self.content_ref.is_none() {
            return vec![];
        }
        self.begin_session(true)
    }

    pub fn set_active_channel(&mut self, channel_id: Option<ChannelId>) -> Vec<Cmd> {
        if self.active_channel == channel_id {
            return vec![];
        }
        self.active_channel = channel_id;
        if self.content_ref.is_none() {
            return vec![];
        }
        self.reconcile_reactions()
    }

    /// Promote a deep-linked comment (or its parent) to the top of the list
    pub fn set_linked_comment(&mut self, comment: Option<CommentRecord>) -> Vec<Cmd> {
        if self.linked_comment == comment {
            return vec![];
        }
        self.linked_comment = comment;
        vec![Cmd::RequestRender]
    }

    /// Fetch reactions for every known comment that has none for the active channel
    pub fn reconcile_reactions(&mut self) -> Vec<Cmd> {
        let outcome = self.reactions.reconcile(
            self.comments.iter().map(|c| &c.id),
            self.active_channel.as_ref(),
            &mut self.clock,
        );

        match outcome {
            ReconcileOutcome::Ready => self.mark_ready(),
            ReconcileOutcome::AlreadyInFlight | ReconcileOutcome::Deferred => {
                self.await_reactions();
                vec![]
            }
            ReconcileOutcome::Fetch { token, comment_ids } => {
                self.await_reactions();
                vec![Cmd::FetchReactions {
                    token,
                    comment_ids,
                    channel_id: self.active_channel.clone(),
                }]
            }
        }
    }

    /// Build the render surface contract
    pub fn view(&self) -> FeedView {
        let items = if self.visible_len == 0 {
            vec![]
        } else {
            order_for_display(self.visible_comments(), self.linked_comment.as_ref())
                .into_iter()
                .map(|comment| self.item_for(comment))
                .collect()
        };

        FeedView {
            items,
            is_loading: self.pagination.is_loading()
                || self.phase == FeedPhase::AwaitingReactions
                || self.phase == FeedPhase::Resetting,
            has_more: self.pagination.has_more(),
            total_count: self.total_count,
            sort_mode: self.sort_mode,
            reactions_enabled: self.settings.reactions_enabled,
            error: self.last_error.clone(),
            phase: self.phase,
        }
    }

    fn item_for(&self, comment: &CommentRecord) -> FeedItem {
        let reactions = if self.settings.reactions_enabled {
            self.reactions
                .summary(&comment.id, self.active_channel.as_ref())
        } else {
            None
        };
        let is_mine = comment
            .channel_id
            .as_ref()
            .is_some_and(|channel_id| self.my_channels.contains(channel_id));
        let is_linked = self
            .linked_comment
            .as_ref()
            .is_some_and(|linked| linked.id == comment.id);

        FeedItem {
            comment: comment.clone(),
            reactions,
            is_mine,
            is_linked,
        }
    }

    fn begin_session(&mut self, clear_reactions: bool) -> Vec<Cmd> {
        let Some(content_ref) = self.content_ref.clone() else {
            return vec![];
        };

        let session = self.clock.begin();
        log::debug!(
            "Starting feed session {session} for {content_ref} sorted by {}",
            self.sort_mode
        );
        self.transition(FeedPhase::Resetting);
        self.pagination.reset();
        self.reactions.reset(clear_reactions);
        self.comments.clear();
        self.known_ids.clear();
        self.visible_len = 0;
        self.total_count = 0;
        self.last_error = None;

        let mut cmds = vec![Cmd::ResetComments {
            content_ref: content_ref.clone(),
        }];

        let token = self.clock.next_token();
        let page = self.pagination.advance(token);
        self.transition(FeedPhase::LoadingPage);
        cmds.push(Cmd::FetchPage {
            token,
            request: PageRequest {
                content_ref,
                page,
                page_size: self.pagination.page_size(),
                sort_mode: self.sort_mode,
            },
        });
        cmds
    }

    fn on_page_fetched(&mut self, token: RequestToken, page: CommentPage) -> Vec<Cmd> {
        if !self.pagination.is_in_flight(token) {
            log::debug!("Discarding stale page response {token:?}");
            return vec![];
        }

        self.pagination.finish_loading(page.total_pages);
        self.total_count = page.total_top_level_count;
        for comment in page.comments {
            if self.known_ids.insert(comment.id.clone()) {
                self.comments.push(comment);
            }
        }
        log::debug!(
            "Applied page {} of {}: {} comments known",
            self.pagination.page_number(),
            page.total_pages,
            self.comments.len()
        );

        self.reconcile_reactions()
    }

    fn on_page_failed(&mut self, token: RequestToken, error: String) -> Vec<Cmd> {
        if !self.pagination.is_in_flight(token) {
            log::debug!("Discarding stale page failure {token:?}");
            return vec![];
        }

        self.pagination.fail_loading();
        self.last_error = Some(error.clone());
        let mut cmds = vec![Cmd::LogError {
            message: format!("Failed to load comments: {error}"),
        }];
        if self.reactions.is_fetching() {
            self.transition(FeedPhase::AwaitingReactions);
        } else {
            cmds.extend(self.mark_ready());
        }
        cmds
    }

    fn on_reactions_settled(
        &mut self,
        token: RequestToken,
        snapshot: Option<ReactionSnapshot>,
    ) -> Vec<Cmd> {
        if !self.clock.is_current(token) {
            log::debug!("Discarding reactions from superseded session {token:?}");
            return vec![];
        }
        match self.reactions.complete(token, snapshot) {
            None => {
                log::debug!("Discarding stale reaction response {token:?}");
                vec![]
            }
            Some(true) => self.reconcile_reactions(),
            Some(false) => self.mark_ready(),
        }
    }

    /// Exhausted is terminal for the session; channel refetches happen behind it
    fn await_reactions(&mut self) {
        if !self.pagination.is_loading() && self.phase != FeedPhase::Exhausted {
            self.transition(FeedPhase::AwaitingReactions);
        }
    }

    fn mark_ready(&mut self) -> Vec<Cmd> {
        self.visible_len = self.comments.len();
        if !self.pagination.is_loading() && self.phase != FeedPhase::Exhausted {
            self.transition(FeedPhase::Ready);
        }
        vec![Cmd::RequestRender]
    }

    fn transition(&mut self, phase: FeedPhase) {
        if self.phase != phase {
            log::debug!("Feed phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{ReactionCounts, ReactionKey};

    fn content() -> ContentRef {
        ContentRef::new("lbry://abc").expect("valid content ref")
    }

    fn page_of(ids: &[&str], total: usize, total_pages: u32) -> CommentPage {
        CommentPage {
            comments: ids
                .iter()
                .map(|id| CommentRecord::new(*id, "author", "body"))
                .collect(),
            total_top_level_count: total,
            total_pages,
        }
    }

    fn fetch_token(cmds: &[Cmd]) -> Option<RequestToken> {
        cmds.iter().find_map(|cmd| match cmd {
            Cmd::FetchPage { token, .. } => Some(*token),
            _ => None,
        })
    }

    fn reaction_token(cmds: &[Cmd]) -> Option<RequestToken> {
        cmds.iter().find_map(|cmd| match cmd {
            Cmd::FetchReactions { token, .. } => Some(*token),
            _ => None,
        })
    }

    #[test]
    fn test_initialize_resets_then_fetches_first_page() {
        let mut feed = FeedState::default();
        let cmds = feed.initialize(content(), SortMode::Newest);

        assert_eq!(cmds.len(), 2);
        assert_eq!(
            cmds[0],
            Cmd::ResetComments {
                content_ref: content()
            }
        );
        match &cmds[1] {
            Cmd::FetchPage { request, .. } => {
                assert_eq!(request.page, 1);
                assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
                assert_eq!(request.sort_mode, SortMode::Newest);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(feed.page_number(), 1);
        assert_eq!(feed.phase(), FeedPhase::LoadingPage);
    }

    #[test]
    fn test_disabled_reactions_skip_awaiting_state() {
        let mut feed = FeedState::new(FeedSettings {
            page_size: 5,
            reactions_enabled: false,
        });
        let cmds = feed.initialize(content(), SortMode::Newest);
        let token = fetch_token(&cmds).expect("page fetch");

        let cmds = feed.update(FeedMsg::PageFetched {
            token,
            page: page_of(&["1", "2"], 2, 1),
        });

        assert!(reaction_token(&cmds).is_none());
        assert_eq!(feed.phase(), FeedPhase::Ready);
        assert_eq!(feed.view().items.len(), 2);
        assert!(feed.view().items.iter().all(|item| item.reactions.is_none()));
    }

    #[test]
    fn test_comments_hidden_until_reactions_settle() {
        let mut feed = FeedState::default();
        let token = fetch_token(&feed.initialize(content(), SortMode::Popularity)).expect("page fetch");

        let cmds = feed.update(FeedMsg::PageFetched {
            token,
            page: page_of(&["1", "2"], 2, 1),
        });
        let reaction = reaction_token(&cmds).expect("reaction fetch");
        assert_eq!(feed.phase(), FeedPhase::AwaitingReactions);
        assert!(feed.view().items.is_empty());
        assert!(feed.view().is_loading);

        feed.update(FeedMsg::ReactionsFetchFailed {
            token: reaction,
            error: "offline".to_string(),
        });
        assert_eq!(feed.phase(), FeedPhase::Ready);
        assert_eq!(feed.view().items.len(), 2);
    }

    #[test]
    fn test_more_needed_is_noop_while_loading() {
        let mut feed = FeedState::default();
        feed.initialize(content(), SortMode::Newest);
        assert!(feed.on_more_needed().is_empty());
        assert_eq!(feed.page_number(), 1);
    }

    #[test]
    fn test_page_failure_stalls_until_refresh() {
        let mut feed = FeedState::default();
        let token = fetch_token(&feed.initialize(content(), SortMode::Newest)).expect("page fetch");

        let cmds = feed.update(FeedMsg::PageFetchFailed {
            token,
            error: "boom".to_string(),
        });
        assert!(cmds
            .iter()
            .any(|cmd| matches!(cmd, Cmd::LogError { .. })));
        assert_eq!(feed.last_error(), Some("boom"));
        assert_eq!(feed.view().error, Some("boom".to_string()));
        assert!(feed.on_more_needed().is_empty());

        let cmds = feed.refresh();
        assert!(fetch_token(&cmds).is_some());
        assert_eq!(feed.last_error(), None);
    }

    #[test]
    fn test_same_sort_is_noop() {
        let mut feed = FeedState::default();
        feed.initialize(content(), SortMode::Newest);
        assert!(feed.on_sort_changed(SortMode::Newest).is_empty());
    }

    #[test]
    fn test_sort_change_before_initialize_persists_and_logs() {
        let mut feed = FeedState::default();
        let cmds = feed.on_sort_changed(SortMode::Controversy);
        assert_eq!(
            cmds,
            vec![
                Cmd::PersistSortMode {
                    sort_mode: SortMode::Controversy
                },
                Cmd::LogInfo {
                    message: format!("Sorting comments by {}", SortMode::Controversy.label()),
                },
            ]
        );
        assert_eq!(feed.phase(), FeedPhase::Idle);
    }

    #[test]
    fn test_is_mine_uses_viewer_channels() {
        let mut feed = FeedState::new(FeedSettings {
            page_size: 5,
            reactions_enabled: false,
        })
        .with_my_channels(vec![ChannelId::new("me")]);
        let token = fetch_token(&feed.initialize(content(), SortMode::Newest)).expect("page fetch");

        let mut page = page_of(&[], 2, 1);
        page.comments = vec![
            CommentRecord::new("1", "me", "mine").with_channel("me"),
            CommentRecord::new("2", "other", "theirs").with_channel("other"),
        ];
        feed.update(FeedMsg::PageFetched { token, page });

        let view = feed.view();
        assert!(view.items[0].is_mine);
        assert!(!view.items[1].is_mine);
    }

    #[test]
    fn test_visible_len_counts_prepended_linked_comment() {
        let mut feed = FeedState::new(FeedSettings {
            page_size: 5,
            reactions_enabled: false,
        });
        let token = fetch_token(&feed.initialize(content(), SortMode::Newest)).expect("page fetch");
        feed.update(FeedMsg::PageFetched {
            token,
            page: page_of(&["1", "2"], 2, 1),
        });
        feed.update(FeedMsg::LinkedCommentSet(Some(CommentRecord::new(
            "9", "author", "linked",
        ))));

        assert_eq!(feed.visible_len(), 3);
        let view = feed.view();
        assert_eq!(view.items.len(), 3);
        assert!(view.items[0].is_linked);
    }

    #[test]
    fn test_setting_same_linked_comment_twice_is_noop() {
        let mut feed = FeedState::default();
        let linked = CommentRecord::new("9", "author", "linked");
        assert_eq!(
            feed.set_linked_comment(Some(linked.clone())),
            vec![Cmd::RequestRender]
        );
        assert!(feed.set_linked_comment(Some(linked)).is_empty());
        assert_eq!(feed.set_linked_comment(None), vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_channel_switch_during_reaction_fetch_refetches_for_new_channel() {
        let mut feed = FeedState::default();
        let token = fetch_token(&feed.initialize(content(), SortMode::Newest)).expect("page fetch");
        let cmds = feed.update(FeedMsg::PageFetched {
            token,
            page: page_of(&["a", "b"], 2, 1),
        });
        let anonymous = reaction_token(&cmds).expect("reaction fetch");

        let me = ChannelId::new("me");
        assert!(feed
            .update(FeedMsg::ActiveChannelChanged(Some(me.clone())))
            .is_empty());

        // Counts for the anonymous viewer do not settle the new channel
        let mut snapshot = ReactionSnapshot::default();
        for id in ["a", "b"] {
            snapshot.others.insert(
                ReactionKey::for_channel(&CommentId::new(id), None),
                ReactionCounts::new(1, 0),
            );
        }
        let cmds = feed.update(FeedMsg::ReactionsFetched {
            token: anonymous,
            snapshot,
        });
        let refetch = cmds
            .iter()
            .find_map(|cmd| match cmd {
                Cmd::FetchReactions {
                    token,
                    comment_ids,
                    channel_id,
                } => Some((*token, comment_ids.clone(), channel_id.clone())),
                _ => None,
            })
            .expect("refetch for the new channel");
        assert_eq!(refetch.1, vec![CommentId::new("a"), CommentId::new("b")]);
        assert_eq!(refetch.2, Some(me.clone()));
        assert_eq!(feed.phase(), FeedPhase::AwaitingReactions);
        assert!(feed.view().items.is_empty());

        let mut snapshot = ReactionSnapshot::default();
        for id in ["a", "b"] {
            snapshot.others.insert(
                ReactionKey::for_channel(&CommentId::new(id), Some(&me)),
                ReactionCounts::new(2, 1),
            );
        }
        feed.update(FeedMsg::ReactionsFetched {
            token: refetch.0,
            snapshot,
        });
        assert_eq!(feed.phase(), FeedPhase::Ready);
        let view = feed.view();
        assert_eq!(view.items.len(), 2);
        assert!(view.items.iter().all(|item| item.reactions.is_some()));
    }

    #[test]
    fn test_channel_switch_after_exhaustion_stays_exhausted() {
        let mut feed = FeedState::default();
        let token = fetch_token(&feed.initialize(content(), SortMode::Newest)).expect("page fetch");
        let cmds = feed.update(FeedMsg::PageFetched {
            token,
            page: page_of(&["a"], 1, 1),
        });
        let reaction = reaction_token(&cmds).expect("reaction fetch");
        feed.update(FeedMsg::ReactionsFetchFailed {
            token: reaction,
            error: "offline".to_string(),
        });
        assert!(feed.on_more_needed().is_empty());
        assert_eq!(feed.phase(), FeedPhase::Exhausted);

        let cmds = feed.update(FeedMsg::ActiveChannelChanged(Some(ChannelId::new("me"))));
        let reaction = reaction_token(&cmds).expect("reaction fetch for new channel");
        assert_eq!(feed.phase(), FeedPhase::Exhausted);
        assert!(!feed.view().is_loading);
        assert_eq!(feed.view().items.len(), 1);

        feed.update(FeedMsg::ReactionsFetchFailed {
            token: reaction,
            error: "offline".to_string(),
        });
        assert_eq!(feed.phase(), FeedPhase::Exhausted);
    }
}
