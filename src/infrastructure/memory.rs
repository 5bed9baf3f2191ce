//! In-memory store back ends
//!
//! Used by the demo binary and by tests. Both stores record the calls they
//! receive and can be told to fail or to answer slowly.

use std::{
    collections::{HashMap, HashSet},
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{
    domain::{
        ChannelId, CommentId, CommentPage, CommentRecord, ContentRef, FeedError, FeedResult,
        MyReaction, ReactionCounts, ReactionKey, ReactionSnapshot, SortMode,
    },
    infrastructure::store::{CommentStore, ReactionStore},
};

const DEMO_AUTHORS: [&str; 6] = ["@alice", "@bob", "@carol", "@dave", "@erin", "@frank"];
const DEMO_BODIES: [&str; 6] = [
    "Great video, thanks for sharing!",
    "I disagree with the point made at 3:42.",
    "Does anyone have a link to the source?",
    "This deserves way more views.",
    "Came here from the newsletter. Subscribed.",
    "The audio cuts out around the middle, otherwise solid.",
];

/// A recorded `list_page` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCall {
    pub content_ref: ContentRef,
    pub page: u32,
    pub page_size: u32,
    pub sort_mode: SortMode,
}

#[derive(Debug, Default)]
pub struct InMemoryCommentStore {
    threads: Mutex<HashMap<ContentRef, Vec<CommentRecord>>>,
    calls: Mutex<Vec<PageCall>>,
    resets: Mutex<Vec<ContentRef>>,
    fail_pages: AtomicBool,
    latency: Mutex<Option<Duration>>,
}

impl InMemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `count` generated top-level comments for `content_ref`
    pub fn seeded(content_ref: &ContentRef, count: usize) -> Self {
        let store = Self::new();
        store.insert_thread(content_ref.clone(), demo_comments(count));
        store
    }

    pub fn insert_thread(&self, content_ref: ContentRef, comments: Vec<CommentRecord>) {
        self.threads.lock().insert(content_ref, comments);
    }

    pub fn set_fail_pages(&self, fail: bool) {
        self.fail_pages.store(fail, Ordering::SeqCst);
    }

    pub fn set_latency(&self, latency: Option<Duration>) {
        *self.latency.lock() = latency;
    }

    pub fn calls(&self) -> Vec<PageCall> {
        self.calls.lock().clone()
    }

    pub fn resets(&self) -> Vec<ContentRef> {
        self.resets.lock().clone()
    }

    fn sorted_top_level(&self, content_ref: &ContentRef, sort_mode: SortMode) -> Vec<CommentRecord> {
        let mut comments: Vec<CommentRecord> = self
            .threads
            .lock()
            .get(content_ref)
            .map(|comments| {
                comments
                    .iter()
                    .filter(|c| c.is_top_level())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        match sort_mode {
            SortMode::Newest => comments.sort_by(|a, b| b.posted_at.cmp(&a.posted_at)),
            SortMode::Popularity => comments.sort_by(|a, b| {
                b.support_amount
                    .total_cmp(&a.support_amount)
                    .then(b.posted_at.cmp(&a.posted_at))
            }),
            SortMode::Controversy => comments.sort_by(|a, b| {
                b.direct_reply_count
                    .cmp(&a.direct_reply_count)
                    .then(b.posted_at.cmp(&a.posted_at))
            }),
        }
        // Pinned comments always lead
        comments.sort_by_key(|c| !c.pinned);
        comments
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn list_page(
        &self,
        content_ref: &ContentRef,
        page: u32,
        page_size: u32,
        sort_mode: SortMode,
    ) -> FeedResult<CommentPage> {
        self.calls.lock().push(PageCall {
            content_ref: content_ref.clone(),
            page,
            page_size,
            sort_mode,
        });

        let latency = *self.latency.lock();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        if self.fail_pages.load(Ordering::SeqCst) {
            return Err(FeedError::CommentStore(format!(
                "page {page} of {content_ref} unavailable"
            )));
        }

        let comments = self.sorted_top_level(content_ref, sort_mode);
        let total_top_level_count = comments.len();
        let page_size = page_size.max(1) as usize;
        let total_pages = total_top_level_count.div_ceil(page_size) as u32;

        let start = (page.saturating_sub(1) as usize).saturating_mul(page_size);
        let comments = comments.into_iter().skip(start).take(page_size).collect();

        Ok(CommentPage {
            comments,
            total_top_level_count,
            total_pages,
        })
    }

    fn reset(&self, content_ref: &ContentRef) {
        self.resets.lock().push(content_ref.clone());
    }
}

#[derive(Debug, Default)]
pub struct InMemoryReactionStore {
    counts: Mutex<HashMap<CommentId, ReactionCounts>>,
    mine: Mutex<HashMap<ReactionKey, MyReaction>>,
    loaded: Mutex<HashSet<ReactionKey>>,
    calls: Mutex<Vec<Vec<CommentId>>>,
    fail_fetches: AtomicBool,
}

impl InMemoryReactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive deterministic counts for the comments of a demo thread
    pub fn seeded(comments: &[CommentRecord]) -> Self {
        let store = Self::new();
        for (i, comment) in comments.iter().enumerate() {
            let likes = (i as u64 * 7 + 3) % 23;
            let dislikes = (i as u64 * 5 + 1) % 9;
            store.set_counts(comment.id.clone(), ReactionCounts::new(likes, dislikes));
        }
        store
    }

    pub fn set_counts(&self, comment_id: CommentId, counts: ReactionCounts) {
        self.counts.lock().insert(comment_id, counts);
    }

    pub fn set_mine(&self, key: ReactionKey, reaction: MyReaction) {
        self.mine.lock().insert(key, reaction);
    }

    pub fn set_fail_fetches(&self, fail: bool) {
        self.fail_fetches.store(fail, Ordering::SeqCst);
    }

    /// Comment ids requested by each `fetch_reactions` call, in order
    pub fn calls(&self) -> Vec<Vec<CommentId>> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ReactionStore for InMemoryReactionStore {
    async fn fetch_reactions(
        &self,
        comment_ids: &[CommentId],
        channel_id: Option<&ChannelId>,
    ) -> FeedResult<()> {
        self.calls.lock().push(comment_ids.to_vec());

        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(FeedError::ReactionStore(format!(
                "reactions for {} comments unavailable",
                comment_ids.len()
            )));
        }

        let mut loaded = self.loaded.lock();
        for id in comment_ids {
            loaded.insert(ReactionKey::for_channel(id, channel_id));
        }
        Ok(())
    }

    fn snapshot(
        &self,
        comment_ids: &[CommentId],
        channel_id: Option<&ChannelId>,
    ) -> ReactionSnapshot {
        let loaded = self.loaded.lock();
        let counts = self.counts.lock();
        let mine = self.mine.lock();

        let mut snapshot = ReactionSnapshot::default();
        for id in comment_ids {
            let key = ReactionKey::for_channel(id, channel_id);
            if !loaded.contains(&key) {
                continue;
            }
            snapshot
                .others
                .insert(key.clone(), counts.get(id).copied().unwrap_or_default());
            if let Some(reaction) = mine.get(&key) {
                snapshot.mine.insert(key, *reaction);
            }
        }
        snapshot
    }
}

/// Generate a thread of `count` top-level comments, newest first by id
pub fn demo_comments(count: usize) -> Vec<CommentRecord> {
    const BASE_TIMESTAMP: i64 = 1_700_000_000;

    (0..count)
        .map(|i| {
            let author = DEMO_AUTHORS[i % DEMO_AUTHORS.len()];
            let body = DEMO_BODIES[i % DEMO_BODIES.len()];
            let mut comment = CommentRecord::new(format!("c{i:04}"), author, body)
                .with_channel(format!("{}-channel", author.trim_start_matches('@')))
                .with_posted_at(BASE_TIMESTAMP + i as i64 * 90);
            comment.support_amount = ((i * 37) % 11) as f64 * 0.5;
            comment.direct_reply_count = ((i * 13) % 5) as u32;
            comment
        })
        .collect()
}
