//! Detects when the reader has scrolled near the end of the feed
//!
//! The feed component reports the geometry it rendered; the observer turns
//! that into a single "sentinel visible" event per approach to the end of
//! the list.

/// How far from the last comment the selection may be for the sentinel to count as seen
pub const SENTINEL_THRESHOLD: usize = 1;

/// What the feed component drew in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedGeometry {
    /// Rendered comment rows
    pub item_count: usize,
    /// Sum of the rendered item heights
    pub content_height: u16,
    pub viewport_height: u16,
    pub selected: Option<usize>,
    /// The loading row is part of the frame
    pub sentinel_drawn: bool,
    pub is_loading: bool,
}

impl FeedGeometry {
    /// Whether the end of the list, and so the sentinel row, is on screen
    pub fn sentinel_in_view(&self) -> bool {
        if !self.sentinel_drawn {
            return false;
        }
        if self.content_height <= self.viewport_height {
            return true;
        }
        match self.selected {
            Some(index) => index + SENTINEL_THRESHOLD >= self.item_count,
            None => false,
        }
    }
}

/// Edge-triggered visibility tracker
///
/// Fires once when the sentinel comes into view. It re-arms whenever the
/// list grows or loading finishes, so a viewport that is still not full
/// keeps asking for pages.
#[derive(Debug, Clone, Default)]
pub struct SentinelObserver {
    last_key: Option<(usize, bool)>,
    was_visible: bool,
}

impl SentinelObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's geometry; returns true when more items should be requested
    pub fn observe(&mut self, geometry: &FeedGeometry) -> bool {
        let key = (geometry.item_count, geometry.is_loading);
        if self.last_key != Some(key) {
            self.last_key = Some(key);
            self.was_visible = false;
        }

        let visible = geometry.sentinel_in_view();
        let fire = visible && !self.was_visible && !geometry.is_loading;
        if visible && !geometry.is_loading {
            self.was_visible = true;
        } else if !visible {
            self.was_visible = false;
        }
        fire
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
