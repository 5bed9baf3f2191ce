//! Page cursor state for the comment feed

use super::session::RequestToken;

/// Tracks the page cursor and the page request in flight
///
/// `page_number` is 1-based once a fetch has been issued; 0 means a reset
/// was requested and nothing has been fetched yet.
#[derive(Debug, Clone)]
pub struct PaginationState {
    page_number: u32,
    page_size: u32,
    total_pages: Option<u32>,
    loading: Option<RequestToken>,
    stalled: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new(page_size: u32) -> Self {
        Self {
            page_number: 0,
            page_size: page_size.max(1),
            total_pages: None,
            loading: None,
            stalled: false,
        }
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Rewind to page 0 and forget any request in flight
    pub fn reset(&mut self) {
        self.page_number = 0;
        self.total_pages = None;
        self.loading = None;
        self.stalled = false;
    }

    /// Advance to the next page and mark it as loading
    pub fn advance(&mut self, token: RequestToken) -> u32 {
        self.page_number += 1;
        self.loading = Some(token);
        self.page_number
    }

    /// Finish loading the page requested with `token`
    pub fn finish_loading(&mut self, total_pages: u32) {
        self.loading = None;
        self.total_pages = Some(total_pages);
    }

    /// Finish loading with a failure; pagination stays stalled until reset
    pub fn fail_loading(&mut self) {
        self.loading = None;
        self.stalled = true;
    }

    /// Check if a page request is in flight
    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    pub fn is_in_flight(&self, token: RequestToken) -> bool {
        self.loading == Some(token)
    }

    pub fn is_stalled(&self) -> bool {
        self.stalled
    }

    /// More pages remain once the totals are known and the cursor is behind them
    pub fn has_more(&self) -> bool {
        self.total_pages
            .is_some_and(|total_pages| self.page_number < total_pages)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn token(seq: u64) -> RequestToken {
        RequestToken { session: 1, seq }
    }

    #[test]
    fn test_pagination_state_default() {
        let state = PaginationState::new(5);
        assert_eq!(state.page_number(), 0);
        assert_eq!(state.total_pages(), None);
        assert!(!state.is_loading());
        assert!(!state.has_more());
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let state = PaginationState::new(0);
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn test_advance_and_finish() {
        let mut state = PaginationState::new(5);

        assert_eq!(state.advance(token(1)), 1);
        assert!(state.is_loading());
        assert!(state.is_in_flight(token(1)));
        assert!(!state.is_in_flight(token(2)));

        state.finish_loading(3);
        assert!(!state.is_loading());
        assert_eq!(state.total_pages(), Some(3));
        assert!(state.has_more());

        state.advance(token(2));
        state.finish_loading(3);
        state.advance(token(3));
        state.finish_loading(3);
        assert_eq!(state.page_number(), 3);
        assert!(!state.has_more());
    }

    #[test]
    fn test_failure_stalls_until_reset() {
        let mut state = PaginationState::new(5);
        state.advance(token(1));
        state.fail_loading();
        assert!(state.is_stalled());
        assert!(!state.is_loading());

        state.reset();
        assert!(!state.is_stalled());
        assert_eq!(state.page_number(), 0);
    }
}
