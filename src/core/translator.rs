use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{feed::FeedMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::SortMode,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::SentinelVisible => vec![Msg::Feed(FeedMsg::SentinelVisible)],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => vec![Msg::System(SystemMsg::Quit)],
            _ => vec![],
        };
    }

    match key.code {
        KeyCode::Char('q') => vec![Msg::System(SystemMsg::Quit)],

        KeyCode::Char('j') | KeyCode::Down => vec![Msg::Ui(UiMsg::ScrollDown)],
        KeyCode::Char('k') | KeyCode::Up => vec![Msg::Ui(UiMsg::ScrollUp)],
        KeyCode::Char('g') | KeyCode::Home => vec![Msg::Ui(UiMsg::ScrollToTop)],
        KeyCode::Char('G') | KeyCode::End => vec![Msg::Ui(UiMsg::ScrollToBottom)],
        KeyCode::Esc => vec![Msg::Ui(UiMsg::Deselect)],

        KeyCode::Char('r') => vec![Msg::Feed(FeedMsg::Refresh)],

        KeyCode::Char('s') => translate_sort_key(state.feed.sort_mode().next(), state),
        KeyCode::Char('1') => translate_sort_key(SortMode::Popularity, state),
        KeyCode::Char('2') => translate_sort_key(SortMode::Controversy, state),
        KeyCode::Char('3') => translate_sort_key(SortMode::Newest, state),

        _ => vec![],
    }
}

/// Sort keys only act while the toggles are on screen
fn translate_sort_key(sort_mode: SortMode, state: &AppState) -> Vec<Msg> {
    if !sort_toggles_visible(state) {
        return vec![];
    }
    if sort_mode == state.feed.sort_mode() {
        return vec![];
    }
    vec![
        Msg::Feed(FeedMsg::SortChanged(sort_mode)),
        Msg::System(SystemMsg::UpdateStatusMessage(format!(
            "Sorted by {}",
            sort_mode.label()
        ))),
    ]
}

fn sort_toggles_visible(state: &AppState) -> bool {
    state.feed.settings().reactions_enabled && state.feed.total_count() > 1
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        core::state::feed::{FeedSettings, RequestToken},
        domain::{CommentPage, CommentRecord, ContentRef},
    };

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// State with two loaded comments so the sort toggles are visible
    fn loaded_state(reactions_enabled: bool) -> AppState {
        let mut state = AppState::new(FeedSettings {
            page_size: 5,
            reactions_enabled,
        });
        let content = ContentRef::new("lbry://abc").expect("valid content ref");
        state.feed.initialize(content, SortMode::Newest);
        state.feed.update(FeedMsg::PageFetched {
            token: RequestToken {
                session: state.feed.session(),
                seq: 1,
            },
            page: CommentPage {
                comments: vec![
                    CommentRecord::new("1", "a", "x"),
                    CommentRecord::new("2", "b", "y"),
                ],
                total_top_level_count: 2,
                total_pages: 1,
            },
        });
        state
    }

    #[rstest]
    #[case(KeyCode::Char('q'), Msg::System(SystemMsg::Quit))]
    #[case(KeyCode::Char('j'), Msg::Ui(UiMsg::ScrollDown))]
    #[case(KeyCode::Down, Msg::Ui(UiMsg::ScrollDown))]
    #[case(KeyCode::Char('k'), Msg::Ui(UiMsg::ScrollUp))]
    #[case(KeyCode::Char('g'), Msg::Ui(UiMsg::ScrollToTop))]
    #[case(KeyCode::Char('G'), Msg::Ui(UiMsg::ScrollToBottom))]
    #[case(KeyCode::Esc, Msg::Ui(UiMsg::Deselect))]
    #[case(KeyCode::Char('r'), Msg::Feed(FeedMsg::Refresh))]
    fn test_navigation_keys(#[case] code: KeyCode, #[case] expected: Msg) {
        let state = AppState::default();
        assert_eq!(translate_raw_to_domain(key(code), &state), vec![expected]);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let state = AppState::default();
        let raw = RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_raw_to_domain(raw, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[rstest]
    #[case(KeyCode::Char('1'), SortMode::Popularity)]
    #[case(KeyCode::Char('2'), SortMode::Controversy)]
    fn test_sort_keys_when_toggles_visible(#[case] code: KeyCode, #[case] expected: SortMode) {
        let state = loaded_state(true);
        let msgs = translate_raw_to_domain(key(code), &state);
        assert_eq!(msgs[0], Msg::Feed(FeedMsg::SortChanged(expected)));
    }

    #[test]
    fn test_current_sort_key_is_ignored() {
        let state = loaded_state(true);
        assert!(translate_raw_to_domain(key(KeyCode::Char('3')), &state).is_empty());
    }

    #[test]
    fn test_sort_keys_ignored_without_reactions() {
        let state = loaded_state(false);
        assert!(translate_raw_to_domain(key(KeyCode::Char('1')), &state).is_empty());
        assert!(translate_raw_to_domain(key(KeyCode::Char('s')), &state).is_empty());
    }

    #[test]
    fn test_sort_keys_ignored_before_comments_load() {
        let state = AppState::default();
        assert!(translate_raw_to_domain(key(KeyCode::Char('2')), &state).is_empty());
    }

    #[test]
    fn test_system_events() {
        let state = AppState::default();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(80, 24), &state),
            vec![Msg::System(SystemMsg::Resize(80, 24))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::SentinelVisible, &state),
            vec![Msg::Feed(FeedMsg::SentinelVisible)]
        );
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
    }
}
