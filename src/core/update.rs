use crate::core::{cmd::Cmd, msg::Msg, state::AppState};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Feed messages (delegated to FeedState)
        Msg::Feed(feed_msg) => {
            let is_reset = feed_msg.is_reset();
            let commands = state.feed.update(feed_msg);
            if is_reset && !commands.is_empty() {
                state.ui.deselect();
            }
            state.ui.clamp(state.feed.visible_len());
            (state, commands)
        }

        // UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let len = state.feed.visible_len();
            let commands = state.ui.update(ui_msg, len);
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            msg::{feed::FeedMsg, system::SystemMsg, ui::UiMsg},
            state::feed::FeedSettings,
        },
        domain::{CommentPage, CommentRecord, ContentRef, SortMode},
    };

    fn state_without_reactions() -> AppState {
        AppState::new(FeedSettings {
            page_size: 5,
            reactions_enabled: false,
        })
    }

    fn loaded_state() -> AppState {
        let state = state_without_reactions();
        let content_ref = ContentRef::new("lbry://abc").expect("valid content ref");
        let (state, cmds) = update(
            Msg::Feed(FeedMsg::Initialize {
                content_ref,
                sort_mode: SortMode::Newest,
            }),
            state,
        );
        let token = cmds
            .iter()
            .find_map(|cmd| match cmd {
                Cmd::FetchPage { token, .. } => Some(*token),
                _ => None,
            })
            .expect("page fetch");
        let page = CommentPage {
            comments: (1..=3)
                .map(|i| CommentRecord::new(i.to_string().as_str(), "author", "body"))
                .collect(),
            total_top_level_count: 3,
            total_pages: 1,
        };
        let (state, _) = update(Msg::Feed(FeedMsg::PageFetched { token, page }), state);
        state
    }

    #[test]
    fn test_update_quit() {
        let (state, cmds) = update(Msg::System(SystemMsg::Quit), AppState::default());
        assert!(state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_ui_scroll_is_bounded_by_visible_comments() {
        let state = loaded_state();
        let (state, _) = update(Msg::Ui(UiMsg::ScrollToBottom), state);
        let (state, _) = update(Msg::Ui(UiMsg::ScrollDown), state);
        assert_eq!(state.ui.selected_index(), Some(2));
    }

    #[test]
    fn test_reset_clears_selection() {
        let state = loaded_state();
        let (state, _) = update(Msg::Ui(UiMsg::ScrollDown), state);
        assert_eq!(state.ui.selected_index(), Some(0));

        let (state, cmds) = update(Msg::Feed(FeedMsg::Refresh), state);
        assert!(!cmds.is_empty());
        assert_eq!(state.ui.selected_index(), None);
    }
}
