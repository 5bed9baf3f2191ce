use serde::{Deserialize, Serialize};

/// Messages specific to UiState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    Deselect,
}
