use serde::{Deserialize, Serialize};

pub mod feed;
pub mod system;
pub mod ui;

use feed::FeedMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // Comment feed (delegated to FeedState)
    Feed(FeedMsg),

    // List navigation (delegated to UiState)
    Ui(UiMsg),

    // System operations (delegated to SystemState)
    System(SystemMsg),
}

impl From<FeedMsg> for Msg {
    fn from(value: FeedMsg) -> Self {
        Msg::Feed(value)
    }
}

impl From<UiMsg> for Msg {
    fn from(value: UiMsg) -> Self {
        Msg::Ui(value)
    }
}

impl From<SystemMsg> for Msg {
    fn from(value: SystemMsg) -> Self {
        Msg::System(value)
    }
}
