use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Resize(u16, u16),
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}
