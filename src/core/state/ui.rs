use crate::core::{cmd::Cmd, msg::ui::UiMsg};

/// Selection within the rendered comment list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    selected_index: Option<usize>,
}

impl UiState {
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn deselect(&mut self) {
        self.selected_index = None;
    }

    /// Keep the selection inside a list that may have shrunk
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match self.selected_index {
            _ if len == 0 => None,
            Some(i) if i >= len => Some(len - 1),
            other => other,
        };
    }

    /// UI-specific update function
    /// `len` is the number of rows currently rendered
    pub fn update(&mut self, msg: UiMsg, len: usize) -> Vec<Cmd> {
        let before = self.selected_index;
        self.selected_index = match msg {
            _ if len == 0 => None,
            UiMsg::ScrollUp => match self.selected_index {
                Some(i) if i > 0 => Some(i - 1),
                _ => Some(0),
            },
            UiMsg::ScrollDown => match self.selected_index {
                Some(i) if i + 1 < len => Some(i + 1),
                Some(_) => Some(len - 1),
                None => Some(0),
            },
            UiMsg::ScrollToTop => Some(0),
            UiMsg::ScrollToBottom => Some(len - 1),
            UiMsg::Deselect => None,
        };

        if before != self.selected_index {
            vec![Cmd::RequestRender]
        } else {
            vec![]
        }
    }
}
