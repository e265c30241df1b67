//! Inline Edit State
//!
//! Per-label edit state machine: Viewing, double-click to Editing, Enter
//! commits, Escape restores the captured original.

/// Edit state of a single todo label
#[derive(Debug, Clone, PartialEq)]
pub enum EditState {
    Viewing,
    /// Holds the pre-edit markup so Escape can restore it
    Editing { original: String },
}

/// What the caller must do after a key event
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    /// Stay as-is
    None,
    /// Leave edit mode and submit the current markup
    Commit,
    /// Leave edit mode and put the pre-edit markup back
    Cancel { original: String },
}

impl EditState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    /// Double-click: enter edit mode, capturing the current markup.
    /// A second double-click while editing keeps the first capture.
    pub fn begin(self, current_markup: &str) -> EditState {
        match self {
            EditState::Viewing => EditState::Editing {
                original: current_markup.to_string(),
            },
            editing => editing,
        }
    }

    /// Key released while the label has focus
    pub fn key(self, key: &str) -> (EditState, EditAction) {
        match self {
            EditState::Viewing => (EditState::Viewing, EditAction::None),
            EditState::Editing { original } => match key {
                "Enter" => (EditState::Viewing, EditAction::Commit),
                "Escape" => (EditState::Viewing, EditAction::Cancel { original }),
                _ => (EditState::Editing { original }, EditAction::None),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dblclick_enters_editing() {
        let state = EditState::Viewing.begin("buy <b>milk</b>");
        assert!(state.is_editing());
        assert_eq!(
            state,
            EditState::Editing {
                original: "buy <b>milk</b>".to_string()
            }
        );
    }

    #[test]
    fn test_repeat_dblclick_keeps_first_capture() {
        let state = EditState::Viewing.begin("first").begin("second");
        assert_eq!(
            state,
            EditState::Editing {
                original: "first".to_string()
            }
        );
    }

    #[test]
    fn test_enter_commits_and_leaves_editing() {
        let (state, action) = EditState::Viewing.begin("text").key("Enter");
        assert_eq!(state, EditState::Viewing);
        assert_eq!(action, EditAction::Commit);
    }

    #[test]
    fn test_escape_cancels_with_original() {
        let (state, action) = EditState::Viewing.begin("text").key("Escape");
        assert_eq!(state, EditState::Viewing);
        assert_eq!(
            action,
            EditAction::Cancel {
                original: "text".to_string()
            }
        );
    }

    #[test]
    fn test_other_keys_keep_editing() {
        let (state, action) = EditState::Viewing.begin("text").key("a");
        assert!(state.is_editing());
        assert_eq!(action, EditAction::None);

        let (state, action) = state.key("Shift");
        assert!(state.is_editing());
        assert_eq!(action, EditAction::None);
    }

    #[test]
    fn test_keys_ignored_while_viewing() {
        let (state, action) = EditState::Viewing.key("Enter");
        assert_eq!(state, EditState::Viewing);
        assert_eq!(action, EditAction::None);
    }
}
