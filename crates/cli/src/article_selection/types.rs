//! Type definitions for article selection and UI state.

use std::collections::BTreeSet;

/// Rows kept for the header, validation message and filter line
pub const RESERVED_ROWS: u16 = 3;

/// Outcome of the multi-select prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionChoice {
    /// Indexes into the label list, ascending. Never empty.
    Selected(Vec<usize>),
    Quit,
}

/// Direction to move the cursor in the selection UI.
#[derive(Clone, Copy, Debug)]
pub enum CycleDirection {
    Up,
    Down,
}

/// Visible window onto the (filtered) article list.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

/// Complete UI state for the selection interface.
#[derive(Clone, PartialEq, Debug)]
pub struct UiState {
    /// Cursor position within the displayed (filtered) rows
    pub cursor: usize,
    pub viewport: ViewportState,
    pub is_filtering: bool,
    pub filter_text: String,
    /// Checked label indexes; survives filtering
    pub checked: BTreeSet<usize>,
    pub validation_message: Option<String>,
}

impl UiState {
    #[must_use]
    pub fn new(viewport: ViewportState) -> Self {
        Self {
            cursor: 0,
            viewport,
            is_filtering: false,
            filter_text: String::new(),
            checked: BTreeSet::new(),
            validation_message: None,
        }
    }
}
