//! Interactive multi-select of saved articles.
//!
//! This module provides the terminal-based checkbox list used by
//! `open-all`. Choices are addressed by their index in the label list, so
//! articles with identical titles stay distinguishable.
//!
//! # User Interface
//!
//! The interface supports:
//! - Arrow keys or vim-style (j/k) navigation
//! - Space to check or uncheck the current article, `a` to toggle all
//! - Enter to confirm (at least one article must be checked)
//! - '/' to filter articles (fuzzy search); Space still toggles while filtering
//! - 'q' or Escape to quit

pub mod state;
pub mod types;
pub mod ui;

pub use types::SelectionChoice;
pub use ui::TerminalPicker;

use rust_marks_core::error::Result;

/// Shown when the user confirms without checking anything
pub const EMPTY_SELECTION_MESSAGE: &str = "You must choose at least one article.";

/// Presents labeled choices and returns the indexes the user picked.
pub trait ArticlePicker {
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be driven.
    fn pick(&self, labels: &[String]) -> Result<SelectionChoice>;
}
