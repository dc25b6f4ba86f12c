//! Pure state transitions for the selection UI.
//!
//! None of these touch the terminal; `ui` applies them and redraws.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use super::types::CycleDirection::{self, Down, Up};
use super::types::{UiState, ViewportState, RESERVED_ROWS};
use super::EMPTY_SELECTION_MESSAGE;

/// Label indexes matching `predicate`, ascending.
///
/// A numeric predicate matches against the 1-based row number, anything
/// else is fuzzy matched against the label.
#[must_use]
pub fn filter_displayed_indexes(labels: &[String], predicate: &str) -> Vec<usize> {
    if predicate.is_empty() {
        return (0..labels.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let is_index_predicate = predicate.parse::<usize>().is_ok();

    labels
        .iter()
        .enumerate()
        .filter(|(i, label)| {
            if is_index_predicate {
                (i + 1).to_string().contains(predicate)
            } else {
                matcher.fuzzy_match(label, predicate).is_some()
            }
        })
        .map(|(i, _)| i)
        .collect()
}

/// Move the cursor in the given direction, wrapping at either end
#[must_use]
pub fn move_cursor(ui_state: &UiState, displayed_length: usize, direction: CycleDirection) -> UiState {
    if displayed_length == 0 {
        return ui_state.clone();
    }

    let mut ui_state = ui_state.clone();
    let height = (ui_state.viewport.height as usize).max(1);
    let current = ui_state.cursor.min(displayed_length - 1);

    let new_cursor = match direction {
        Up => {
            if current == 0 {
                let last = displayed_length - 1;
                ui_state.viewport.offset = last.saturating_sub(height - 1);
                last
            } else {
                let previous = current - 1;
                if previous < ui_state.viewport.offset {
                    ui_state.viewport.offset = previous;
                }
                previous
            }
        }
        Down => {
            let next = (current + 1) % displayed_length;
            if next < current {
                ui_state.viewport.offset = 0;
            } else if next >= ui_state.viewport.offset + height {
                ui_state.viewport.offset = next + 1 - height;
            }
            next
        }
    };

    ui_state.cursor = new_cursor;
    ui_state
}

/// Check or uncheck the article under the cursor
#[must_use]
pub fn toggle_current(ui_state: &UiState, displayed: &[usize]) -> UiState {
    let mut ui_state = ui_state.clone();

    if let Some(&index) = displayed.get(ui_state.cursor) {
        if !ui_state.checked.remove(&index) {
            ui_state.checked.insert(index);
        }
        ui_state.validation_message = None;
    }

    ui_state
}

/// Check every displayed article, or uncheck them all if they already are
#[must_use]
pub fn toggle_all(ui_state: &UiState, displayed: &[usize]) -> UiState {
    let mut ui_state = ui_state.clone();

    if displayed.iter().all(|i| ui_state.checked.contains(i)) {
        for i in displayed {
            ui_state.checked.remove(i);
        }
    } else {
        ui_state.checked.extend(displayed.iter().copied());
        ui_state.validation_message = None;
    }

    ui_state
}

/// Replace the filter text, returning the cursor to the top
#[must_use]
pub fn set_filter(ui_state: &UiState, filter_text: String) -> UiState {
    let mut ui_state = ui_state.clone();
    ui_state.filter_text = filter_text;
    ui_state.cursor = 0;
    ui_state.viewport.offset = 0;
    ui_state
}

/// The checked indexes, ascending.
///
/// # Errors
///
/// With nothing checked, returns the state carrying the validation message
/// so the prompt can stay open.
pub fn confirm_selection(ui_state: &UiState) -> Result<Vec<usize>, UiState> {
    if ui_state.checked.is_empty() {
        let mut ui_state = ui_state.clone();
        ui_state.validation_message = Some(EMPTY_SELECTION_MESSAGE.to_string());
        return Err(ui_state);
    }

    Ok(ui_state.checked.iter().copied().collect())
}

/// Fit the viewport to a new terminal size, keeping the cursor visible
#[must_use]
pub fn handle_resize(
    width: u16,
    height: u16,
    ui_state: &UiState,
    displayed_length: usize,
) -> UiState {
    let new_height = height.saturating_sub(RESERVED_ROWS);
    let mut ui_state = ui_state.clone();
    let mut new_viewport = ViewportState {
        width,
        height: new_height,
        offset: ui_state.viewport.offset,
    };

    match new_height.cmp(&ui_state.viewport.height) {
        std::cmp::Ordering::Greater if new_viewport.offset > 0 => {
            let height_increase = new_height - ui_state.viewport.height;
            new_viewport.offset = new_viewport.offset.saturating_sub(height_increase as usize);
        }
        std::cmp::Ordering::Less if ui_state.cursor >= new_viewport.offset + new_height as usize => {
            new_viewport.offset = ui_state.cursor.saturating_sub((new_height as usize).saturating_sub(1));

            if new_viewport.offset + new_height as usize > displayed_length {
                new_viewport.offset = displayed_length.saturating_sub(new_height as usize);
            }
        }
        _ => {}
    }

    ui_state.viewport = new_viewport;
    ui_state
}
