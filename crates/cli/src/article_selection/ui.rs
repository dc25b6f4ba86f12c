use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::Color::{DarkBlue, DarkGreen, Reset, Yellow};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, event, queue, terminal, ExecutableCommand};
use log::debug;

use super::state::{
    confirm_selection, filter_displayed_indexes, handle_resize, move_cursor, set_filter,
    toggle_all, toggle_current,
};
use super::types::CycleDirection::{self, Down, Up};
use super::types::{SelectionChoice, UiState, ViewportState, RESERVED_ROWS};
use super::ArticlePicker;
use rust_marks_core::error::Result;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// [`ArticlePicker`] drawn with crossterm on the alternate screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPicker;

impl ArticlePicker for TerminalPicker {
    fn pick(&self, labels: &[String]) -> Result<SelectionChoice> {
        prompt_for_articles(labels)
    }
}

fn redraw_ui(ui_state: &UiState, displayed: &[usize], labels: &[String]) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(ui_state, labels.len())?;

    if displayed.is_empty() {
        queue!(
            stdout,
            MoveTo(0, 1),
            SetForegroundColor(Color::Red),
            Print("No matching articles!".to_string()),
            SetAttribute(Attribute::Reset),
        )?;
    } else {
        print_articles_with_selection(ui_state, displayed, labels)?;
    }

    let footer_row = ui_state.viewport.height + 1;

    if let Some(message) = &ui_state.validation_message {
        queue!(
            stdout,
            MoveTo(0, footer_row),
            SetForegroundColor(Color::Red),
            Print(message),
            SetForegroundColor(Reset),
        )?;
    }

    if ui_state.is_filtering {
        queue!(
            stdout,
            MoveTo(0, footer_row + 1),
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", ui_state.filter_text)),
            SetAttribute(Attribute::Reset)
        )?;
    }

    stdout.flush()?;
    Ok(())
}

/// Shows the checkbox list until the user confirms a selection or quits
fn prompt_for_articles(labels: &[String]) -> Result<SelectionChoice> {
    let mut stdout = stdout();

    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode and mouse capture is disabled
    stdout.execute(EnableMouseCapture)?;

    let (width, height) = terminal::size()?;

    let mut ui_state = UiState::new(ViewportState {
        offset: 0,
        height: height.saturating_sub(RESERVED_ROWS),
        width,
    });

    let mut displayed = filter_displayed_indexes(labels, &ui_state.filter_text);
    redraw_ui(&ui_state, &displayed, labels)?;

    loop {
        if !event::poll(Duration::from_millis(500))? {
            continue;
        }

        let mut new_ui_state: Option<UiState> = None;
        let mut cursor_direction: Option<CycleDirection> = None;

        match event::read()? {
            Event::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }

                let (choice, new_state, direction) =
                    handle_key_event(key_event, &ui_state, &displayed);

                if let Some(choice) = choice {
                    debug!("Selection finished: {choice:?}");
                    return Ok(choice);
                }

                new_ui_state = new_state;
                cursor_direction = direction;
            }
            Event::Mouse(mouse_event) => {
                let (new_state, direction) = handle_mouse_event(mouse_event, &ui_state, &displayed);
                new_ui_state = new_state;
                cursor_direction = direction;
            }
            Event::Resize(width, height) => {
                new_ui_state = Some(handle_resize(width, height, &ui_state, displayed.len()));
            }
            Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
        }

        if let Some(direction) = cursor_direction {
            let base = new_ui_state.as_ref().unwrap_or(&ui_state);
            new_ui_state = Some(move_cursor(base, displayed.len(), direction));
        }

        if let Some(new_ui_state) = new_ui_state {
            if new_ui_state != ui_state {
                if new_ui_state.filter_text != ui_state.filter_text {
                    displayed = filter_displayed_indexes(labels, &new_ui_state.filter_text);
                }
                ui_state = new_ui_state;
                redraw_ui(&ui_state, &displayed, labels)?;
            }
        }
    }
}

/// Handle keyboard events in the selection UI
///
/// Space always toggles the current row, including while filtering, so a
/// filter cannot contain spaces. Every other character is filter text while
/// filtering.
fn handle_key_event(
    key_event: KeyEvent,
    ui_state: &UiState,
    displayed: &[usize],
) -> (
    Option<SelectionChoice>,
    Option<UiState>,
    Option<CycleDirection>,
) {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            (Some(SelectionChoice::Quit), None, None)
        }
        KeyCode::Up => (None, None, Some(Up)),
        KeyCode::Down => (None, None, Some(Down)),
        KeyCode::Enter => match confirm_selection(ui_state) {
            Ok(indexes) => (Some(SelectionChoice::Selected(indexes)), None, None),
            Err(rejected) => (None, Some(rejected), None),
        },
        KeyCode::Char(' ') => (None, Some(toggle_current(ui_state, displayed)), None),
        KeyCode::Backspace if ui_state.is_filtering => {
            let mut filter_text = ui_state.filter_text.clone();
            if filter_text.pop().is_some() {
                return (None, Some(set_filter(ui_state, filter_text)), None);
            }
            (None, None, None)
        }
        KeyCode::Char(c) if ui_state.is_filtering => {
            let mut filter_text = ui_state.filter_text.clone();
            filter_text.push(c);
            (None, Some(set_filter(ui_state, filter_text)), None)
        }
        KeyCode::Esc if ui_state.is_filtering => {
            let mut updated_state = set_filter(ui_state, String::new());
            updated_state.is_filtering = false;
            (None, Some(updated_state), None)
        }
        KeyCode::Char('/') => {
            let mut updated_state = ui_state.clone();
            updated_state.is_filtering = true;
            (None, Some(updated_state), None)
        }
        KeyCode::Char('k') => (None, None, Some(Up)),
        KeyCode::Char('j') => (None, None, Some(Down)),
        KeyCode::Char('a') => (None, Some(toggle_all(ui_state, displayed)), None),
        KeyCode::Char('q') | KeyCode::Esc => (Some(SelectionChoice::Quit), None, None),
        _ => (None, None, None),
    }
}

/// Left click toggles the clicked row, the wheel moves the cursor
fn handle_mouse_event(
    mouse_event: MouseEvent,
    ui_state: &UiState,
    displayed: &[usize],
) -> (Option<UiState>, Option<CycleDirection>) {
    let MouseEvent {
        kind,
        row,
        modifiers,
        ..
    } = mouse_event;

    if modifiers != KeyModifiers::NONE {
        return (None, None);
    }

    match kind {
        MouseEventKind::Up(MouseButton::Left) => {
            if row == 0 || row > ui_state.viewport.height {
                // Click on header or footer
                return (None, None);
            }

            let clicked = (row - 1) as usize + ui_state.viewport.offset;
            if clicked >= displayed.len() {
                return (None, None);
            }

            let mut updated_state = ui_state.clone();
            updated_state.cursor = clicked;
            (Some(toggle_current(&updated_state, displayed)), None)
        }
        MouseEventKind::ScrollDown => (None, Some(Down)),
        MouseEventKind::ScrollUp => (None, Some(Up)),
        _ => (None, None),
    }
}

/// Print the header for the selection UI
fn print_header(ui_state: &UiState, total: usize) -> Result<()> {
    let mut stdout = stdout();
    let width = ui_state.viewport.width as usize;

    let left_padding_size = 2usize;
    let left_padding = " ".repeat(left_padding_size);

    let instructions = if ui_state.is_filtering {
        format!(
            "<esc>: Stop Filtering   |   <space>: Toggle   |   {}/{} checked",
            ui_state.checked.len(),
            total
        )
    } else {
        format!(
            "<space>: Toggle   |   a: All   |   <enter>: Open   |   /: Filter   |   q: Quit   |   {}/{} checked",
            ui_state.checked.len(),
            total
        )
    };

    let right_padding =
        " ".repeat(width.saturating_sub(left_padding_size + instructions.chars().count()));

    queue!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(left_padding),
        Print(instructions),
        Print(right_padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Print the visible rows with the cursor row highlighted
fn print_articles_with_selection(
    ui_state: &UiState,
    displayed: &[usize],
    labels: &[String],
) -> Result<()> {
    let mut stdout = stdout();
    let viewport = &ui_state.viewport;
    let number_width = labels.len().to_string().len();

    let visible_rows = displayed
        .iter()
        .enumerate()
        .skip(viewport.offset)
        .take(viewport.height as usize);

    for (row, (position, &index)) in visible_rows.enumerate() {
        let is_cursor = position == ui_state.cursor;
        let checkbox = if ui_state.checked.contains(&index) {
            "[x]"
        } else {
            "[ ]"
        };

        let content = format!(
            "{checkbox} {:>number_width$}. {}",
            index + 1,
            labels[index]
        );
        let content: String = content.chars().take(viewport.width as usize).collect();
        let padding =
            " ".repeat((viewport.width as usize).saturating_sub(content.chars().count()));

        queue!(stdout, MoveTo(0, row as u16 + 1), Clear(ClearType::CurrentLine))?;

        if is_cursor {
            queue!(
                stdout,
                SetAttribute(Attribute::Bold),
                SetBackgroundColor(DarkBlue),
                SetForegroundColor(Yellow),
            )?;
        }

        queue!(
            stdout,
            Print(content),
            Print(padding),
            SetAttribute(Attribute::Reset),
            SetBackgroundColor(Reset),
            SetForegroundColor(Reset),
            cursor::MoveToNextLine(1),
        )?;
    }

    Ok(())
}
