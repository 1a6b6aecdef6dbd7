// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The session controller. [keypress_handler] is the transition function, and
//! [enter_event_loop] feeds it one event at a time and repaints after each one.

use crate::{render,
            restore_stderr_terminal,
            CrosstermKeyPressReader,
            CrosstermTerminal,
            InputEvent,
            KeyPress,
            KeyPressReader,
            PanicHookGuard,
            QueryChanged,
            State,
            StyleSheet,
            Terminal,
            TerminalGuard,
            DEVELOPMENT_MODE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult {
    /// Nothing visible changed.
    Continue,
    ContinueAndRerender,
    /// `Enter` with a focused candidate.
    ExitWithResult(String),
    /// `Enter` while nothing matches the query.
    ExitWithoutResult,
    /// `Esc`, `Ctrl+c`, or the input ran out.
    Cancelled,
}

/// How a session ended, from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Selected(String),
    NothingSelected,
    Cancelled,
}

impl From<EventLoopResult> for PickOutcome {
    fn from(result: EventLoopResult) -> Self {
        match result {
            EventLoopResult::ExitWithResult(it) => PickOutcome::Selected(it),
            EventLoopResult::ExitWithoutResult => PickOutcome::NothingSelected,
            EventLoopResult::Continue
            | EventLoopResult::ContinueAndRerender
            | EventLoopResult::Cancelled => PickOutcome::Cancelled,
        }
    }
}

/// Apply one event to the state. When the query text changes, the candidate set is
/// rebuilt and the selection clamped before this returns. Cursor moves leave the
/// candidate set alone.
pub fn keypress_handler(state: &mut State, input_event: InputEvent) -> EventLoopResult {
    DEVELOPMENT_MODE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "keypress_handler",
            input_event = ?input_event,
            query = %state.query.as_str()
        );
    });

    let key_press = match input_event {
        InputEvent::Keyboard(key_press) => key_press,
        InputEvent::Resize(size) => {
            state.set_size(size);
            return EventLoopResult::ContinueAndRerender;
        }
        InputEvent::Ignored => return EventLoopResult::Continue,
    };

    let query_changed = match key_press {
        KeyPress::Char(ch) => state.query.insert_char(ch),
        KeyPress::Backspace => state.query.delete_backward(),
        KeyPress::Delete => state.query.delete_forward(),
        KeyPress::Left => {
            state.query.move_left();
            QueryChanged::No
        }
        KeyPress::Right => {
            state.query.move_right();
            QueryChanged::No
        }
        KeyPress::Home => {
            state.query.move_home();
            QueryChanged::No
        }
        KeyPress::End => {
            state.query.move_end();
            QueryChanged::No
        }
        KeyPress::Up => {
            state.selection.select_previous();
            QueryChanged::No
        }
        KeyPress::Down => {
            state.selection.select_next(state.candidates.len());
            QueryChanged::No
        }
        KeyPress::Enter => {
            return match state.selected_text() {
                Some(text) => EventLoopResult::ExitWithResult(text.to_string()),
                None => EventLoopResult::ExitWithoutResult,
            };
        }
        KeyPress::Esc | KeyPress::Interrupt => return EventLoopResult::Cancelled,
    };

    if query_changed == QueryChanged::Yes {
        state.recompute_candidates();
        DEVELOPMENT_MODE.then(|| {
            tracing::debug!(
                message = "recompute_candidates",
                query = %state.query.as_str(),
                candidate_count = state.candidates.len()
            );
        });
    }

    EventLoopResult::ContinueAndRerender
}

/// Take over `terminal`, paint `state`, and then process events from
/// `key_press_reader` until the user commits or cancels. The terminal is given back
/// exactly once, on every path out of here.
///
/// # Errors
///
/// Returns an error if the terminal can't be set up, painted, or restored.
pub fn enter_event_loop(
    state: &mut State,
    terminal: &mut impl Terminal,
    key_press_reader: &mut impl KeyPressReader,
    stylesheet: &StyleSheet,
    prompt: &str,
) -> miette::Result<EventLoopResult> {
    let mut guard = TerminalGuard::new(terminal)?;

    let size = guard.size()?;
    state.set_size(size);
    state.compute_viewport();

    // First render before blocking for user input.
    render(state, &mut *guard, stylesheet, prompt)?;

    let return_this = loop {
        let Some(input_event) = key_press_reader.read_key_press() else {
            break EventLoopResult::Cancelled;
        };
        match keypress_handler(state, input_event) {
            EventLoopResult::Continue => {}
            EventLoopResult::ContinueAndRerender => {
                state.compute_viewport();
                DEVELOPMENT_MODE.then(|| {
                    tracing::debug!(
                        message = "compute_viewport",
                        scroll_offset = state.selection.scroll_offset(),
                        location = ?state.selection.locate_in_viewport(
                            state.candidates.len(),
                            state.items_viewport_height()
                        )
                    );
                });
                render(state, &mut *guard, stylesheet, prompt)?;
            }
            exit @ (EventLoopResult::ExitWithResult(_)
            | EventLoopResult::ExitWithoutResult
            | EventLoopResult::Cancelled) => break exit,
        }
    };

    guard.finish()?;

    Ok(return_this)
}

/// Run a whole session on the real terminal. It is painted on `stderr`, so `stdout` is
/// left alone for the caller to print the result to.
///
/// # Errors
///
/// Returns an error if the terminal can't be set up, painted, or restored.
pub fn pick_from_lines(
    lines: Vec<String>,
    stylesheet: &StyleSheet,
    prompt: &str,
) -> miette::Result<PickOutcome> {
    tracing::info!(message = "pick_from_lines", line_count = lines.len());

    let mut state = State::new(lines);
    let mut terminal = CrosstermTerminal::new(std::io::stderr());
    let mut key_press_reader = CrosstermKeyPressReader;
    let panic_hook_guard = PanicHookGuard::install(restore_stderr_terminal);

    let result = enter_event_loop(
        &mut state,
        &mut terminal,
        &mut key_press_reader,
        stylesheet,
        prompt,
    );
    drop(panic_hook_guard);
    let result = result?;

    tracing::info!(message = "session ended", result = ?result);
    Ok(result.into())
}
