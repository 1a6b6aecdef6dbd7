// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Input events that the picker understands, independent of any terminal library, and
//! the [KeyPressReader] seam that produces them.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{Size, DEVELOPMENT_MODE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPress {
    /// A printable character to insert into the query.
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Up,
    Down,
    Enter,
    Esc,
    /// `Ctrl+c`.
    Interrupt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Keyboard(KeyPress),
    Resize(Size),
    /// Something was read, but the picker has no use for it (mouse, focus, paste,
    /// unbound keys, key releases).
    Ignored,
}

impl From<KeyPress> for InputEvent {
    fn from(key_press: KeyPress) -> Self { InputEvent::Keyboard(key_press) }
}

impl From<Event> for InputEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key_event) => convert_key_event(key_event),
            Event::Resize(col_width, row_height) => {
                InputEvent::Resize(Size::new(col_width.into(), row_height.into()))
            }
            _ => InputEvent::Ignored,
        }
    }
}

/// [KeyEvent::kind] is only set to [KeyEventKind::Release] on Windows, or on Unix when
/// keyboard enhancement flags are pushed. Releases are ignored so each key acts once.
fn convert_key_event(key_event: KeyEvent) -> InputEvent {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = key_event;

    if kind == KeyEventKind::Release {
        return InputEvent::Ignored;
    }

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let key_press = match (code, ctrl, alt) {
        // Emacs style bindings.
        (KeyCode::Char('a'), true, false) => KeyPress::Home,
        (KeyCode::Char('e'), true, false) => KeyPress::End,
        (KeyCode::Char('b'), true, false) => KeyPress::Left,
        (KeyCode::Char('f'), true, false) => KeyPress::Right,
        (KeyCode::Char('p'), true, false) => KeyPress::Up,
        (KeyCode::Char('n'), true, false) => KeyPress::Down,
        (KeyCode::Char('d'), true, false) => KeyPress::Delete,
        (KeyCode::Char('h'), true, false) => KeyPress::Backspace,
        (KeyCode::Char('c'), true, false) => KeyPress::Interrupt,

        // Plain characters. Shift is fine, it is already folded into the char.
        (KeyCode::Char(ch), false, false) if !ch.is_control() => KeyPress::Char(ch),

        (KeyCode::Backspace, _, _) => KeyPress::Backspace,
        (KeyCode::Delete, _, _) => KeyPress::Delete,
        (KeyCode::Left, _, _) => KeyPress::Left,
        (KeyCode::Right, _, _) => KeyPress::Right,
        (KeyCode::Home, _, _) => KeyPress::Home,
        (KeyCode::End, _, _) => KeyPress::End,
        (KeyCode::Up, _, _) => KeyPress::Up,
        (KeyCode::Down, _, _) => KeyPress::Down,
        (KeyCode::Enter, _, _) => KeyPress::Enter,
        (KeyCode::Esc, _, _) => KeyPress::Esc,

        _ => return InputEvent::Ignored,
    };

    InputEvent::Keyboard(key_press)
}

pub trait KeyPressReader {
    /// Block until the next event is available. Returns `None` when no more events can
    /// ever be read (for eg, the input device is gone).
    fn read_key_press(&mut self) -> Option<InputEvent>;
}

/// Reads events from the controlling terminal. When `stdin` is a pipe, [crossterm]
/// reads from `/dev/tty` instead, so piped input and key presses don't get mixed up.
#[derive(Debug, Default)]
pub struct CrosstermKeyPressReader;

impl KeyPressReader for CrosstermKeyPressReader {
    fn read_key_press(&mut self) -> Option<InputEvent> {
        match crossterm::event::read() {
            Ok(event) => {
                DEVELOPMENT_MODE.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(message = "read_key_press", event = ?event);
                });
                Some(InputEvent::from(event))
            }
            Err(error) => {
                tracing::error!(message = "Could not read from terminal", error = ?error);
                None
            }
        }
    }
}

/// Plays back a fixed list of events, then reports that the input is exhausted.
#[derive(Debug, Default)]
pub struct TestVecKeyPressReader {
    pub key_press_vec: Vec<InputEvent>,
    pub index: usize,
}

impl TestVecKeyPressReader {
    #[must_use]
    pub fn new(key_press_vec: Vec<InputEvent>) -> Self {
        Self {
            key_press_vec,
            index: 0,
        }
    }

    /// Type each char of `text`, followed by `then`.
    #[must_use]
    pub fn typing(text: &str, then: &[KeyPress]) -> Self {
        let key_press_vec = text
            .chars()
            .map(KeyPress::Char)
            .chain(then.iter().copied())
            .map(InputEvent::from)
            .collect();
        Self::new(key_press_vec)
    }
}

impl KeyPressReader for TestVecKeyPressReader {
    fn read_key_press(&mut self) -> Option<InputEvent> {
        let it = self.key_press_vec.get(self.index).copied();
        self.index += 1;
        it
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test_case(KeyCode::Char('x'), KeyModifiers::NONE, KeyPress::Char('x'))]
    #[test_case(KeyCode::Char('X'), KeyModifiers::SHIFT, KeyPress::Char('X'))]
    #[test_case(KeyCode::Char('é'), KeyModifiers::NONE, KeyPress::Char('é'))]
    #[test_case(KeyCode::Char(' '), KeyModifiers::NONE, KeyPress::Char(' '))]
    #[test_case(KeyCode::Char('a'), KeyModifiers::CONTROL, KeyPress::Home)]
    #[test_case(KeyCode::Char('e'), KeyModifiers::CONTROL, KeyPress::End)]
    #[test_case(KeyCode::Char('b'), KeyModifiers::CONTROL, KeyPress::Left)]
    #[test_case(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyPress::Right)]
    #[test_case(KeyCode::Char('p'), KeyModifiers::CONTROL, KeyPress::Up)]
    #[test_case(KeyCode::Char('n'), KeyModifiers::CONTROL, KeyPress::Down)]
    #[test_case(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyPress::Delete)]
    #[test_case(KeyCode::Char('h'), KeyModifiers::CONTROL, KeyPress::Backspace)]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyPress::Interrupt)]
    #[test_case(KeyCode::Backspace, KeyModifiers::NONE, KeyPress::Backspace)]
    #[test_case(KeyCode::Delete, KeyModifiers::NONE, KeyPress::Delete)]
    #[test_case(KeyCode::Home, KeyModifiers::NONE, KeyPress::Home)]
    #[test_case(KeyCode::End, KeyModifiers::NONE, KeyPress::End)]
    #[test_case(KeyCode::Up, KeyModifiers::NONE, KeyPress::Up)]
    #[test_case(KeyCode::Down, KeyModifiers::NONE, KeyPress::Down)]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE, KeyPress::Enter)]
    #[test_case(KeyCode::Esc, KeyModifiers::NONE, KeyPress::Esc)]
    fn test_key_mapping(code: KeyCode, modifiers: KeyModifiers, expected: KeyPress) {
        assert_eq!(
            InputEvent::from(key(code, modifiers)),
            InputEvent::Keyboard(expected)
        );
    }

    #[test_case(KeyCode::Char('z'), KeyModifiers::CONTROL; "unbound ctrl key")]
    #[test_case(KeyCode::Char('x'), KeyModifiers::ALT; "alt key")]
    #[test_case(KeyCode::F(1), KeyModifiers::NONE; "function key")]
    #[test_case(KeyCode::Tab, KeyModifiers::NONE; "tab")]
    fn test_unbound_keys_are_ignored(code: KeyCode, modifiers: KeyModifiers) {
        assert_eq!(InputEvent::from(key(code, modifiers)), InputEvent::Ignored);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(InputEvent::from(event), InputEvent::Ignored);
    }

    #[test]
    fn test_resize_and_other_events() {
        assert_eq!(
            InputEvent::from(Event::Resize(120, 40)),
            InputEvent::Resize(Size::new(120, 40))
        );

        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(InputEvent::from(mouse), InputEvent::Ignored);
        assert_eq!(InputEvent::from(Event::FocusGained), InputEvent::Ignored);
    }

    #[test]
    fn test_vec_reader_runs_out() {
        let mut reader = TestVecKeyPressReader::typing("ab", &[KeyPress::Enter]);
        assert_eq!(
            reader.read_key_press(),
            Some(InputEvent::Keyboard(KeyPress::Char('a')))
        );
        assert_eq!(
            reader.read_key_press(),
            Some(InputEvent::Keyboard(KeyPress::Char('b')))
        );
        assert_eq!(
            reader.read_key_press(),
            Some(InputEvent::Keyboard(KeyPress::Enter))
        );
        assert_eq!(reader.read_key_press(), None);
        assert_eq!(reader.read_key_press(), None);
    }
}
