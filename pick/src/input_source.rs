// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Where the lines come from: exactly one of a file or piped `stdin`.

use std::{io::{IsTerminal as _, Read as _},
          path::PathBuf};

use crate::PickError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    File(PathBuf),
    PipedStdin,
}

#[must_use]
pub fn is_stdin_terminal() -> bool { std::io::stdin().is_terminal() }

/// | file path | stdin is a terminal | result                     |
/// | --------- | ------------------- | -------------------------- |
/// | yes       | yes                 | [InputMode::File]          |
/// | yes       | no (piped)          | [PickError::ArgumentWithPipedStdin] |
/// | no        | no (piped)          | [InputMode::PipedStdin]    |
/// | no        | yes                 | [PickError::MissingFileArgument]    |
///
/// # Errors
///
/// Returns a usage error when there is not exactly one source of lines.
pub fn resolve_input_mode(
    file_path: Option<PathBuf>,
    stdin_is_terminal: bool,
) -> Result<InputMode, PickError> {
    match (file_path, stdin_is_terminal) {
        (Some(path), true) => Ok(InputMode::File(path)),
        (Some(_), false) => Err(PickError::ArgumentWithPipedStdin),
        (None, false) => Ok(InputMode::PipedStdin),
        (None, true) => Err(PickError::MissingFileArgument),
    }
}

/// Split on `\n`. A trailing newline does not produce an extra empty line, but empty
/// lines in the middle (or a trailing blank line) are kept. Any `\r` is left as is.
#[must_use]
pub fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return vec![];
    }
    let content = content.strip_suffix('\n').unwrap_or(content);
    content.split('\n').map(ToString::to_string).collect()
}

/// Bytes that aren't valid UTF-8 are replaced with `U+FFFD`.
///
/// # Errors
///
/// Returns [PickError::ReadFile] or [PickError::ReadStdin] if reading fails.
pub fn read_lines(input_mode: &InputMode) -> Result<Vec<String>, PickError> {
    let bytes = match input_mode {
        InputMode::File(path) => {
            std::fs::read(path).map_err(|source| PickError::ReadFile {
                path: path.clone(),
                source,
            })?
        }
        InputMode::PipedStdin => {
            let mut bytes = vec![];
            std::io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(|source| PickError::ReadStdin { source })?;
            bytes
        }
    };

    let lines = split_lines(&String::from_utf8_lossy(&bytes));
    tracing::debug!(message = "read_lines", input_mode = ?input_mode, line_count = lines.len());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_resolve_input_mode() {
        let path = PathBuf::from("lines.txt");

        assert_eq!(
            resolve_input_mode(Some(path.clone()), true).unwrap(),
            InputMode::File(path.clone())
        );
        assert_eq!(
            resolve_input_mode(None, false).unwrap(),
            InputMode::PipedStdin
        );
        assert!(matches!(
            resolve_input_mode(Some(path), false),
            Err(PickError::ArgumentWithPipedStdin)
        ));
        assert!(matches!(
            resolve_input_mode(None, true),
            Err(PickError::MissingFileArgument)
        ));
    }

    #[test_case("", &[]; "empty input")]
    #[test_case("\n", &[""]; "just a newline")]
    #[test_case("a", &["a"]; "no trailing newline")]
    #[test_case("a\n", &["a"]; "trailing newline")]
    #[test_case("a\nb", &["a", "b"]; "two lines")]
    #[test_case("a\n\n", &["a", ""]; "trailing blank line")]
    #[test_case("a\n\nb\n", &["a", "", "b"]; "blank line in the middle")]
    #[test_case("a\r\nb\r\n", &["a\r", "b\r"]; "carriage returns are kept")]
    fn test_split_lines(content: &str, expected: &[&str]) {
        assert_eq!(split_lines(content), expected);
    }

    #[test]
    fn test_read_lines_from_file() {
        let dir = std::env::temp_dir().join("r3bl_pick_input_source_tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("lines.txt");
        std::fs::write(&path, b"apple\nban\xffana\n").unwrap();

        let lines = read_lines(&InputMode::File(path)).unwrap();
        assert_eq!(lines, vec!["apple".to_string(), "ban\u{fffd}ana".to_string()]);
    }

    #[test]
    fn test_read_lines_from_missing_file() {
        let path = PathBuf::from("/this/file/does/not/exist.txt");
        let res = read_lines(&InputMode::File(path.clone()));
        assert!(matches!(res, Err(PickError::ReadFile { path: it, .. }) if it == path));
    }
}
