// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Everything that can stop `pick` before or while it takes over the terminal. Not
/// finding any matches is not an error.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PickError {
    /// A file path was given, but `stdin` is also piped in. Only one source of lines is
    /// allowed.
    #[error("A file path was passed, but input is also piped in")]
    #[diagnostic(
        code(r3bl_pick::usage::argument_with_piped_stdin),
        help("Use a pipe without any arguments: `ls -l | pick`")
    )]
    ArgumentWithPipedStdin,

    /// No file path was given, and nothing is piped in.
    #[error("Only one argument (a file path) is required")]
    #[diagnostic(
        code(r3bl_pick::usage::missing_file_argument),
        help("Pass a file to pick a line from: `pick Cargo.toml`. Or pipe lines in.")
    )]
    MissingFileArgument,

    #[error("Could not read file '{}'", path.display())]
    #[diagnostic(
        code(r3bl_pick::io::read_file),
        help("Check that the file exists and that you have permission to read it")
    )]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read lines piped into stdin")]
    #[diagnostic(code(r3bl_pick::io::read_stdin))]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[error("Could not set up the terminal")]
    #[diagnostic(
        code(r3bl_pick::io::terminal_init),
        help("pick needs an interactive terminal to draw on")
    )]
    TerminalInit {
        #[source]
        source: std::io::Error,
    },
}

impl PickError {
    /// Usage errors are the user's to fix by changing how `pick` is invoked. They are
    /// detected before the terminal is touched.
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            PickError::ArgumentWithPipedStdin | PickError::MissingFileArgument
        )
    }
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic as _;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_usage_errors() {
        assert!(PickError::ArgumentWithPipedStdin.is_usage_error());
        assert!(PickError::MissingFileArgument.is_usage_error());
        assert!(
            !PickError::ReadStdin {
                source: std::io::Error::other("boom")
            }
            .is_usage_error()
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let error = PickError::MissingFileArgument;
        assert_eq!(
            error.code().map(|it| it.to_string()),
            Some("r3bl_pick::usage::missing_file_argument".to_string())
        );
        assert!(error.help().is_some());
    }

    #[test]
    fn test_read_file_message_names_the_path() {
        let error = PickError::ReadFile {
            path: PathBuf::from("nope.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(error.to_string(), "Could not read file 'nope.txt'");
    }
}
