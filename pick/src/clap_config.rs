// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use tracing_core::LevelFilter;

use crate::{StyleSheet, TracingConfig, WriterConfig};

pub const DEFAULT_PROMPT: &str = ">";

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "pick")]
#[command(about = "Pick a line from a file or a pipe, by typing part of it")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nPass a file path to pick a line from it. Or pipe lines in, without any arguments.\nUSAGE:\n  pick [\x1b[32mfile path\x1b[0m] [\x1b[34moptions\x1b[0m]\n  ls -1 | pick [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(name = "file path")]
    pub file_path: Option<PathBuf>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file (`log.txt` by default) for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value = crate::DEFAULT_LOG_FILE_NAME,
        help = "Path of the log file. Only used with --enable-logging."
    )]
    pub log_file: String,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = LogLevel::Debug,
        help = "Most verbose level to log. Only used with --enable-logging."
    )]
    pub log_level: LogLevel,

    #[arg(
        global = true,
        long,
        short = 'p',
        default_value = DEFAULT_PROMPT,
        help = "Text shown in front of the query."
    )]
    pub prompt: String,

    #[arg(global = true, long, help = "Don't use any colors.")]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl GlobalOption {
    /// `None` unless logging was asked for.
    #[must_use]
    pub fn tracing_config(&self) -> Option<TracingConfig> {
        self.enable_logging.then(|| TracingConfig {
            level_filter: self.log_level.into(),
            writer_config: WriterConfig::File(self.log_file.clone()),
        })
    }

    #[must_use]
    pub fn stylesheet(&self) -> StyleSheet {
        if self.no_color {
            StyleSheet::monochrome()
        } else {
            StyleSheet::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["pick"]).unwrap();
        assert_eq!(cli_arg.file_path, None);
        assert!(!cli_arg.global_options.enable_logging);
        assert_eq!(cli_arg.global_options.tracing_config(), None);
        assert_eq!(cli_arg.global_options.prompt, ">");
        assert_eq!(cli_arg.global_options.stylesheet(), StyleSheet::default());
    }

    #[test]
    fn test_file_path_and_options() {
        let cli_arg = CLIArg::try_parse_from([
            "pick",
            "Cargo.toml",
            "-l",
            "--log-file",
            "/tmp/pick.log",
            "--log-level",
            "trace",
            "-p",
            "$",
            "--no-color",
        ])
        .unwrap();

        assert_eq!(cli_arg.file_path, Some(PathBuf::from("Cargo.toml")));
        assert_eq!(
            cli_arg.global_options.tracing_config(),
            Some(TracingConfig {
                level_filter: LevelFilter::TRACE,
                writer_config: WriterConfig::File("/tmp/pick.log".to_string()),
            })
        );
        assert_eq!(cli_arg.global_options.prompt, "$");
        assert_eq!(
            cli_arg.global_options.stylesheet(),
            StyleSheet::monochrome()
        );
    }

    #[test]
    fn test_more_than_one_file_path_is_rejected() {
        let res = CLIArg::try_parse_from(["pick", "a.txt", "b.txt"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let res = CLIArg::try_parse_from(["pick", "--log-level", "loud"]);
        assert!(res.is_err());
    }
}
