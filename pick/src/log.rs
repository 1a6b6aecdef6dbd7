// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging for `pick`. The terminal is busy showing the picker, and `stdout` carries the
//! result, so the only place logs can go is a file. Logging is off unless it is turned on
//! with `--enable-logging`.
//!
//! ```no_run
//! use r3bl_pick::{try_initialize_logging_global, TracingConfig, WriterConfig};
//! use tracing_core::LevelFilter;
//!
//! let tracing_config = TracingConfig {
//!     level_filter: LevelFilter::DEBUG,
//!     writer_config: WriterConfig::File("log.txt".to_string()),
//! };
//! try_initialize_logging_global(&tracing_config).ok();
//! tracing::debug!(message = "ready");
//! ```

use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic as _, WrapErr as _};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt as _,
                         registry::LookupSpan,
                         util::SubscriberInitExt as _,
                         Layer};

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(String /* log file path */),
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Log files are opened once and never rotated.
///
/// # Errors
///
/// Returns an error if the path has no file name, or the file can't be created (eg, its
/// folder is actually a file, or is not writable).
pub fn try_create_file_appender(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Can't use {} as a log file name.", path.display())
    })?;

    // A bare file name has an empty parent, which means the current folder.
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
        .wrap_err_with(|| {
            format!(
                "Can't create log file {}. Its folder might not exist, or you might not have the required permissions.",
                path.display()
            )
        })
}

/// Returns `None` if the [WriterConfig] doesn't ask for a file.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::None => None,
        WriterConfig::File(path_str) => {
            let file = try_create_file_appender(path_str)?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
    })
}

/// Returns the layers, without initializing anything.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> =
        vec![Box::new(tracing_config.level_filter)];
    if let Some(layer) =
        try_create_file_layer(tracing_config.level_filter, &tracing_config.writer_config)?
    {
        layers.push(layer);
    }
    Ok(layers)
}

/// Install the subscriber for the whole process. Can only be done once.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is already
/// installed.
pub fn try_initialize_logging_global(tracing_config: &TracingConfig) -> miette::Result<()> {
    let layers = try_create_layers(tracing_config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|error| miette::miette!("Could not initialize logging: {error}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    fn temp_log_file_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("r3bl_pick_log_tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        drop(std::fs::remove_file(&path));
        path
    }

    fn file_config(level_filter: LevelFilter, path: &Path) -> TracingConfig {
        TracingConfig {
            level_filter,
            writer_config: WriterConfig::File(path.to_string_lossy().to_string()),
        }
    }

    #[test]
    fn test_no_file_layer_for_writer_none() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, &WriterConfig::None).unwrap();
        assert!(layer.is_none());

        let layers = try_create_layers(&TracingConfig {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::None,
        })
        .unwrap();
        assert_eq!(layers.len(), 1);
    }

    #[serial]
    #[test]
    fn test_file_layer_creates_file() {
        let path = temp_log_file_path("create.log");
        let layers = try_create_layers(&file_config(LevelFilter::DEBUG, &path)).unwrap();
        assert_eq!(layers.len(), 2);
        assert!(path.exists());
    }

    #[serial]
    #[test]
    fn test_log_file_under_a_regular_file_is_an_error() {
        let not_a_dir = temp_log_file_path("not_a_dir");
        std::fs::write(&not_a_dir, "").unwrap();
        let path = not_a_dir.join("x.log");

        let result = try_create_file_appender(&path.to_string_lossy());

        let report = result.err().unwrap();
        assert!(report.to_string().contains("x.log"));
        assert!(try_create_layers(&file_config(LevelFilter::DEBUG, &path)).is_err());
    }

    #[serial]
    #[test]
    fn test_logging_goes_to_file() {
        let path = temp_log_file_path("scoped.log");
        let layers = try_create_layers(&file_config(LevelFilter::INFO, &path)).unwrap();

        tracing::subscriber::with_default(tracing_subscriber::registry().with(layers), || {
            tracing::info!(message = "picked", line = "banana");
            tracing::debug!(message = "filtered out");
        });

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("picked"));
        assert!(content.contains("banana"));
        assert!(!content.contains("filtered out"));
    }
}
