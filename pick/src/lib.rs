// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_pick
//!
//! `pick` is a small interactive line selector. It reads lines from a file (passed as the
//! only argument) or from `stdin` (when something is piped in), shows them in the
//! terminal, and narrows the list as you type a query. Only lines that contain the query
//! as a literal, case sensitive substring are shown, and the matched part is
//! highlighted. Press `Enter` to print the focused line to `stdout`, or `Esc` to bail.
//!
//! ```shell
//! ls -1 | pick
//! pick Cargo.toml
//! ```
//!
//! ## Keys
//!
//! | Keys                 | Action                              |
//! | -------------------- | ----------------------------------- |
//! | any printable char   | insert at the cursor                |
//! | `Backspace`, `C-h`   | delete the char before the cursor   |
//! | `Delete`, `C-d`      | delete the char under the cursor    |
//! | `Left`, `C-b`        | move cursor left                    |
//! | `Right`, `C-f`       | move cursor right                   |
//! | `Home`, `C-a`        | move cursor to start of query       |
//! | `End`, `C-e`         | move cursor to end of query         |
//! | `Up`, `C-p`          | focus previous candidate            |
//! | `Down`, `C-n`        | focus next candidate                |
//! | `Enter`              | print focused candidate and exit    |
//! | `Esc`, `C-c`         | exit without printing anything      |
//!
//! ## How it is put together
//!
//! All the state lives in one owned [State] value, and every key press is a transition
//! applied by [keypress_handler] (no I/O, so it is easy to test). The
//! [enter_event_loop] function drives that transition function with a [KeyPressReader]
//! and paints the result on a [Terminal]. The real terminal is [CrosstermTerminal], and
//! tests use [OffscreenTerminal] along with [TestVecKeyPressReader].
//!
//! ```text
//! key press ─► keypress_handler ─► QueryEditor | SelectionState
//!                    │
//!                    └─ query changed? ─► CandidateSet::recompute ─► fixup_after_recompute
//!                                                                        │
//!                          render ◄── compute_viewport ◄─────────────────┘
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod candidates;
pub mod clap_config;
pub mod error;
pub mod event_loop;
pub mod input_source;
pub mod keypress;
pub mod log;
pub mod matcher;
pub mod query_editor;
pub mod render;
pub mod selection;
pub mod state;
pub mod style;
pub mod terminal;

// Re-export.
pub use candidates::*;
pub use clap_config::*;
pub use error::*;
pub use event_loop::*;
pub use input_source::*;
pub use keypress::*;
pub use log::*;
pub use matcher::*;
pub use query_editor::*;
pub use render::*;
pub use selection::*;
pub use state::*;
pub use style::*;
pub use terminal::*;

/// Enable verbose debug logging of every key press and state transition. Only has an
/// effect when logging is also enabled with `--enable-logging`.
pub const DEVELOPMENT_MODE: bool = false;
