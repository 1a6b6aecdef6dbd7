// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The small terminal contract the picker paints on, along with a real implementation
//! ([CrosstermTerminal]) and an in-memory one for tests ([OffscreenTerminal]).

use std::{io::Write,
          ops::{Deref, DerefMut},
          panic::PanicHookInfo,
          sync::Arc};

use crossterm::{cursor::{Hide, MoveTo, Show},
                style::{ContentStyle, PrintStyledContent, StyledContent},
                terminal::{disable_raw_mode,
                           enable_raw_mode,
                           Clear,
                           ClearType,
                           EnterAlternateScreen,
                           LeaveAlternateScreen},
                QueueableCommand};
use miette::IntoDiagnostic as _;
use unicode_width::UnicodeWidthChar;

use crate::{PickError, Size};

pub trait Terminal {
    /// Take over the terminal (raw mode, alternate screen, etc).
    ///
    /// # Errors
    ///
    /// Returns [PickError::TerminalInit] if the terminal can't be set up.
    fn init(&mut self) -> miette::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the size of the terminal can't be queried.
    fn size(&mut self) -> miette::Result<Size>;

    /// # Errors
    ///
    /// Returns an error if the command can't be queued.
    fn clear(&mut self) -> miette::Result<()>;

    /// Paint one char at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command can't be queued.
    fn set_cell(
        &mut self,
        x: usize,
        y: usize,
        ch: char,
        style: ContentStyle,
    ) -> miette::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the command can't be queued.
    fn show_cursor(&mut self, x: usize, y: usize) -> miette::Result<()>;

    /// Flush everything queued so far to the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the output can't be flushed.
    fn show(&mut self) -> miette::Result<()>;

    /// Give the terminal back in the state it was found in. Use [TerminalGuard] to make
    /// sure this is called exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be restored.
    fn finalize(&mut self) -> miette::Result<()>;
}

/// Calls [Terminal::init] when created, and [Terminal::finalize] exactly once: either
/// via [TerminalGuard::finish] or, on every other path (early return, panic), when it is
/// dropped.
#[derive(Debug)]
pub struct TerminalGuard<'a, T: Terminal> {
    terminal: &'a mut T,
    is_finalized: bool,
}

impl<'a, T: Terminal> TerminalGuard<'a, T> {
    /// # Errors
    ///
    /// Returns the error from [Terminal::init]. In this case the terminal is finalized
    /// before returning, to undo any partial setup.
    pub fn new(terminal: &'a mut T) -> miette::Result<Self> {
        if let Err(report) = terminal.init() {
            drop(terminal.finalize());
            return Err(report);
        }
        Ok(Self {
            terminal,
            is_finalized: false,
        })
    }

    /// # Errors
    ///
    /// Returns the error from [Terminal::finalize].
    pub fn finish(mut self) -> miette::Result<()> {
        self.is_finalized = true;
        self.terminal.finalize()
    }
}

impl<T: Terminal> Deref for TerminalGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target { self.terminal }
}

impl<T: Terminal> DerefMut for TerminalGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target { self.terminal }
}

impl<T: Terminal> Drop for TerminalGuard<'_, T> {
    fn drop(&mut self) {
        if !self.is_finalized {
            self.is_finalized = true;
            drop(self.terminal.finalize());
        }
    }
}

type PanicHook = dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static;

/// A panic is reported by the panic hook before [TerminalGuard] gets to run during
/// unwinding. Without this, the message is printed into the alternate screen and is lost
/// when the guard leaves it. While this guard is alive, `restore` runs first and then the
/// previous hook. The previous hook is put back on drop.
pub struct PanicHookGuard {
    previous_hook: Arc<Box<PanicHook>>,
}

impl PanicHookGuard {
    #[must_use]
    pub fn install(restore: impl Fn() + Send + Sync + 'static) -> Self {
        let previous_hook: Arc<Box<PanicHook>> = Arc::new(std::panic::take_hook());
        let chained = Arc::clone(&previous_hook);
        std::panic::set_hook(Box::new(move |info| {
            restore();
            chained(info);
        }));
        Self { previous_hook }
    }
}

impl std::fmt::Debug for PanicHookGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanicHookGuard").finish_non_exhaustive()
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // The hook can't be swapped out while panicking.
        if std::thread::panicking() {
            return;
        }
        drop(std::panic::take_hook());
        let previous_hook = Arc::clone(&self.previous_hook);
        std::panic::set_hook(Box::new(move |info| previous_hook(info)));
    }
}

/// Leave the alternate screen on `stderr` and turn off raw mode. Errors are ignored,
/// since this runs from the panic hook.
pub fn restore_stderr_terminal() {
    let mut stderr = std::io::stderr();
    drop(
        stderr
            .queue(Show)
            .and_then(|it| it.queue(LeaveAlternateScreen))
            .and_then(|it| it.flush()),
    );
    drop(disable_raw_mode());
}

/// Paints on a real terminal using the alternate screen, so the user's scrollback is left
/// untouched. The binary writes to `stderr`, which leaves `stdout` free for the result.
#[derive(Debug)]
pub struct CrosstermTerminal<W: Write> {
    output: W,
    is_initialized: bool,
}

impl<W: Write> CrosstermTerminal<W> {
    #[must_use]
    pub fn new(output: W) -> Self {
        Self {
            output,
            is_initialized: false,
        }
    }
}

/// Terminal coordinates are `u16` in [crossterm]. Anything larger is off screen anyway.
fn to_u16(it: usize) -> u16 { u16::try_from(it).unwrap_or(u16::MAX) }

impl<W: Write> Terminal for CrosstermTerminal<W> {
    fn init(&mut self) -> miette::Result<()> {
        enable_raw_mode().map_err(|source| PickError::TerminalInit { source })?;
        self.is_initialized = true;
        self.output
            .queue(EnterAlternateScreen)
            .and_then(|it| it.queue(Hide))
            .and_then(|it| it.flush())
            .map_err(|source| PickError::TerminalInit { source })?;
        Ok(())
    }

    fn size(&mut self) -> miette::Result<Size> {
        let (col_width, row_height) = crossterm::terminal::size().into_diagnostic()?;
        Ok(Size::new(col_width.into(), row_height.into()))
    }

    fn clear(&mut self) -> miette::Result<()> {
        self.output.queue(Hide).into_diagnostic()?;
        self.output.queue(Clear(ClearType::All)).into_diagnostic()?;
        Ok(())
    }

    fn set_cell(
        &mut self,
        x: usize,
        y: usize,
        ch: char,
        style: ContentStyle,
    ) -> miette::Result<()> {
        self.output
            .queue(MoveTo(to_u16(x), to_u16(y)))
            .into_diagnostic()?;
        self.output
            .queue(PrintStyledContent(StyledContent::new(style, ch)))
            .into_diagnostic()?;
        Ok(())
    }

    fn show_cursor(&mut self, x: usize, y: usize) -> miette::Result<()> {
        self.output
            .queue(MoveTo(to_u16(x), to_u16(y)))
            .into_diagnostic()?;
        self.output.queue(Show).into_diagnostic()?;
        Ok(())
    }

    fn show(&mut self) -> miette::Result<()> { self.output.flush().into_diagnostic() }

    fn finalize(&mut self) -> miette::Result<()> {
        if !self.is_initialized {
            return Ok(());
        }
        self.is_initialized = false;

        // Try every step, even if an earlier one fails, and report the first failure.
        let res_screen = self
            .output
            .queue(Show)
            .and_then(|it| it.queue(LeaveAlternateScreen))
            .and_then(|it| it.flush());
        let res_raw_mode = disable_raw_mode();
        res_screen.into_diagnostic()?;
        res_raw_mode.into_diagnostic()?;
        Ok(())
    }
}

fn blank_cells(size: Size) -> Vec<Vec<OffscreenCell>> {
    vec![vec![OffscreenCell::Blank; size.col_width]; size.row_height]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffscreenCell {
    Blank,
    Char(char, ContentStyle),
    /// Right half of a wide char painted in the cell to the left.
    Continuation,
}

/// An in-memory grid of cells. Used to test rendering and the event loop without a
/// real terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffscreenTerminal {
    pub size: Size,
    pub cells: Vec<Vec<OffscreenCell>>,
    pub cursor: Option<(usize, usize)>,
    pub init_count: usize,
    pub show_count: usize,
    pub finalize_count: usize,
}

impl OffscreenTerminal {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cells: blank_cells(size),
            cursor: None,
            init_count: 0,
            show_count: 0,
            finalize_count: 0,
        }
    }

    /// Simulate the user resizing the window. Contents are wiped, like a real terminal
    /// that needs a repaint.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.cells = blank_cells(size);
    }

    /// The text painted on row `y`, with trailing blanks trimmed.
    #[must_use]
    pub fn row_text(&self, y: usize) -> String {
        let Some(row) = self.cells.get(y) else {
            return String::new();
        };
        let text = row
            .iter()
            .filter_map(|cell| match cell {
                OffscreenCell::Blank => Some(' '),
                OffscreenCell::Char(ch, _) => Some(*ch),
                OffscreenCell::Continuation => None,
            })
            .collect::<String>();
        text.trim_end().to_string()
    }

    /// The text of every row, with trailing empty rows removed.
    #[must_use]
    pub fn screen_text(&self) -> Vec<String> {
        let mut rows = (0..self.size.row_height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>();
        while rows.last().is_some_and(String::is_empty) {
            rows.pop();
        }
        rows
    }

    #[must_use]
    pub fn style_at(&self, x: usize, y: usize) -> Option<ContentStyle> {
        match self.cells.get(y)?.get(x)? {
            OffscreenCell::Char(_, style) => Some(*style),
            OffscreenCell::Blank | OffscreenCell::Continuation => None,
        }
    }
}

impl Terminal for OffscreenTerminal {
    fn init(&mut self) -> miette::Result<()> {
        self.init_count += 1;
        Ok(())
    }

    fn size(&mut self) -> miette::Result<Size> { Ok(self.size) }

    fn clear(&mut self) -> miette::Result<()> {
        self.cells = blank_cells(self.size);
        self.cursor = None;
        Ok(())
    }

    fn set_cell(
        &mut self,
        x: usize,
        y: usize,
        ch: char,
        style: ContentStyle,
    ) -> miette::Result<()> {
        let width = ch.width().unwrap_or(0);
        if let Some(row) = self.cells.get_mut(y) {
            if let Some(cell) = row.get_mut(x) {
                *cell = OffscreenCell::Char(ch, style);
            }
            for continuation_x in x + 1..x + width {
                if let Some(cell) = row.get_mut(continuation_x) {
                    *cell = OffscreenCell::Continuation;
                }
            }
        }
        Ok(())
    }

    fn show_cursor(&mut self, x: usize, y: usize) -> miette::Result<()> {
        self.cursor = Some((x, y));
        Ok(())
    }

    fn show(&mut self) -> miette::Result<()> {
        self.show_count += 1;
        Ok(())
    }

    fn finalize(&mut self) -> miette::Result<()> {
        self.finalize_count += 1;
        Ok(())
    }
}
