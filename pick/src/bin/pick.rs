// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use std::process::ExitCode;

use clap::Parser;
use r3bl_pick::{is_stdin_terminal,
                pick_from_lines,
                read_lines,
                resolve_input_mode,
                try_initialize_logging_global,
                CLIArg,
                PickError,
                PickOutcome};

/// Same as a shell does for a process killed by `SIGINT`.
const EXIT_CODE_CANCELLED: u8 = 130;

fn main() -> ExitCode {
    let cli_arg = match CLIArg::try_parse() {
        Ok(it) => it,
        // `--help` and `--version` also come through here, and aren't failures.
        Err(error) => {
            drop(error.print());
            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let maybe_tracing_config = cli_arg.global_options.tracing_config();
    let should_log = maybe_tracing_config.is_some();
    if let Some(tracing_config) = maybe_tracing_config {
        if let Err(report) = try_initialize_logging_global(&tracing_config) {
            return report_error(report);
        }
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let exit_code = match run(cli_arg) {
        Ok(outcome) => display_outcome(outcome),
        Err(report) => report_error(report),
    };

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...", exit_code = ?exit_code);
    });

    exit_code
}

fn run(cli_arg: CLIArg) -> miette::Result<PickOutcome> {
    let CLIArg {
        file_path,
        global_options,
    } = cli_arg;

    let input_mode = resolve_input_mode(file_path, is_stdin_terminal())?;
    let lines = read_lines(&input_mode)?;

    pick_from_lines(lines, &global_options.stylesheet(), &global_options.prompt)
}

/// Only a picked line is ever written to `stdout`.
fn display_outcome(outcome: PickOutcome) -> ExitCode {
    match outcome {
        PickOutcome::Selected(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        PickOutcome::NothingSelected => ExitCode::SUCCESS,
        PickOutcome::Cancelled => ExitCode::from(EXIT_CODE_CANCELLED),
    }
}

/// Usage errors and I/O errors both exit with 1. They are only told apart in the log.
fn report_error(report: miette::Report) -> ExitCode {
    let is_usage_error = report
        .downcast_ref::<PickError>()
        .is_some_and(PickError::is_usage_error);
    // % is Display, ? is Debug.
    if is_usage_error {
        tracing::warn!(message = "pick was invoked incorrectly", error = ?report);
    } else {
        tracing::error!(
            message = "Could not run pick due to the following problem",
            error = ?report
        );
    }
    eprintln!("{report:?}");
    ExitCode::FAILURE
}
