// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_number::{CommonResult,
                  cli::{CLIArg, handle_command},
                  log::try_initialize_logging_global,
                  ok, setup_default_miette_global_report_handler};
use tracing_core::LevelFilter;

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

fn main() -> CommonResult<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    if should_log {
        try_initialize_logging_global(LevelFilter::from(cli_arg.global_options.log_level))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let output = handle_command(&cli_arg, &mut std::io::stdout().lock())?;
    tracing::debug!(message = "Command finished", ?output);

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    ok!()
}
