// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use lenext_cli::{Cli, Request, init_tracing, run};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too and exit 0
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };

            if let Err(io_err) = err.print() {
                eprintln!("lenext: {io_err}");
            }

            return code;
        }
    };

    init_tracing();

    let request = match Request::try_from(cli) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("lenext: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&request, io::stdin().lock(), io::stdout().lock()) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            tracing::error!(error = %err, "request failed");
            eprintln!("lenext: {err:#}");
            ExitCode::FAILURE
        }
    }
}
