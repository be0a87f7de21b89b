/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! `ulid` prints a new ULID, or the timestamp of the ULID given as its only argument.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

mod cli;
mod logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(&cli.log_level) {
        eprintln!("{:#}", err);
        return ExitCode::FAILURE;
    }

    match cli.run(&mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "ulid failed");
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
