//
// emojigen
//
// Copyright 2026 emojib contributors
//
// This file is part of emojib.
//
// emojib is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// emojib is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with emojib. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command line front end of `emojib`.
//!
//! `emojigen build` turns a directory of definition files into a shortcode
//! table; the other subcommands inspect definitions and generated tables.

mod args;
mod subcommands;

use args::Opt;
use emojib::{Result, StderrLogger};
use structopt::StructOpt;

fn main() {
    let opt = Opt::from_args();
    ::std::process::exit(match run_app(opt) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}", err);
            1
        }
    });
}

fn run_app(opt: Opt) -> Result<()> {
    let settings = opt.settings()?;
    let mut logger = StderrLogger::new(opt.log_level.unwrap_or(settings.log_level));
    if let Some(path) = settings.log_file.as_ref() {
        logger.change_log_dest(path)?;
    }
    let ret = opt.execute(settings);
    log::logger().flush();
    ret
}
