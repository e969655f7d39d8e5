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

//! Command line arguments.

use std::path::PathBuf;

use emojib::{BuildSettings, Format, LogLevel, Result};
use structopt::StructOpt;

use crate::subcommands;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "emojigen",
    about = "build emoji shortcode tables from definition files",
    version_short = "v"
)]
pub struct Opt {
    /// use specified configuration file (default: `$EMOJIGEN_CONFIG`).
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// one of OFF, ERROR, WARN, INFO, DEBUG, TRACE.
    #[structopt(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[structopt(subcommand)]
    pub subcommand: SubCommand,
}

#[derive(Debug, StructOpt)]
pub enum SubCommand {
    /// read every definition file below the corpus directory and write the
    /// shortcode table.
    #[structopt(display_order = 1)]
    Build {
        /// directory holding definition files.
        #[structopt(long, value_name = "DIR", parse(from_os_str))]
        corpus: Option<PathBuf>,
        /// where to write the table.
        #[structopt(short, long, value_name = "PATH", parse(from_os_str))]
        output: Option<PathBuf>,
        /// `rust` or `json`.
        #[structopt(long, value_name = "FORMAT")]
        format: Option<Format>,
    },
    /// print the concrete lines a templated definition line expands to.
    #[structopt(display_order = 2)]
    Expand {
        #[structopt(value_name = "LINE", required = true)]
        lines: Vec<String>,
    },
    /// print the escape sequence of each shortcode, using a JSON table.
    #[structopt(display_order = 3)]
    Resolve {
        #[structopt(short, long, value_name = "TABLE_JSON", parse(from_os_str))]
        table: PathBuf,
        /// print characters instead of escape sequences.
        #[structopt(long)]
        unicode: bool,
        #[structopt(value_name = "SHORTCODE", required = true)]
        shortcodes: Vec<String>,
    },
    /// replace shortcodes in TEXT, or in standard input if TEXT is not given,
    /// using a JSON table.
    #[structopt(display_order = 4)]
    Substitute {
        #[structopt(short, long, value_name = "TABLE_JSON", parse(from_os_str))]
        table: PathBuf,
        /// print characters instead of escape sequences.
        #[structopt(long)]
        unicode: bool,
        #[structopt(value_name = "TEXT")]
        text: Option<String>,
    },
    /// print the default configuration to stdout and exit.
    PrintDefaultConfig,
}

impl Opt {
    /// Configuration from `--config`, `$EMOJIGEN_CONFIG` or the defaults, in
    /// that order.
    pub fn settings(&self) -> Result<BuildSettings> {
        match self.config.as_ref() {
            Some(path) => BuildSettings::validate(path),
            None => BuildSettings::load(),
        }
    }

    pub fn execute(self, mut settings: BuildSettings) -> Result<()> {
        match self.subcommand {
            SubCommand::Build {
                corpus,
                output,
                format,
            } => {
                if let Some(corpus) = corpus {
                    settings.corpus = corpus;
                }
                if let Some(output) = output {
                    settings.output = output;
                }
                if let Some(format) = format {
                    settings.format = format;
                }
                settings.check()?;
                subcommands::build(&settings)
            }
            SubCommand::Expand { lines } => subcommands::expand(&lines),
            SubCommand::Resolve {
                table,
                unicode,
                shortcodes,
            } => subcommands::resolve(&table, &shortcodes, unicode),
            SubCommand::Substitute {
                table,
                unicode,
                text,
            } => subcommands::substitute(&table, text, unicode),
            SubCommand::PrintDefaultConfig => subcommands::print_default_config(),
        }
    }
}
