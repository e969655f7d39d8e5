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

//! Command line subcommands.

use std::{
    borrow::Cow,
    io::{Read, Write},
    path::Path,
};

use emojib::{
    expand::expand as expand_line,
    lookup::{unescape, Table},
    serialize::write_to_path,
    table::build_dir,
    BuildSettings, Result, ResultIntoError,
};

pub fn build(settings: &BuildSettings) -> Result<()> {
    log::debug!("build settings: {:?}", settings);
    let report = build_dir(&settings.corpus)
        .chain_err_summary(|| format!("Could not read corpus {}", settings.corpus.display()))?;
    write_to_path(
        &report.map,
        &settings.output,
        settings.format,
        &settings.table_name,
    )?;
    println!("emoji map size: {}", report.len());
    if !report.is_clean() {
        eprintln!("{} definition(s) were rejected.", report.errors.len());
    }
    Ok(())
}

pub fn expand(lines: &[String]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for line in lines {
        for concrete in expand_line(line.trim()) {
            writeln!(stdout, "{}", concrete)?;
        }
    }
    Ok(())
}

pub fn resolve(table: &Path, shortcodes: &[String], unicode: bool) -> Result<()> {
    let table = Table::from_json_path(table)?;
    let mut stdout = std::io::stdout().lock();
    for shortcode in shortcodes {
        let value = table.resolve(shortcode);
        if unicode && table.get(shortcode).is_some() {
            writeln!(stdout, "{}", unescape(value).as_deref().unwrap_or(value))?;
        } else {
            writeln!(stdout, "{}", value)?;
        }
    }
    Ok(())
}

pub fn substitute(table: &Path, text: Option<String>, unicode: bool) -> Result<()> {
    let table = Table::from_json_path(table)?;
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .chain_err_summary(|| "Could not read standard input")?;
            buf
        }
    };
    let out: Cow<'_, str> = if unicode {
        table.emojify(&text)
    } else {
        table.substitute(&text)
    };
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    if !out.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

pub fn print_default_config() -> Result<()> {
    print!("{}", BuildSettings::default_toml()?);
    Ok(())
}
