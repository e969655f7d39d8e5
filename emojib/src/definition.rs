//
// emojib
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

//! Definition lines.
//!
//! ```text
//! # comment
//! 1F600;grinning
//! 1F44D;+1/thumbsup
//! 1F469-200D-2764-FE0F-200D-1F468;couple-with-heart-woman-man
//! ```
//!
//! The code point field is split on `-`, the alias field on `/`.

use std::fmt::Write;

use crate::{
    error::{Error, ErrorKind, Result},
    expand,
};

/// Classification of a trimmed definition line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Line<'a> {
    Blank,
    Comment,
    /// Contains `{` or `}` and must be expanded first.
    Templated(&'a str),
    Simple(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            Self::Blank
        } else if line.starts_with('#') {
            Self::Comment
        } else if expand::is_templated(line) {
            Self::Templated(line)
        } else {
            Self::Simple(line)
        }
    }
}

/// A code point sequence and the aliases it is known by.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub code_points: Vec<String>,
    pub aliases: Vec<String>,
}

impl Entry {
    /// Parse a concrete (placeholder free) line.
    pub fn parse(line: &str) -> Result<Self> {
        let fields = line.split(';').collect::<Vec<&str>>();
        if fields.len() != 2 {
            return Err(Error::new(format!("`{}` format error", line))
                .set_details(format!(
                    "Expected `CODEPOINT(-CODEPOINT)*;ALIAS(/ALIAS)*`, found {} field(s).",
                    fields.len()
                ))
                .set_kind(ErrorKind::Format));
        }
        let code_points = fields[0]
            .split('-')
            .map(str::to_string)
            .collect::<Vec<String>>();
        let aliases = fields[1]
            .split('/')
            .map(str::to_string)
            .collect::<Vec<String>>();
        if code_points.iter().any(String::is_empty) {
            return Err(Error::new(format!("`{}` format error", line))
                .set_details("Empty code point.")
                .set_kind(ErrorKind::Format));
        }
        if aliases.iter().any(String::is_empty) {
            return Err(Error::new(format!("`{}` format error", line))
                .set_details("Empty alias.")
                .set_kind(ErrorKind::Format));
        }
        Ok(Self {
            code_points,
            aliases,
        })
    }

    /// The escape sequence every alias of this entry maps to.
    pub fn value(&self) -> String {
        render_escape(self.code_points.iter().map(String::as_str))
    }

    /// Canonical `:alias:` keys, in alias order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.aliases.iter().map(|a| shortcode_key(a))
    }
}

/// `\U` followed by the code point left-padded with zeros to eight
/// characters, for each code point in order. Code points are not validated.
///
/// ```
/// use emojib::definition::render_escape;
///
/// assert_eq!(
///     render_escape(["1F469", "200D", "2764", "FE0F"]),
///     r"\U0001F469\U0000200D\U00002764\U0000FE0F"
/// );
/// ```
pub fn render_escape<'a>(code_points: impl IntoIterator<Item = &'a str>) -> String {
    let mut ret = String::new();
    for cp in code_points {
        // Writing into a `String` cannot fail.
        _ = write!(ret, "\\U{:0>8}", cp);
    }
    ret
}

pub fn shortcode_key(alias: &str) -> String {
    format!(":{}:", alias)
}

/// Turn one raw line into entries.
///
/// Blank lines and comments yield nothing. Templated lines yield one result
/// per concrete line. Errors concern a single concrete line; the others are
/// still returned.
pub fn parse_line(line: &str) -> Vec<Result<Entry>> {
    match Line::classify(line) {
        Line::Blank | Line::Comment => vec![],
        Line::Simple(line) => vec![Entry::parse(line)],
        Line::Templated(line) => expand::expand(line)
            .into_iter()
            .map(|concrete| {
                if expand::is_templated(&concrete) {
                    Err(
                        Error::new(format!("`{}` contains an unknown placeholder", concrete))
                            .set_details(format!("Expanded from `{}`.", line))
                            .set_kind(ErrorKind::Placeholder),
                    )
                } else {
                    Entry::parse(&concrete)
                }
            })
            .collect(),
    }
}
