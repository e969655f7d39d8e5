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

//! Resolving shortcodes at runtime.
//!
//! A [`Table`] is loaded from a previously generated artifact and never
//! changes afterwards. Lookups are total: an unknown shortcode resolves to
//! itself and text without known shortcodes comes back unchanged.
//!
//! ```
//! use emojib::lookup::Table;
//!
//! let table = Table::from_static(&[(":wave:", r"\U0001F44B")]);
//! assert_eq!(
//!     table.substitute("hi :wave: there :unknown:"),
//!     r"hi \U0001F44B there :unknown:"
//! );
//! assert_eq!(table.emojify("hi :wave:"), "hi \u{1F44B}");
//! ```
//!
//! A process can also [`install`] one table and use the free functions
//! [`resolve`] and [`substitute`] from anywhere.

use std::{borrow::Cow, io::Read, path::Path, sync::OnceLock};

use indexmap::IndexMap;
use regex::{Captures, Regex};

use crate::{
    error::{Error, ErrorKind, Result, ResultIntoError},
    table::EmojiMap,
};

/// Colon delimited word: ASCII letters, digits, `_` and `-`.
pub const SHORTCODE_PATTERN: &str = r":[[:word:]-]+:";

fn shortcode_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SHORTCODE_PATTERN).unwrap())
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table {
    map: IndexMap<String, String>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a generated Rust constant.
    pub fn from_static(entries: &[(&str, &str)]) -> Self {
        Self {
            map: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let map: EmojiMap =
            serde_json::from_str(s).chain_err_summary(|| "Emoji table is not valid JSON")?;
        Ok(map.into())
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let map: EmojiMap = serde_json::from_reader(reader)
            .chain_err_summary(|| "Emoji table is not valid JSON")?;
        Ok(map.into())
    }

    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .chain_err_summary(|| format!("Could not open emoji table {}", path.display()))?;
        Self::from_json_reader(std::io::BufReader::new(file))
            .chain_err_details(|| format!("While reading {}", path.display()))
    }

    pub fn get(&self, shortcode: &str) -> Option<&str> {
        self.map.get(shortcode).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The escape sequence of `shortcode`, or `shortcode` itself when it is
    /// not in the table.
    pub fn resolve<'a>(&'a self, shortcode: &'a str) -> &'a str {
        self.get(shortcode).unwrap_or(shortcode)
    }

    /// Replace every `:shortcode:` in `text` with [`Table::resolve`]. Replaced
    /// values are not scanned again.
    pub fn substitute<'t>(&self, text: &'t str) -> Cow<'t, str> {
        shortcode_regex().replace_all(text, |caps: &Captures| self.resolve(&caps[0]).to_string())
    }

    /// Like [`Table::substitute`], but known shortcodes become the characters
    /// their escape sequence stands for.
    pub fn emojify<'t>(&self, text: &'t str) -> Cow<'t, str> {
        shortcode_regex().replace_all(text, |caps: &Captures| match self.get(&caps[0]) {
            Some(value) => unescape(value).unwrap_or_else(|| value.to_string()),
            None => caps[0].to_string(),
        })
    }
}

impl From<EmojiMap> for Table {
    fn from(map: EmojiMap) -> Self {
        Self { map: map.into() }
    }
}

/// Decode a sequence of `\UXXXXXXXX` escapes into characters.
///
/// Returns `None` if `value` is not made of such escapes only, or one of them
/// is not a Unicode scalar value.
///
/// ```
/// use emojib::lookup::unescape;
///
/// assert_eq!(unescape(r"\U0001F44B").as_deref(), Some("\u{1F44B}"));
/// assert_eq!(unescape(r"\U0000D800"), None);
/// assert_eq!(unescape(r"\U+001F44B"), None);
/// ```
pub fn unescape(value: &str) -> Option<String> {
    let mut ret = String::with_capacity(value.len() / 2);
    let mut rest = value;
    while !rest.is_empty() {
        let hex = rest.strip_prefix("\\U")?.get(..8)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let code_point = u32::from_str_radix(hex, 16).ok()?;
        ret.push(char::from_u32(code_point)?);
        rest = &rest[2 + 8..];
    }
    Some(ret)
}

static TABLE: OnceLock<Table> = OnceLock::new();

/// Make `table` the process-wide table used by [`resolve`] and
/// [`substitute`]. Only one table can be installed per process.
pub fn install(table: Table) -> Result<()> {
    let len = table.len();
    TABLE.set(table).map_err(|_| {
        Error::new("An emoji table is already installed").set_kind(ErrorKind::Configuration)
    })?;
    log::debug!("installed emoji table with {} entries", len);
    Ok(())
}

pub fn installed() -> Option<&'static Table> {
    TABLE.get()
}

/// [`Table::resolve`] on the installed table. Without an installed table
/// every shortcode resolves to itself.
pub fn resolve(shortcode: &str) -> &str {
    match TABLE.get().and_then(|t| t.get(shortcode)) {
        Some(value) => value,
        None => shortcode,
    }
}

/// [`Table::substitute`] on the installed table.
pub fn substitute(text: &str) -> Cow<'_, str> {
    match TABLE.get() {
        Some(table) => table.substitute(text),
        None => Cow::Borrowed(text),
    }
}
