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

//! Building an [`EmojiMap`] out of definition files.
//!
//! A build is a single pass over a fixed list of sources. Lines that cannot be
//! parsed and shortcodes that are already defined are logged, kept in the
//! [`BuildReport`] and skipped; the first definition of a shortcode wins.
//! Failing to list or read a source aborts the build.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;

use crate::{
    definition::parse_line,
    error::{Error, ErrorKind, Result, ResultIntoError},
};

/// Shortcode (`:alias:`) to escape sequence mapping. Keys are unique.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EmojiMap(IndexMap<String, String>);

impl EmojiMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`, unless it is already present. The existing value is
    /// never replaced.
    pub fn insert_unique(&mut self, key: String, value: String) -> Result<()> {
        use indexmap::map::Entry;

        match self.0.entry(key) {
            Entry::Occupied(e) => Err(Error::new(format!("{} already exists", e.key()))
                .set_details(format!("Defined as `{}`.", e.get()))
                .set_kind(ErrorKind::Collision)),
            Entry::Vacant(e) => {
                e.insert(value);
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries sorted by key.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut ret = self.iter().collect::<Vec<_>>();
        ret.sort_unstable_by(|a, b| a.0.cmp(b.0));
        ret
    }
}

impl From<EmojiMap> for IndexMap<String, String> {
    fn from(val: EmojiMap) -> Self {
        val.0
    }
}

/// Outcome of a build: the map and every line-level error met on the way.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub map: EmojiMap,
    pub errors: Vec<Error>,
}

impl BuildReport {
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// No line was rejected.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Builder {
    map: EmojiMap,
    errors: Vec<Error>,
    sources: usize,
    lines: usize,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every line of the source called `name`.
    ///
    /// A line that is not valid UTF-8 is rejected like any other malformed
    /// line; only a failing read aborts.
    pub fn feed<R: BufRead>(&mut self, name: &str, mut reader: R) -> Result<()> {
        log::debug!("reading definitions from {}", name);
        let mut buf = vec![];
        let mut line_no = 0;
        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .chain_err_summary(|| format!("Could not read {}", name))?;
            if n == 0 {
                break;
            }
            line_no += 1;
            if buf.ends_with(b"\n") {
                buf.pop();
                if buf.ends_with(b"\r") {
                    buf.pop();
                }
            }
            match std::str::from_utf8(&buf) {
                Ok(line) => self.feed_line(name, line_no, line),
                Err(err) => {
                    self.lines += 1;
                    let line = String::from_utf8_lossy(&buf).into_owned();
                    let err = Error::new(format!("Line is not valid UTF-8: {}", err))
                        .set_kind(ErrorKind::Format);
                    self.reject(name, line_no, &line, err);
                }
            }
        }
        self.sources += 1;
        Ok(())
    }

    /// Open, read and close `path`.
    pub fn feed_path(&mut self, path: &Path) -> Result<()> {
        let file =
            File::open(path).chain_err_summary(|| format!("Could not open {}", path.display()))?;
        self.feed(&path.display().to_string(), BufReader::new(file))
    }

    /// Parse a single line and insert its entries. `name` and `line_no` only
    /// serve error messages.
    pub fn feed_line(&mut self, name: &str, line_no: usize, line: &str) {
        self.lines += 1;
        for entry in parse_line(line) {
            match entry {
                Ok(entry) => {
                    let value = entry.value();
                    for key in entry.keys() {
                        if let Err(err) = self.map.insert_unique(key, value.clone()) {
                            self.reject(name, line_no, line, err);
                        }
                    }
                }
                Err(err) => self.reject(name, line_no, line, err),
            }
        }
    }

    fn reject(&mut self, name: &str, line_no: usize, line: &str, err: Error) {
        let line = line.trim();
        let err = err.set_details(format!("In {}:{}: `{}`", name, line_no, line));
        log::warn!(
            "{} in {}:{}: {} (`{}`)",
            err.kind,
            name,
            line_no,
            err.summary,
            line
        );
        self.errors.push(err);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn finish(self) -> BuildReport {
        log::info!(
            "emoji map size: {} ({} source(s), {} line(s), {} rejected)",
            self.map.len(),
            self.sources,
            self.lines,
            self.errors.len()
        );
        BuildReport {
            map: self.map,
            errors: self.errors,
        }
    }
}

/// Every file below `dir`, recursively, sorted by path.
pub fn sources_in(dir: &Path) -> Result<Vec<PathBuf>> {
    fn walk(dir: &Path, ret: &mut Vec<PathBuf>) -> Result<()> {
        let entries = std::fs::read_dir(dir)
            .chain_err_summary(|| format!("Could not list {}", dir.display()))?;
        for entry in entries {
            let path = entry
                .chain_err_summary(|| format!("Could not list {}", dir.display()))?
                .path();
            if path.is_dir() {
                walk(&path, ret)?;
            } else {
                ret.push(path);
            }
        }
        Ok(())
    }

    let mut ret = vec![];
    walk(dir, &mut ret)?;
    ret.sort();
    Ok(ret)
}

/// Build a map out of `sources`, in the given order.
pub fn build<P: AsRef<Path>>(sources: &[P]) -> Result<BuildReport> {
    let mut builder = Builder::new();
    for path in sources {
        builder.feed_path(path.as_ref())?;
    }
    Ok(builder.finish())
}

/// Build a map out of every file below `dir`.
pub fn build_dir(dir: &Path) -> Result<BuildReport> {
    build(&sources_in(dir)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_definition_wins() {
        let mut builder = Builder::new();
        builder
            .feed("smileys.txt", "1F600;grinning\n1F601;grinning\n".as_bytes())
            .unwrap();
        let report = builder.finish();
        assert_eq!(report.len(), 1);
        assert_eq!(report.map.get(":grinning:"), Some(r"\U0001F600"));
        assert_eq!(report.errors.len(), 1);
        let err = &report.errors[0];
        assert_eq!(err.kind, ErrorKind::Collision);
        let details = err.details.as_deref().unwrap();
        assert!(details.contains("smileys.txt:2"), "{}", details);
        assert!(details.contains("1F601;grinning"), "{}", details);
    }

    #[test]
    fn test_bad_lines_do_not_stop_the_build() {
        let mut builder = Builder::new();
        builder
            .feed(
                "mixed.txt",
                "# comment\n\n1F600\n1F44B;wave\n1F44D;+1;thumbsup\n1F64F;pray\n".as_bytes(),
            )
            .unwrap();
        let report = builder.finish();
        assert_eq!(report.len(), 2);
        assert!(report.map.contains_key(":wave:"));
        assert!(report.map.contains_key(":pray:"));
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors.iter().all(|e| e.kind == ErrorKind::Format));
        assert!(!report.is_clean());
    }

    #[test]
    fn test_undecodable_line_is_rejected() {
        let mut builder = Builder::new();
        builder
            .feed(
                "latin1.txt",
                &b"# caf\xe9\n1F600;grinning\n1F44B;wave\xff\r\n1F44D;+1\r\n"[..],
            )
            .unwrap();
        let report = builder.finish();
        assert_eq!(report.len(), 2);
        assert_eq!(report.map.get(":grinning:"), Some(r"\U0001F600"));
        assert_eq!(report.map.get(":+1:"), Some(r"\U0001F44D"));
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors.iter().all(|e| e.kind == ErrorKind::Format));
        let details = report.errors[1].details.as_deref().unwrap();
        assert!(details.contains("latin1.txt:3"), "{}", details);
    }

    #[test]
    fn test_aliases_share_a_value() {
        let mut builder = Builder::new();
        builder.feed_line("inline", 1, "1F44D;+1/thumbsup");
        let report = builder.finish();
        assert!(report.is_clean());
        assert_eq!(report.map.get(":+1:"), report.map.get(":thumbsup:"));
        assert_eq!(report.map.get(":+1:"), Some(r"\U0001F44D"));
    }

    #[test]
    fn test_partial_alias_collision() {
        let mut builder = Builder::new();
        builder.feed_line("inline", 1, "1F44D;thumbsup");
        builder.feed_line("inline", 2, "1F44E;thumbsdown/thumbsup/-1");
        let report = builder.finish();
        assert_eq!(report.len(), 3);
        assert_eq!(report.map.get(":thumbsup:"), Some(r"\U0001F44D"));
        assert_eq!(report.map.get(":-1:"), Some(r"\U0001F44E"));
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_templated_lines() {
        let mut builder = Builder::new();
        builder.feed_line("people.txt", 1, "1F9D1{SKIN};person{SKIN}");
        builder.feed_line("people.txt", 2, "1F64B{SKIN}-200D-{MALE/FEMALE};{GENDER}-raising-hand{SKIN}");
        let report = builder.finish();
        assert!(report.is_clean(), "{:?}", report.errors);
        assert_eq!(report.len(), 6 + 12);
        assert_eq!(
            report.map.get(":female-raising-hand-1F3FD:"),
            Some(r"\U0001F64B\U0001F3FD\U0000200D\U00002640\U0000FE0F")
        );
        assert_eq!(
            report.map.get(":male-raising-hand:"),
            Some(r"\U0001F64B\U0000200D\U00002642\U0000FE0F")
        );
    }

    #[test]
    fn test_sorted() {
        let mut map = EmojiMap::new();
        map.insert_unique(":wave:".into(), "b".into()).unwrap();
        map.insert_unique(":+1:".into(), "a".into()).unwrap();
        assert_eq!(map.iter().next(), Some((":wave:", "b")));
        assert_eq!(map.sorted(), vec![(":+1:", "a"), (":wave:", "b")]);
        assert_eq!(
            map.insert_unique(":wave:".into(), "c".into()).unwrap_err().kind,
            ErrorKind::Collision
        );
        assert_eq!(map.get(":wave:"), Some("b"));
    }
}
