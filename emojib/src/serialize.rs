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

//! Persisting an [`EmojiMap`].
//!
//! Both sinks write entries sorted by key so that regenerating a table from
//! unchanged definitions yields an identical file.

use std::{
    borrow::Cow,
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    error::{Error, ErrorKind, Result, ResultIntoError},
    table::EmojiMap,
};

pub const DEFAULT_TABLE_NAME: &str = "EMOJI_MAP";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// A Rust module holding a `&[(&str, &str)]` constant.
    #[default]
    Rust,
    Json,
}

impl std::str::FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(Self::Rust),
            "json" => Ok(Self::Json),
            other => Err(Error::new(format!("`{}` is not a table format", other))
                .set_details("Valid values are `rust` and `json`.")
                .set_kind(ErrorKind::Configuration)),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rust => write!(fmt, "rust"),
            Self::Json => write!(fmt, "json"),
        }
    }
}

pub trait TableSink {
    fn serialize(&mut self, map: &EmojiMap) -> Result<()>;
}

/// Writes a Rust module that can be `include!`d and handed to
/// [`Table::from_static`](crate::lookup::Table::from_static).
pub struct RustSource<W: Write> {
    writer: W,
    table_name: Cow<'static, str>,
}

impl<W: Write> RustSource<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            table_name: DEFAULT_TABLE_NAME.into(),
        }
    }

    pub fn with_table_name<N: Into<Cow<'static, str>>>(mut self, name: N) -> Self {
        self.table_name = name.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TableSink for RustSource<W> {
    fn serialize(&mut self, map: &EmojiMap) -> Result<()> {
        self.writer.write_all(
            br#"// @generated by emojigen from emoji definition files. Do not edit by hand.
//
// Each value is the text of the escape sequence, one `\UXXXXXXXX` per code
// point; see `emojib::lookup::unescape` to obtain the characters.

"#,
        )?;
        writeln!(
            self.writer,
            "pub const {}: &[(&str, &str)] = &[",
            self.table_name
        )?;
        for (k, v) in map.sorted() {
            // `Debug` output of a `str` is a valid Rust string literal.
            writeln!(self.writer, "    ({:?}, {:?}),", k, v)?;
        }
        self.writer.write_all(b"];\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes a JSON object.
pub struct Json<W: Write> {
    writer: W,
}

impl<W: Write> Json<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TableSink for Json<W> {
    fn serialize(&mut self, map: &EmojiMap) -> Result<()> {
        let sorted = map.iter().collect::<BTreeMap<&str, &str>>();
        serde_json::to_writer_pretty(&mut self.writer, &sorted)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Serialize `map` into `path`.
///
/// The table is written to a sibling temporary file first and renamed over
/// `path` once complete, so a failed write leaves no partial table behind.
pub fn write_to_path(map: &EmojiMap, path: &Path, format: Format, table_name: &str) -> Result<()> {
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = std::path::PathBuf::from(tmp_path);

    let write = || -> Result<()> {
        let file = File::create(&tmp_path)
            .chain_err_summary(|| format!("Could not create {}", tmp_path.display()))?;
        let mut writer = BufWriter::new(file);
        match format {
            Format::Rust => RustSource::new(&mut writer)
                .with_table_name(table_name.to_string())
                .serialize(map)?,
            Format::Json => Json::new(&mut writer).serialize(map)?,
        }
        let file = writer
            .into_inner()
            .map_err(|err| Error::from(err.into_error()))?;
        file.sync_all()?;
        std::fs::rename(&tmp_path, path)
            .chain_err_summary(|| format!("Could not write {}", path.display()))?;
        Ok(())
    };

    if let Err(err) = write() {
        _ = std::fs::remove_file(&tmp_path);
        return Err(err
            .set_summary(format!("Could not write emoji table to {}", path.display()))
            .set_kind(ErrorKind::Serialization));
    }
    log::info!("wrote {} entries to {} ({})", map.len(), path.display(), format);
    Ok(())
}
