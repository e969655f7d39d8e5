//
// emojib - configuration module.
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

//! Build settings.
//!
//! ```toml
//! corpus = "data"
//! output = "src/emoji_map.rs"
//! format = "rust"
//! log_level = "INFO"
//! log_file = "emojigen.log"
//! table_name = "EMOJI_MAP"
//! ```

use std::{
    env,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    error::{Error, ErrorKind, Result, ResultIntoError},
    serialize::{Format, DEFAULT_TABLE_NAME},
    utils::logging::LogLevel,
};

/// Environment variable holding the configuration file path.
pub const CONFIG_ENV_VAR: &str = "EMOJIGEN_CONFIG";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct BuildSettings {
    /// Directory holding definition files. Every file below it is read.
    pub corpus: PathBuf,
    /// Where the generated table is written.
    pub output: PathBuf,
    pub format: Format,
    pub log_level: LogLevel,
    /// Append log records to this file instead of standard error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Name of the generated constant when `format` is `rust`.
    pub table_name: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            corpus: PathBuf::from("data"),
            output: PathBuf::from("emoji_map.rs"),
            format: Format::default(),
            log_level: LogLevel::default(),
            log_file: None,
            table_name: DEFAULT_TABLE_NAME.to_string(),
        }
    }
}

impl BuildSettings {
    /// Configuration file named by `$EMOJIGEN_CONFIG`, if set.
    pub fn config_file() -> Option<PathBuf> {
        env::var_os(CONFIG_ENV_VAR).map(PathBuf::from)
    }

    /// Parse and check settings from TOML text.
    pub fn validate_string(s: &str) -> Result<Self> {
        let settings: Self =
            toml::from_str(s).chain_err_summary(|| "Configuration contains errors")?;
        settings.check()?;
        Ok(settings)
    }

    /// Read, parse and check settings from the file at `path`.
    pub fn validate(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)
            .chain_err_summary(|| format!("Could not read configuration file {}", path.display()))
            .chain_err_kind(ErrorKind::Configuration)?;
        Self::validate_string(&s)
            .chain_err_details(|| format!("In configuration file {}", path.display()))
    }

    /// Settings from [`BuildSettings::config_file`], or the defaults when no
    /// file is configured.
    pub fn load() -> Result<Self> {
        match Self::config_file() {
            Some(path) => Self::validate(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn check(&self) -> Result<()> {
        if !is_const_name(&self.table_name) {
            return Err(Error::new(format!(
                "`{}` is not a valid table name",
                self.table_name
            ))
            .set_details("Use an upper case Rust identifier, e.g. EMOJI_MAP.")
            .set_kind(ErrorKind::Configuration));
        }
        if self.output.as_os_str().is_empty() {
            return Err(
                Error::new("Output path is empty").set_kind(ErrorKind::Configuration)
            );
        }
        Ok(())
    }

    /// The default configuration, as TOML.
    pub fn default_toml() -> Result<String> {
        toml::to_string(&Self::default()).map_err(|err| {
            Error::new("Could not serialize default configuration")
                .set_source(Some(Arc::new(err)))
                .set_kind(ErrorKind::Serialization)
        })
    }
}

fn is_const_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase() || c == '_')
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        && s != "_"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conf_defaults() {
        let settings = BuildSettings::validate_string("").unwrap();
        assert_eq!(settings, BuildSettings::default());
        assert_eq!(settings.format, Format::Rust);
        assert_eq!(settings.table_name, "EMOJI_MAP");
    }

    #[test]
    fn test_conf_values() {
        let settings = BuildSettings::validate_string(
            r#"
corpus = "definitions"
output = "out/emoji.json"
format = "json"
log_level = "WARN"
log_file = "/tmp/emojigen.log"
"#,
        )
        .unwrap();
        assert_eq!(settings.corpus, PathBuf::from("definitions"));
        assert_eq!(settings.output, PathBuf::from("out/emoji.json"));
        assert_eq!(settings.format, Format::Json);
        assert_eq!(settings.log_level, LogLevel::WARN);
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/emojigen.log")));
    }

    #[test]
    fn test_conf_errors() {
        for s in [
            "corpus = 1",
            "unknown_key = true",
            "format = \"yaml\"",
            "table_name = \"emoji_map\"",
            "table_name = \"\"",
            "output = \"\"",
        ] {
            let err = BuildSettings::validate_string(s).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Configuration, "{}", s);
        }
    }

    #[test]
    fn test_conf_default_toml_round_trips() {
        let s = BuildSettings::default_toml().unwrap();
        assert!(s.contains("format = \"rust\""), "{}", s);
        assert!(!s.contains("log_file"), "{}", s);
        assert_eq!(
            BuildSettings::validate_string(&s).unwrap(),
            BuildSettings::default()
        );
    }

    #[test]
    fn test_conf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emojigen.toml");
        std::fs::write(&path, "format = \"json\"\n").unwrap();
        assert_eq!(BuildSettings::validate(&path).unwrap().format, Format::Json);

        let err = BuildSettings::validate(&dir.path().join("missing.toml")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
