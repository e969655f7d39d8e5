//
// emojib - error module
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

//! An error object for `emojib`.
//!
//! Errors are split in two families. [`ErrorKind::Io`],
//! [`ErrorKind::Serialization`] and [`ErrorKind::Configuration`] stop a build.
//! [`ErrorKind::Format`], [`ErrorKind::Collision`] and
//! [`ErrorKind::Placeholder`] are line-level: the builder logs them, keeps them
//! in its report and moves on to the next line.

use std::{borrow::Cow, error::Error as StdError, fmt, io, result, sync::Arc};

pub type Result<T> = result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    #[default]
    None,
    /// A source could not be listed, opened or read, or an output could not be
    /// written.
    Io,
    /// A definition line is not valid UTF-8 or does not have exactly one `;`
    /// separator.
    Format,
    /// A shortcode is already defined.
    Collision,
    /// A template marker is still present after expansion.
    Placeholder,
    Configuration,
    Serialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "{}",
            match self {
                Self::None => "None",
                Self::Io => "I/O",
                Self::Format => "Format error",
                Self::Collision => "Duplicate shortcode",
                Self::Placeholder => "Unknown placeholder",
                Self::Configuration => "Configuration error",
                Self::Serialization => "Serialization error",
            }
        )
    }
}

#[derive(Clone, Debug)]
pub struct Error {
    pub summary: Cow<'static, str>,
    pub details: Option<Cow<'static, str>>,
    pub source: Option<Arc<dyn StdError + Send + Sync + 'static>>,
    pub kind: ErrorKind,
}

pub trait IntoError {
    fn set_err_summary<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>;

    fn set_err_details<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>;

    fn set_err_kind(self, kind: ErrorKind) -> Error;
}

pub trait ResultIntoError<T> {
    fn chain_err_summary<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>;

    fn chain_err_details<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>;

    fn chain_err_kind(self, kind: ErrorKind) -> Result<T>;
}

impl<I: Into<Error>> IntoError for I {
    #[inline]
    fn set_err_summary<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>,
    {
        let err: Error = self.into();
        err.set_summary(msg)
    }

    #[inline]
    fn set_err_details<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>,
    {
        let err: Error = self.into();
        err.set_details(msg)
    }

    #[inline]
    fn set_err_kind(self, kind: ErrorKind) -> Error {
        let err: Error = self.into();
        err.set_kind(kind)
    }
}

impl<T, I: Into<Error>> ResultIntoError<T> for result::Result<T, I> {
    #[inline]
    fn chain_err_summary<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|err| err.set_err_summary(msg_fn()))
    }

    #[inline]
    fn chain_err_details<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|err| err.set_err_details(msg_fn()))
    }

    #[inline]
    fn chain_err_kind(self, kind: ErrorKind) -> Result<T> {
        self.map_err(|err| err.set_err_kind(kind))
    }
}

impl Error {
    pub fn new<M>(msg: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            summary: msg.into(),
            details: None,
            source: None,
            kind: ErrorKind::None,
        }
    }

    pub fn set_details<M>(mut self, details: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        if let Some(old_details) = self.details.as_ref() {
            self.details = Some(format!("{}. {}", old_details, details.into()).into());
        } else {
            self.details = Some(details.into());
        }
        self
    }

    pub fn set_summary<M>(mut self, summary: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        let old_summary = std::mem::replace(&mut self.summary, summary.into());
        self.set_details(old_summary)
    }

    pub fn set_source(mut self, new_val: Option<Arc<dyn StdError + Send + Sync + 'static>>) -> Self {
        self.source = new_val;
        self
    }

    pub fn set_kind(mut self, new_val: ErrorKind) -> Self {
        self.kind = new_val;
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.summary)?;
        if let Some(details) = self.details.as_ref() {
            if !details.trim().is_empty() {
                write!(f, "\n{}", details)?;
            }
        }
        if let Some(source) = self.source.as_ref() {
            write!(f, "\nCaused by: {}", source)?;
        }
        if self.kind != ErrorKind::None {
            write!(f, "\nError kind: {}", self.kind)?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|s| &(*(*s)) as _)
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(err: io::Error) -> Self {
        let s = err.to_string();
        Self::new(s)
            .set_source(Some(Arc::new(err)))
            .set_kind(ErrorKind::Io)
    }
}

impl From<serde_json::Error> for Error {
    #[inline]
    fn from(err: serde_json::Error) -> Self {
        let s = err.to_string();
        Self::new(s)
            .set_source(Some(Arc::new(err)))
            .set_kind(ErrorKind::Serialization)
    }
}

impl From<toml::de::Error> for Error {
    #[inline]
    fn from(err: toml::de::Error) -> Self {
        let s = err.to_string();
        Self::new(s)
            .set_source(Some(Arc::new(err)))
            .set_kind(ErrorKind::Configuration)
    }
}

impl<'a> From<&'a str> for Error {
    #[inline]
    fn from(err: &'a str) -> Self {
        Self::new(err.to_string())
    }
}

impl From<String> for Error {
    #[inline]
    fn from(err: String) -> Self {
        Self::new(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_summary_chaining() {
        let err = Error::new("a.txt: 1F600 format error")
            .set_kind(ErrorKind::Format)
            .set_summary("Could not parse definition line");
        assert_eq!(err.summary, "Could not parse definition line");
        assert_eq!(err.details.as_deref(), Some("a.txt: 1F600 format error"));
        let display = err.to_string();
        assert!(display.contains("Could not parse definition line"));
        assert!(display.contains("Error kind: Format error"));
    }

    #[test]
    fn test_error_from_io() {
        let res: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = res
            .chain_err_summary(|| "Could not open data/people.txt")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Io);
        assert!(StdError::source(&err).is_some());
        assert_eq!(err.details.as_deref(), Some("gone"));
    }
}
