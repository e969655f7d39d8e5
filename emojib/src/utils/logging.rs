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

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicU8, Ordering},
        Arc, Mutex,
    },
};

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::{Error, ErrorKind, Result, ResultIntoError};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, PartialOrd, Serialize)]
#[repr(u8)]
pub enum LogLevel {
    OFF = 0,
    ERROR,
    WARN,
    #[default]
    INFO,
    DEBUG,
    TRACE,
}

impl From<u8> for LogLevel {
    fn from(verbosity: u8) -> Self {
        match verbosity {
            0 => Self::OFF,
            1 => Self::ERROR,
            2 => Self::WARN,
            3 => Self::INFO,
            4 => Self::DEBUG,
            _ => Self::TRACE,
        }
    }
}

impl From<Level> for LogLevel {
    fn from(l: Level) -> Self {
        match l {
            Level::Error => Self::ERROR,
            Level::Warn => Self::WARN,
            Level::Info => Self::INFO,
            Level::Debug => Self::DEBUG,
            Level::Trace => Self::TRACE,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::OFF => Self::Off,
            LogLevel::ERROR => Self::Error,
            LogLevel::WARN => Self::Warn,
            LogLevel::INFO => Self::Info,
            LogLevel::DEBUG => Self::Debug,
            LogLevel::TRACE => Self::Trace,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "OFF" => OFF,
            "ERROR" => ERROR,
            "WARN" => WARN,
            "INFO" => INFO,
            "DEBUG" => DEBUG,
            "TRACE" => TRACE,
            other => {
                return Err(Error::new(format!("`{}` is not a valid log level", other))
                    .set_details("Valid values are OFF, ERROR, WARN, INFO, DEBUG and TRACE.")
                    .set_kind(ErrorKind::Configuration))
            }
        })
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OFF => "OFF",
                ERROR => "ERROR",
                WARN => "WARN",
                INFO => "INFO",
                DEBUG => "DEBUG",
                TRACE => "TRACE",
            }
        )
    }
}

use LogLevel::*;

struct Output {
    writer: BufWriter<Box<dyn Write + Send>>,
    path: Option<PathBuf>,
}

/// `log` backend used by the `emojigen` binary.
///
/// Records go to standard error unless [`StderrLogger::change_log_dest`]
/// redirects them to a file.
#[derive(Clone)]
pub struct StderrLogger {
    dest: Arc<Mutex<Output>>,
    level: Arc<AtomicU8>,
    print_level: bool,
    print_module_names: bool,
}

impl std::fmt::Debug for StderrLogger {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_struct(stringify!(StderrLogger))
            .field("level", &self.log_level())
            .field("print_level", &self.print_level)
            .field("print_module_names", &self.print_module_names)
            .field("log_dest", &self.log_dest())
            .finish()
    }
}

impl Default for StderrLogger {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl StderrLogger {
    /// Create a logger and install it as the global `log` backend. Only the
    /// first logger created in a process is installed; later calls return an
    /// independent handle whose level changes still apply to the global max
    /// level.
    pub fn new(level: LogLevel) -> Self {
        use std::sync::Once;

        static INIT_STDERR_LOGGING: Once = Once::new();

        let logger = Self {
            dest: Arc::new(Mutex::new(Output {
                writer: BufWriter::new(Box::new(std::io::stderr())),
                path: None,
            })),
            level: Arc::new(AtomicU8::new(level as u8)),
            print_level: true,
            print_module_names: true,
        };

        log::set_max_level(LevelFilter::from(logger.log_level()));

        INIT_STDERR_LOGGING.call_once(|| {
            // Cannot fail: `call_once` guards against a second registration.
            _ = log::set_boxed_logger(Box::new(logger.clone()));
        });
        logger
    }

    pub fn log_level(&self) -> LogLevel {
        self.level.load(Ordering::SeqCst).into()
    }

    pub fn change_log_level(&mut self, new_val: LogLevel) {
        self.level.store(new_val as u8, Ordering::SeqCst);
        log::set_max_level(LevelFilter::from(new_val));
    }

    /// Append records to `path` instead of standard error. Every handle of
    /// the installed logger shares the destination.
    pub fn change_log_dest(&mut self, path: &Path) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .chain_err_summary(|| format!("Could not open log file {}", path.display()))?;
        let mut dest = self
            .dest
            .lock()
            .map_err(|_| Error::new("Log destination lock is poisoned"))?;
        *dest = Output {
            writer: BufWriter::new(Box::new(file)),
            path: Some(path.to_path_buf()),
        };
        Ok(())
    }

    pub fn log_dest(&self) -> Option<PathBuf> {
        self.dest.lock().ok().and_then(|d| d.path.clone())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LevelFilter::from(self.log_level())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        fn write(
            writer: &mut impl Write,
            record: &Record,
            (print_level, print_module_names): (bool, bool),
        ) -> Option<()> {
            writer.write_all(b"[").ok()?;
            if print_level {
                writer
                    .write_all(record.level().to_string().as_bytes())
                    .ok()?;
            }
            write!(writer, "]: ").ok()?;
            if print_module_names {
                write!(writer, "{}: ", record.metadata().target()).ok()?;
            }
            write!(writer, "{}", record.args()).ok()?;
            writer.write_all(b"\n").ok()?;
            writer.flush().ok()?;
            Some(())
        }

        _ = self.dest.lock().ok().and_then(|mut d| {
            write(
                &mut d.writer,
                record,
                (self.print_level, self.print_module_names),
            )
        });
    }

    fn flush(&self) {
        self.dest
            .lock()
            .ok()
            .and_then(|mut w| w.writer.flush().ok());
    }
}
