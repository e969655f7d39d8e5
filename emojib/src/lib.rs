//
// emojib - lib.rs
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

#![deny(
    unsafe_code,
    /* groups */
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    /* restriction */
    clippy::dbg_macro,
    /* rustdoc */
    rustdoc::broken_intra_doc_links,
    /* pedantic */
    clippy::doc_markdown,
    clippy::expect_fun_call,
    clippy::or_fun_call,
)]
#![allow(clippy::new_without_default)]
//! A crate that turns emoji definition files into a shortcode table and
//! substitutes shortcodes in text.
//!
//! - Parse definition lines such as `1F44D;+1/thumbsup` (see module
//!   [`definition`]), expanding gender and skin tone placeholders (see module
//!   [`expand`]).
//! - Build a [`EmojiMap`] out of a directory of definition files, rejecting
//!   duplicate shortcodes (see module [`table`]).
//! - Persist it as a Rust module or as JSON (see module [`serialize`]).
//! - Load a persisted table and replace `:shortcode:`s in text (see module
//!   [`lookup`]).
//!
//! Other exports are
//! - Build settings read from TOML (see module [`conf`]).
//! - A `log` backend writing to standard error (see [`StderrLogger`]).

pub mod conf;
pub use conf::BuildSettings;
pub mod definition;
pub use definition::Entry;
pub mod error;
pub use error::*;
pub mod expand;
pub use expand::{expand, Placeholder};
pub mod lookup;
pub use lookup::Table;
pub mod serialize;
pub use serialize::{Format, TableSink};
pub mod table;
pub use table::{BuildReport, Builder, EmojiMap};

pub mod utils;
pub use utils::logging::{LogLevel, StderrLogger};

#[macro_use]
extern crate serde_derive;
pub extern crate log;
