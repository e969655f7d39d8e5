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

use std::path::{Path, PathBuf};

use emojib::{
    serialize::{write_to_path, DEFAULT_TABLE_NAME},
    table::{build, build_dir, sources_in},
    ErrorKind, Format, Table,
};

fn corpus() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

#[test]
fn test_sources_are_sorted_and_recursive() {
    let sources = sources_in(&corpus()).unwrap();
    let names = sources
        .iter()
        .map(|p| p.strip_prefix(corpus()).unwrap().to_path_buf())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            PathBuf::from("people/broken.txt"),
            PathBuf::from("people/person.txt"),
            PathBuf::from("smileys.txt"),
        ]
    );
}

#[test]
fn test_build_corpus() {
    let report = build_dir(&corpus()).unwrap();
    assert_eq!(report.len(), 47);

    let kinds = report.errors.iter().map(|e| e.kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::Format,
            ErrorKind::Placeholder,
            ErrorKind::Collision
        ]
    );
    // `people/broken.txt` comes first and wins `:grinning:`.
    assert!(report.errors[2]
        .details
        .as_deref()
        .unwrap()
        .contains("smileys.txt:2"));

    let map = &report.map;
    assert_eq!(map.get(":grinning:"), Some(r"\U0001F600"));
    assert_eq!(map.get(":woman:"), Some(r"\U0001F469"));
    assert_eq!(map.get(":man-1F3FF:"), Some(r"\U0001F468\U0001F3FF"));
    assert_eq!(map.get(":heart:"), Some(r"\U00002764\U0000FE0F"));
    assert_eq!(map.get(":thumbsup-1F3FB:"), map.get(":+1-1F3FB:"));
    assert_eq!(
        map.get(":woman-man-holding-hands:"),
        Some(r"\U0001F469\U0000200D\U0001F91D\U0000200D\U0001F468")
    );
    assert_eq!(
        map.get(":female-raising-hand:"),
        Some(r"\U0001F64B\U0000200D\U00002640\U0000FE0F")
    );
    assert!(!map.contains_key(":person-with-hair:"));
}

#[test]
fn test_missing_source_is_fatal() {
    let missing = corpus().join("does-not-exist.txt");
    let err = build(&[corpus().join("smileys.txt"), missing]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Io);

    let err = build_dir(&corpus().join("nowhere")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Io);
}

#[test]
fn test_json_table_round_trip() {
    let report = build_dir(&corpus()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emoji_map.json");
    write_to_path(&report.map, &path, Format::Json, DEFAULT_TABLE_NAME).unwrap();

    let loaded = Table::from_json_path(&path).unwrap();
    assert_eq!(loaded.len(), report.len());
    for (k, v) in report.map.iter() {
        assert_eq!(loaded.resolve(k), v);
    }
    assert_eq!(
        loaded.substitute("hi :wave-1F3FD: and :unknown:"),
        r"hi \U0001F44B\U0001F3FD and :unknown:"
    );
}

#[test]
fn test_rust_table_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.rs");
    let second = dir.path().join("second.rs");
    for path in [&first, &second] {
        let report = build_dir(&corpus()).unwrap();
        write_to_path(&report.map, path, Format::Rust, "EMOJI").unwrap();
    }
    let first = std::fs::read_to_string(first).unwrap();
    let second = std::fs::read_to_string(second).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("pub const EMOJI: &[(&str, &str)] = &[\n"));
    assert!(first.contains("    (\":woman:\", \"\\\\U0001F469\"),\n"));

    let keys = first
        .lines()
        .filter_map(|l| l.trim().strip_prefix("(\""))
        .map(|l| l.split('"').next().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(keys.len(), 47);
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}
