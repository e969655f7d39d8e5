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

//! Expansion of templated definition lines.
//!
//! A definition line may carry placeholder tokens standing for a family of
//! variants:
//!
//! ```text
//! 1F9D1;person-{GENDER}
//! {MAN/WOMAN}-200D-1F680;{M/W}-astronaut
//! 1F44B{SKIN};wave{SKIN}
//! ```
//!
//! [`expand`] rewrites such a line into every concrete line it denotes. Each
//! token is replaced by each of its [`Placeholder::replacements`] in turn and
//! the result is expanded again until no token is left. Choosing a gendered
//! literal forbids the opposite gender's literals for the rest of that
//! branch, so `{MAN/WOMAN}` together with `{M/W}` yields `1F468` with `man`
//! and `1F469` with `woman`, never a mix of the two.

use indexmap::IndexSet;

/// A template marker recognised inside definition lines.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Placeholder {
    /// `{GENDER}`: the words `male` and `female`.
    Gender,
    /// `{M/W}`: the words `man` and `woman`.
    ManWomanWord,
    /// `{MAN/WOMAN}`: the code points of MAN and WOMAN.
    ManWoman,
    /// `{MALE/FEMALE}`: the MALE SIGN and FEMALE SIGN emoji presentation
    /// sequences.
    MaleFemale,
    /// `{SKIN}`: no modifier, or one of the five Fitzpatrick modifiers.
    Skin,
    /// `{SKIN!}`: one of the five Fitzpatrick modifiers.
    SkinRequired,
}

const FITZPATRICK: [&str; 5] = ["-1F3FB", "-1F3FC", "-1F3FD", "-1F3FE", "-1F3FF"];
const SKIN_OPTIONAL: [&str; 6] = ["", "-1F3FB", "-1F3FC", "-1F3FD", "-1F3FE", "-1F3FF"];

const MASCULINE: [&str; 4] = ["male", "man", "1F468", "2642-FE0F"];
const FEMININE: [&str; 4] = ["female", "woman", "1F469", "2640-FE0F"];

impl Placeholder {
    /// Every placeholder, in the order they are tried on a line.
    pub const ALL: [Self; 6] = [
        Self::Gender,
        Self::ManWomanWord,
        Self::ManWoman,
        Self::MaleFemale,
        Self::Skin,
        Self::SkinRequired,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            Self::Gender => "{GENDER}",
            Self::ManWomanWord => "{M/W}",
            Self::ManWoman => "{MAN/WOMAN}",
            Self::MaleFemale => "{MALE/FEMALE}",
            Self::Skin => "{SKIN}",
            Self::SkinRequired => "{SKIN!}",
        }
    }

    pub const fn replacements(self) -> &'static [&'static str] {
        match self {
            Self::Gender => &["male", "female"],
            Self::ManWomanWord => &["man", "woman"],
            Self::ManWoman => &["1F468", "1F469"],
            Self::MaleFemale => &["2642-FE0F", "2640-FE0F"],
            Self::Skin => &SKIN_OPTIONAL,
            Self::SkinRequired => &FITZPATRICK,
        }
    }

    /// Whether `line` contains this placeholder's token.
    pub fn matches(self, line: &str) -> bool {
        line.contains(self.token())
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{}", self.token())
    }
}

/// Literals that must not be chosen after `literal` within the same
/// expansion branch. Non-gendered literals forbid nothing.
pub fn blacklist(literal: &str) -> &'static [&'static str] {
    if MASCULINE.contains(&literal) {
        &FEMININE
    } else if FEMININE.contains(&literal) {
        &MASCULINE
    } else {
        &[]
    }
}

/// Whether `line` contains `{` or `}`, i.e. needs expansion before it can be
/// parsed.
pub fn is_templated(line: &str) -> bool {
    line.contains(&['{', '}'][..])
}

/// Expand every placeholder in `line`.
///
/// A line without placeholders expands to itself. The output keeps the order
/// in which concrete lines are first produced and holds no duplicates.
pub fn expand(line: &str) -> Vec<String> {
    expand_with_blacklist(line, &[])
}

/// Like [`expand`], but replacement literals in `blacklist` are never
/// chosen.
pub fn expand_with_blacklist(line: &str, blacklist: &[&str]) -> Vec<String> {
    let ret: IndexSet<String> = expand_inner(line, blacklist).into_iter().collect();
    log::trace!("expanded `{}` into {} line(s)", line, ret.len());
    ret.into_iter().collect()
}

fn expand_inner(line: &str, forbidden: &[&str]) -> Vec<String> {
    let mut ret = vec![];

    for placeholder in Placeholder::ALL {
        if !placeholder.matches(line) {
            continue;
        }
        for &r in placeholder.replacements() {
            if forbidden.contains(&r) {
                continue;
            }
            let replacement = line.replace(placeholder.token(), r);
            let mut next_forbidden = forbidden.to_vec();
            next_forbidden.extend_from_slice(blacklist(r));
            ret.extend(expand_inner(&replacement, &next_forbidden));
        }
    }

    // No token matched, or every replacement was forbidden: the line stands as
    // is.
    if ret.is_empty() {
        ret.push(line.to_string());
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alias_field(line: &str) -> &str {
        line.split(';').nth(1).unwrap()
    }

    #[test]
    fn test_expand_plain_line() {
        assert_eq!(expand("1F600;grinning"), vec!["1F600;grinning".to_string()]);
    }

    #[test]
    fn test_expand_gender() {
        let lines = expand("1F9D1;person-{GENDER}");
        assert_eq!(lines, vec!["1F9D1;person-male", "1F9D1;person-female"]);
        assert_eq!(
            lines.iter().map(|l| alias_field(l)).collect::<Vec<_>>(),
            vec!["person-male", "person-female"]
        );
    }

    #[test]
    fn test_expand_gender_with_code_point_token() {
        assert_eq!(
            expand("1F3C3-200D-{MALE/FEMALE};{GENDER}-runner"),
            vec![
                "1F3C3-200D-2642-FE0F;male-runner",
                "1F3C3-200D-2640-FE0F;female-runner",
            ]
        );
    }

    #[test]
    fn test_expand_skin_cardinality() {
        let lines = expand("1F44B{SKIN};wave{SKIN}");
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "1F44B;wave");
        assert_eq!(lines[1], "1F44B-1F3FB;wave-1F3FB");
        assert_eq!(lines[5], "1F44B-1F3FF;wave-1F3FF");

        let lines = expand("1F91D{SKIN!};handshake{SKIN!}");
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.starts_with("1F91D-1F3F")));
        assert!(!lines.contains(&"1F91D;handshake".to_string()));
    }

    #[test]
    fn test_expand_skin_tokens_are_distinct() {
        // `{SKIN}` must not match inside `{SKIN!}`.
        assert!(!Placeholder::Skin.matches("1F91D{SKIN!}"));
        assert!(!Placeholder::SkinRequired.matches("1F91D{SKIN}"));
    }

    #[test]
    fn test_expand_blacklist_consistency() {
        let lines = expand("{MAN/WOMAN}-200D-{MALE/FEMALE};{M/W}-test");
        assert_eq!(
            lines,
            vec![
                "1F468-200D-2642-FE0F;man-test",
                "1F469-200D-2640-FE0F;woman-test",
            ]
        );
        for line in expand("1F9D1-200D-{MAN/WOMAN}-{MALE/FEMALE};{GENDER}-{M/W}") {
            assert!(
                !(line.contains("1F468") && line.contains("2640-FE0F")),
                "{}",
                line
            );
            assert!(
                !(line.contains("1F469") && line.contains("2642-FE0F")),
                "{}",
                line
            );
            assert!(!(line.contains(";male") && line.contains("-woman")), "{}", line);
        }
    }

    #[test]
    fn test_expand_couple_with_fixed_partner() {
        assert_eq!(
            expand("1F469-200D-1F91D-200D-{MAN/WOMAN};woman-{M/W}-holding-hands"),
            vec![
                "1F469-200D-1F91D-200D-1F468;woman-man-holding-hands",
                "1F469-200D-1F91D-200D-1F469;woman-woman-holding-hands",
            ]
        );
    }

    #[test]
    fn test_expand_caller_blacklist() {
        assert_eq!(
            expand_with_blacklist("1F9D1;person-{GENDER}", &["female"]),
            vec!["1F9D1;person-male"]
        );
        // Nothing left to choose from: the line is returned unexpanded.
        assert_eq!(
            expand_with_blacklist("1F9D1;person-{GENDER}", &["male", "female"]),
            vec!["1F9D1;person-{GENDER}"]
        );
    }

    #[test]
    fn test_expand_unknown_token_is_kept() {
        assert_eq!(expand("1F9D1;person-{HAIR}"), vec!["1F9D1;person-{HAIR}"]);
        assert!(is_templated("1F9D1;person-{HAIR}"));
        assert!(!is_templated("1F9D1;person"));
    }

    #[test]
    fn test_blacklist_table() {
        assert_eq!(blacklist("male"), &FEMININE);
        assert_eq!(blacklist("woman"), &MASCULINE);
        assert!(blacklist("male").contains(&"1F469"));
        assert!(blacklist("male").contains(&"2640-FE0F"));
        assert!(blacklist("female").contains(&"1F468"));
        assert!(blacklist("female").contains(&"2642-FE0F"));
        assert!(blacklist("-1F3FB").is_empty());
        assert!(blacklist("").is_empty());
    }
}
