// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use deunicode::deunicode_char;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Finder-style "standard" comparison.
///
/// Case and diacritics are ignored for the primary ordering and runs of
/// digits compare by numeric value (`Track 2` < `Track 10`). Strings that
/// are equal under those rules fall back to plain code point order, so the
/// result is a total order. Only Latin letters are folded; other scripts
/// keep their own characters and sort after Latin.
pub fn localized_standard_cmp(a: &str, b: &str) -> Ordering {
    natural_cmp(&fold(a), &fold(b)).then_with(|| a.cmp(b))
}

/// Precomputed sort key equivalent to [`localized_standard_cmp`], for use
/// with `sort_by_cached_key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollationKey {
    folded: String,
    raw: String,
}

impl CollationKey {
    pub fn new(s: &str) -> Self {
        Self {
            folded: fold(s),
            raw: s.to_string(),
        }
    }
}

impl Ord for CollationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(&self.folded, &other.folded).then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for CollationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn is_latin(c: char) -> bool {
    matches!(c, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}')
}

fn fold(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii() {
            folded.push(c.to_ascii_lowercase());
            continue;
        }
        match deunicode_char(c) {
            Some(ascii) if is_latin(c) => {
                folded.extend(ascii.chars().map(|a| a.to_ascii_lowercase()))
            }
            _ => folded.extend(c.to_lowercase()),
        }
    }
    folded
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let ordering = compare_digit_runs(&take_digits(&mut left), &take_digits(&mut right));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                if l != r {
                    return l.cmp(&r);
                }
                left.next();
                right.next();
            }
        }
    }
}
