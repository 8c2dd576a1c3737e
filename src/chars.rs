// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character classes that drive word and boundary detection.
//!
//! A "word" char is anything that is not one of the separators below. A
//! boundary is where a new word starts: at the beginning of the string, at a
//! lower-to-upper camel-case transition, or right after a separator run.
//! `None` stands for "no previous character".

/// Characters that split words. Paths, kebab-case, snake_case, `Mod::item`,
/// file extensions and plain spaces all break on one of these.
pub const WORD_SEPARATORS: [char; 7] = [' ', '-', '_', ':', '.', '/', '\\'];

/// Is `ch` part of a word (i.e. present and not a separator)?
#[inline]
pub fn is_word(ch: Option<char>) -> bool {
    match ch {
        Some(c) => !WORD_SEPARATORS.contains(&c),
        None => false,
    }
}

/// Is `ch` an uppercase word character?
#[inline]
pub fn is_capital(ch: Option<char>) -> bool {
    is_word(ch) && ch.is_some_and(char::is_uppercase)
}

/// Does a new word start at `ch` when the preceding char is `last`?
///
/// Camel-case aware: `fooBar` has a boundary at `B`, `FOO` has one only at `F`.
#[inline]
pub fn is_boundary(last: Option<char>, ch: char) -> bool {
    if last.is_none() {
        return true;
    }
    let ch = Some(ch);
    (!is_capital(last) && is_capital(ch)) || (!is_word(last) && is_word(ch))
}

/// Single-char lowercase fold.
///
/// Chars whose lowercase form expands to several chars (`'İ'`) fold to
/// themselves so that every position keeps exactly one key.
#[inline]
pub fn fold(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => ch,
    }
}
