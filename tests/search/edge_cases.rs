//! Inputs at the edges: empty strings, non-ASCII, case, bonus limits.

use crate::common::assert_valid_alignment;
use flx::{score, score_with, try_score, CaseMatching, ScoreError, ScoreOptions};

#[test]
fn test_empty_inputs() {
    assert!(score("", "a").is_none());
    assert!(score("abc", "").is_none());
    assert!(score("", "").is_none());
    assert_eq!(try_score("", "a"), Err(ScoreError::EmptyInput));
    assert_eq!(try_score("abc", ""), Err(ScoreError::EmptyInput));
}

#[test]
fn test_not_a_subsequence() {
    assert!(score("abc", "xyz").is_none());
    assert!(score("abc", "cba").is_none());
    assert!(score("ab", "abc").is_none());
    assert_eq!(try_score("abc", "ca"), Err(ScoreError::NoAlignment));
}

#[test]
fn test_single_char_candidate() {
    let m = score("a", "a").unwrap();
    assert_eq!(m.indices, vec![0]);
    assert_eq!(m.score, 85);
}

#[test]
fn test_single_char_query_picks_hottest_position() {
    let m = score("abc-bar", "b").unwrap();
    assert_eq!(m.indices, vec![4]);
    assert_valid_alignment(&m, "abc-bar", "b");
}

#[test]
fn test_full_match_bonus_query_lengths() {
    assert_eq!(score("ab", "ab").unwrap().score, 10_143);
    assert_eq!(score("abc", "abc").unwrap().score, 10_215);
    assert_eq!(score("abcd", "abcd").unwrap().score, 10_301);
    // One char is too short, five is too long.
    assert_eq!(score("a", "a").unwrap().score, 85);
    assert_eq!(score("abcde", "abcde").unwrap().score, 401);
}

#[test]
fn test_full_match_needs_every_candidate_char() {
    assert_eq!(score("abcde", "abcd").unwrap().score, 300);
}

#[test]
fn test_full_match_ignores_case() {
    assert_eq!(score("AB", "ab").unwrap().score, 10_143);
}

#[test]
fn test_full_match_bonus_can_be_disabled() {
    let options = ScoreOptions::default().with_full_match_bonus(false);
    assert_eq!(score_with("ab", "ab", options).unwrap().score, 143);
}

#[test]
fn test_uppercase_query_is_insensitive_by_default() {
    let m = score("foobar", "FB").unwrap();
    assert_eq!(m.indices, vec![0, 3]);
}

#[test]
fn test_smart_case_requires_capitals_to_match() {
    let smart = ScoreOptions::default().with_case_matching(CaseMatching::Smart);
    assert!(score_with("foobar", "FB", smart).is_none());
    assert_eq!(score_with("FooBar", "FB", smart).unwrap().indices, vec![0, 3]);
    // Lowercase query chars still match either case.
    assert_eq!(score_with("FooBar", "fb", smart).unwrap().indices, vec![0, 3]);
}

#[test]
fn test_non_ascii_positions_are_chars() {
    let m = score("naïve-über", "nü").unwrap();
    assert_eq!(m.indices, vec![0, 6]);
    assert_eq!(m.byte_ranges("naïve-über"), vec![0..1, 7..9]);
    assert_eq!(m.score, 163);
}

#[test]
fn test_titlecase_letters_match_every_case() {
    // 'ǅ' is titlecase: not uppercase, but it lowercases to 'ǆ'
    for (candidate, query) in [("ǅx", "ǅx"), ("ǅx", "ǆx"), ("ǅx", "ǄX"), ("ǆx", "ǅX")] {
        let m = score(candidate, query)
            .unwrap_or_else(|| panic!("{query:?} should match {candidate:?}"));
        assert_eq!(m.indices, vec![0, 1]);
        assert_eq!(m.score, 10_143);
    }

    let m = score("ᾈδης", "ᾀδ").unwrap();
    assert_eq!(m.indices, vec![0, 1]);
}

#[test]
fn test_titlecase_under_smart_case() {
    let smart = ScoreOptions::default().with_case_matching(CaseMatching::Smart);
    assert_eq!(score_with("ǅx", "ǅx", smart).unwrap().indices, vec![0, 1]);
    assert_eq!(score_with("ǅx", "ǆx", smart).unwrap().indices, vec![0, 1]);
    assert!(score_with("ǆx", "ǅx", smart).is_none());
}

#[test]
fn test_long_query_against_itself() {
    let text: String = (0x4E00..0x4E00 + 10_000).filter_map(char::from_u32).collect();
    let m = score(&text, &text).unwrap();
    assert_eq!(m.indices.len(), 10_000);
    assert!(m.indices.iter().copied().eq(0..10_000));
    assert_valid_alignment(&m, &text, &text);
}

#[test]
fn test_cjk_words() {
    let m = score("日本語-テキスト", "日テ").unwrap();
    assert_eq!(m.indices, vec![0, 4]);
    assert_valid_alignment(&m, "日本語-テキスト", "日テ");
}

#[test]
fn test_separator_in_query() {
    let m = score("foo-bar", "o-b").unwrap();
    assert_valid_alignment(&m, "foo-bar", "o-b");
    assert_eq!(m.indices[1], 3);
}

#[test]
fn test_repeated_chars() {
    let candidate = "a".repeat(64);
    let m = score(&candidate, "aaaa").unwrap();
    assert_valid_alignment(&m, &candidate, "aaaa");
}

#[test]
fn test_long_candidate() {
    let candidate = format!("{}buffer-file-name", "x-".repeat(500));
    let m = score(&candidate, "bfn").unwrap();
    assert_valid_alignment(&m, &candidate, "bfn");
    assert_eq!(m.indices[0], 1000);
}
