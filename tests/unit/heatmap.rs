//! Heatmap generation over whole candidates.

use flx::heatmap::{BASELINE, BASEPATH_BONUS, LAST_CHAR_BONUS, WORD_START_BONUS};
use flx::Heatmap;

fn heat(candidate: &str, separator: Option<char>) -> Vec<i32> {
    let chars: Vec<char> = candidate.chars().collect();
    Heatmap::generate(&chars, separator).into_inner()
}

#[test]
fn test_one_value_per_char() {
    for candidate in ["", "a", "foo bar", "naïve-über", "src/scoring/mod.rs"] {
        assert_eq!(
            heat(candidate, Some('/')).len(),
            candidate.chars().count(),
            "length mismatch for {candidate:?}"
        );
    }
}

#[test]
fn test_empty_candidate() {
    assert!(heat("", None).is_empty());
}

#[test]
fn test_space_separated_words() {
    assert_eq!(heat("foo bar", None), vec![83, -3, -4, -5, 80, -6, -6]);
}

#[test]
fn test_leading_separator_is_its_own_word() {
    assert_eq!(heat("-ab", None), vec![84, 81, -4]);
}

#[test]
fn test_trailing_separators() {
    assert_eq!(heat("ab--", None), vec![84, -2, -3, -3]);
}

#[test]
fn test_path_groups() {
    assert_eq!(
        heat("foo/bar/baz.rs", Some('/')),
        vec![41, -45, -46, -47, 39, -47, -48, -49, 78, -8, -9, -10, 30, -10]
    );
}

#[test]
fn test_leading_group_separator() {
    assert_eq!(heat("/a/b", Some('/')), vec![41, 39, -47, 80]);
}

#[test]
fn test_basename_outranks_directories() {
    let map = heat("foo/bar/baz.rs", Some('/'));
    // Word starts of "foo", "bar" and "baz".
    assert!(map[8] > map[4]);
    assert!(map[8] > map[0]);
}

#[test]
fn test_single_char_is_a_word_start() {
    // One group with one word: basepath bonus minus the word count.
    let expected = BASELINE + LAST_CHAR_BONUS + (BASEPATH_BONUS - 1) + WORD_START_BONUS;
    assert_eq!(expected, 85);
    assert_eq!(heat("x", None), vec![expected]);
}

#[test]
fn test_separator_absent_means_one_group() {
    assert_eq!(heat("foo bar", Some('/')), heat("foo bar", None));
}
