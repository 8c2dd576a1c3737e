//! Invariants every result must satisfy, whatever the input.

use crate::common::assert_valid_alignment;
use flx::testing::is_subsequence;
use flx::{
    full_match_applies, score, score_with, CharacterIndex, Heatmap, Prepared, ScoreOptions,
    FULL_MATCH_BONUS,
};
use proptest::prelude::*;

/// Includes titlecase (`ǅ`), a char whose lowercase is two chars (`İ`) and
/// one whose uppercase is rare (`ẞ`/`ß`).
fn candidate_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-ZäüǅǆǄİẞß0-9 /._:-]{0,24}").unwrap()
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zäüǅǆǄİẞß/._]{1,5}").unwrap()
}

proptest! {
    /// Indices are in bounds, strictly increasing, one per query char, and
    /// each lands on a char equal to its query char ignoring case.
    #[test]
    fn prop_alignment_is_valid(
        candidate in candidate_strategy(),
        query in query_strategy(),
    ) {
        if let Some(m) = score(&candidate, &query) {
            assert_valid_alignment(&m, &candidate, &query);
        }
    }

    /// A match exists exactly when the folded query is a subsequence of the
    /// folded candidate, whatever the letter's case category.
    #[test]
    fn prop_match_iff_folded_subsequence(
        candidate in candidate_strategy(),
        query in query_strategy(),
    ) {
        let expected = !candidate.is_empty() && is_subsequence(&candidate, &query);
        prop_assert_eq!(score(&candidate, &query).is_some(), expected);
    }

    #[test]
    fn prop_deterministic(
        candidate in candidate_strategy(),
        query in query_strategy(),
    ) {
        prop_assert_eq!(score(&candidate, &query), score(&candidate, &query));
    }

    #[test]
    fn prop_prepared_equals_one_shot(
        candidate in candidate_strategy(),
        query in query_strategy(),
    ) {
        let prepared = Prepared::with_options(&candidate, ScoreOptions::path());
        prop_assert_eq!(
            prepared.score(&query),
            score_with(&candidate, &query, ScoreOptions::path())
        );
    }

    /// The bonus is applied exactly when its conditions hold.
    #[test]
    fn prop_full_match_bonus_conditions(
        candidate in candidate_strategy(),
        query in query_strategy(),
    ) {
        let with = score(&candidate, &query);
        let without = score_with(
            &candidate,
            &query,
            ScoreOptions::default().with_full_match_bonus(false),
        );
        prop_assert_eq!(with.is_some(), without.is_some());
        if let (Some(with), Some(without)) = (with, without) {
            prop_assert_eq!(&with.indices, &without.indices);
            let applies = full_match_applies(
                query.chars().count(),
                with.indices.len(),
                candidate.chars().count(),
            );
            let bonus = if applies { FULL_MATCH_BONUS } else { 0 };
            prop_assert_eq!(with.score, without.score + bonus);
        }
    }

    #[test]
    fn prop_heatmap_one_value_per_char(
        candidate in candidate_strategy(),
        separator in prop::option::of(prop::sample::select(vec!['/', '.', ' '])),
    ) {
        let chars: Vec<char> = candidate.chars().collect();
        prop_assert_eq!(Heatmap::generate(&chars, separator).len(), chars.len());
    }

    #[test]
    fn prop_index_lists_sorted_and_complete(candidate in candidate_strategy()) {
        let chars: Vec<char> = candidate.chars().collect();
        let index = CharacterIndex::new(&chars);
        for (ch, positions) in index.iter() {
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(positions.iter().all(|&p| p < chars.len()));
            prop_assert!(positions
                .iter()
                .all(|&p| chars[p] == ch || chars[p].to_lowercase().eq(ch.to_lowercase())));
        }
        for (i, &c) in chars.iter().enumerate() {
            prop_assert!(index.positions(c).contains(&i));
        }
    }

    /// Byte ranges slice out exactly the matched chars.
    #[test]
    fn prop_byte_ranges_slice_matched_chars(
        candidate in candidate_strategy(),
        query in query_strategy(),
    ) {
        if let Some(m) = score(&candidate, &query) {
            let chars: Vec<char> = candidate.chars().collect();
            let ranges = m.byte_ranges(&candidate);
            prop_assert_eq!(ranges.len(), m.indices.len());
            for (range, &i) in ranges.iter().zip(&m.indices) {
                let slice = &candidate[range.clone()];
                prop_assert_eq!(slice.chars().next(), Some(chars[i]));
            }
        }
    }
}
