//! The alignment table search, driven directly.

use flx::{CharacterIndex, Heatmap, Matcher};

struct Fixture {
    index: CharacterIndex,
    heatmap: Heatmap,
    query: Vec<char>,
}

fn fixture(candidate: &str, query: &str) -> Fixture {
    let chars: Vec<char> = candidate.chars().collect();
    Fixture {
        index: CharacterIndex::new(&chars),
        heatmap: Heatmap::generate(&chars, None),
        query: query.chars().collect(),
    }
}

#[test]
fn test_single_char_query_returns_every_occurrence() {
    let f = fixture("abab", "b");
    let matcher = Matcher::new(&f.index, &f.heatmap, &f.query);
    let all = matcher.search();
    let positions: Vec<Vec<usize>> = all.iter().map(|m| m.indices.clone()).collect();
    assert_eq!(positions, vec![vec![1], vec![3]]);
}

#[test]
fn test_multi_char_query_returns_one_result() {
    let f = fixture("buffer-file-name", "bfn");
    let matcher = Matcher::new(&f.index, &f.heatmap, &f.query);
    assert_eq!(matcher.search().len(), 1);
}

#[test]
fn test_best_alignment() {
    let f = fixture("buffer-file-name", "bfn");
    let best = Matcher::new(&f.index, &f.heatmap, &f.query).best().unwrap();
    assert_eq!(best.indices, vec![0, 7, 12]);
    assert_eq!(best.score, 237);
}

#[test]
fn test_adjacent_pair_wins_over_word_start_pair() {
    let f = fixture("abab", "ab");
    let best = Matcher::new(&f.index, &f.heatmap, &f.query).best().unwrap();
    assert_eq!(best.indices, vec![0, 1]);
    assert_eq!(best.score, 142);
}

#[test]
fn test_word_start_beats_adjacency() {
    // A word start at 0 plus a gap outscores the adjacent pair at 1..=2.
    let f = fixture("aab", "ab");
    let best = Matcher::new(&f.index, &f.heatmap, &f.query).best().unwrap();
    assert_eq!(best.indices, vec![0, 2]);
    assert_eq!(best.score, 82);
}

#[test]
fn test_no_alignment() {
    let f = fixture("abc", "ca");
    assert!(Matcher::new(&f.index, &f.heatmap, &f.query).best().is_none());

    let f = fixture("abc", "");
    assert!(Matcher::new(&f.index, &f.heatmap, &f.query).best().is_none());
}

#[test]
fn test_repeated_search_is_stable() {
    let f = fixture("aaaaaaaaaaaaaaaaaaaa", "aaaaa");
    let matcher = Matcher::new(&f.index, &f.heatmap, &f.query);
    let first = matcher.best().unwrap();
    assert_eq!(first.indices, vec![0, 1, 2, 3, 4]);
    assert_eq!(matcher.best(), Some(first));
}

#[test]
fn test_long_distinct_query_against_itself() {
    let text: String = (0x4E00..0x4E00 + 10_000).filter_map(char::from_u32).collect();
    let f = fixture(&text, &text);
    let best = Matcher::new(&f.index, &f.heatmap, &f.query).best().unwrap();
    assert_eq!(best.indices, (0..10_000).collect::<Vec<_>>());
}
