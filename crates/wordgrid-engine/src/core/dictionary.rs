use std::io::{self, BufRead};

use crate::core::letter::Cell;

/// Immutable set of valid words, bucketed by length.
///
/// Loaded once and shared read-only for the process lifetime. Input is
/// filtered to non-empty, all-lowercase-ASCII words; anything else (proper
/// nouns, hyphenations, blank lines) is silently dropped.
///
/// Lookups are total functions: an absent word or unmatched slice simply
/// yields nothing, never an error.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    by_len: Vec<Vec<Box<str>>>,
    word_count: usize,
}

impl Dictionary {
    pub fn new(words: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let mut by_len: Vec<Vec<Box<str>>> = Vec::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
                continue;
            }
            if word.len() >= by_len.len() {
                by_len.resize_with(word.len() + 1, Vec::new);
            }
            by_len[word.len()].push(word.into());
        }
        for bucket in &mut by_len {
            bucket.sort_unstable();
            bucket.dedup();
        }
        let word_count = by_len.iter().map(Vec::len).sum();
        Self { by_len, word_count }
    }

    /// Reads one word per line.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
        Ok(Self::new(lines))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.by_len
            .get(word.len())
            .is_some_and(|bucket| bucket.binary_search_by(|w| w.as_ref().cmp(word)).is_ok())
    }

    #[must_use]
    pub fn words_of_len(&self, len: usize) -> &[Box<str>] {
        self.by_len.get(len).map_or(&[], Vec::as_slice)
    }

    /// Exact-match mode: all words of the slice's length agreeing with every
    /// filled position. Holes match any single letter; length is fixed (no
    /// insertion or deletion matching).
    pub fn matching_words<'a>(&'a self, slice: &'a [Cell]) -> impl Iterator<Item = &'a str> {
        self.words_of_len(slice.len())
            .iter()
            .map(Box::as_ref)
            .filter(move |word| Self::slice_matches(word, slice))
    }

    fn slice_matches(word: &str, slice: &[Cell]) -> bool {
        debug_assert_eq!(word.len(), slice.len());
        word.bytes()
            .zip(slice)
            .all(|(b, cell)| cell.is_none_or(|letter| letter.as_char() == char::from(b)))
    }
}
