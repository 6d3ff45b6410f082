use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

use crate::types::EntryId;

static NO_ENTRIES: BTreeSet<EntryId> = BTreeSet::new();

/// Lowercase a word so indexing and querying agree on normalization.
pub(crate) fn fold_word(word: &str) -> String {
    word.to_lowercase()
}

/// Immutable inverted index over the tag vocabulary.
///
/// A single ordered map backs both halves of the contract: the key range
/// supplies prefix enumeration over every indexed word, and each key maps to
/// the set of [`EntryId`]s whose tags contain that word. Because both views
/// share the one structure they can never disagree. The index is never
/// patched in place; a catalog change rebuilds a fresh index which replaces
/// this one as a unit.
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    words: BTreeMap<String, BTreeSet<EntryId>>,
}

impl TagIndex {
    /// Construct an index from a fully-populated word map.
    ///
    /// The map is expected to hold already-folded words; [`crate::rebuild`]
    /// takes care of that when walking a catalog.
    #[must_use]
    pub fn build(words: BTreeMap<String, BTreeSet<EntryId>>) -> Self {
        Self { words }
    }

    /// Enumerate every indexed word starting with `prefix`, in lexicographic
    /// order.
    ///
    /// The prefix must already be folded the way the index folds words. An
    /// empty prefix matches the whole vocabulary.
    pub fn prefix_match<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.words
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(word, _)| word.starts_with(prefix))
            .map(|(word, _)| word.as_str())
    }

    /// Look up the identifiers tagged with exactly `word`.
    ///
    /// Returns the empty set for words absent from the vocabulary; prefix
    /// expansion happens one level up via [`prefix_match`](Self::prefix_match).
    #[must_use]
    pub fn entries_for(&self, word: &str) -> &BTreeSet<EntryId> {
        self.words.get(word).unwrap_or(&NO_ENTRIES)
    }

    /// Iterate over the indexed vocabulary in lexicographic order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    /// Number of distinct words in the vocabulary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
