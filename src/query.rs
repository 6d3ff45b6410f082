use std::collections::BTreeSet;

use crate::index::{TagIndex, fold_word};
use crate::types::EntryId;

/// Evaluate a raw query string against the index.
///
/// Returns `None`, the no-filter sentinel, when the text splits into zero
/// tokens; callers show everything in that case. Otherwise each token is
/// folded, expanded into every indexed word it is a prefix of, and the id
/// sets of those words are unioned into the result. `Some` of an empty set
/// means no entry matched, which is distinct from the sentinel.
///
/// The union is OR across tokens and OR across the words each token
/// prefix-matches: an id is included if any token prefix-matches any word
/// tagging it. Tokens only ever match words already in the vocabulary, so a
/// mistyped token contributes an empty set rather than failing.
#[must_use]
pub fn evaluate(index: &TagIndex, query_text: &str) -> Option<BTreeSet<EntryId>> {
    let mut tokens = query_text.split_whitespace().peekable();
    tokens.peek()?;

    let mut found = BTreeSet::new();
    for token in tokens {
        let token = fold_word(token);
        for word in index.prefix_match(&token) {
            found.extend(index.entries_for(word).iter().cloned());
        }
    }
    Some(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::rebuild;
    use crate::error::CatalogError;
    use crate::types::{Catalog, CatalogEntry};

    struct StaticCatalog {
        entries: Vec<CatalogEntry>,
    }

    impl Catalog for StaticCatalog {
        fn entries(&self) -> Box<dyn Iterator<Item = Result<CatalogEntry, CatalogError>> + '_> {
            Box::new(self.entries.iter().cloned().map(Ok))
        }
    }

    fn sample_index() -> TagIndex {
        let catalog = StaticCatalog {
            entries: vec![
                CatalogEntry::new("A").with_variant(0, ["red door"]),
                CatalogEntry::new("B").with_variant(0, ["blue door"]),
                CatalogEntry::new("C").with_variant(1, ["red wall"]),
            ],
        };
        rebuild(&catalog).expect("rebuild succeeds")
    }

    fn ids(pairs: &[(&str, usize)]) -> BTreeSet<EntryId> {
        pairs
            .iter()
            .map(|(entry, variant)| EntryId::new(*entry, *variant))
            .collect()
    }

    #[test]
    fn empty_and_whitespace_queries_return_the_sentinel() {
        let index = sample_index();
        assert_eq!(evaluate(&index, ""), None);
        assert_eq!(evaluate(&index, "   "), None);
        assert_eq!(evaluate(&index, "\t\n"), None);
    }

    #[test]
    fn single_token_unions_every_tagged_variant() {
        let index = sample_index();
        assert_eq!(
            evaluate(&index, "red"),
            Some(ids(&[("A", 0), ("C", 1)])),
        );
    }

    #[test]
    fn multiple_tokens_union_their_results() {
        let index = sample_index();
        assert_eq!(
            evaluate(&index, "red blue"),
            Some(ids(&[("A", 0), ("B", 0), ("C", 1)])),
        );
    }

    #[test]
    fn tokens_match_by_prefix() {
        let index = sample_index();
        assert_eq!(
            evaluate(&index, "doo"),
            Some(ids(&[("A", 0), ("B", 0)])),
        );
    }

    #[test]
    fn unknown_token_yields_an_empty_set_not_the_sentinel() {
        let index = sample_index();
        assert_eq!(evaluate(&index, "xyz"), Some(BTreeSet::new()));
    }

    #[test]
    fn unknown_token_adds_nothing_to_the_union() {
        let index = sample_index();
        assert_eq!(evaluate(&index, "xyz wall"), Some(ids(&[("C", 1)])));
    }

    #[test]
    fn query_case_is_ignored() {
        let index = sample_index();
        assert_eq!(evaluate(&index, "RED"), evaluate(&index, "red"));
        assert_eq!(evaluate(&index, "Doo"), evaluate(&index, "doo"));
    }

    #[test]
    fn evaluation_is_pure_against_one_snapshot() {
        let index = sample_index();
        let first = evaluate(&index, "red door");
        let second = evaluate(&index, "red door");
        assert_eq!(first, second);
    }
}
