use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::error::CatalogError;
use crate::index::{TagIndex, fold_word};
use crate::types::{Catalog, EntryId};

/// Build a fresh [`TagIndex`] from the catalog.
///
/// Every tag on every variant of every entry is split on whitespace and each
/// word lowercased before being recorded against the variant's [`EntryId`].
/// Entries with no variants, variants with no tags, and whitespace-only tag
/// strings all simply contribute nothing.
///
/// # Errors
///
/// Returns the first error the catalog reports while iterating. The rebuild
/// is all-or-nothing: on failure no index is produced, so the caller's
/// previously active index remains in use.
pub fn rebuild(catalog: &dyn Catalog) -> Result<TagIndex, CatalogError> {
    info!("rebuilding tag search index");

    let mut words: BTreeMap<String, BTreeSet<EntryId>> = BTreeMap::new();
    for entry in catalog.entries() {
        let entry = entry?;
        for variant in &entry.variants {
            let id = EntryId::new(entry.id.clone(), variant.index);
            for tag in &variant.tags {
                for word in tag.split_whitespace() {
                    words.entry(fold_word(word)).or_default().insert(id.clone());
                }
            }
        }
    }

    let index = TagIndex::build(words);
    debug!(words = index.len(), "tag search index rebuilt");
    Ok(index)
}
