/// Identifies one selectable variant of a catalog entry.
///
/// Uniqueness is per `(entry, variant)` pair: an entry exposing several
/// variants contributes one identifier per variant, each independently
/// tagged. The pair is opaque to the search core; it is produced by the
/// catalog and handed back unchanged through query results.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct EntryId {
    pub entry: String,
    pub variant: usize,
}

impl EntryId {
    /// Create a new [`EntryId`] for the given entry and variant index.
    #[must_use]
    pub fn new(entry: impl Into<String>, variant: usize) -> Self {
        Self {
            entry: entry.into(),
            variant,
        }
    }
}
