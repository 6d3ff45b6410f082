use crate::error::CatalogError;

/// Tags attached to a single variant of a catalog entry.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct EntryVariant {
    /// Position of the variant within its entry, as exposed by the catalog.
    pub index: usize,
    /// Free-text tags attached to this variant. May be empty.
    pub tags: Vec<String>,
}

impl EntryVariant {
    /// Create a variant row with the provided `index` and `tags`.
    #[must_use]
    pub fn new(index: usize, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            index,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// One catalog entry together with its taggable variants.
///
/// Entries with zero variants, or variants with zero tags, are valid; they
/// simply contribute nothing to the index.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CatalogEntry {
    /// Stable identifier of the entry within the catalog.
    pub id: String,
    /// Ordered variants the entry exposes.
    pub variants: Vec<EntryVariant>,
}

impl CatalogEntry {
    /// Create an entry row with no variants.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            variants: Vec::new(),
        }
    }

    /// Append a variant carrying the given tags.
    #[must_use]
    pub fn with_variant(
        mut self,
        index: usize,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.variants.push(EntryVariant::new(index, tags));
        self
    }
}

/// Read-only view of the external catalog the index is built from.
///
/// The search core only ever reads this interface; it never mutates the
/// catalog. Implementations stream entries and may fail mid-iteration, in
/// which case the rebuild aborts and the previously active index stays in
/// use.
pub trait Catalog {
    /// Iterate over every entry in the catalog.
    fn entries(&self) -> Box<dyn Iterator<Item = Result<CatalogEntry, CatalogError>> + '_>;
}
