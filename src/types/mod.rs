mod catalog;
mod entry;

pub use catalog::{Catalog, CatalogEntry, EntryVariant};
pub use entry::EntryId;
