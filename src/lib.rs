//! Typeahead tag search for catalog browsers.
//!
//! The crate indexes free-text tags attached to catalog entry variants and
//! answers incremental, multi-word prefix queries fast enough to re-run on
//! every keystroke. The root module re-exports the handful of types an
//! embedding UI needs so callers can wire a search box without digging
//! through the module hierarchy.
//!
//! The moving parts, leaves first:
//!
//! - [`TagIndex`]: immutable word to entry-set index with prefix enumeration.
//! - [`rebuild`]: walks a [`Catalog`] and produces a fresh index.
//! - [`evaluate`]: resolves a raw query string to a visible entry set.
//! - [`SearchController`]: owns the active index and forwards results to the
//!   registered visibility callback.

pub mod builder;
pub mod controller;
pub mod error;
pub mod index;
pub mod query;
pub mod types;

pub use builder::rebuild;
pub use controller::{SearchController, SelectionGuard, SelectionSpan, VisibilityCallback};
pub use error::CatalogError;
pub use index::TagIndex;
pub use query::evaluate;
pub use types::{Catalog, CatalogEntry, EntryId, EntryVariant};
