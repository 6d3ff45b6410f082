use thiserror::Error;

/// Errors surfaced while reading a [`Catalog`](crate::Catalog) during an
/// index rebuild.
///
/// A failed rebuild is all-or-nothing: the previously active index stays in
/// place and remains queryable.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog failed while producing its entries.
    #[error("catalog iteration failed")]
    Iteration(#[source] anyhow::Error),
}

impl CatalogError {
    /// Wrap an underlying iteration failure reported by the catalog.
    #[must_use]
    pub fn iteration(source: impl Into<anyhow::Error>) -> Self {
        Self::Iteration(source.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn iteration_error_preserves_source() {
        let err = CatalogError::iteration(std::io::Error::other("disk gone"));
        assert_eq!(err.to_string(), "catalog iteration failed");
        let source = err.source().expect("source is attached");
        assert!(source.to_string().contains("disk gone"));
    }
}
