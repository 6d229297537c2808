use crate::content_selection::domain::Catalog;
use crate::shared::Result;

/// CatalogReader port for loading verticals and their software systems
///
/// Implementations read from the data compiled into the binary or from a
/// data directory on disk. The returned catalog is already validated.
pub trait CatalogReader {
    /// Loads and validates the catalog
    ///
    /// # Errors
    /// Returns an error if:
    /// - A data file is missing or unreadable
    /// - A data file is not valid JSON of the expected shape
    /// - The catalog breaks an invariant (duplicate ids, malformed slugs, ...)
    fn read_catalog(&self) -> Result<Catalog>;
}
