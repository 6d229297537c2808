use crate::content_selection::domain::CopyPools;
use crate::shared::Result;

/// CopyPoolReader port for loading the static copy library
pub trait CopyPoolReader {
    /// Loads the copy pools, using `fallback_vertical` for any axis a
    /// vertical does not define
    ///
    /// # Errors
    /// Returns an error if the pool file cannot be read or parsed, or if the
    /// fallback vertical does not fill every axis
    fn read_copy_pools(&self, fallback_vertical: &str) -> Result<CopyPools>;
}
