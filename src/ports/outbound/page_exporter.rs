use crate::shared::Result;
use std::path::PathBuf;

/// PageExporter port for writing one file per page during a batch export
pub trait PageExporter {
    /// Writes `content` under `file_name` and returns the path written
    ///
    /// # Errors
    /// Returns an error if the file cannot be written or if `file_name`
    /// would escape the export destination
    fn export(&self, file_name: &str, content: &str) -> Result<PathBuf>;
}
