use crate::content_selection::domain::ContentModel;
use crate::shared::Result;

/// PageFormatter port for rendering a resolved page
///
/// This port abstracts the output format (JSON, Markdown) a content model
/// is serialized to before it is presented or exported.
pub trait PageFormatter {
    /// Renders one page
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, page: &ContentModel) -> Result<String>;

    /// File extension used when pages are exported one file per page
    fn file_extension(&self) -> &'static str;
}
