use crate::application::ContentLibrary;
use crate::shared::Result;

/// ListPagesUseCase - every slug a vertical publishes, for static pre-rendering
pub struct ListPagesUseCase<'l> {
    library: &'l ContentLibrary,
}

impl<'l> ListPagesUseCase<'l> {
    pub fn new(library: &'l ContentLibrary) -> Self {
        Self { library }
    }

    /// # Errors
    /// `PseoError::VerticalNotFound` when the vertical token is unknown
    pub fn execute(&self, vertical: &str) -> Result<Vec<String>> {
        let vertical = self.library.vertical(vertical)?;
        let slugs = self
            .library
            .selector()
            .list_slugs(&vertical.id)
            .unwrap_or_default();
        tracing::debug!(vertical = %vertical.id, pages = slugs.len(), "enumerated pages");
        Ok(slugs)
    }

    /// Newline-terminated slug list
    pub fn render(slugs: &[String]) -> String {
        slugs.iter().map(|slug| format!("{}\n", slug)).collect()
    }
}
