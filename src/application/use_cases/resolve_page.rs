use crate::application::dto::ResolvePageRequest;
use crate::application::ContentLibrary;
use crate::content_selection::domain::ContentModel;
use crate::shared::error::PseoError;
use crate::shared::Result;

/// ResolvePageUseCase - builds the content model of one integration page
pub struct ResolvePageUseCase<'l> {
    library: &'l ContentLibrary,
}

impl<'l> ResolvePageUseCase<'l> {
    pub fn new(library: &'l ContentLibrary) -> Self {
        Self { library }
    }

    /// # Errors
    /// - `PseoError::VerticalNotFound` when the vertical token is unknown
    /// - `PseoError::PageNotFound` when the slug names no valid pair
    pub fn execute(&self, request: &ResolvePageRequest) -> Result<ContentModel> {
        let vertical = self.library.vertical(&request.vertical)?;

        let page = self
            .library
            .selector()
            .resolve(&request.vertical, &request.slug)
            .map_err(|_| PseoError::PageNotFound {
                vertical: vertical.id.clone(),
                slug: request.slug.clone(),
            })?;

        tracing::debug!(vertical = %page.vertical, slug = %page.slug, "resolved page");
        Ok(page)
    }
}
