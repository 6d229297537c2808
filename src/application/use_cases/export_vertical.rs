use crate::application::dto::{ExportRequest, ExportSummary};
use crate::application::ContentLibrary;
use crate::ports::outbound::{PageExporter, PageFormatter, ProgressReporter};
use crate::shared::error::PseoError;
use crate::shared::Result;

/// ExportVerticalUseCase - renders every page of a vertical, one file per page
///
/// # Type Parameters
/// * `E` - PageExporter implementation
/// * `PR` - ProgressReporter implementation
pub struct ExportVerticalUseCase<'l, E, PR> {
    library: &'l ContentLibrary,
    formatter: Box<dyn PageFormatter>,
    exporter: E,
    progress_reporter: PR,
}

impl<'l, E, PR> ExportVerticalUseCase<'l, E, PR>
where
    E: PageExporter,
    PR: ProgressReporter,
{
    pub fn new(
        library: &'l ContentLibrary,
        formatter: Box<dyn PageFormatter>,
        exporter: E,
        progress_reporter: PR,
    ) -> Self {
        Self {
            library,
            formatter,
            exporter,
            progress_reporter,
        }
    }

    /// Writes `<slug>.<ext>` for every enumerated slug of the vertical
    ///
    /// Stops at the first page that fails to render or write.
    ///
    /// # Errors
    /// - `PseoError::VerticalNotFound` when the vertical token is unknown
    /// - any formatter or exporter error
    pub fn execute(&self, request: &ExportRequest) -> Result<ExportSummary> {
        let vertical = self.library.vertical(&request.vertical)?;
        let selector = self.library.selector();
        let slugs = selector.list_slugs(&vertical.id).unwrap_or_default();

        self.progress_reporter.report(&format!(
            "📦 Exporting {} page(s) for {}",
            slugs.len(),
            vertical.name
        ));

        let mut files = Vec::with_capacity(slugs.len());
        for (index, slug) in slugs.iter().enumerate() {
            let page = selector
                .resolve(&vertical.id, slug)
                .map_err(|_| PseoError::PageNotFound {
                    vertical: vertical.id.clone(),
                    slug: slug.clone(),
                })?;
            let content = self.formatter.format(&page)?;
            let file_name = format!("{}.{}", slug, self.formatter.file_extension());

            match self.exporter.export(&file_name, &content) {
                Ok(path) => files.push(path),
                Err(e) => {
                    self.progress_reporter
                        .report_error(&format!("⚠️  Failed to export {}", file_name));
                    return Err(e);
                }
            }
            self.progress_reporter
                .report_progress(index + 1, slugs.len(), Some(slug));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Exported {} page(s) for {}",
            files.len(),
            vertical.name
        ));

        Ok(ExportSummary {
            vertical: vertical.id.clone(),
            files,
        })
    }
}
