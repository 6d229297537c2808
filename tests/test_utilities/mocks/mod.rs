/// Mock implementations for testing
mod mock_data_source;
mod mock_page_exporter;
mod mock_progress_reporter;

pub use mock_data_source::{MockCatalogReader, MockCopyPoolReader};
pub use mock_page_exporter::MockPageExporter;
pub use mock_progress_reporter::MockProgressReporter;
