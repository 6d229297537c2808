/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to load data and to emit pages (file system, stdout, console).
pub mod catalog_reader;
pub mod copy_pool_reader;
pub mod output_presenter;
pub mod page_exporter;
pub mod page_formatter;
pub mod progress_reporter;

pub use catalog_reader::CatalogReader;
pub use copy_pool_reader::CopyPoolReader;
pub use output_presenter::OutputPresenter;
pub use page_exporter::PageExporter;
pub use page_formatter::PageFormatter;
pub use progress_reporter::ProgressReporter;
