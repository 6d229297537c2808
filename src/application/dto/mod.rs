/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod page_request;
mod summaries;

pub use output_format::OutputFormat;
pub use page_request::{ExportRequest, ResolvePageRequest};
pub use summaries::{ExportSummary, VerticalSummary};
