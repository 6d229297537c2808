//! pseo-content - deterministic content selection for programmatic-SEO pages
//!
//! Given a vertical and an integration slug (`<source>-to-<destination>`),
//! this library picks copy from static pools with a stable hash, fills the
//! `[SOURCE]` / `[DEST]` placeholders and returns a fully resolved content
//! model. The same request always produces the same page.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`content_selection`): catalog, copy pools, the selector
//! - **Application Layer** (`application`): use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use pseo_content::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let data = EmbeddedDataSource::new();
//! let library = ContentLibrary::load(&data, &data, "accountants", SiteProfile::default())?;
//!
//! let page = ResolvePageUseCase::new(&library)
//!     .execute(&ResolvePageRequest::new("accountants", "quickbooks-to-netsuite"))?;
//! assert_eq!(page.h1, "QuickBooks to NetSuite Document Normalization");
//!
//! let json = JsonFormatter::new().format(&page)?;
//! assert!(json.contains("\"canonicalUrl\""));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod content_selection;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::dataset::EmbeddedDataSource;
    pub use crate::adapters::outbound::filesystem::{
        DataDirectoryReader, DirectoryExporter, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        ExportRequest, ExportSummary, OutputFormat, ResolvePageRequest, VerticalSummary,
    };
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::{
        ExportVerticalUseCase, ListPagesUseCase, ListVerticalsUseCase, ResolvePageUseCase,
    };
    pub use crate::application::ContentLibrary;
    pub use crate::content_selection::domain::{
        Catalog, ContentModel, CopyPools, PageLink, PoolSet, SiteProfile, SoftwareSystem,
        Vertical, VerticalStatus, VerticalSystems,
    };
    pub use crate::content_selection::services::{ContentSelector, NotFound};
    pub use crate::ports::outbound::{
        CatalogReader, CopyPoolReader, OutputPresenter, PageExporter, PageFormatter,
        ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, PseoError};
    pub use crate::shared::Result;
}
