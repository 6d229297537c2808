/// Use cases - one per CLI command
mod export_vertical;
mod list_pages;
mod list_verticals;
mod resolve_page;

pub use export_vertical::ExportVerticalUseCase;
pub use list_pages::ListPagesUseCase;
pub use list_verticals::ListVerticalsUseCase;
pub use resolve_page::ResolvePageUseCase;
