/// ResolvePageRequest - one integration page, addressed the way its URL is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvePageRequest {
    /// Vertical id or slug
    pub vertical: String,
    /// `<source>-to-<destination>` pair slug
    pub slug: String,
}

impl ResolvePageRequest {
    pub fn new(vertical: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            vertical: vertical.into(),
            slug: slug.into(),
        }
    }
}

/// ExportRequest - every page of one vertical
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Vertical id or slug
    pub vertical: String,
}

impl ExportRequest {
    pub fn new(vertical: impl Into<String>) -> Self {
        Self {
            vertical: vertical.into(),
        }
    }
}
