/// Default public host used in canonical URLs
pub const DEFAULT_DOMAIN: &str = "docstandard.co";

/// Default brand name used in titles and descriptions
pub const DEFAULT_BRAND: &str = "DocStandard";

/// Site-wide values interpolated into derived page fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    domain: String,
    brand: String,
}

impl SiteProfile {
    pub fn new(domain: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            brand: brand.into(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Absolute URL for a site-relative path (`path` starts with `/`)
    pub fn absolute_url(&self, path: &str) -> String {
        format!("https://{}{}", self.domain, path)
    }

    /// Site root, used as the first breadcrumb
    pub fn home_url(&self) -> String {
        format!("https://{}", self.domain)
    }
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN, DEFAULT_BRAND)
    }
}
