use crate::content_selection::domain::{has_placeholder, Catalog, CopyPools, SiteProfile, Vertical};
use crate::content_selection::services::ContentSelector;
use crate::ports::outbound::{CatalogReader, CopyPoolReader};
use crate::shared::error::PseoError;
use crate::shared::Result;

/// The loaded, validated data a process serves pages from
///
/// Built once at startup; use cases borrow it for their whole lifetime.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    catalog: Catalog,
    pools: CopyPools,
    site: SiteProfile,
}

impl ContentLibrary {
    pub fn new(catalog: Catalog, pools: CopyPools, site: SiteProfile) -> Self {
        Self {
            catalog,
            pools,
            site,
        }
    }

    /// Loads catalog and copy pools through the reader ports
    ///
    /// # Errors
    /// Propagates any reader error. Fails if the fallback vertical is not a
    /// catalog vertical, or if the site brand or domain contains `[SOURCE]`
    /// or `[DEST]`.
    pub fn load<C, P>(
        catalog_reader: &C,
        pool_reader: &P,
        fallback_vertical: &str,
        site: SiteProfile,
    ) -> Result<Self>
    where
        C: CatalogReader + ?Sized,
        P: CopyPoolReader + ?Sized,
    {
        if has_placeholder(site.brand()) || has_placeholder(site.domain()) {
            return Err(PseoError::Validation {
                message: format!(
                    "site brand '{}' and domain '{}' must not contain placeholders",
                    site.brand(),
                    site.domain()
                ),
            }
            .into());
        }
        let catalog = catalog_reader.read_catalog()?;
        if catalog.vertical(fallback_vertical).is_none() {
            return Err(PseoError::InvalidCatalog {
                reason: format!(
                    "fallback vertical '{}' is not listed in the catalog",
                    fallback_vertical
                ),
            }
            .into());
        }
        let pools = pool_reader.read_copy_pools(fallback_vertical)?;

        for vertical in catalog.verticals() {
            if !pools.has_dedicated_pools(&vertical.id) {
                tracing::debug!(
                    vertical = %vertical.id,
                    fallback = pools.fallback_vertical(),
                    "no dedicated copy pools; using fallback"
                );
            }
        }
        tracing::debug!(
            verticals = catalog.verticals().len(),
            domain = site.domain(),
            "content library loaded"
        );

        Ok(Self::new(catalog, pools, site))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selector(&self) -> ContentSelector<'_> {
        ContentSelector::new(&self.catalog, &self.pools, &self.site)
    }

    /// Looks up a vertical by id or slug
    ///
    /// # Errors
    /// `PseoError::VerticalNotFound` for an unknown token
    pub fn vertical(&self, token: &str) -> Result<&Vertical> {
        self.catalog.vertical(token).ok_or_else(|| {
            PseoError::VerticalNotFound {
                vertical: token.to_string(),
            }
            .into()
        })
    }
}
