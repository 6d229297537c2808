use super::documents::{
    parse_copy_pools, parse_software_systems, parse_verticals, COPY_POOLS_FILE,
    SOFTWARE_SYSTEMS_FILE, VERTICALS_FILE,
};
use crate::content_selection::domain::{Catalog, CopyPools};
use crate::ports::outbound::{CatalogReader, CopyPoolReader};
use crate::shared::Result;
use std::path::{Path, PathBuf};

const VERTICALS_JSON: &str = include_str!("../../../../data/verticals.json");
const SOFTWARE_SYSTEMS_JSON: &str = include_str!("../../../../data/software-systems.json");
const COPY_POOLS_JSON: &str = include_str!("../../../../data/copy-pools.json");

/// The default data set, compiled into the binary
///
/// Used whenever no data directory is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDataSource;

impl EmbeddedDataSource {
    pub fn new() -> Self {
        Self
    }

    fn origin(file_name: &str) -> PathBuf {
        Path::new("<embedded>").join(file_name)
    }
}

impl CatalogReader for EmbeddedDataSource {
    fn read_catalog(&self) -> Result<Catalog> {
        let verticals = parse_verticals(VERTICALS_JSON, &Self::origin(VERTICALS_FILE))?;
        let systems = parse_software_systems(
            SOFTWARE_SYSTEMS_JSON,
            &Self::origin(SOFTWARE_SYSTEMS_FILE),
        )?;
        Catalog::new(verticals, systems)
    }
}

impl CopyPoolReader for EmbeddedDataSource {
    fn read_copy_pools(&self, fallback_vertical: &str) -> Result<CopyPools> {
        let pools = parse_copy_pools(COPY_POOLS_JSON, &Self::origin(COPY_POOLS_FILE))?;
        CopyPools::new(fallback_vertical, pools)
    }
}
