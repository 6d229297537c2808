use crate::adapters::outbound::dataset::{
    parse_copy_pools, parse_software_systems, parse_verticals, COPY_POOLS_FILE,
    SOFTWARE_SYSTEMS_FILE, VERTICALS_FILE,
};
use crate::content_selection::domain::{Catalog, CopyPools};
use crate::ports::outbound::{CatalogReader, CopyPoolReader};
use crate::shared::error::PseoError;
use crate::shared::security::{validate_data_file, MAX_DATA_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// DataDirectoryReader adapter for a data set kept on disk
///
/// The directory must hold `verticals.json`, `software-systems.json` and
/// `copy-pools.json`, laid out like the data compiled into the binary.
pub struct DataDirectoryReader {
    data_dir: PathBuf,
}

impl DataDirectoryReader {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Safely reads one data file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn read_data_file(&self, file_name: &str) -> Result<(PathBuf, String)> {
        let path = self.data_dir.join(file_name);

        if !path.exists() {
            return Err(PseoError::DataFileNotFound {
                path: path.clone(),
                suggestion: format!(
                    "{} does not exist in data directory \"{}\".\n   \
                     Point --data-dir at a directory containing {}, {} and {}, or omit it to use the built-in data.",
                    file_name,
                    self.data_dir.display(),
                    VERTICALS_FILE,
                    SOFTWARE_SYSTEMS_FILE,
                    COPY_POOLS_FILE
                ),
            }
            .into());
        }

        validate_data_file(&path, file_name, MAX_DATA_FILE_SIZE).map_err(|e| {
            PseoError::DataParseError {
                path: path.clone(),
                details: e.to_string(),
            }
        })?;

        let content = fs::read_to_string(&path).map_err(|e| PseoError::DataParseError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "read data file");
        Ok((path, content))
    }
}

impl CatalogReader for DataDirectoryReader {
    fn read_catalog(&self) -> Result<Catalog> {
        let (path, content) = self.read_data_file(VERTICALS_FILE)?;
        let verticals = parse_verticals(&content, &path)?;

        let (path, content) = self.read_data_file(SOFTWARE_SYSTEMS_FILE)?;
        let systems = parse_software_systems(&content, &path)?;

        Catalog::new(verticals, systems)
    }
}

impl CopyPoolReader for DataDirectoryReader {
    fn read_copy_pools(&self, fallback_vertical: &str) -> Result<CopyPools> {
        let (path, content) = self.read_data_file(COPY_POOLS_FILE)?;
        let pools = parse_copy_pools(&content, &path)?;
        CopyPools::new(fallback_vertical, pools)
    }
}
