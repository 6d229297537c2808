use crate::ports::outbound::PageExporter;
use crate::shared::error::PseoError;
use crate::shared::security::validate_output_directory;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// DirectoryExporter adapter writing one file per page into a directory
///
/// The directory is validated once, on construction.
pub struct DirectoryExporter {
    out_dir: PathBuf,
}

impl DirectoryExporter {
    /// # Errors
    /// Returns an error if `out_dir` does not exist, is not a directory or is
    /// a symbolic link
    pub fn new(out_dir: PathBuf) -> Result<Self> {
        validate_output_directory(&out_dir)?;
        Ok(Self { out_dir })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

impl PageExporter for DirectoryExporter {
    fn export(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.out_dir.join(file_name);

        // One plain file name, no separators or parent references
        if Path::new(file_name).file_name().and_then(|n| n.to_str()) != Some(file_name) {
            return Err(PseoError::FileWriteError {
                path,
                details: format!("Refusing to write outside the output directory: {}", file_name),
            }
            .into());
        }

        if let Ok(metadata) = fs::symlink_metadata(&path) {
            if metadata.is_symlink() {
                return Err(PseoError::FileWriteError {
                    path,
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }

        fs::write(&path, content).map_err(|e| PseoError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        Ok(path)
    }
}
