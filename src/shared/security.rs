use crate::shared::error::PseoError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a single data file (catalog or copy pools), 16 MB.
///
/// Pools are hand-written copy; anything larger is almost certainly the wrong file.
pub const MAX_DATA_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Checks that `path` is a regular, non-symlinked file no larger than `max_size`.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path cannot be inspected, is a symbolic link,
/// is not a regular file, or exceeds `max_size`.
pub fn validate_data_file(path: &Path, file_description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata ({}): {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not accepted for {}.",
            path.display(),
            file_description
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    Ok(())
}

/// Checks that `dir` exists, is a directory and is not a symbolic link.
///
/// Used before a batch export writes one file per page into `dir`.
pub fn validate_output_directory(dir: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(dir).map_err(|e| PseoError::InvalidOutputDir {
        path: dir.to_path_buf(),
        reason: format!("Directory does not exist or cannot be read: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(PseoError::InvalidOutputDir {
            path: dir.to_path_buf(),
            reason: "Security: output directory is a symbolic link".to_string(),
        }
        .into());
    }

    if !metadata.is_dir() {
        return Err(PseoError::InvalidOutputDir {
            path: dir.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
