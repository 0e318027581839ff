//! Artifact checksum and size calculation.
//!
//! Supports both single files (one-file executables) and directory trees
//! (one-directory builds, macOS .app bundles).

use crate::{bail, packager::Result, packager::error::ErrorExt};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Calculates the SHA-256 checksum of a file or directory.
///
/// For directories every file is hashed in sorted path order, prefixed by
/// its relative path, so the result is deterministic.
pub async fn calculate_sha256(path: &Path) -> Result<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .fs_context("reading metadata of", path)?;

    if metadata.is_file() {
        let mut hasher = Sha256::new();
        hash_file(path, &mut hasher).await?;
        Ok(format!("{:x}", hasher.finalize()))
    } else if metadata.is_dir() {
        calculate_directory_sha256(path).await
    } else {
        bail!("Path is neither file nor directory: {}", path.display())
    }
}

/// Total size in bytes of a file or all files below a directory.
pub fn artifact_size(path: &Path) -> Result<u64> {
    if path.is_file() {
        return Ok(std::fs::metadata(path).fs_context("reading metadata of", path)?.len());
    }

    let mut size = 0u64;
    for entry in walkdir::WalkDir::new(path).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_file() {
            size += entry.metadata()?.len();
        }
    }
    Ok(size)
}

async fn hash_file(path: &Path, hasher: &mut Sha256) -> Result<()> {
    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("opening file for hashing", path)?;
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(())
}

async fn calculate_directory_sha256(dir_path: &Path) -> Result<String> {
    let mut entries: Vec<_> = walkdir::WalkDir::new(dir_path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .collect();

    entries.sort_by_key(|e| e.path().to_path_buf());

    let mut hasher = Sha256::new();
    for entry in entries {
        if let Ok(rel_path) = entry.path().strip_prefix(dir_path) {
            hasher.update(rel_path.to_string_lossy().as_bytes());
        }
        hash_file(entry.path(), &mut hasher).await?;
    }

    Ok(format!("{:x}", hasher.finalize()))
}
