use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to create scratch directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write scratch file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to read scratch file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
}

/// Manager for the two scratch directories (`uploads`, `outputs`).
///
/// Both directories are created up front so request handlers never race on
/// directory creation.
#[derive(Clone, Debug)]
pub struct ScratchStorage {
    upload_dir: PathBuf,
    output_dir: PathBuf,
}

impl ScratchStorage {
    pub async fn new(
        upload_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> StorageResult<Self> {
        let upload_dir = upload_dir.into();
        let output_dir = output_dir.into();

        for dir in [&upload_dir, &output_dir] {
            fs::create_dir_all(dir)
                .await
                .map_err(|source| StorageError::CreateDir {
                    path: dir.clone(),
                    source,
                })?;
        }

        Ok(ScratchStorage {
            upload_dir,
            output_dir,
        })
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Stage an uploaded file under the upload directory.
    ///
    /// The on-disk name is `<uuid>_<sanitized original name>`; the returned
    /// guard removes the file when dropped unless `remove` was already called.
    pub async fn stage_upload(&self, original_filename: &str, data: &[u8]) -> StorageResult<ScratchFile> {
        self.stage(&self.upload_dir, original_filename, data).await
    }

    /// Stage a conversion output under the output directory.
    pub async fn stage_output(&self, filename: &str, data: &[u8]) -> StorageResult<ScratchFile> {
        self.stage(&self.output_dir, filename, data).await
    }

    async fn stage(&self, dir: &Path, filename: &str, data: &[u8]) -> StorageResult<ScratchFile> {
        let name = format!("{}_{}", Uuid::new_v4(), sanitize_filename(filename));
        let path = dir.join(name);

        fs::write(&path, data)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "Staged scratch file");

        Ok(ScratchFile {
            path,
            removed: false,
        })
    }
}

/// A staged scratch file, removed on drop.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    removed: bool,
}

impl ScratchFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> StorageResult<Vec<u8>> {
        fs::read(&self.path)
            .await
            .map_err(|source| StorageError::Read {
                path: self.path.clone(),
                source,
            })
    }

    /// Remove the file now instead of waiting for drop.
    pub async fn remove(mut self) {
        self.removed = true;
        if let Err(err) = fs::remove_file(&self.path).await {
            tracing::warn!(path = %self.path.display(), error = %err, "Failed to remove scratch file");
        }
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if !self.removed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Reduce a client-supplied filename to a safe single path component.
///
/// Path components are stripped, anything outside `[A-Za-z0-9._-]` becomes
/// `_`, and names that are empty or contain `..` collapse to `"file"`.
pub fn sanitize_filename(filename: &str) -> String {
    const MAX: usize = 255;

    let base = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    if base.contains("..") {
        return "file".to_string();
    }

    let sanitized: String = base
        .chars()
        .take(MAX)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches(['.', '_']).is_empty() {
        "file".to_string()
    } else {
        sanitized
    }
}
