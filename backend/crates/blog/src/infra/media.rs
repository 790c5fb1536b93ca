//! Local Upload Storage
//!
//! Stores uploaded images on the filesystem under a directory that is
//! served statically. The article's `image` column holds the served
//! path, never the binary.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::domain::repository::MediaStore;
use crate::error::{BlogError, BlogResult};

/// Fallback extension when the upload has none usable
const DEFAULT_EXTENSION: &str = "bin";

/// Filesystem-backed media store
#[derive(Debug, Clone)]
pub struct FsMediaStore {
    root: PathBuf,
    public_prefix: String,
}

impl FsMediaStore {
    /// Create the store, bootstrapping the uploads directory tree.
    ///
    /// `root` is where files land on disk; `public_prefix` is the URL
    /// prefix under which that directory is served (e.g. `/uploads`).
    pub async fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> BlogResult<Self> {
        let root = root.into();

        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| BlogError::Upload(format!("Cannot create uploads dir: {e}")))?;

        tracing::info!(dir = %root.display(), "Uploads directory ready");

        Ok(Self {
            root,
            public_prefix: public_prefix.into().trim_end_matches('/').to_string(),
        })
    }

    /// Keep only a safe, short, lowercase extension from the client name.
    fn sanitized_extension(original_name: &str) -> String {
        Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .filter(|ext| {
                !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
    }
}

impl MediaStore for FsMediaStore {
    async fn save(&self, data: Vec<u8>, original_name: &str) -> BlogResult<String> {
        let file_name = format!("{}.{}", Uuid::new_v4(), Self::sanitized_extension(original_name));

        let path = self.root.join(&file_name);
        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| BlogError::Upload(format!("Cannot write {}: {e}", path.display())))?;

        tracing::debug!(file = %file_name, bytes = data.len(), "Stored upload");

        Ok(format!("{}/{}", self.public_prefix, file_name))
    }
}
