use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::StorageError;

/// Suffix of in-flight writes. Never visible through [`ObjectStore::list_objects`].
const PARTIAL_SUFFIX: &str = ".partial";

/// JSON objects stored as files under a root directory. Keys are
/// `/`-separated paths relative to the root.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    root: PathBuf,
}

/// Result of a GET operation.
#[derive(Debug)]
pub struct GetObjectOutput {
    pub body: Vec<u8>,
}

impl ObjectStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|source| StorageError::Io {
                key: root.display().to_string(),
                source,
            })?;
        tracing::debug!(root = %root.display(), "object store opened");
        Ok(Self { root })
    }

    /// Get an object.
    pub async fn get_object(&self, key: &str) -> Result<GetObjectOutput, StorageError> {
        let path = self.path_for(key)?;
        let body = tokio::fs::read(&path)
            .await
            .map_err(|e| io_error(key, e))?;
        Ok(GetObjectOutput { body })
    }

    /// Put an object, replacing any previous version. The write lands under
    /// a temporary name first so readers never see a torn object.
    pub async fn put_object(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(key, e))?;
        }

        let mut partial = path.clone().into_os_string();
        partial.push(PARTIAL_SUFFIX);
        tokio::fs::write(&partial, body)
            .await
            .map_err(|e| io_error(key, e))?;
        tokio::fs::rename(&partial, &path)
            .await
            .map_err(|e| io_error(key, e))?;

        tracing::debug!(key, "object stored");
        Ok(())
    }

    /// Delete an object.
    pub async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| io_error(key, e))?;
        tracing::debug!(key, "object deleted");
        Ok(())
    }

    /// Delete all objects under a prefix.
    ///
    /// Returns the number of objects deleted.
    pub async fn delete_objects_by_prefix(&self, prefix: &str) -> Result<usize, StorageError> {
        let keys = self.list_objects(prefix).await?;
        let count = keys.len();
        for key in &keys {
            self.delete_object(key).await?;
        }
        Ok(count)
    }

    /// List objects under a prefix. Returns keys in sorted order.
    pub async fn list_objects(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(io_error(prefix, e)),
            };

            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| io_error(prefix, e))?
            {
                let path = entry.path();
                let file_type = entry.file_type().await.map_err(|e| io_error(prefix, e))?;
                if file_type.is_dir() {
                    pending.push(path);
                } else if let Some(key) = self.key_for(&path)
                    && key.starts_with(prefix)
                    && !key.ends_with(PARTIAL_SUFFIX)
                {
                    keys.push(key);
                }
            }
        }

        keys.sort();
        Ok(keys)
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        let valid = !key.is_empty()
            && !key.contains('\\')
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !valid {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.root.join(relative))
    }

    fn key_for(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Option<Vec<&str>> = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect();
        Some(parts?.join("/"))
    }
}

fn io_error(key: &str, source: std::io::Error) -> StorageError {
    if source.kind() == ErrorKind::NotFound {
        StorageError::NotFound {
            key: key.to_string(),
        }
    } else {
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }
}
