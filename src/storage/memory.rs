//! In-memory storage service emulator.
//!
//! Keeps containers and blob contents in process memory so the console
//! can run end-to-end without a live storage account. Naming rules and
//! error codes follow the service the console targets, which makes the
//! emulator usable as a stand-in for a real client in tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{
    ContainerHandle, ContainerProperties, PublicAccess, StorageClient, StorageError, StorageResult,
};

/// Longest container name the service accepts.
const MAX_CONTAINER_NAME_LEN: usize = 63;

/// Shortest container name the service accepts.
const MIN_CONTAINER_NAME_LEN: usize = 3;

/// Longest blob name the service accepts.
const MAX_BLOB_NAME_LEN: usize = 1024;

#[derive(Debug, Clone)]
struct ContainerRecord {
    blobs: HashMap<String, Vec<u8>>,
    metadata: HashMap<String, String>,
    public_access: PublicAccess,
    last_modified: DateTime<Utc>,
}

impl ContainerRecord {
    fn new() -> Self {
        Self {
            blobs: HashMap::new(),
            metadata: HashMap::new(),
            // Containers are created readable, matching the console's
            // create-or-get flow.
            public_access: PublicAccess::Container,
            last_modified: Utc::now(),
        }
    }

    fn touch(&mut self) {
        self.last_modified = Utc::now();
    }
}

type ContainerMap = HashMap<String, ContainerRecord>;

/// In-memory [`StorageClient`] implementation.
///
/// Clones share the same underlying store, so a test can keep a view of
/// the data while the console owns its own copy of the client.
#[derive(Clone, Default)]
pub struct MemoryStorageClient {
    containers: Arc<RwLock<ContainerMap>>,
}

impl MemoryStorageClient {
    /// Create an empty emulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a blob directly, creating the container if needed.
    ///
    /// Bypasses the local-file staging of [`StorageClient::upload_blob`];
    /// intended for seeding state in tests.
    pub fn seed_blob(&self, container: &str, blob: &str, contents: &[u8]) -> StorageResult<()> {
        validate_container_name(container)?;
        validate_blob_name(blob)?;
        let mut containers = self.write_guard()?;
        let record = containers
            .entry(container.to_string())
            .or_insert_with(ContainerRecord::new);
        record.blobs.insert(blob.to_string(), contents.to_vec());
        record.touch();
        Ok(())
    }

    /// Number of containers currently held.
    pub fn container_count(&self) -> StorageResult<usize> {
        Ok(self.read_guard()?.len())
    }

    fn read_guard(&self) -> StorageResult<RwLockReadGuard<'_, ContainerMap>> {
        self.containers
            .read()
            .map_err(|_| StorageError::Internal("container store lock poisoned".into()))
    }

    fn write_guard(&self) -> StorageResult<RwLockWriteGuard<'_, ContainerMap>> {
        self.containers
            .write()
            .map_err(|_| StorageError::Internal("container store lock poisoned".into()))
    }
}

#[async_trait]
impl StorageClient for MemoryStorageClient {
    async fn list_containers(&self) -> StorageResult<Vec<String>> {
        let containers = self.read_guard()?;
        let mut names: Vec<String> = containers.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn create_container(&self, name: &str) -> StorageResult<ContainerHandle> {
        validate_container_name(name)?;
        let mut containers = self.write_guard()?;
        containers
            .entry(name.to_string())
            .or_insert_with(ContainerRecord::new);
        Ok(ContainerHandle::new(name))
    }

    async fn list_blobs(&self, container: &ContainerHandle) -> StorageResult<Vec<String>> {
        let containers = self.read_guard()?;
        let record = containers
            .get(container.name())
            .ok_or_else(|| StorageError::ContainerNotFound(container.name().to_string()))?;
        let mut names: Vec<String> = record.blobs.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn upload_blob(
        &self,
        container: &ContainerHandle,
        name: &str,
        local_path: &Path,
    ) -> StorageResult<()> {
        validate_blob_name(name)?;
        let contents = std::fs::read(local_path).map_err(|e| {
            StorageError::Internal(format!("failed to read {}: {}", local_path.display(), e))
        })?;
        let mut containers = self.write_guard()?;
        let record = containers
            .get_mut(container.name())
            .ok_or_else(|| StorageError::ContainerNotFound(container.name().to_string()))?;
        record.blobs.insert(name.to_string(), contents);
        record.touch();
        Ok(())
    }

    async fn download_blob(
        &self,
        container: &ContainerHandle,
        name: &str,
    ) -> StorageResult<Vec<u8>> {
        let containers = self.read_guard()?;
        let record = containers
            .get(container.name())
            .ok_or_else(|| StorageError::ContainerNotFound(container.name().to_string()))?;
        record
            .blobs
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::BlobNotFound(name.to_string()))
    }

    async fn delete_blob(&self, container: &ContainerHandle, name: &str) -> StorageResult<()> {
        let mut containers = self.write_guard()?;
        let record = containers
            .get_mut(container.name())
            .ok_or_else(|| StorageError::ContainerNotFound(container.name().to_string()))?;
        if record.blobs.remove(name).is_none() {
            return Err(StorageError::BlobNotFound(name.to_string()));
        }
        record.touch();
        Ok(())
    }

    async fn delete_container(&self, container: &ContainerHandle) -> StorageResult<()> {
        let mut containers = self.write_guard()?;
        if containers.remove(container.name()).is_none() {
            return Err(StorageError::ContainerNotFound(container.name().to_string()));
        }
        Ok(())
    }

    async fn container_properties(
        &self,
        container: &ContainerHandle,
    ) -> StorageResult<ContainerProperties> {
        let containers = self.read_guard()?;
        let record = containers
            .get(container.name())
            .ok_or_else(|| StorageError::ContainerNotFound(container.name().to_string()))?;
        Ok(ContainerProperties {
            public_access: record.public_access,
            last_modified: record.last_modified,
            metadata: record.metadata.clone(),
        })
    }

    async fn set_container_metadata(
        &self,
        container: &ContainerHandle,
        metadata: HashMap<String, String>,
    ) -> StorageResult<()> {
        let mut containers = self.write_guard()?;
        let record = containers
            .get_mut(container.name())
            .ok_or_else(|| StorageError::ContainerNotFound(container.name().to_string()))?;
        record.metadata = metadata;
        record.touch();
        Ok(())
    }
}

/// Validate a container name against the service naming rules:
/// 3-63 characters, lowercase letters, digits, and hyphens, starting
/// and ending with a letter or digit.
fn validate_container_name(name: &str) -> StorageResult<()> {
    let len = name.len();
    if !(MIN_CONTAINER_NAME_LEN..=MAX_CONTAINER_NAME_LEN).contains(&len) {
        return Err(StorageError::InvalidResourceName(name.to_string()));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(StorageError::InvalidResourceName(name.to_string()));
    }
    let starts_ok = name.starts_with(|c: char| c.is_ascii_alphanumeric());
    let ends_ok = name.ends_with(|c: char| c.is_ascii_alphanumeric());
    if !starts_ok || !ends_ok {
        return Err(StorageError::InvalidResourceName(name.to_string()));
    }
    Ok(())
}

/// Validate a blob name: non-empty, bounded length, and no parent-dir
/// segments (blob names double as local file names on download).
fn validate_blob_name(name: &str) -> StorageResult<()> {
    if name.is_empty() || name.len() > MAX_BLOB_NAME_LEN {
        return Err(StorageError::InvalidResourceName(name.to_string()));
    }
    if name.split('/').any(|segment| segment == "..") {
        return Err(StorageError::InvalidResourceName(name.to_string()));
    }
    Ok(())
}
