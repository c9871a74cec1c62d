//! Storage client trait and shared data types.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::StorageResult;

/// Opaque reference to a container, owned by the client that issued it.
///
/// Handles are cheap to clone and carry no connection state; the client
/// resolves them on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHandle {
    name: String,
}

impl ContainerHandle {
    /// Create a handle for the named container.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The container name this handle refers to.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ContainerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Public access level of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublicAccess {
    /// No anonymous access.
    #[default]
    Private,
    /// Anonymous read access to blobs only.
    Blob,
    /// Anonymous read access to blobs and container metadata.
    Container,
}

impl fmt::Display for PublicAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PublicAccess::Private => "private",
            PublicAccess::Blob => "blob",
            PublicAccess::Container => "container",
        };
        f.write_str(s)
    }
}

/// Properties of a container as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerProperties {
    /// Public access level.
    pub public_access: PublicAccess,
    /// Time of the last mutation, in UTC.
    pub last_modified: DateTime<Utc>,
    /// User-supplied metadata attached to the container.
    pub metadata: HashMap<String, String>,
}

/// Capability set the console needs from an object-storage service.
///
/// Implementations own connection handling, authentication, and retry
/// policy. All methods resolve container handles on each call, so a
/// handle may outlive the container it names; operations on a deleted
/// container report [`StorageError::ContainerNotFound`].
///
/// [`StorageError::ContainerNotFound`]: super::StorageError::ContainerNotFound
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// List the names of all containers in the account.
    async fn list_containers(&self) -> StorageResult<Vec<String>>;

    /// Create the named container, or return a handle to it if it
    /// already exists.
    async fn create_container(&self, name: &str) -> StorageResult<ContainerHandle>;

    /// List the names of all blobs in the container.
    async fn list_blobs(&self, container: &ContainerHandle) -> StorageResult<Vec<String>>;

    /// Upload the file at `local_path` as the named blob, replacing any
    /// existing blob with the same name.
    async fn upload_blob(
        &self,
        container: &ContainerHandle,
        name: &str,
        local_path: &Path,
    ) -> StorageResult<()>;

    /// Download the named blob's contents.
    async fn download_blob(
        &self,
        container: &ContainerHandle,
        name: &str,
    ) -> StorageResult<Vec<u8>>;

    /// Delete the named blob.
    async fn delete_blob(&self, container: &ContainerHandle, name: &str) -> StorageResult<()>;

    /// Delete the container and everything in it.
    async fn delete_container(&self, container: &ContainerHandle) -> StorageResult<()>;

    /// Fetch the container's properties.
    async fn container_properties(
        &self,
        container: &ContainerHandle,
    ) -> StorageResult<ContainerProperties>;

    /// Replace the container's metadata with the given mapping.
    async fn set_container_metadata(
        &self,
        container: &ContainerHandle,
        metadata: HashMap<String, String>,
    ) -> StorageResult<()>;
}
