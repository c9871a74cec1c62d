//! Storage service client seam.
//!
//! This module defines the capability set the console needs from an
//! object-storage service, plus an in-process implementation backed by
//! memory. Wire protocol, authentication, and retry policy all live
//! behind the [`StorageClient`] trait.

mod client;
mod error;
mod memory;

pub use client::{ContainerHandle, ContainerProperties, PublicAccess, StorageClient};
pub use error::{StorageError, StorageResult};
pub use memory::MemoryStorageClient;
