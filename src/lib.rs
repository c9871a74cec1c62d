//! # blob-console
//!
//! Interactive console for basic object-storage operations.
//!
//! This crate drives a text menu loop over a storage service client:
//! list containers, create or open a container, then list, upload,
//! download, and delete blobs, read container properties, and set
//! container metadata. All storage I/O goes through the
//! [`StorageClient`] trait; the bundled [`MemoryStorageClient`] emulates
//! the service in process so the console runs without a live account.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::io::Cursor;
//!
//! use blob_console::{Console, MemoryStorageClient, Session, SessionController};
//!
//! #[tokio::main]
//! async fn main() -> blob_console::Result<()> {
//!     let client = MemoryStorageClient::new();
//!     let console = Console::new(Cursor::new(b"0\n".to_vec()), Vec::new());
//!     let session = Session::new("UseDevelopmentStorage=true");
//!
//!     let mut controller = SessionController::new(client, console, session, "./data");
//!     controller.run().await
//! }
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod session;
pub mod storage;
pub mod transfer;

// Re-export commonly used types
pub use config::Config;
pub use console::Console;
pub use error::{BlobConsoleError, Result};
pub use session::{MenuState, Session, SessionController};
pub use storage::{
    ContainerHandle, ContainerProperties, MemoryStorageClient, PublicAccess, StorageClient,
    StorageError,
};
