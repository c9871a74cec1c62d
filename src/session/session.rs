//! Per-run session value.

use super::MenuState;
use crate::storage::ContainerHandle;
use crate::Result;

/// State of one interactive run, threaded explicitly through the
/// controller instead of living in globals.
///
/// A session holds at most one container handle at a time; selecting a
/// new container replaces the previous handle and discards the blob
/// listing that belonged to it.
#[derive(Debug, Clone)]
pub struct Session {
    state: MenuState,
    container: Option<ContainerHandle>,
    connection_info: String,
    last_blob_listing: Vec<String>,
}

impl Session {
    /// Create a fresh session in the main menu.
    ///
    /// `connection_info` is the opaque credential/endpoint string handed
    /// to the storage client; the session only records it.
    pub fn new(connection_info: impl Into<String>) -> Self {
        Self {
            state: MenuState::MainMenu,
            container: None,
            connection_info: connection_info.into(),
            last_blob_listing: Vec::new(),
        }
    }

    /// Current navigation state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Move to the target menu state.
    ///
    /// Staying in the current state is a no-op. Entering the container
    /// menu requires a held container handle.
    pub fn navigate(&mut self, target: MenuState) -> Result<()> {
        if self.state == target {
            return Ok(());
        }
        if target == MenuState::ContainerMenu && self.container.is_none() {
            return Err(crate::error::BlobConsoleError::InvalidTransition {
                from: self.state,
                to: target,
            });
        }
        self.state.transition_to(target)
    }

    /// The currently selected container, if any.
    pub fn container(&self) -> Option<&ContainerHandle> {
        self.container.as_ref()
    }

    /// Whether a container handle is currently held.
    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }

    /// Select a container, replacing any previously held handle.
    pub fn select_container(&mut self, handle: ContainerHandle) {
        self.container = Some(handle);
        // A listing fetched for another container must not authorize
        // operations on this one.
        self.last_blob_listing.clear();
    }

    /// The opaque connection string this session was started with.
    pub fn connection_info(&self) -> &str {
        &self.connection_info
    }

    /// Record the most recently fetched blob listing.
    pub fn record_blob_listing(&mut self, names: Vec<String>) {
        self.last_blob_listing = names;
    }

    /// Check a blob name against the most recently fetched listing.
    pub fn knows_blob(&self, name: &str) -> bool {
        self.last_blob_listing.iter().any(|n| n == name)
    }

    /// The most recently fetched blob listing.
    pub fn last_blob_listing(&self) -> &[String] {
        &self.last_blob_listing
    }
}
