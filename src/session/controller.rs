//! Menu-driven session controller.
//!
//! Drives one interactive run: displays the menu for the current state,
//! consumes one line of input, dispatches the chosen action against the
//! storage client, and returns to a menu through the back-navigation
//! prompt. Each state is an explicit loop iteration, so pathological
//! input streams cannot grow the call stack.

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use super::{MenuState, Session};
use crate::console::Console;
use crate::error::BlobConsoleError;
use crate::storage::{ContainerHandle, StorageClient};
use crate::transfer;
use crate::Result;

/// Metadata pairs applied by the set-metadata action.
const DEFAULT_METADATA: [(&str, &str); 2] =
    [("docType", "textDocuments"), ("category", "guidance")];

/// Interactive session controller.
///
/// Generic over the storage client and the console streams so tests can
/// script input and inspect output.
pub struct SessionController<C, R, W> {
    client: C,
    console: Console<R, W>,
    session: Session,
    data_dir: PathBuf,
}

impl<C, R, W> SessionController<C, R, W>
where
    C: StorageClient,
    R: BufRead,
    W: Write,
{
    /// Create a controller over the given client and console.
    pub fn new(
        client: C,
        console: Console<R, W>,
        session: Session,
        data_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            client,
            console,
            session,
            data_dir: data_dir.into(),
        }
    }

    /// The session state, for inspection after a run.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consume the controller, returning the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run the menu loop until the session exits.
    pub async fn run(&mut self) -> Result<()> {
        debug!("session started");
        loop {
            match self.session.state() {
                MenuState::MainMenu => self.main_menu().await?,
                MenuState::ContainerMenu => self.container_menu().await?,
                MenuState::Exiting => break,
            }
        }
        self.console.write_line("Goodbye.")?;
        debug!("session ended");
        Ok(())
    }

    /// One main-menu round: display, read, dispatch.
    async fn main_menu(&mut self) -> Result<()> {
        self.console.banner()?;
        self.console.write_line("Please select an option:")?;
        self.console.write_line("  1. List containers")?;
        self.console.write_line("  2. Create or open a container")?;
        self.console.write_line("  0. Exit")?;
        let Some(choice) = self.console.read_line()? else {
            return self.session.navigate(MenuState::Exiting);
        };
        let result = match choice.trim() {
            "1" => self.list_containers().await,
            "2" => self.open_container().await,
            "0" => return self.session.navigate(MenuState::Exiting),
            _ => {
                self.console.write_line("Invalid choice, please select again.")?;
                return Ok(());
            }
        };
        self.report(result)?;
        if self.session.state().is_terminal() {
            return Ok(());
        }
        self.back_nav()
    }

    /// One container-menu round: display, read, dispatch.
    async fn container_menu(&mut self) -> Result<()> {
        let Some(handle) = self.session.container().cloned() else {
            return self.session.navigate(MenuState::MainMenu);
        };
        self.console.banner()?;
        self.console.write_line(format!("Container: {}", handle.name()))?;
        self.console.write_line("Please select an option:")?;
        self.console.write_line("  1. List blobs")?;
        self.console.write_line("  2. Create and upload a blob")?;
        self.console.write_line("  3. Download a blob")?;
        self.console.write_line("  4. Delete a blob")?;
        self.console.write_line("  5. Show container properties")?;
        self.console.write_line("  6. Set container metadata")?;
        let Some(choice) = self.console.read_line()? else {
            return self.session.navigate(MenuState::Exiting);
        };
        let result = match choice.trim() {
            "1" => self.list_blobs(&handle).await,
            "2" => self.create_blob(&handle).await,
            "3" => self.download_blob(&handle).await,
            "4" => self.delete_blob(&handle).await,
            "5" => self.show_properties(&handle).await,
            "6" => self.set_metadata(&handle).await,
            _ => {
                self.console.write_line("Invalid choice, please select again.")?;
                return Ok(());
            }
        };
        self.report(result)?;
        if self.session.state().is_terminal() {
            return Ok(());
        }
        self.back_nav()
    }

    /// Back-navigation prompt shown after every completed action.
    ///
    /// "2" is only offered, and only accepted, while a container handle
    /// is held.
    fn back_nav(&mut self) -> Result<()> {
        loop {
            self.console.write_line("Please select an option:")?;
            self.console.write_line("  1. Go to main menu")?;
            if self.session.has_container() {
                self.console.write_line("  2. Go to blob operations")?;
            }
            self.console.write_line("  0. Exit")?;
            let Some(choice) = self.console.read_line()? else {
                return self.session.navigate(MenuState::Exiting);
            };
            match choice.trim() {
                "1" => return self.session.navigate(MenuState::MainMenu),
                "2" if self.session.has_container() => {
                    return self.session.navigate(MenuState::ContainerMenu);
                }
                "0" => return self.session.navigate(MenuState::Exiting),
                _ => self.console.write_line("Invalid input, please try again.")?,
            }
        }
    }

    /// Surface a storage failure as a code/message pair and continue;
    /// everything else propagates and ends the run.
    fn report(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(BlobConsoleError::Storage(e)) => {
                warn!(code = e.code(), status = e.status(), "storage operation failed");
                self.console
                    .write_line(format!("HTTP error code {}: {}", e.status(), e.code()))?;
                self.console.write_line(e.to_string())?;
                Ok(())
            }
            Err(other) => Err(other),
        }
    }

    async fn list_containers(&mut self) -> Result<()> {
        debug!("listing containers");
        let names = self.client.list_containers().await?;
        self.console.write_line("Container name list:")?;
        for name in &names {
            self.console.write_line(format!("    {name}"))?;
        }
        Ok(())
    }

    async fn open_container(&mut self) -> Result<()> {
        let Some(name) = self.console.prompt("Please enter a container name:")? else {
            return self.session.navigate(MenuState::Exiting);
        };
        let name = name.trim().to_string();
        let handle = self.client.create_container(&name).await?;
        debug!(container = handle.name(), "container selected");
        self.console.write_line(format!("Container ready: {}", handle.name()))?;
        self.session.select_container(handle);
        Ok(())
    }

    async fn list_blobs(&mut self, handle: &ContainerHandle) -> Result<()> {
        debug!(container = handle.name(), "listing blobs");
        let names = self.client.list_blobs(handle).await?;
        self.console.write_line("Blob name list:")?;
        for name in &names {
            self.console.write_line(format!("    {name}"))?;
        }
        self.session.record_blob_listing(names);
        Ok(())
    }

    async fn create_blob(&mut self, handle: &ContainerHandle) -> Result<()> {
        let Some(name) = self.console.prompt("Please enter a blob name:")? else {
            return self.session.navigate(MenuState::Exiting);
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            self.console.write_line("Invalid blob name, please try again.")?;
            return Ok(());
        }
        let local_path = transfer::stage_upload(&self.data_dir, &name)?;
        self.client.upload_blob(handle, &name, &local_path).await?;
        self.console.write_line("Uploaded to blob storage as:")?;
        self.console.write_line(format!("    {name}"))?;
        Ok(())
    }

    async fn download_blob(&mut self, handle: &ContainerHandle) -> Result<()> {
        let names = self.client.list_blobs(handle).await?;
        self.session.record_blob_listing(names);
        let Some(name) = self.console.prompt("Please enter a blob name:")? else {
            return self.session.navigate(MenuState::Exiting);
        };
        let name = name.trim().to_string();
        if !self.session.knows_blob(&name) {
            self.console.write_line("Invalid blob name, please try again.")?;
            return Ok(());
        }
        let contents = self.client.download_blob(handle, &name).await?;
        let path = transfer::write_download(&self.data_dir, &name, &contents)?;
        self.console.write_line("Downloaded blob to:")?;
        self.console.write_line(format!("    {}", path.display()))?;
        Ok(())
    }

    async fn delete_blob(&mut self, handle: &ContainerHandle) -> Result<()> {
        let names = self.client.list_blobs(handle).await?;
        self.session.record_blob_listing(names);
        let Some(name) = self.console.prompt("Please enter a blob name:")? else {
            return self.session.navigate(MenuState::Exiting);
        };
        let name = name.trim().to_string();
        if !self.session.knows_blob(&name) {
            self.console.write_line("Invalid blob name, please try again.")?;
            return Ok(());
        }
        self.console.write_line("Deleting blob...")?;
        self.client.delete_blob(handle, &name).await?;
        self.console.write_line("Finished deleting.")?;
        Ok(())
    }

    async fn show_properties(&mut self, handle: &ContainerHandle) -> Result<()> {
        let props = self.client.container_properties(handle).await?;
        self.console
            .write_line(format!("Properties for container {}", handle.name()))?;
        self.console
            .write_line(format!("Public access level: {}", props.public_access))?;
        self.console.write_line(format!(
            "Last modified time in UTC: {}",
            props.last_modified.format("%Y-%m-%d %H:%M:%S")
        ))?;
        let mut pairs: Vec<_> = props.metadata.iter().collect();
        pairs.sort();
        for (key, value) in pairs {
            self.console.write_line(format!("{key}: {value}"))?;
        }
        Ok(())
    }

    async fn set_metadata(&mut self, handle: &ContainerHandle) -> Result<()> {
        let metadata: HashMap<String, String> = DEFAULT_METADATA
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.client.set_container_metadata(handle, metadata).await?;
        self.console.write_line("Metadata applied:")?;
        for (key, value) in DEFAULT_METADATA {
            self.console.write_line(format!("    {key}: {value}"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorageClient;
    use std::io::Cursor;
    use std::path::Path;

    fn controller_with(
        client: MemoryStorageClient,
        script: &[&str],
        data_dir: &Path,
    ) -> SessionController<MemoryStorageClient, Cursor<Vec<u8>>, Vec<u8>> {
        let input: String = script.iter().map(|line| format!("{line}\n")).collect();
        let console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
        SessionController::new(client, console, Session::new("test"), data_dir)
    }

    async fn run_script(client: MemoryStorageClient, script: &[&str], data_dir: &Path) -> String {
        let mut controller = controller_with(client, script, data_dir);
        controller.run().await.unwrap();
        let (_, out) = controller.into_console().into_inner();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_script(MemoryStorageClient::new(), &[], dir.path()).await;
        assert!(output.contains("Blob Storage Console"));
        assert!(output.contains("Goodbye."));
    }

    #[tokio::test]
    async fn test_exit_from_main_menu() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_script(MemoryStorageClient::new(), &["0"], dir.path()).await;
        assert!(output.ends_with("Goodbye.\n"));
    }

    #[tokio::test]
    async fn test_invalid_main_choice_redisplays_menu() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_script(MemoryStorageClient::new(), &["banana", "0"], dir.path()).await;
        assert!(output.contains("Invalid choice, please select again."));
        // Menu shown twice: once before the bad input, once after.
        assert_eq!(output.matches("1. List containers").count(), 2);
    }

    #[tokio::test]
    async fn test_open_container_enters_container_menu() {
        let dir = tempfile::tempdir().unwrap();
        let client = MemoryStorageClient::new();
        let output = run_script(client.clone(), &["2", "photos", "2", "0"], dir.path()).await;
        assert!(output.contains("Container ready: photos"));
        assert!(output.contains("1. List blobs"));
        assert_eq!(client.container_count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_invalid_container_name_reports_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_script(
            MemoryStorageClient::new(),
            &["2", "Not A Valid Name", "0"],
            dir.path(),
        )
        .await;
        assert!(output.contains("HTTP error code 400: InvalidResourceName"));
        // The session survives the failure and still reaches back-navigation.
        assert!(output.contains("1. Go to main menu"));
        assert!(output.ends_with("Goodbye.\n"));
    }

    #[tokio::test]
    async fn test_empty_blob_name_rejected_without_upload() {
        let dir = tempfile::tempdir().unwrap();
        let client = MemoryStorageClient::new();
        let output = run_script(
            client.clone(),
            &["2", "docs", "2", "2", "", "0"],
            dir.path(),
        )
        .await;
        assert!(output.contains("Invalid blob name, please try again."));
        let handle = ContainerHandle::new("docs");
        assert!(client.list_blobs(&handle).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_stages_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let client = MemoryStorageClient::new();
        let output = run_script(
            client.clone(),
            &["2", "docs", "2", "2", "note", "0"],
            dir.path(),
        )
        .await;
        assert!(output.contains("Uploaded to blob storage as:"));
        assert!(dir.path().join("note.txt").exists());

        let handle = ContainerHandle::new("docs");
        let contents = client.download_blob(&handle, "note").await.unwrap();
        assert_eq!(contents, b"Hello, World! note");
    }

    #[tokio::test]
    async fn test_download_writes_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let client = MemoryStorageClient::new();
        client.seed_blob("docs", "report.txt", b"quarterly").unwrap();

        let output = run_script(
            client,
            &["2", "docs", "2", "3", "report.txt", "0"],
            dir.path(),
        )
        .await;
        assert!(output.contains("Downloaded blob to:"));
        let downloaded = std::fs::read(dir.path().join("report.txt")).unwrap();
        assert_eq!(downloaded, b"quarterly");
    }

    #[tokio::test]
    async fn test_metadata_roundtrip_via_menu() {
        let dir = tempfile::tempdir().unwrap();
        let client = MemoryStorageClient::new();
        // Set metadata, then show properties.
        let output = run_script(
            client,
            &["2", "docs", "2", "6", "2", "5", "0"],
            dir.path(),
        )
        .await;
        assert!(output.contains("Metadata applied:"));
        assert!(output.contains("docType: textDocuments"));
        assert!(output.contains("category: guidance"));
        assert!(output.contains("Public access level: container"));
        assert!(output.contains("Last modified time in UTC:"));
    }

    #[tokio::test]
    async fn test_back_nav_invalid_then_exit() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_script(
            MemoryStorageClient::new(),
            &["1", "7", "0"],
            dir.path(),
        )
        .await;
        assert!(output.contains("Container name list:"));
        assert!(output.contains("Invalid input, please try again."));
        assert!(output.ends_with("Goodbye.\n"));
    }
}
