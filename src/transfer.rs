//! Local filesystem staging for uploads and downloads.
//!
//! Uploads are staged as small placeholder text files under the data
//! directory; downloads land next to them. The directory is created on
//! first use.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write a placeholder text file for the named blob and return its path.
///
/// The file is named `<name>.txt` and contains a greeting mentioning the
/// blob name, matching what the upload menu advertises.
pub fn stage_upload(data_dir: &Path, name: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(data_dir)?;
    let path = data_dir.join(format!("{name}.txt"));
    fs::write(&path, format!("Hello, World! {name}"))?;
    Ok(path)
}

/// Write downloaded blob contents under the data directory and return
/// the path.
///
/// Blob names may contain `/` separators; intermediate directories are
/// created as needed.
pub fn write_download(data_dir: &Path, name: &str, contents: &[u8]) -> io::Result<PathBuf> {
    let path = data_dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, contents)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_upload_creates_dir_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");

        let path = stage_upload(&data_dir, "greeting").unwrap();
        assert_eq!(path, data_dir.join("greeting.txt"));

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Hello, World! greeting");
    }

    #[test]
    fn test_stage_upload_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        stage_upload(dir.path(), "a").unwrap();
        let path = stage_upload(dir.path(), "a").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "Hello, World! a");
    }

    #[test]
    fn test_write_download() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_download(dir.path(), "report.bin", b"\x00\x01\x02").unwrap();
        assert_eq!(fs::read(path).unwrap(), vec![0u8, 1, 2]);
    }

    #[test]
    fn test_write_download_nested_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_download(dir.path(), "2024/jan/report.txt", b"ok").unwrap();
        assert!(path.ends_with("2024/jan/report.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "ok");
    }
}
