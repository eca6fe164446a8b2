//! Filesystem access used by [`LnkFile`](crate::LnkFile).
//!
//! Decoding itself never touches the filesystem; loading the file, checking
//! whether paths exist and making them absolute all go through [`FileSystem`].

use std::io;
use std::path::{Path, PathBuf};

pub trait FileSystem: Send + Sync {
    /// Read the whole file into memory.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    fn exists(&self, path: &Path) -> bool;

    /// Make `path` absolute without requiring it to exist.
    fn absolute(&self, path: &Path) -> io::Result<PathBuf>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        std::path::absolute(path)
    }
}

/// Check if a path stored in a link is already absolute on Windows.
///
/// Drive-rooted (`C:\...`) and UNC (`\\server\share`) paths count, whatever
/// platform this runs on.
pub fn is_windows_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    if bytes.starts_with(b"\\\\") {
        return true;
    }

    matches!(bytes, [drive, b':', b'\\' | b'/', ..] if drive.is_ascii_alphabetic())
}
