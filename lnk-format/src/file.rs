use std::io;
use std::path::{Path, PathBuf};

use crate::attrs::FileAttributes;
use crate::fs::{is_windows_absolute, FileSystem, StdFileSystem};
use crate::info::LnkInfo;
use crate::location::DriveType;
use crate::parse::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("Failed to read shell link file. Path: '{}'", .1.display())]
    IoFailure(#[source] io::Error, PathBuf),

    #[error("Invalid shell link file. Path: '{}'", .1.display())]
    InvalidFormat(#[source] ParseError, PathBuf),
}

impl OpenError {
    pub fn path(&self) -> &Path {
        match self {
            OpenError::IoFailure(_, path) | OpenError::InvalidFormat(_, path) => path,
        }
    }
}

fn load<F: FileSystem>(fs: &F, path: &Path) -> Result<LnkInfo, OpenError> {
    let data = fs
        .read(path)
        .map_err(|e| OpenError::IoFailure(e, path.to_path_buf()))?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "read shell link file");

    LnkInfo::decode(&data).map_err(|e| OpenError::InvalidFormat(e, path.to_path_buf()))
}

/// A `.lnk` file on disk together with its decoded contents.
#[derive(Debug, Clone)]
pub struct LnkFile<F: FileSystem = StdFileSystem> {
    path: PathBuf,
    info: LnkInfo,
    fs: F,
}

impl LnkFile {
    /// Read and decode the shortcut at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<LnkFile, OpenError> {
        LnkFile::open_with(path, StdFileSystem)
    }
}

impl<F: FileSystem> LnkFile<F> {
    /// Read and decode the shortcut at `path` through `fs`.
    pub fn open_with<P: AsRef<Path>>(path: P, fs: F) -> Result<LnkFile<F>, OpenError> {
        let path = path.as_ref().to_path_buf();
        let info = load(&fs, &path)?;
        Ok(LnkFile { path, info, fs })
    }

    /// Read and decode the file again.
    ///
    /// The new contents replace the old ones only if decoding succeeds; on
    /// error, [`info`](Self::info) still returns what was decoded before.
    pub fn refresh(&mut self) -> Result<(), OpenError> {
        self.info = load(&self.fs, &self.path)?;
        Ok(())
    }

    #[inline(always)]
    pub fn info(&self) -> &LnkInfo {
        &self.info
    }

    /// The path the shortcut was opened from.
    #[inline(always)]
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    pub fn absolute_file_path(&self) -> io::Result<PathBuf> {
        self.fs.absolute(&self.path)
    }

    /// Whether the shortcut file itself still exists.
    pub fn exists(&self) -> bool {
        self.fs.exists(&self.path)
    }

    /// The target path, made absolute unless it already is on Windows.
    pub fn absolute_target_path(&self) -> io::Result<PathBuf> {
        let target = self.info.target_path();
        if is_windows_absolute(target) {
            Ok(PathBuf::from(target))
        } else {
            self.fs.absolute(Path::new(target))
        }
    }

    pub fn target_exists(&self) -> bool {
        self.absolute_target_path()
            .map(|path| self.fs.exists(&path))
            .unwrap_or(false)
    }

    #[inline(always)]
    pub fn target_path(&self) -> &str {
        self.info.target_path()
    }

    #[inline(always)]
    pub fn relative_target_path(&self) -> Option<&str> {
        self.info.relative_target_path()
    }

    #[inline(always)]
    pub fn target_size(&self) -> u32 {
        self.info.target_size()
    }

    #[inline(always)]
    pub fn target_attributes(&self) -> FileAttributes {
        self.info.target_attributes()
    }

    #[inline(always)]
    pub fn target_has_attribute(&self, attribute: FileAttributes) -> bool {
        self.info.target_has_attribute(attribute)
    }

    #[inline(always)]
    pub fn target_is_on_network(&self) -> bool {
        self.info.target_is_on_network()
    }

    #[inline(always)]
    pub fn target_volume_type(&self) -> DriveType {
        self.info.target_volume_type()
    }

    #[inline(always)]
    pub fn target_volume_serial(&self) -> u32 {
        self.info.target_volume_serial()
    }

    #[inline(always)]
    pub fn target_volume_name(&self) -> &str {
        self.info.target_volume_name()
    }

    #[inline(always)]
    pub fn description(&self) -> Option<&str> {
        self.info.description()
    }

    #[inline(always)]
    pub fn working_directory(&self) -> Option<&str> {
        self.info.working_directory()
    }

    #[inline(always)]
    pub fn command_line_args(&self) -> Option<&str> {
        self.info.command_line_args()
    }

    #[inline(always)]
    pub fn icon_path(&self) -> Option<&str> {
        self.info.icon_path()
    }

    #[inline(always)]
    pub fn icon_index(&self) -> i32 {
        self.info.icon_index()
    }

    #[inline(always)]
    pub fn has_custom_icon(&self) -> bool {
        self.info.has_custom_icon()
    }
}

/// Two links are equal when they are the same file; contents are not compared.
impl<F: FileSystem, G: FileSystem> PartialEq<LnkFile<G>> for LnkFile<F> {
    fn eq(&self, other: &LnkFile<G>) -> bool {
        match (self.absolute_file_path(), other.absolute_file_path()) {
            (Ok(a), Ok(b)) => a == b,
            _ => self.path == other.path,
        }
    }
}
