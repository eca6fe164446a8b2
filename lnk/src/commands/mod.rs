pub mod info;
pub mod target;

pub use info::run as info;
pub use target::run as target;

use std::path::Path;

use lnk_format::LnkFile;

use crate::error::{Error, Result};

fn open(path: &Path) -> Result<LnkFile> {
    LnkFile::open(path).map_err(|source| Error::OpenShortcut {
        path: path.to_path_buf(),
        source,
    })
}
