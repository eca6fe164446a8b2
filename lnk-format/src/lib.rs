//! Decoding of Windows Shell Link (`.lnk`) files.
//!
//! Use [LnkFile][LnkFile] to open a shortcut from disk, or
//! [LnkInfo::decode][LnkInfo::decode] for bytes that are already in memory.
//! The low-level readers in [parse], [utf16], [header], [location] and
//! [strings] work on plain byte slices and never perform I/O.

mod attrs;
mod file;
pub mod fs;
pub mod header;
mod info;
pub mod location;
pub mod parse;
pub mod strings;
pub mod utf16;

pub use attrs::{FileAttributes, LinkFlags};
pub use file::{LnkFile, OpenError};
pub use fs::{FileSystem, StdFileSystem};
pub use header::{FileInfoHeader, LinkInfoFormat};
pub use info::LnkInfo;
pub use location::{DriveType, TargetLocation, Volume};
pub use parse::{ParseError, ParseResult};
pub use strings::StringData;
