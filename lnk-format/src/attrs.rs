//! Bit flag sets stored in the shell link header.

use bitflags::bitflags;

bitflags! {
    /// File attributes of the link target, as recorded when the shortcut was saved.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FileAttributes: u16 {
        const READ_ONLY = 0x0001;
        const HIDDEN = 0x0002;
        const SYSTEM = 0x0004;
        const VOLUME_LABEL = 0x0008;
        const DIRECTORY = 0x0010;
        const ARCHIVE = 0x0020;
        /// Encrypted with NTFS EFS.
        const ENCRYPTED = 0x0040;
        const NORMAL = 0x0080;
        const TEMPORARY = 0x0100;
        const SPARSE = 0x0200;
        const REPARSE_POINT = 0x0400;
        const COMPRESSED = 0x0800;
        const OFFLINE = 0x1000;
    }
}

bitflags! {
    /// Low byte of the link flags; says which optional structures follow the header.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LinkFlags: u8 {
        const HAS_ID_LIST = 0x01;
        const HAS_LINK_INFO = 0x02;
        const HAS_DESCRIPTION = 0x04;
        const HAS_RELATIVE_PATH = 0x08;
        const HAS_WORKING_DIRECTORY = 0x10;
        const HAS_ARGUMENTS = 0x20;
        const HAS_ICON_LOCATION = 0x40;
        const IS_UNICODE = 0x80;
    }
}
