//! The fixed shell link header and the start of the LinkInfo structure.

use crate::attrs::{FileAttributes, LinkFlags};
use crate::parse::{read_u16, read_u32, read_u8, resolve_offset, ParseError};

/// Byte offsets of the fields the decoder reads.
pub mod offsets {
    // Absolute, from the start of the file.
    pub const MAGIC: usize = 0x00;
    pub const FLAGS: usize = 0x14;
    pub const ATTRIBUTES: usize = 0x18;
    pub const TARGET_SIZE: usize = 0x34;
    pub const ICON_INDEX: usize = 0x38;
    pub const ID_LIST_SIZE: usize = 0x4c;
    pub const ID_LIST: usize = 0x4e;

    // Relative to the start of the LinkInfo structure.
    pub const LINK_INFO_SIZE: usize = 0x00;
    pub const LINK_INFO_HEADER_SIZE: usize = 0x04;
    pub const LINK_INFO_FLAGS: usize = 0x08;
    pub const VOLUME_ID: usize = 0x0c;
    pub const LOCAL_BASE_PATH: usize = 0x10;
    pub const NETWORK_LINK: usize = 0x14;
    pub const LOCAL_BASE_PATH_UNICODE: usize = 0x1c;
}

/// First byte of every shell link file (the low byte of the header size, 0x4C).
pub const MAGIC: u8 = 0x4c;

/// LinkInfo header size of files that store the target path in Latin-1 only.
pub const TAG_LEGACY: u8 = 0x1c;

/// LinkInfo header size of files that also carry a UTF-16 copy of the path.
pub const TAG_UNICODE: u8 = 0x24;

/// How the LinkInfo structure encodes the local target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkInfoFormat {
    Legacy,
    Unicode,
}

impl LinkInfoFormat {
    fn from_tag(tag: u8) -> Option<LinkInfoFormat> {
        match tag {
            TAG_LEGACY => Some(LinkInfoFormat::Legacy),
            TAG_UNICODE => Some(LinkInfoFormat::Unicode),
            _ => None,
        }
    }
}

/// Scalars taken from the header, plus where the LinkInfo structure begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileInfoHeader {
    /// Absolute offset of the LinkInfo structure.
    pub start: usize,
    pub format: LinkInfoFormat,
    pub flags: LinkFlags,
    pub attributes: FileAttributes,
    pub target_size: u32,
}

impl FileInfoHeader {
    /// Validate the magic byte and LinkInfo tag and collect the header scalars.
    pub fn parse(data: &[u8]) -> Result<FileInfoHeader, ParseError> {
        let magic = read_u8(data, offsets::MAGIC)?;
        if magic != MAGIC {
            tracing::debug!(magic = format_args!("{:#04x}", magic), "bad magic byte");
            return Err(ParseError::InvalidFormat("not a shell link file"));
        }

        let id_list_size = read_u16(data, offsets::ID_LIST_SIZE)?;
        let start = resolve_offset(data, offsets::ID_LIST, u32::from(id_list_size))?;

        let tag = read_u8(data, start + offsets::LINK_INFO_HEADER_SIZE)?;
        let format = LinkInfoFormat::from_tag(tag).ok_or_else(|| {
            tracing::debug!(tag = format_args!("{:#04x}", tag), "unknown LinkInfo tag");
            ParseError::InvalidFormat("unrecognized file info header")
        })?;

        let attributes = FileAttributes::from_bits_retain(read_u16(data, offsets::ATTRIBUTES)?);
        let target_size = read_u32(data, offsets::TARGET_SIZE)?;
        let flags = LinkFlags::from_bits_retain(read_u8(data, offsets::FLAGS)?);

        tracing::debug!(
            start = format_args!("{:#x}", start),
            ?format,
            flags = format_args!("{:#04x}", flags.bits()),
            attributes = format_args!("{:#06x}", attributes.bits()),
            target_size,
            "parsed FileInfoHeader"
        );

        Ok(FileInfoHeader {
            start,
            format,
            flags,
            attributes,
            target_size,
        })
    }
}
