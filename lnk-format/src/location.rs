//! Volume and target path, decoded from the LinkInfo structure.
//!
//! A target lives either on a local volume (drive type, serial number and
//! label) or on a network share. The flag at `start + 8` picks which of the two
//! sub-structures is read; exactly one of them is ever decoded.

use std::fmt;

use crate::header::{offsets, FileInfoHeader, LinkInfoFormat};
use crate::parse::{field_offset, read_latin1_cstr, read_u32, read_u8, resolve_offset, ParseError};
use crate::utf16::decode_null_terminated_string;

/// LinkInfo flag set when the target is reached through a network share.
const NETWORK_LINK_FLAG: u8 = 0x02;

// Within a VolumeID structure.
const VOLUME_DRIVE_TYPE: usize = 0x04;
const VOLUME_SERIAL: usize = 0x08;
const VOLUME_LABEL: usize = 0x10;

// Within a CommonNetworkRelativeLink structure.
const NETWORK_SHARE_NAME: usize = 0x14;

/// Kind of drive the target volume was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveType {
    Unknown,
    NoRootDirectory,
    Removable,
    HardDrive,
    NetworkDrive,
    CdRom,
    RamDrive,
    Other(u32),
}

impl From<u32> for DriveType {
    fn from(value: u32) -> Self {
        use DriveType::*;

        match value {
            0 => Unknown,
            1 => NoRootDirectory,
            2 => Removable,
            3 => HardDrive,
            4 => NetworkDrive,
            5 => CdRom,
            6 => RamDrive,
            other => Other(other),
        }
    }
}

impl fmt::Display for DriveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DriveType::*;

        let s = match self {
            Unknown => "unknown",
            NoRootDirectory => "no root directory",
            Removable => "removable",
            HardDrive => "hard drive",
            NetworkDrive => "network drive",
            CdRom => "CD-ROM",
            RamDrive => "RAM drive",
            Other(value) => return write!(f, "unknown drive type ({})", value),
        };

        write!(f, "{}", s)
    }
}

/// The volume the target resides on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Volume {
    Local {
        drive_type: DriveType,
        serial: u32,
        label: String,
    },
    Network {
        share_name: String,
    },
}

impl Volume {
    #[inline(always)]
    pub fn drive_type(&self) -> DriveType {
        match self {
            Volume::Local { drive_type, .. } => *drive_type,
            Volume::Network { .. } => DriveType::NetworkDrive,
        }
    }

    /// Serial number of a local volume; always 0 for network shares.
    #[inline(always)]
    pub fn serial(&self) -> u32 {
        match self {
            Volume::Local { serial, .. } => *serial,
            Volume::Network { .. } => 0,
        }
    }

    /// Volume label, or the share name for network targets.
    #[inline(always)]
    pub fn name(&self) -> &str {
        match self {
            Volume::Local { label, .. } => label,
            Volume::Network { share_name } => share_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLocation {
    pub volume: Volume,
    pub path: String,
}

impl TargetLocation {
    #[inline(always)]
    pub fn is_on_network(&self) -> bool {
        matches!(self.volume, Volume::Network { .. })
    }

    pub fn parse(data: &[u8], header: &FileInfoHeader) -> Result<TargetLocation, ParseError> {
        let start = header.start;
        let flags = read_u8(data, start + offsets::LINK_INFO_FLAGS)?;

        let location = if flags & NETWORK_LINK_FLAG != 0 {
            parse_network(data, start)?
        } else {
            parse_local(data, header)?
        };

        tracing::debug!(
            start = format_args!("{:#x}", start),
            network = location.is_on_network(),
            volume = location.volume.name(),
            path = %location.path,
            "parsed TargetLocation"
        );

        Ok(location)
    }
}

fn parse_network(data: &[u8], start: usize) -> Result<TargetLocation, ParseError> {
    let volume_offset = resolve_offset(data, start, read_u32(data, start + offsets::NETWORK_LINK)?)?;

    let mut cursor = field_offset(data, volume_offset, NETWORK_SHARE_NAME)?;
    let (share_name, consumed) = read_latin1_cstr(data, cursor)?;
    cursor += consumed;
    let (drive, consumed) = read_latin1_cstr(data, cursor)?;
    cursor += consumed;
    let (remainder, _) = read_latin1_cstr(data, cursor)?;

    Ok(TargetLocation {
        volume: Volume::Network { share_name },
        path: format!("{}\\{}", drive, remainder),
    })
}

/// Find the UTF-16 copy of the base path, which follows the Latin-1 copy.
///
/// Files written by Windows put the empty common path suffix between the two
/// copies; its single NUL byte is skipped. The pointer at `start + 0x1c` is
/// only compared against the result.
fn unicode_path_offset(
    data: &[u8],
    start: usize,
    latin1_end: usize,
) -> Result<usize, ParseError> {
    let mut offset = latin1_end;
    if read_u8(data, offset)? == 0 {
        offset += 1;
    }

    let pointer = read_u32(data, start + offsets::LOCAL_BASE_PATH_UNICODE)?;
    if pointer != 0 && start.checked_add(pointer as usize) != Some(offset) {
        tracing::debug!(
            offset = format_args!("{:#x}", offset),
            pointer = format_args!("{:#x}", pointer),
            "Unicode path pointer does not match the path position"
        );
    }

    Ok(offset)
}

fn parse_local(data: &[u8], header: &FileInfoHeader) -> Result<TargetLocation, ParseError> {
    let start = header.start;

    let volume_offset = resolve_offset(data, start, read_u32(data, start + offsets::VOLUME_ID)?)?;
    let drive_type = DriveType::from(read_u32(data, field_offset(data, volume_offset, VOLUME_DRIVE_TYPE)?)?);
    let serial = read_u32(data, field_offset(data, volume_offset, VOLUME_SERIAL)?)?;
    let (label, _) = read_latin1_cstr(data, field_offset(data, volume_offset, VOLUME_LABEL)?)?;

    let path_offset = resolve_offset(data, start, read_u32(data, start + offsets::LOCAL_BASE_PATH)?)?;
    let (mut path, consumed) = read_latin1_cstr(data, path_offset)?;

    if header.format == LinkInfoFormat::Unicode {
        let unicode_offset = unicode_path_offset(data, start, path_offset + consumed)?;
        // Runs to its own terminator: the Latin-1 copy may hold a single `?`
        // for a character that takes a surrogate pair here.
        let (unicode, _) = decode_null_terminated_string(data, unicode_offset)?;
        let units = unicode.encode_utf16().count();
        if units != consumed - 1 {
            tracing::debug!(latin1 = consumed - 1, units, "path copies differ in length");
        }
        path = unicode;
    }

    Ok(TargetLocation {
        volume: Volume::Local {
            drive_type,
            serial,
            label,
        },
        path,
    })
}
