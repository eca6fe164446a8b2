//! The optional string fields that follow the LinkInfo structure.

use crate::attrs::LinkFlags;
use crate::header::{offsets, FileInfoHeader};
use crate::parse::{read_u32, resolve_offset, ParseError};
use crate::utf16::decode_length_prefixed_string;

/// Description, relative path, working directory, arguments and icon.
///
/// Each field is present only when its flag is set in the header. The fields
/// are stored back to back in a fixed order, so an absent field takes no space
/// and a present one must be decoded to find the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringData {
    pub description: Option<String>,
    pub relative_path: Option<String>,
    pub working_directory: Option<String>,
    pub arguments: Option<String>,
    pub icon_location: Option<String>,
    /// Index of the icon within `icon_location`; 0 without a custom icon.
    pub icon_index: i32,
}

fn read_field(
    data: &[u8],
    cursor: &mut usize,
    flags: LinkFlags,
    flag: LinkFlags,
    name: &'static str,
) -> Result<Option<String>, ParseError> {
    if !flags.contains(flag) {
        return Ok(None);
    }

    let start = *cursor;
    let (value, consumed) = decode_length_prefixed_string(data, start)?;
    *cursor += consumed;

    tracing::debug!(
        start = format_args!("{:#x}", start),
        end = format_args!("{:#x}", *cursor),
        bytes = consumed,
        field = name,
        %value,
        "decoded string field"
    );

    Ok(Some(value))
}

impl StringData {
    pub fn parse(data: &[u8], header: &FileInfoHeader) -> Result<StringData, ParseError> {
        let link_info_size = read_u32(data, header.start + offsets::LINK_INFO_SIZE)?;
        let mut cursor = resolve_offset(data, header.start, link_info_size)?;
        let flags = header.flags;

        let description = read_field(data, &mut cursor, flags, LinkFlags::HAS_DESCRIPTION, "description")?;
        let relative_path = read_field(data, &mut cursor, flags, LinkFlags::HAS_RELATIVE_PATH, "relative_path")?;
        let working_directory = read_field(
            data,
            &mut cursor,
            flags,
            LinkFlags::HAS_WORKING_DIRECTORY,
            "working_directory",
        )?;
        let arguments = read_field(data, &mut cursor, flags, LinkFlags::HAS_ARGUMENTS, "arguments")?;
        let icon_location = read_field(data, &mut cursor, flags, LinkFlags::HAS_ICON_LOCATION, "icon_location")?;

        // Stored in the fixed header, not in the string data.
        let icon_index = match icon_location {
            Some(_) => read_u32(data, offsets::ICON_INDEX)? as i32,
            None => 0,
        };

        Ok(StringData {
            description,
            relative_path,
            working_directory,
            arguments,
            icon_location,
            icon_index,
        })
    }
}
