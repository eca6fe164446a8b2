use crate::attrs::FileAttributes;
use crate::header::FileInfoHeader;
use crate::location::{DriveType, TargetLocation, Volume};
use crate::parse::ParseError;
use crate::strings::StringData;

/// Everything decoded from a shell link file.
///
/// Built in a single pass by [`LnkInfo::decode`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LnkInfo {
    header: FileInfoHeader,
    location: TargetLocation,
    strings: StringData,
}

impl LnkInfo {
    /// Decode the complete contents of a `.lnk` file.
    ///
    /// Either every field is decoded or an error is returned; there is no
    /// partially decoded result.
    pub fn decode(data: &[u8]) -> Result<LnkInfo, ParseError> {
        let header = FileInfoHeader::parse(data)?;
        let location = TargetLocation::parse(data, &header)?;
        let strings = StringData::parse(data, &header)?;

        tracing::debug!(
            bytes = data.len(),
            target = %location.path,
            network = location.is_on_network(),
            "decoded LnkInfo"
        );

        Ok(LnkInfo {
            header,
            location,
            strings,
        })
    }

    #[inline(always)]
    pub fn header(&self) -> &FileInfoHeader {
        &self.header
    }

    #[inline(always)]
    pub fn location(&self) -> &TargetLocation {
        &self.location
    }

    #[inline(always)]
    pub fn strings(&self) -> &StringData {
        &self.strings
    }

    /// The target path exactly as stored in the link.
    #[inline(always)]
    pub fn target_path(&self) -> &str {
        &self.location.path
    }

    #[inline(always)]
    pub fn relative_target_path(&self) -> Option<&str> {
        self.strings.relative_path.as_deref()
    }

    #[inline(always)]
    pub fn target_size(&self) -> u32 {
        self.header.target_size
    }

    #[inline(always)]
    pub fn target_attributes(&self) -> FileAttributes {
        self.header.attributes
    }

    #[inline(always)]
    pub fn target_has_attribute(&self, attribute: FileAttributes) -> bool {
        self.header.attributes.contains(attribute)
    }

    #[inline(always)]
    pub fn target_is_on_network(&self) -> bool {
        self.location.is_on_network()
    }

    #[inline(always)]
    pub fn target_volume(&self) -> &Volume {
        &self.location.volume
    }

    #[inline(always)]
    pub fn target_volume_type(&self) -> DriveType {
        self.location.volume.drive_type()
    }

    #[inline(always)]
    pub fn target_volume_serial(&self) -> u32 {
        self.location.volume.serial()
    }

    #[inline(always)]
    pub fn target_volume_name(&self) -> &str {
        self.location.volume.name()
    }

    #[inline(always)]
    pub fn description(&self) -> Option<&str> {
        self.strings.description.as_deref()
    }

    #[inline(always)]
    pub fn working_directory(&self) -> Option<&str> {
        self.strings.working_directory.as_deref()
    }

    #[inline(always)]
    pub fn command_line_args(&self) -> Option<&str> {
        self.strings.arguments.as_deref()
    }

    #[inline(always)]
    pub fn icon_path(&self) -> Option<&str> {
        self.strings.icon_location.as_deref()
    }

    #[inline(always)]
    pub fn icon_index(&self) -> i32 {
        self.strings.icon_index
    }

    /// True when the link names an icon file; an empty icon path does not count.
    #[inline(always)]
    pub fn has_custom_icon(&self) -> bool {
        self.icon_path().map_or(false, |path| !path.is_empty())
    }
}
