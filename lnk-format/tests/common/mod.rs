//! Builds synthetic `.lnk` files laid out the way Windows writes them.

#![allow(dead_code)]

use lnk_format::{FileAttributes, LinkFlags};

pub const SERIAL: u32 = 1_852_545_763;
pub const HARD_DRIVE: u32 = 3;
pub const REMOVABLE: u32 = 2;

/// Shell link class identifier, 00021401-0000-0000-C000-000000000046.
const LINK_CLSID: [u8; 16] = [
    0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
];

pub enum Target {
    Local {
        drive_type: u32,
        serial: u32,
        label: String,
        path: String,
    },
    Network {
        share: String,
        drive: String,
        remainder: String,
    },
}

pub struct LinkBuilder {
    pub unicode: bool,
    /// Latin-1 path gets one `?` per character rather than per UTF-16 unit.
    pub placeholder_per_char: bool,
    pub attributes: FileAttributes,
    pub size: u32,
    pub icon_index: u32,
    pub id_list: Vec<u8>,
    pub target: Target,
    pub description: Option<Vec<u16>>,
    pub relative_path: Option<Vec<u16>>,
    pub working_directory: Option<Vec<u16>>,
    pub arguments: Option<Vec<u16>>,
    pub icon_location: Option<Vec<u16>>,
}

fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

fn put_u16(data: &mut [u8], offset: usize, value: u16) {
    data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

fn put_u32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Latin-1 where possible, `?` for every UTF-16 unit that is not.
pub fn ansi(s: &str) -> Vec<u8> {
    s.encode_utf16()
        .map(|unit| if unit <= 0xff { unit as u8 } else { b'?' })
        .collect()
}

/// Latin-1 where possible, a single `?` for every character that is not.
pub fn ansi_per_char(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if (c as u32) <= 0xff { c as u8 } else { b'?' })
        .collect()
}

fn utf16z(s: &str) -> Vec<u8> {
    s.encode_utf16()
        .chain(std::iter::once(0))
        .flat_map(|unit| unit.to_le_bytes())
        .collect()
}

impl LinkBuilder {
    /// A link to `path` on the local hard drive "Windows-SSD".
    pub fn local(path: &str) -> LinkBuilder {
        LinkBuilder::with_target(Target::Local {
            drive_type: HARD_DRIVE,
            serial: SERIAL,
            label: "Windows-SSD".into(),
            path: path.into(),
        })
    }

    pub fn network(share: &str, drive: &str, remainder: &str) -> LinkBuilder {
        LinkBuilder::with_target(Target::Network {
            share: share.into(),
            drive: drive.into(),
            remainder: remainder.into(),
        })
    }

    fn with_target(target: Target) -> LinkBuilder {
        LinkBuilder {
            unicode: true,
            placeholder_per_char: false,
            attributes: FileAttributes::ARCHIVE,
            size: 0,
            icon_index: 0,
            // Contents are never interpreted, only skipped.
            id_list: vec![0x14, 0x00, 0x1f, 0x50, 0xe0, 0x4f, 0xd0, 0x20, 0xea, 0x3a, 0x69, 0x10, 0xa2, 0xd8, 0x08, 0x00, 0x2b, 0x30, 0x30, 0x9d, 0x00, 0x00],
            target,
            description: None,
            relative_path: None,
            working_directory: None,
            arguments: None,
            icon_location: None,
        }
    }

    pub fn volume(mut self, drive_type: u32, serial: u32, label: &str) -> LinkBuilder {
        if let Target::Local {
            drive_type: d,
            serial: s,
            label: l,
            ..
        } = &mut self.target
        {
            *d = drive_type;
            *s = serial;
            *l = label.into();
        }
        self
    }

    pub fn legacy(mut self) -> LinkBuilder {
        self.unicode = false;
        self
    }

    pub fn one_placeholder_per_char(mut self) -> LinkBuilder {
        self.placeholder_per_char = true;
        self
    }

    pub fn size(mut self, size: u32) -> LinkBuilder {
        self.size = size;
        self
    }

    pub fn attributes(mut self, attributes: FileAttributes) -> LinkBuilder {
        self.attributes = attributes;
        self
    }

    pub fn description(mut self, s: &str) -> LinkBuilder {
        self.description = Some(units(s));
        self
    }

    pub fn description_units(mut self, raw: &[u16]) -> LinkBuilder {
        self.description = Some(raw.to_vec());
        self
    }

    pub fn relative_path(mut self, s: &str) -> LinkBuilder {
        self.relative_path = Some(units(s));
        self
    }

    pub fn working_directory(mut self, s: &str) -> LinkBuilder {
        self.working_directory = Some(units(s));
        self
    }

    pub fn arguments(mut self, s: &str) -> LinkBuilder {
        self.arguments = Some(units(s));
        self
    }

    pub fn icon(mut self, location: &str, index: u32) -> LinkBuilder {
        self.icon_location = Some(units(location));
        self.icon_index = index;
        self
    }

    /// Absolute offset of the LinkInfo structure in the built file.
    pub fn link_info_start(&self) -> usize {
        0x4e + self.id_list.len()
    }

    pub fn build(&self) -> Vec<u8> {
        let strings = [
            (LinkFlags::HAS_DESCRIPTION, &self.description),
            (LinkFlags::HAS_RELATIVE_PATH, &self.relative_path),
            (LinkFlags::HAS_WORKING_DIRECTORY, &self.working_directory),
            (LinkFlags::HAS_ARGUMENTS, &self.arguments),
            (LinkFlags::HAS_ICON_LOCATION, &self.icon_location),
        ];

        let mut flags = LinkFlags::HAS_ID_LIST | LinkFlags::HAS_LINK_INFO | LinkFlags::IS_UNICODE;
        for (flag, value) in &strings {
            if value.is_some() {
                flags |= *flag;
            }
        }

        let mut data = vec![0u8; 0x4c];
        put_u32(&mut data, 0x00, 0x4c);
        data[0x04..0x14].copy_from_slice(&LINK_CLSID);
        data[0x14] = flags.bits();
        put_u16(&mut data, 0x18, self.attributes.bits());
        put_u32(&mut data, 0x34, self.size);
        put_u32(&mut data, 0x38, self.icon_index);
        put_u32(&mut data, 0x3c, 1);

        data.extend_from_slice(&(self.id_list.len() as u16).to_le_bytes());
        data.extend_from_slice(&self.id_list);
        data.extend(self.link_info());

        for (_, value) in &strings {
            if let Some(units) = value {
                data.extend_from_slice(&(units.len() as u16).to_le_bytes());
                data.extend(units.iter().flat_map(|unit| unit.to_le_bytes()));
            }
        }

        // Terminal extra data block.
        data.extend_from_slice(&[0u8; 4]);
        data
    }

    fn link_info(&self) -> Vec<u8> {
        let header_size = if self.unicode { 0x24 } else { 0x1c };
        let mut info = vec![0u8; header_size];
        put_u32(&mut info, 0x04, header_size as u32);

        match &self.target {
            Target::Local {
                drive_type,
                serial,
                label,
                path,
            } => {
                put_u32(&mut info, 0x08, 0x01);

                let volume = info.len() as u32;
                put_u32(&mut info, 0x0c, volume);
                let mut volume_id = vec![0u8; 0x10];
                put_u32(&mut volume_id, 0x04, *drive_type);
                put_u32(&mut volume_id, 0x08, *serial);
                put_u32(&mut volume_id, 0x0c, 0x10);
                volume_id.extend(ansi(label));
                volume_id.push(0);
                let volume_size = volume_id.len() as u32;
                put_u32(&mut volume_id, 0x00, volume_size);
                info.extend(volume_id);

                let base_path = info.len() as u32;
                put_u32(&mut info, 0x10, base_path);
                if self.placeholder_per_char {
                    info.extend(ansi_per_char(path));
                } else {
                    info.extend(ansi(path));
                }
                info.push(0);

                // Empty common path suffix.
                let suffix = info.len() as u32;
                put_u32(&mut info, 0x18, suffix);
                info.push(0);

                if self.unicode {
                    let base_path = info.len() as u32;
                    put_u32(&mut info, 0x1c, base_path);
                    info.extend(utf16z(path));
                    let suffix = info.len() as u32;
                    put_u32(&mut info, 0x20, suffix);
                    info.extend_from_slice(&[0, 0]);
                }
            }
            Target::Network {
                share,
                drive,
                remainder,
            } => {
                put_u32(&mut info, 0x08, 0x02);

                let link = info.len() as u32;
                put_u32(&mut info, 0x14, link);
                let mut network = vec![0u8; 0x14];
                put_u32(&mut network, 0x04, 0x03);
                put_u32(&mut network, 0x08, 0x14);
                put_u32(&mut network, 0x10, 0x0002_0000);
                network.extend(ansi(share));
                network.push(0);
                let device = network.len() as u32;
                put_u32(&mut network, 0x0c, device);
                network.extend(ansi(drive));
                network.push(0);
                let network_size = network.len() as u32;
                put_u32(&mut network, 0x00, network_size);
                info.extend(network);

                let suffix = info.len() as u32;
                put_u32(&mut info, 0x18, suffix);
                info.extend(ansi(remainder));
                info.push(0);

                if self.unicode {
                    let suffix = info.len() as u32;
                    put_u32(&mut info, 0x20, suffix);
                    info.extend(utf16z(remainder));
                }
            }
        }

        let size = info.len() as u32;
        put_u32(&mut info, 0x00, size);
        info
    }
}
