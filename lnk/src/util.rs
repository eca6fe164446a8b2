use lnk_format::FileAttributes;

pub fn format_size(bytes: u32) -> String {
    use humansize::{file_size_opts as options, FileSize};

    bytes
        .file_size(options::BINARY)
        .unwrap_or_else(|_| format!("{} B", bytes))
}

/// Volume serial the way `vol` prints it, e.g. `6E6B-9AE3`.
pub fn format_serial(serial: u32) -> String {
    format!("{:04X}-{:04X}", serial >> 16, serial & 0xffff)
}

pub fn format_attributes(attributes: FileAttributes) -> String {
    let names = attributes
        .iter_names()
        .map(|(name, _)| name)
        .collect::<Vec<_>>();

    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(" | ")
    }
}
