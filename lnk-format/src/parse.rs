//! Sans-IO reading primitives for shell link data.
//!
//! Every function works on the complete file contents and an absolute offset
//! into it. Nothing is ever read past the end of the slice: a read that would
//! do so fails with [`ParseError::OutOfRange`] instead.
//!
//! Variable-length readers return `(value, bytes_consumed)`, leaving the caller
//! to advance its own cursor.

use byteorder::{ByteOrder, LittleEndian};

/// Error type for decoding operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A read of `width` bytes at `offset` does not fit in the buffer.
    #[error("read of {width} bytes at offset {offset:#x} is out of range (buffer is {len} bytes)")]
    OutOfRange {
        offset: usize,
        width: usize,
        len: usize,
    },

    /// The data does not follow the shell link layout.
    #[error("invalid format: {0}")]
    InvalidFormat(&'static str),
}

pub type ParseResult<T> = Result<(T, usize), ParseError>;

#[inline]
fn span(data: &[u8], offset: usize, width: usize) -> Result<&[u8], ParseError> {
    offset
        .checked_add(width)
        .and_then(|end| data.get(offset..end))
        .ok_or(ParseError::OutOfRange {
            offset,
            width,
            len: data.len(),
        })
}

/// Read a single byte.
#[inline]
pub fn read_u8(data: &[u8], offset: usize) -> Result<u8, ParseError> {
    span(data, offset, 1).map(|bytes| bytes[0])
}

/// Read a little-endian u16.
#[inline]
pub fn read_u16(data: &[u8], offset: usize) -> Result<u16, ParseError> {
    span(data, offset, 2).map(LittleEndian::read_u16)
}

/// Read a little-endian u32.
#[inline]
pub fn read_u32(data: &[u8], offset: usize) -> Result<u32, ParseError> {
    span(data, offset, 4).map(LittleEndian::read_u32)
}

/// Add a relative pointer read from the file to its base offset.
#[inline]
pub fn resolve_offset(data: &[u8], base: usize, relative: u32) -> Result<usize, ParseError> {
    base.checked_add(relative as usize)
        .ok_or(ParseError::OutOfRange {
            offset: base,
            width: relative as usize,
            len: data.len(),
        })
}

/// Offset of a field `field` bytes into a structure that starts at `base`.
#[inline]
pub fn field_offset(data: &[u8], base: usize, field: usize) -> Result<usize, ParseError> {
    base.checked_add(field).ok_or(ParseError::OutOfRange {
        offset: base,
        width: field,
        len: data.len(),
    })
}

/// Read a null-terminated string of Latin-1 bytes, converting it to UTF-8.
///
/// The consumed byte count includes the terminator, so `offset + consumed` is
/// the first byte after the string.
pub fn read_latin1_cstr(data: &[u8], offset: usize) -> ParseResult<String> {
    let out_of_range = |width| ParseError::OutOfRange {
        offset,
        width,
        len: data.len(),
    };

    let tail = data.get(offset..).ok_or_else(|| out_of_range(1))?;
    let nul = tail
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| out_of_range(tail.len() + 1))?;

    // `char::from(u8)` is exactly the Latin-1 code point of the byte.
    let s = tail[..nul].iter().copied().map(char::from).collect::<String>();

    Ok((s, nul + 1))
}
