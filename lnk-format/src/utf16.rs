//! UTF-16LE text as stored in shell link string fields.
//!
//! Strings are walked one code point at a time, since a surrogate pair takes
//! two units and a malformed unit only one. Malformed input never fails the
//! decode: each bad unit becomes U+FFFD and decoding carries on with the next.

use std::char::REPLACEMENT_CHARACTER;

use crate::parse::{read_u16, ParseError, ParseResult};

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xd800..=0xdbff;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xdc00..=0xdfff;

const PAYLOAD_MASK: u32 = 0x3ff;
const PAYLOAD_BITS: u32 = 10;
const SUPPLEMENTARY_BASE: u32 = 0x1_0000;

#[inline]
fn replacement(offset: usize, unit: u16) -> ParseResult<char> {
    tracing::warn!(
        offset = format_args!("{:#x}", offset),
        unit = format_args!("{:#06x}", unit),
        "replaced malformed UTF-16 unit"
    );
    Ok((REPLACEMENT_CHARACTER, 2))
}

/// Decode the code point starting at `offset`.
///
/// `limit` is the end of the string in bytes; a surrogate pair is only
/// combined if its low half lies entirely before it. Returns the character and
/// the number of bytes consumed (2 or 4).
pub fn decode_code_point(data: &[u8], offset: usize, limit: usize) -> ParseResult<char> {
    let high = read_u16(data, offset)?;

    if LOW_SURROGATES.contains(&high) {
        return replacement(offset, high);
    }

    if !HIGH_SURROGATES.contains(&high) {
        let c = char::from_u32(u32::from(high)).unwrap_or(REPLACEMENT_CHARACTER);
        return Ok((c, 2));
    }

    let low_offset = offset + 2;
    if low_offset + 2 > limit {
        return replacement(offset, high);
    }

    let low = read_u16(data, low_offset)?;
    if !LOW_SURROGATES.contains(&low) {
        return replacement(offset, high);
    }

    let code_point = (((u32::from(high) & PAYLOAD_MASK) << PAYLOAD_BITS)
        | (u32::from(low) & PAYLOAD_MASK))
        + SUPPLEMENTARY_BASE;

    Ok((
        char::from_u32(code_point).unwrap_or(REPLACEMENT_CHARACTER),
        4,
    ))
}

/// Decode the UTF-16 units in `[start, end)`.
fn decode_span(data: &[u8], start: usize, end: usize) -> Result<String, ParseError> {
    if end > data.len() {
        return Err(ParseError::OutOfRange {
            offset: start,
            width: end.saturating_sub(start),
            len: data.len(),
        });
    }

    let mut text = String::with_capacity(end.saturating_sub(start) / 2);
    let mut cursor = start;
    while cursor + 2 <= end {
        let (c, consumed) = decode_code_point(data, cursor, end)?;
        text.push(c);
        cursor += consumed;
    }

    Ok(text)
}

/// Decode a string whose first two bytes give its length in UTF-16 units.
///
/// The consumed count covers the length prefix and all of the units, so
/// `offset + consumed` is where the next field starts.
pub fn decode_length_prefixed_string(data: &[u8], offset: usize) -> ParseResult<String> {
    let units = read_u16(data, offset)? as usize;
    let byte_len = units * 2;
    let start = offset + 2;
    let end = start
        .checked_add(byte_len)
        .ok_or(ParseError::OutOfRange {
            offset: start,
            width: byte_len,
            len: data.len(),
        })?;

    let text = decode_span(data, start, end)?;
    Ok((text, 2 + byte_len))
}

/// Decode `byte_len` bytes of UTF-16 starting at `offset`.
pub fn decode_fixed_length_string(
    data: &[u8],
    offset: usize,
    byte_len: usize,
) -> Result<String, ParseError> {
    let end = offset
        .checked_add(byte_len)
        .ok_or(ParseError::OutOfRange {
            offset,
            width: byte_len,
            len: data.len(),
        })?;

    decode_span(data, offset, end)
}

/// Decode UTF-16 up to the first NUL unit.
///
/// The consumed count includes the two terminator bytes. A string that runs
/// off the end of the buffer is [`ParseError::OutOfRange`].
pub fn decode_null_terminated_string(data: &[u8], offset: usize) -> ParseResult<String> {
    let mut end = offset;
    while read_u16(data, end)? != 0 {
        end += 2;
    }

    let text = decode_fixed_length_string(data, offset, end - offset)?;
    Ok((text, end - offset + 2))
}
