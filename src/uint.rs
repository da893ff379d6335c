//! This module provides base primitives for encoding and decoding unsigned
//! integers.
//!
//! It centralizes the knowledge that the byte format is little-endian.
//! Integers narrower than 32 bits are carried around as `u32` values and
//! masked down to their encoded width on serialization.

use std::convert::TryInto;

use bytes::{BufMut, BytesMut};

use crate::error::CodecError;

/// Length of an encoded 32-bit integer in bytes.
pub const U32_BYTE_LEN: usize = 4;

/// Attempts to read a little-endian 32-bit integer at the given offset.
///
/// Fails with `IndexOutOfRange` when fewer than 4 bytes are available at
/// `offset`, including when `offset` itself lies past the end of the buffer.
pub fn read_u32_at(bytes: &[u8], offset: usize) -> Result<u32, CodecError> {
    let end = match offset.checked_add(U32_BYTE_LEN) {
        Some(end) if end <= bytes.len() => end,
        _ => {
            return Err(CodecError::IndexOutOfRange {
                offset,
                wanted: U32_BYTE_LEN,
                length: bytes.len(),
            });
        }
    };
    // The conversion from slice to fixed-size array cannot fail, because
    // the bounds check above guarantees the slice is of size 4.
    let array: [u8; U32_BYTE_LEN] = bytes[offset..end].try_into().unwrap();
    Ok(u32::from_le_bytes(array))
}

/// Attempts to serialize `value` into `width` little-endian bytes.
///
/// The value is masked down to the requested width, so upper bytes are
/// silently dropped. Only widths of 1, 2 and 4 bytes are supported; anything
/// else fails with `UnsupportedWidth`.
pub fn encode_uint(value: u32, width: usize) -> Result<BytesMut, CodecError> {
    let mut buffer = BytesMut::with_capacity(width);
    match width {
        1 => buffer.put_u8(value as u8),
        2 => buffer.put_u16_le(value as u16),
        4 => buffer.put_u32_le(value),
        _ => return Err(CodecError::UnsupportedWidth { width }),
    }
    Ok(buffer)
}

/// Attempts to read a little-endian unsigned integer spanning the whole
/// buffer.
///
/// The width is inferred from the buffer length, which must be 1, 2 or 4
/// bytes; anything else fails with `UnsupportedWidth`.
pub fn decode_uint(bytes: &[u8]) -> Result<u32, CodecError> {
    match bytes.len() {
        1 => Ok(bytes[0] as u32),
        2 => {
            // Cannot fail, the buffer is of the exact right length.
            let array: [u8; 2] = bytes.try_into().unwrap();
            Ok(u16::from_le_bytes(array) as u32)
        }
        4 => {
            let array: [u8; U32_BYTE_LEN] = bytes.try_into().unwrap();
            Ok(u32::from_le_bytes(array))
        }
        width => Err(CodecError::UnsupportedWidth { width }),
    }
}

/*=======*
 * TESTS *
 *=======*/
