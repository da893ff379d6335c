//! This module bridges byte buffers into the pair representation of 64-bit
//! values.
//!
//! A 64-bit value is carried as two 32-bit words `(low, high)` so that
//! numeric runtimes without full 64-bit integer precision can hold it
//! losslessly. Buffers handed to the decoder present the value big-endian,
//! most significant byte first; the pair itself is laid out as two
//! consecutive little-endian words, low word first.

use crate::error::CodecError;
use crate::uint::{read_u32_at, U32_BYTE_LEN};

/// Length of an encoded 64-bit integer in bytes.
pub const U64_BYTE_LEN: usize = 8;

/// Attempts to decode a big-endian 8-byte buffer into a `(low, high)` pair
/// of 32-bit words.
///
/// The input is reversed into little-endian order before being split into
/// two words. Fails with `InvalidLength` when the buffer is not exactly 8
/// bytes long.
pub fn decode_u64_pair(bytes: &[u8]) -> Result<(u32, u32), CodecError> {
    if bytes.len() != U64_BYTE_LEN {
        return Err(CodecError::InvalidLength {
            expected: U64_BYTE_LEN,
            actual: bytes.len(),
        });
    }

    let mut reversed = [0u8; U64_BYTE_LEN];
    for (slot, &byte) in reversed.iter_mut().zip(bytes.iter().rev()) {
        *slot = byte;
    }

    // The reads cannot fail, `reversed` is of the exact right length.
    let low = read_u32_at(&reversed, 0).unwrap();
    let high = read_u32_at(&reversed, U32_BYTE_LEN).unwrap();
    Ok((low, high))
}

/// Encodes a `(low, high)` pair as 8 little-endian bytes, low word first.
///
/// This writes the pair's internal layout directly; it is NOT the
/// byte-for-byte inverse of [`decode_u64_pair`], which reverses its
/// big-endian input first. Reversing this function's output before decoding
/// yields the original pair back.
pub fn encode_u64_pair(pair: (u32, u32)) -> [u8; U64_BYTE_LEN] {
    let (low, high) = pair;
    let mut buffer = [0u8; U64_BYTE_LEN];
    buffer[..U32_BYTE_LEN].copy_from_slice(&low.to_le_bytes());
    buffer[U32_BYTE_LEN..].copy_from_slice(&high.to_le_bytes());
    buffer
}

/*=======*
 * TESTS *
 *=======*/
