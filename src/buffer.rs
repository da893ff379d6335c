//! This module provides helpers for building and splitting raw byte buffers,
//! along with signed reinterpretation of byte values.

use bytes::{BufMut, BytesMut};

use crate::error::CodecError;

/// Returns a new buffer holding `a`'s bytes followed by `b`'s bytes.
///
/// Neither input is mutated; the result is owned by the caller.
pub fn concat(a: &[u8], b: &[u8]) -> BytesMut {
    let mut buffer = BytesMut::with_capacity(a.len() + b.len());
    buffer.put_slice(a);
    buffer.put_slice(b);
    buffer
}

/// Attempts to copy the first `size` bytes of `bytes` into a new buffer.
///
/// Fails with `OutOfRange` when `size` exceeds the buffer length.
pub fn take_prefix(bytes: &[u8], size: usize) -> Result<Vec<u8>, CodecError> {
    if size > bytes.len() {
        return Err(CodecError::OutOfRange {
            value: size as u64,
            limit: bytes.len() as u64,
        });
    }
    Ok(bytes[..size].to_vec())
}

/// Attempts to reinterpret the bit pattern of an 8-bit unsigned value as a
/// two's-complement signed byte.
///
/// Fails with `OutOfRange` when `value` does not fit in 8 bits.
pub fn u8_to_i8(value: u32) -> Result<i8, CodecError> {
    if value > u8::MAX as u32 {
        return Err(CodecError::OutOfRange {
            value: value as u64,
            limit: u8::MAX as u64,
        });
    }
    Ok(value as u8 as i8)
}

/*=======*
 * TESTS *
 *=======*/

#[cfg(test)]
mod tests {
    use super::{concat, take_prefix, u8_to_i8};
    use crate::error::CodecError;

    // Declared here because assert_eq!(bytes, &[]) fails to infer types.
    const EMPTY_BYTES: &'static [u8] = &[];

    #[test]
    fn concat_bytes() {
        assert_eq!(&concat(&[1, 2], &[3, 4])[..], &[1, 2, 3, 4]);
        assert_eq!(&concat(&[], &[1])[..], &[1]);
        assert_eq!(&concat(&[1], &[])[..], &[1]);
        assert_eq!(&concat(&[], &[])[..], EMPTY_BYTES);
    }

    #[test]
    fn concat_leaves_inputs_untouched() {
        let a = vec![1, 2];
        let b = vec![3, 4];

        let buffer = concat(&a, &b);

        assert_eq!(&buffer[..], &[1, 2, 3, 4]);
        assert_eq!(a, vec![1, 2]);
        assert_eq!(b, vec![3, 4]);
    }

    #[test]
    fn take_prefix_in_bounds() {
        assert_eq!(take_prefix(&[1, 2, 3], 2), Ok(vec![1, 2]));
        assert_eq!(take_prefix(&[1, 2, 3], 3), Ok(vec![1, 2, 3]));
        assert_eq!(take_prefix(&[1, 2, 3], 0), Ok(vec![]));
        assert_eq!(take_prefix(&[], 0), Ok(vec![]));
    }

    #[test]
    fn take_prefix_out_of_range() {
        assert_eq!(
            take_prefix(&[1, 2], 5),
            Err(CodecError::OutOfRange { value: 5, limit: 2 })
        );
        assert_eq!(
            take_prefix(&[], 1),
            Err(CodecError::OutOfRange { value: 1, limit: 0 })
        );
    }

    #[test]
    fn u8_to_i8_sign_extends() {
        assert_eq!(u8_to_i8(0xFF), Ok(-1));
        assert_eq!(u8_to_i8(0x80), Ok(-128));
        assert_eq!(u8_to_i8(0x7F), Ok(127));
        assert_eq!(u8_to_i8(0), Ok(0));
    }

    #[test]
    fn u8_to_i8_out_of_range() {
        for &value in &[256u32, 1000, u32::MAX] {
            assert_eq!(
                u8_to_i8(value),
                Err(CodecError::OutOfRange {
                    value: value as u64,
                    limit: 255,
                })
            );
        }
    }
}
