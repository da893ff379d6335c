//! Helpers for converting between raw byte buffers and fixed-width unsigned
//! integers.
//!
//! The byte format is little-endian throughout, with one quirk: 64-bit
//! values arrive as big-endian buffers and are bridged into a `(low, high)`
//! pair of 32-bit words so that numeric runtimes with limited integer
//! precision can hold them losslessly. See [`pair`] for the details of that
//! asymmetry.
//!
//! Every function here is pure and operates only on its arguments, so the
//! whole crate is safe to use concurrently without synchronization. Invalid
//! inputs fail up front with a [`CodecError`]; no operation produces partial
//! output.

pub mod buffer;
pub mod error;
pub mod pair;
pub mod uint;

pub use crate::buffer::{concat, take_prefix, u8_to_i8};
pub use crate::error::CodecError;
pub use crate::pair::{decode_u64_pair, encode_u64_pair, U64_BYTE_LEN};
pub use crate::uint::{decode_uint, encode_uint, read_u32_at, U32_BYTE_LEN};
