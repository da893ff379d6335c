//! This module defines the error type shared by all codec operations.
//!
//! Every operation either returns a complete result or fails with one of
//! these errors before producing any output. There is no partial-failure
//! state to recover from, so propagation is entirely the caller's business.

use std::io;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("buffer has unexpected length {actual}, expected {expected}")]
    InvalidLength {
        /// The length the operation requires.
        expected: usize,

        /// The length of the buffer it was given.
        actual: usize,
    },

    #[error("unsupported integer width {width}, expected 1, 2 or 4")]
    UnsupportedWidth {
        /// The offending width in bytes. Never equal to 1, 2 nor 4.
        width: usize,
    },

    #[error("value {value} is out of range, maximum is {limit}")]
    OutOfRange {
        /// The offending numeric or size argument.
        value: u64,

        /// The largest value the operation accepts.
        ///
        /// Invariant: `limit < value`.
        limit: u64,
    },

    #[error("reading {wanted} bytes at offset {offset} exceeds buffer length {length}")]
    IndexOutOfRange {
        /// The offset the read started at.
        offset: usize,

        /// The number of bytes the read required.
        wanted: usize,

        /// The length of the buffer it was given.
        length: usize,
    },
}

impl From<CodecError> for io::Error {
    fn from(error: CodecError) -> Self {
        let kind = match &error {
            &CodecError::IndexOutOfRange { .. } => io::ErrorKind::UnexpectedEof,
            _ => io::ErrorKind::InvalidData,
        };
        let message = format!("{}", &error);
        io::Error::new(kind, message)
    }
}

/*=======*
 * TESTS *
 *=======*/
