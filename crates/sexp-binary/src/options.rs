//! Decoder limits.

use crate::constants::{DEFAULT_MAX_BYTES_LEN, DEFAULT_MAX_DEPTH, DEFAULT_MAX_VARINT_LEN};

/// Limits applied while decoding untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Maximum list nesting. A top-level list is at depth 1.
    pub max_depth: usize,
    /// Maximum payload length of a single byte string, string, or symbol.
    pub max_bytes_len: usize,
    /// Maximum encoded length of a single varint, in bytes.
    pub max_varint_len: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_bytes_len: DEFAULT_MAX_BYTES_LEN,
            max_varint_len: DEFAULT_MAX_VARINT_LEN,
        }
    }
}

impl DecoderOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_bytes_len(mut self, max_bytes_len: usize) -> Self {
        self.max_bytes_len = max_bytes_len;
        self
    }

    /// Values below 1 are raised to 1 so that single-byte varints still decode.
    pub fn with_max_varint_len(mut self, max_varint_len: usize) -> Self {
        self.max_varint_len = max_varint_len.max(1);
        self
    }
}
