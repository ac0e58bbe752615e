//! Error type shared by every read and write operation of the codec.

use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Errors produced while decoding or encoding binary s-expressions.
///
/// Any error leaves the underlying stream at an undefined position.
#[derive(Debug, Error)]
pub enum SexpError {
    #[error("unexpected end of stream")]
    TruncatedStream,
    #[error("unknown type tag #x{0:02x}")]
    MalformedTag(u64),
    #[error("vector not implemented")]
    VectorUnsupported,
    #[error("improper list: tail tag #x{0:02x}")]
    ImproperList(u64),
    #[error("invalid UTF-8 in text payload")]
    InvalidText(#[source] Utf8Error),
    #[error("cannot encode value: {0}")]
    UnsupportedValue(&'static str),
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
    #[error("varint longer than {0} bytes")]
    VarintTooLong(usize),
    #[error("length does not fit in memory")]
    LengthOverflow,
    #[error("length {len} exceeds limit {max}")]
    LengthLimitExceeded { len: usize, max: usize },
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SexpError {
    /// True for tags outside the assigned set, including the vector tag.
    pub fn is_malformed_tag(&self) -> bool {
        matches!(self, Self::MalformedTag(_) | Self::VectorUnsupported)
    }

    /// Maps `UnexpectedEof` from the source onto [`SexpError::TruncatedStream`].
    pub(crate) fn from_read(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Self::TruncatedStream
        } else {
            Self::Io(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, SexpError>;
