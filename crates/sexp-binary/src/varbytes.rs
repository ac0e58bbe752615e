//! Length-prefixed byte strings: `varint(len) || bytes[len]`.

use std::io::{Read, Write};

use crate::constants::{DEFAULT_MAX_BYTES_LEN, DEFAULT_MAX_VARINT_LEN};
use crate::error::{Result, SexpError};
use crate::varint;

/// Upper bound on the capacity reserved up front; the rest grows as bytes arrive.
const PREALLOC_LIMIT: usize = 8 * 1024;

pub(crate) fn read_varbytes_limited<R: Read>(
    reader: &mut R,
    max_len: usize,
    max_varint_len: usize,
) -> Result<Vec<u8>> {
    let len = varint::read_varint_usize(reader, max_varint_len)?;
    if len > max_len {
        return Err(SexpError::LengthLimitExceeded { len, max: max_len });
    }
    let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
    reader
        .by_ref()
        .take(len as u64)
        .read_to_end(&mut buf)
        .map_err(SexpError::from_read)?;
    if buf.len() != len {
        return Err(SexpError::TruncatedStream);
    }
    Ok(buf)
}

/// Reads a varint length followed by exactly that many bytes.
pub fn read_varbytes<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    read_varbytes_limited(reader, DEFAULT_MAX_BYTES_LEN, DEFAULT_MAX_VARINT_LEN)
}

/// Writes the varint length of `bytes`, then the bytes.
pub fn write_varbytes<W: Write>(writer: &mut W, bytes: &[u8]) -> Result<()> {
    varint::write_varint_u64(writer, bytes.len() as u64)?;
    writer.write_all(bytes)?;
    Ok(())
}
