//! Variable-length unsigned integers.
//!
//! Wire format: little-endian base-128 groups. The low 7 bits of each byte
//! carry value bits, the high bit (`0x80`) means another byte follows. The
//! encoder always emits the minimal number of groups.
//!
//! Values are decoded into [`BigUint`]. Both directions share one ceiling:
//! a varint may span at most [`DEFAULT_MAX_VARINT_LEN`] bytes (7168 value
//! bits). Tags and lengths take the [`RawVarint::Small`] path, which never
//! allocates.

use std::io::{self, Read, Write};

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::constants::{CONTINUATION_BIT, DEFAULT_MAX_VARINT_LEN, VALUE_MASK};
use crate::error::{Result, SexpError};

/// A decoded varint, kept machine-sized until it outgrows `u64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawVarint {
    Small(u64),
    Big(BigUint),
}

impl RawVarint {
    pub(crate) fn to_u64(&self) -> Option<u64> {
        match self {
            Self::Small(v) => Some(*v),
            Self::Big(v) => v.to_u64(),
        }
    }

    pub(crate) fn into_biguint(self) -> BigUint {
        match self {
            Self::Small(v) => BigUint::from(v),
            Self::Big(v) => v,
        }
    }
}

/// Reads a single byte, or `None` at end of data.
pub(crate) fn read_byte<R: Read>(reader: &mut R) -> Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(SexpError::from_read(e)),
        }
    }
}

/// Core varint loop. `None` only if the very first byte is missing.
pub(crate) fn read_raw_or_none<R: Read>(
    reader: &mut R,
    max_len: usize,
) -> Result<Option<RawVarint>> {
    let Some(first) = read_byte(reader)? else {
        return Ok(None);
    };
    let mut small = u64::from(first & VALUE_MASK);
    let mut big: Option<BigUint> = None;
    let mut byte = first;
    let mut shift = 0usize;
    let mut len = 1usize;
    while byte & CONTINUATION_BIT != 0 {
        if len >= max_len {
            return Err(SexpError::VarintTooLong(max_len));
        }
        byte = read_byte(reader)?.ok_or(SexpError::TruncatedStream)?;
        len += 1;
        shift += 7;
        let group = byte & VALUE_MASK;
        match big.as_mut() {
            Some(acc) => *acc |= BigUint::from(group) << shift,
            // Groups at shift 0..=56 fit in 64 bits; the group at 63 may not.
            None if shift < 63 => small |= u64::from(group) << shift,
            None => {
                let mut acc = BigUint::from(small);
                acc |= BigUint::from(group) << shift;
                big = Some(acc);
            }
        }
    }
    Ok(Some(match big {
        Some(acc) => RawVarint::Big(acc),
        None => RawVarint::Small(small),
    }))
}

pub(crate) fn read_raw<R: Read>(reader: &mut R, max_len: usize) -> Result<RawVarint> {
    read_raw_or_none(reader, max_len)?.ok_or(SexpError::TruncatedStream)
}

/// Reads a varint that is used as a length, rejecting values beyond `usize`.
pub(crate) fn read_varint_usize<R: Read>(reader: &mut R, max_len: usize) -> Result<usize> {
    let raw = read_raw(reader, max_len)?;
    raw.to_u64()
        .and_then(|v| usize::try_from(v).ok())
        .ok_or(SexpError::LengthOverflow)
}

/// Reads one varint, returning `None` if the stream has no bytes left.
///
/// A stream that ends after a byte with the continuation bit set fails with
/// [`SexpError::TruncatedStream`]. Varints longer than
/// [`DEFAULT_MAX_VARINT_LEN`] bytes fail with [`SexpError::VarintTooLong`].
pub fn read_varint_or_none<R: Read>(reader: &mut R) -> Result<Option<BigUint>> {
    Ok(read_raw_or_none(reader, DEFAULT_MAX_VARINT_LEN)?.map(RawVarint::into_biguint))
}

/// Reads one varint. A missing first byte is an error too.
pub fn read_varint<R: Read>(reader: &mut R) -> Result<BigUint> {
    read_varint_or_none(reader)?.ok_or(SexpError::TruncatedStream)
}

/// Writes a machine-sized varint.
pub fn write_varint_u64<W: Write>(writer: &mut W, mut value: u64) -> Result<()> {
    let mut buf = [0u8; 10];
    let mut n = 0;
    while value > u64::from(VALUE_MASK) {
        buf[n] = CONTINUATION_BIT | (value as u8 & VALUE_MASK);
        value >>= 7;
        n += 1;
    }
    buf[n] = value as u8;
    writer.write_all(&buf[..=n])?;
    Ok(())
}

/// Fails with [`SexpError::UnsupportedValue`] if `value` needs more than
/// [`DEFAULT_MAX_VARINT_LEN`] bytes, which no reader would accept.
pub(crate) fn ensure_encodable(value: &BigUint) -> Result<()> {
    if varint_len(value) > DEFAULT_MAX_VARINT_LEN {
        return Err(SexpError::UnsupportedValue("integer wider than the varint limit"));
    }
    Ok(())
}

/// Writes an arbitrary-precision varint in minimal form.
///
/// Values needing more than [`DEFAULT_MAX_VARINT_LEN`] bytes are refused with
/// [`SexpError::UnsupportedValue`] before anything is written.
pub fn write_varint<W: Write>(writer: &mut W, value: &BigUint) -> Result<()> {
    ensure_encodable(value)?;
    if let Some(v) = value.to_u64() {
        return write_varint_u64(writer, v);
    }
    let mut groups = value.to_radix_le(128);
    let last = groups.len() - 1;
    for group in &mut groups[..last] {
        *group |= CONTINUATION_BIT;
    }
    writer.write_all(&groups)?;
    Ok(())
}

/// Number of bytes [`write_varint`] emits for `value`.
pub fn varint_len(value: &BigUint) -> usize {
    let bits = value.bits();
    if bits == 0 {
        1
    } else {
        bits.div_ceil(7) as usize
    }
}
