//! `SexpEncoder` — writes tagged values to a byte sink.
//!
//! Wire format:
//! - Null, `#f`, `#t`: the tag alone (`0x0`, `0x1`, `0x2`)
//! - Bytes: `0x3 || varbytes`
//! - Integer: `0x4 || varint(n)` or `0x5 || varint(-n)` for negatives
//! - List: `(0xc || element)* || 0x0`
//! - String: `0xe || varbytes(utf8)`
//! - Symbol: `0xf || varbytes(utf8)`

use std::io::Write;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::constants::SexpTag;
use crate::error::{Result, SexpError};
use crate::value::Value;
use crate::{varbytes, varint};

pub struct SexpEncoder<W: Write> {
    pub writer: W,
}

impl<W: Write> SexpEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes one top-level value and flushes the sink.
    pub fn write_value(&mut self, value: &Value) -> Result<()> {
        self.write_any(value)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Writes one value without flushing.
    pub fn write_any(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.write_null(),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Bytes(b) => self.write_bin(b),
            Value::UInt(n) => self.write_u_integer(n),
            Value::NegInt(n) => self.write_neg_integer(n),
            Value::List(items) => self.write_list(items),
            Value::Str(s) => self.write_str(s),
            Value::Sym(name) => self.write_sym(name),
            Value::Eof => Err(SexpError::UnsupportedValue("end-of-stream marker")),
        }
    }

    pub fn write_tag(&mut self, tag: SexpTag) -> Result<()> {
        varint::write_varint_u64(&mut self.writer, tag as u64)
    }

    pub fn write_null(&mut self) -> Result<()> {
        self.write_tag(SexpTag::Null)
    }

    pub fn write_boolean(&mut self, b: bool) -> Result<()> {
        self.write_tag(if b { SexpTag::True } else { SexpTag::False })
    }

    pub fn write_bin(&mut self, buf: &[u8]) -> Result<()> {
        self.write_tag(SexpTag::Bytes)?;
        varbytes::write_varbytes(&mut self.writer, buf)
    }

    /// Integers wider than the varint cap are refused before the tag is written.
    pub fn write_u_integer(&mut self, n: &BigUint) -> Result<()> {
        varint::ensure_encodable(n)?;
        self.write_tag(SexpTag::UInt)?;
        varint::write_varint(&mut self.writer, n)
    }

    /// Writes `-magnitude`. A zero magnitude has no negative encoding.
    pub fn write_neg_integer(&mut self, magnitude: &BigUint) -> Result<()> {
        if magnitude.is_zero() {
            return Err(SexpError::UnsupportedValue("negative zero"));
        }
        varint::ensure_encodable(magnitude)?;
        self.write_tag(SexpTag::NegInt)?;
        varint::write_varint(&mut self.writer, magnitude)
    }

    pub fn write_integer(&mut self, n: &BigInt) -> Result<()> {
        match n.sign() {
            Sign::Minus => self.write_neg_integer(n.magnitude()),
            Sign::NoSign | Sign::Plus => self.write_u_integer(n.magnitude()),
        }
    }

    pub fn write_list(&mut self, items: &[Value]) -> Result<()> {
        for item in items {
            self.write_tag(SexpTag::Pair)?;
            self.write_any(item)?;
        }
        self.write_tag(SexpTag::Null)
    }

    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_tag(SexpTag::Str)?;
        varbytes::write_varbytes(&mut self.writer, s.as_bytes())
    }

    pub fn write_sym(&mut self, name: &str) -> Result<()> {
        self.write_tag(SexpTag::Sym)?;
        varbytes::write_varbytes(&mut self.writer, name.as_bytes())
    }
}

/// Encodes `value` onto `writer` without flushing.
pub fn encode_nested<W: Write>(writer: &mut W, value: &Value) -> Result<()> {
    SexpEncoder::new(writer).write_any(value)
}
