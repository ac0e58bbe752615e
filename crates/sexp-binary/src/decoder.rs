//! `SexpDecoder` — reads tagged values from a byte stream.

use std::io::Read;

use num_traits::Zero;
use tracing::{debug, trace};

use crate::constants::SexpTag;
use crate::error::{Result, SexpError};
use crate::options::DecoderOptions;
use crate::stream::ValueStream;
use crate::value::Value;
use crate::{varbytes, varint};

/// Stateless decoder. Only carries the limits it enforces.
#[derive(Debug, Clone, Copy, Default)]
pub struct SexpDecoder {
    options: DecoderOptions,
}

impl SexpDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Reads one top-level value.
    ///
    /// Returns [`Value::Eof`] if the stream has no bytes left before the tag.
    /// A stream that ends anywhere after the first tag byte is
    /// [`SexpError::TruncatedStream`].
    pub fn read_value<R: Read>(&self, reader: &mut R) -> Result<Value> {
        match varint::read_raw_or_none(reader, self.options.max_varint_len)? {
            None => Ok(Value::Eof),
            Some(tag) => self.read_tagged(reader, tag.to_u64().unwrap_or(u64::MAX), 0),
        }
    }

    /// Decodes the payload that follows `tag`.
    pub fn decode_tagged<R: Read>(&self, reader: &mut R, tag: u64) -> Result<Value> {
        self.read_tagged(reader, tag, 0)
    }

    /// Iterates over every top-level value of `reader` until end of stream.
    pub fn values<R: Read>(&self, reader: R) -> ValueStream<R> {
        ValueStream::new(reader, *self)
    }

    fn read_tag<R: Read>(&self, reader: &mut R) -> Result<u64> {
        let tag = varint::read_raw(reader, self.options.max_varint_len)?;
        Ok(tag.to_u64().unwrap_or(u64::MAX))
    }

    fn read_nested<R: Read>(&self, reader: &mut R, depth: usize) -> Result<Value> {
        let tag = self.read_tag(reader)?;
        self.read_tagged(reader, tag, depth)
    }

    fn read_bin<R: Read>(&self, reader: &mut R) -> Result<Vec<u8>> {
        varbytes::read_varbytes_limited(
            reader,
            self.options.max_bytes_len,
            self.options.max_varint_len,
        )
    }

    fn read_text<R: Read>(&self, reader: &mut R) -> Result<String> {
        let buf = self.read_bin(reader)?;
        String::from_utf8(buf).map_err(|e| {
            debug!(error = %e, "rejecting text payload");
            SexpError::InvalidText(e.utf8_error())
        })
    }

    fn read_tagged<R: Read>(&self, reader: &mut R, tag: u64, depth: usize) -> Result<Value> {
        trace!(tag, depth, "reading tagged value");
        let Some(kind) = SexpTag::from_u64(tag) else {
            debug!(tag, "unknown type tag");
            return Err(SexpError::MalformedTag(tag));
        };
        match kind {
            SexpTag::Null => Ok(Value::Null),
            SexpTag::False => Ok(Value::Bool(false)),
            SexpTag::True => Ok(Value::Bool(true)),
            SexpTag::Bytes => Ok(Value::Bytes(self.read_bin(reader)?)),
            SexpTag::UInt => {
                let n = varint::read_raw(reader, self.options.max_varint_len)?;
                Ok(Value::UInt(n.into_biguint()))
            }
            SexpTag::NegInt => {
                let n = varint::read_raw(reader, self.options.max_varint_len)?;
                // No negative zero: a zero magnitude reads back as 0.
                let magnitude = n.into_biguint();
                if magnitude.is_zero() {
                    Ok(Value::UInt(magnitude))
                } else {
                    Ok(Value::NegInt(magnitude))
                }
            }
            SexpTag::Pair => self.read_list(reader, depth),
            SexpTag::Vector => {
                debug!("vector tag is not supported");
                Err(SexpError::VectorUnsupported)
            }
            SexpTag::Str => Ok(Value::Str(self.read_text(reader)?)),
            SexpTag::Sym => Ok(Value::Sym(self.read_text(reader)?)),
        }
    }

    /// Reads pair cells after an initial `Pair` tag has been consumed.
    fn read_list<R: Read>(&self, reader: &mut R, depth: usize) -> Result<Value> {
        let depth = depth + 1;
        if depth > self.options.max_depth {
            debug!(depth, max = self.options.max_depth, "list nested too deeply");
            return Err(SexpError::TooDeep(self.options.max_depth));
        }
        let mut items = Vec::new();
        loop {
            items.push(self.read_nested(reader, depth)?);
            match self.read_tag(reader)? {
                tag if tag == SexpTag::Null as u64 => break,
                tag if tag == SexpTag::Pair as u64 => continue,
                tag => {
                    debug!(tag, "improper list tail");
                    return Err(SexpError::ImproperList(tag));
                }
            }
        }
        Ok(Value::List(items))
    }
}
