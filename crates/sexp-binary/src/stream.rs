//! Top-level entry points: one value per call, or an iterator over a stream.

use std::io::{Read, Write};
use std::iter::FusedIterator;

use crate::decoder::SexpDecoder;
use crate::encoder::SexpEncoder;
use crate::error::{Result, SexpError};
use crate::value::Value;

/// Reads one top-level value with default limits.
///
/// An empty stream yields [`Value::Eof`]; a stream that ends inside a value
/// fails with [`SexpError::TruncatedStream`].
pub fn read_value<R: Read>(reader: &mut R) -> Result<Value> {
    SexpDecoder::new().read_value(reader)
}

/// Writes one top-level value, then flushes `writer`.
pub fn write_value<W: Write>(writer: &mut W, value: &Value) -> Result<()> {
    SexpEncoder::new(writer).write_value(value)
}

/// Encodes one value into a fresh buffer.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    let mut encoder = SexpEncoder::new(Vec::new());
    encoder.write_any(value)?;
    Ok(encoder.into_inner())
}

/// Decodes exactly one value from `bytes`. Empty input yields [`Value::Eof`].
pub fn decode(bytes: &[u8]) -> Result<Value> {
    let mut input = bytes;
    let value = read_value(&mut input)?;
    if !input.is_empty() {
        return Err(SexpError::TrailingBytes(input.len()));
    }
    Ok(value)
}

/// Iterator over the top-level values of a stream.
///
/// Ends at a clean end of stream. After the first error it yields nothing
/// more, since the stream position can no longer be trusted.
pub struct ValueStream<R> {
    reader: R,
    decoder: SexpDecoder,
    done: bool,
}

impl<R: Read> ValueStream<R> {
    pub fn new(reader: R, decoder: SexpDecoder) -> Self {
        Self {
            reader,
            decoder,
            done: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for ValueStream<R> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.decoder.read_value(&mut self.reader) {
            Ok(Value::Eof) => {
                self.done = true;
                None
            }
            Ok(value) => Some(Ok(value)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> FusedIterator for ValueStream<R> {}
