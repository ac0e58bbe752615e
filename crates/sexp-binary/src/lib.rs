//! Binary codec for tagged s-expressions.
//!
//! Every value on the wire is a varint tag followed by its payload. Lists are
//! chains of pair cells closed by a null tag; strings, symbols and byte
//! strings are length-prefixed. Integers are arbitrary precision.
//!
//! ```
//! use sexp_binary::{decode, encode, Value};
//!
//! let value = Value::list([Value::int(1), Value::int(-2), Value::str("x")]);
//! let bytes = encode(&value).unwrap();
//! assert_eq!(
//!     bytes,
//!     [0x0c, 0x04, 0x01, 0x0c, 0x05, 0x02, 0x0c, 0x0e, 0x01, b'x', 0x00]
//! );
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```
//!
//! Reading a stream until it runs out:
//!
//! ```
//! use sexp_binary::{SexpDecoder, Value};
//!
//! let input: &[u8] = &[0x02, 0x0f, 0x01, b'a'];
//! let values: Vec<Value> = SexpDecoder::new()
//!     .values(input)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(values, [Value::Bool(true), Value::sym("a")]);
//! ```

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod options;
pub mod stream;
pub mod value;
pub mod varbytes;
pub mod varint;

pub use constants::SexpTag;
pub use decoder::SexpDecoder;
pub use encoder::{encode_nested, SexpEncoder};
pub use error::{Result, SexpError};
pub use options::DecoderOptions;
pub use stream::{decode, encode, read_value, write_value, ValueStream};
pub use value::Value;
pub use varbytes::{read_varbytes, write_varbytes};
pub use varint::{read_varint, read_varint_or_none, varint_len, write_varint, write_varint_u64};

pub use num_bigint::{BigInt, BigUint};
