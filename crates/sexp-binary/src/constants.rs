//! Tag constants for the binary s-expression wire format.

/// Tags assigned by the format. Anything not listed here is malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SexpTag {
    Null = 0x0,
    False = 0x1,
    True = 0x2,
    Bytes = 0x3,
    UInt = 0x4,
    NegInt = 0x5,
    /// Pair cell: one list element follows, then the next tail tag.
    Pair = 0xc,
    /// Reserved for vectors. Never produced, always rejected.
    Vector = 0xd,
    Str = 0xe,
    Sym = 0xf,
}

impl SexpTag {
    /// Maps a raw tag to its assigned meaning, or `None` for unassigned tags.
    pub fn from_u64(tag: u64) -> Option<Self> {
        Some(match tag {
            0x0 => Self::Null,
            0x1 => Self::False,
            0x2 => Self::True,
            0x3 => Self::Bytes,
            0x4 => Self::UInt,
            0x5 => Self::NegInt,
            0xc => Self::Pair,
            0xd => Self::Vector,
            0xe => Self::Str,
            0xf => Self::Sym,
            _ => return None,
        })
    }
}

/// Default cap on list nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default cap on a single varbytes payload (64 MiB).
pub const DEFAULT_MAX_BYTES_LEN: usize = 64 * 1024 * 1024;

/// Default cap on the encoded length of one varint, in bytes.
pub const DEFAULT_MAX_VARINT_LEN: usize = 1024;

pub(crate) const CONTINUATION_BIT: u8 = 0x80;
pub(crate) const VALUE_MASK: u8 = 0x7f;
