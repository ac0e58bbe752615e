//! [`Value`] — the decoded form of one binary s-expression.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// One s-expression datum.
///
/// `Null` and the empty `List` share a wire form (a single null tag) and
/// compare equal, and hash alike. Decoding always produces `Null` for it.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    /// Opaque bytes; no encoding is implied.
    Bytes(Vec<u8>),
    /// Non-negative integer.
    UInt(BigUint),
    /// Negative integer, stored as its magnitude. The magnitude is never zero.
    NegInt(BigUint),
    /// Proper list of values.
    List(Vec<Value>),
    Str(String),
    /// Identifier or atom. Distinct from [`Value::Str`] even for equal text.
    Sym(String),
    /// End of stream. Only produced by a top-level read.
    Eof,
}

impl Value {
    pub fn int(n: i64) -> Self {
        Self::from(n)
    }

    pub fn uint(n: u64) -> Self {
        Self::UInt(BigUint::from(n))
    }

    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    pub fn sym(name: impl Into<String>) -> Self {
        Self::Sym(name.into())
    }

    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(b.into())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Self::List(items.into_iter().collect())
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// True for `Null` and for the empty list.
    pub fn is_null(&self) -> bool {
        match self {
            Self::Null => true,
            Self::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Signed view of `UInt` and `NegInt`.
    pub fn to_bigint(&self) -> Option<BigInt> {
        match self {
            Self::UInt(n) => Some(BigInt::from(n.clone())),
            Self::NegInt(n) => Some(-BigInt::from(n.clone())),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) | (Self::Eof, Self::Eof) => true,
            (Self::Null, Self::List(items)) | (Self::List(items), Self::Null) => items.is_empty(),
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::NegInt(a), Self::NegInt(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Sym(a), Self::Sym(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with `eq`: the empty list hashes as `Null`.
        if self.is_null() {
            mem::discriminant(&Self::Null).hash(state);
            return;
        }
        mem::discriminant(self).hash(state);
        match self {
            Self::Bool(b) => b.hash(state),
            Self::Bytes(b) => b.hash(state),
            Self::UInt(n) | Self::NegInt(n) => n.hash(state),
            Self::List(items) => items.hash(state),
            Self::Str(s) | Self::Sym(s) => s.hash(state),
            Self::Null | Self::Eof => {}
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        if n < 0 {
            Self::NegInt(BigUint::from(n.unsigned_abs()))
        } else {
            Self::UInt(BigUint::from(n as u64))
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::from(i64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::uint(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::uint(u64::from(n))
    }
}

impl From<BigUint> for Value {
    fn from(n: BigUint) -> Self {
        Self::UInt(n)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        match n.into_parts() {
            (Sign::Minus, magnitude) if !magnitude.is_zero() => Self::NegInt(magnitude),
            (_, magnitude) => Self::UInt(magnitude),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\x{:x};", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

/// Scheme-style external representation.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("()"),
            Self::Bool(true) => f.write_str("#t"),
            Self::Bool(false) => f.write_str("#f"),
            Self::Bytes(bytes) => {
                f.write_str("#u8(")?;
                for (i, b) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{b}")?;
                }
                f.write_str(")")
            }
            Self::UInt(n) => write!(f, "{n}"),
            Self::NegInt(n) => write!(f, "-{n}"),
            Self::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Self::Str(s) => write_escaped(f, s),
            Self::Sym(name) => f.write_str(name),
            Self::Eof => f.write_str("#<eof>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_empty_list_are_the_same_datum() {
        assert_eq!(Value::Null, Value::List(vec![]));
        assert_eq!(Value::List(vec![]), Value::Null);
        assert!(Value::List(vec![]).is_null());
        assert_ne!(Value::Null, Value::List(vec![Value::Null]));
    }

    fn hash_of(value: &Value) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_values_hash_alike() {
        assert_eq!(hash_of(&Value::Null), hash_of(&Value::List(vec![])));
        assert_eq!(
            hash_of(&Value::list([Value::Null, Value::int(-3)])),
            hash_of(&Value::list([Value::List(vec![]), Value::int(-3)]))
        );

        let mut seen = std::collections::HashSet::new();
        assert!(seen.insert(Value::Null));
        assert!(!seen.insert(Value::List(vec![])));
        assert!(seen.insert(Value::list([Value::Null])));
        assert!(seen.insert(Value::str("car")));
        assert!(seen.insert(Value::sym("car")));
        assert!(seen.insert(Value::int(5)));
        assert!(seen.insert(Value::int(-5)));
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn str_and_sym_differ() {
        assert_ne!(Value::str("car"), Value::sym("car"));
    }

    #[test]
    fn signed_conversions() {
        assert_eq!(Value::int(-2), Value::NegInt(BigUint::from(2u8)));
        assert_eq!(Value::int(0), Value::UInt(BigUint::from(0u8)));
        assert_eq!(Value::from(BigInt::from(-7)), Value::int(-7));
        assert_eq!(Value::from(BigInt::from(0)), Value::uint(0));
        assert_eq!(Value::int(i64::MIN).to_bigint(), Some(BigInt::from(i64::MIN)));
        assert_eq!(Value::str("1").to_bigint(), None);
    }

    #[test]
    fn display_forms() {
        let v = Value::list([
            Value::int(1),
            Value::int(-2),
            Value::str("x"),
            Value::sym("foo"),
            Value::Bool(true),
            Value::Bool(false),
            Value::bytes(vec![1, 2, 255]),
            Value::Null,
        ]);
        assert_eq!(v.to_string(), r#"(1 -2 "x" foo #t #f #u8(1 2 255) ())"#);
        assert_eq!(Value::str("a\"b\\c\n").to_string(), r#""a\"b\\c\n""#);
        assert_eq!(Value::str("\u{1}").to_string(), r#""\x1;""#);
        assert_eq!(Value::Eof.to_string(), "#<eof>");
    }
}
