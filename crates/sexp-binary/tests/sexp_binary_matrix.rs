use sexp_binary::{
    decode, encode, read_value, write_value, BigUint, DecoderOptions, SexpDecoder, SexpError,
    Value,
};

fn decode_err(bytes: &[u8]) -> SexpError {
    let mut input = bytes;
    read_value(&mut input).expect_err("decode should fail")
}

#[test]
fn hello_world_string() {
    let expected: &[u8] = &[
        0x0e, 0x0b, b'H', b'e', b'l', b'l', b'o', b' ', b'w', b'o', b'r', b'l', b'd',
    ];
    let mut out = Vec::new();
    write_value(&mut out, &Value::str("Hello world")).unwrap();
    assert_eq!(out, expected);

    let mut input = expected;
    assert_eq!(read_value(&mut input).unwrap(), Value::str("Hello world"));
    assert!(input.is_empty());
}

#[test]
fn mixed_list() {
    let value = Value::list([Value::int(1), Value::int(-2), Value::str("x")]);
    let expected = [0x0c, 0x04, 0x01, 0x0c, 0x05, 0x02, 0x0c, 0x0e, 0x01, b'x', 0x00];
    assert_eq!(encode(&value).unwrap(), expected);
    match decode(&expected).unwrap() {
        Value::List(items) => {
            assert_eq!(items, [Value::int(1), Value::int(-2), Value::str("x")]);
        }
        other => panic!("expected a list, got {other}"),
    }
}

#[test]
fn value_round_trip_matrix() {
    let values = vec![
        Value::Null,
        Value::Bool(false),
        Value::Bool(true),
        Value::bytes(vec![]),
        Value::bytes(vec![0, 1, 2, 0xff]),
        Value::uint(0),
        Value::uint(127),
        Value::uint(128),
        Value::uint(u64::MAX),
        Value::UInt((BigUint::from(1u8) << 300usize) + 12345u32),
        Value::int(-1),
        Value::int(i64::MIN),
        Value::NegInt(BigUint::from(u64::MAX) * BigUint::from(u64::MAX)),
        Value::List(vec![]),
        Value::list([Value::List(vec![]), Value::list([Value::List(vec![])])]),
        Value::str(""),
        Value::str("asdf asfd 😱 asdf asdf 👀 as"),
        Value::sym("lambda"),
        Value::sym("λ"),
        Value::list([
            Value::sym("define"),
            Value::list([Value::sym("f"), Value::sym("x")]),
            Value::list([Value::sym("+"), Value::sym("x"), Value::int(1)]),
        ]),
    ];

    for value in values {
        let bytes = encode(&value).unwrap_or_else(|e| panic!("encode failed for {value}: {e}"));
        let decoded = decode(&bytes).unwrap_or_else(|e| panic!("decode failed for {value}: {e}"));
        assert_eq!(decoded, value, "round trip of {value}");
    }
}

#[test]
fn eof_only_at_a_value_boundary() {
    let bytes = encode(&Value::str("abc")).unwrap();
    let mut input = bytes.as_slice();
    assert_eq!(read_value(&mut input).unwrap(), Value::str("abc"));
    assert_eq!(read_value(&mut input).unwrap(), Value::Eof);

    // Ends inside the varint of an integer payload.
    assert!(matches!(decode_err(&[0x04, 0x80]), SexpError::TruncatedStream));
    // Ends inside a varbytes payload.
    assert!(matches!(decode_err(&[0x0e, 0x03, b'a']), SexpError::TruncatedStream));
    // Ends right after a tag that needs a payload.
    assert!(matches!(decode_err(&[0x03]), SexpError::TruncatedStream));
}

#[test]
fn improper_list_rejected() {
    let err = decode_err(&[0x0c, 0x04, 0x01, 0x05]);
    assert!(matches!(err, SexpError::ImproperList(5)), "got {err:?}");
}

#[test]
fn reserved_tags_rejected() {
    let err = decode_err(&[0x0d, 0x00]);
    assert!(err.is_malformed_tag(), "got {err:?}");
    assert!(matches!(decode_err(&[0x06]), SexpError::MalformedTag(6)));
    // Unassigned tags inside a list fail the same way.
    assert!(matches!(decode_err(&[0x0c, 0x0b, 0x00]), SexpError::MalformedTag(0x0b)));
}

#[test]
fn strict_limits() {
    let decoder = SexpDecoder::with_options(
        DecoderOptions::default()
            .with_max_depth(1)
            .with_max_bytes_len(2)
            .with_max_varint_len(2),
    );
    let read = |bytes: &[u8]| decoder.read_value(&mut &bytes[..]);

    assert_eq!(read(&[0x0c, 0x04, 0x01, 0x00]).unwrap(), Value::list([Value::int(1)]));
    assert!(matches!(read(&[0x0c, 0x0c, 0x00, 0x00]), Err(SexpError::TooDeep(1))));
    assert!(matches!(
        read(&[0x03, 0x03, 1, 2, 3]),
        Err(SexpError::LengthLimitExceeded { len: 3, max: 2 })
    ));
    assert!(matches!(
        read(&[0x04, 0x80, 0x80, 0x01]),
        Err(SexpError::VarintTooLong(2))
    ));
}

#[test]
fn encode_errors_are_distinct_from_io() {
    let err = encode(&Value::Eof).unwrap_err();
    assert!(matches!(err, SexpError::UnsupportedValue(_)));
}

#[test]
fn integers_stay_within_the_shared_varint_cap() {
    // 1024 varint bytes carry 7168 bits.
    let widest = (BigUint::from(1u8) << 7168usize) - 1u8;
    for value in [Value::UInt(widest.clone()), Value::NegInt(widest)] {
        assert_eq!(decode(&encode(&value).unwrap()).unwrap(), value);
    }

    let too_wide = Value::UInt(BigUint::from(1u8) << 8000usize);
    assert!(matches!(encode(&too_wide), Err(SexpError::UnsupportedValue(_))));
    let mut sink = Vec::new();
    assert!(matches!(
        write_value(&mut sink, &too_wide),
        Err(SexpError::UnsupportedValue(_))
    ));
    assert!(sink.is_empty());
}
