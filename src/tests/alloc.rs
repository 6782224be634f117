use alloc::string::String;
use alloc::vec::Vec;

use crate::{EncodeExt, WireError, decode, encode, wire_size};

#[test]
fn test_vec_roundtrip() {
    let value: Vec<u32> = alloc::vec![1, 2, 3];
    assert_eq!(wire_size(&value), 4 + 12);

    let bytes = value.to_wire_vec().unwrap();
    assert_eq!(bytes.len(), 16);
    assert_eq!(&bytes[..4], &[3, 0, 0, 0]);

    let (decoded, consumed) = decode::<Vec<u32>>(&bytes).unwrap();
    assert_eq!(decoded, value);
    assert_eq!(consumed, 16);
}

#[test]
fn test_empty_vec_roundtrip() {
    let value: Vec<u8> = Vec::new();
    let bytes = value.to_wire_vec().unwrap();
    assert_eq!(bytes, [0, 0, 0, 0]);

    let (decoded, _) = decode::<Vec<u8>>(&bytes).unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn test_byte_vec_bulk_path() {
    let value: Vec<u8> = (0..=255).collect();
    let bytes = value.to_wire_vec().unwrap();
    assert_eq!(bytes.len(), 4 + 256);
    assert_eq!(&bytes[4..], &value[..]);

    let (decoded, _) = decode::<Vec<u8>>(&bytes).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_nested_vec_roundtrip() {
    let value: Vec<Vec<u8>> = alloc::vec![alloc::vec![1, 2], Vec::new(), alloc::vec![3]];
    let bytes = value.to_wire_vec().unwrap();
    // outer count + three inner (count + payload)
    assert_eq!(bytes.len(), 4 + (4 + 2) + 4 + (4 + 1));

    let (decoded, _) = decode::<Vec<Vec<u8>>>(&bytes).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_hostile_count_prefix_rejected_before_alloc() {
    // Claims u32::MAX elements of 4 bytes each with a 4-byte payload.
    let mut wire = Vec::new();
    wire.extend_from_slice(&u32::MAX.to_le_bytes());
    wire.extend_from_slice(&[0u8; 4]);

    let err = decode::<Vec<u32>>(&wire).unwrap_err();
    assert!(matches!(err, WireError::Overflow { .. }));
}

#[test]
fn test_hostile_count_prefix_variable_elements() {
    // Elements with a variable wire size are floored at their prefix
    // width, so 1000 claimed strings need at least 2000 bytes.
    let mut wire = Vec::new();
    wire.extend_from_slice(&1000u32.to_le_bytes());
    wire.extend_from_slice(&[0u8; 10]);

    let err = decode::<Vec<String>>(&wire).unwrap_err();
    assert_eq!(
        err,
        WireError::Overflow {
            needed: 2000,
            available: 10,
        }
    );
}

#[test]
fn test_vec_truncated_mid_element() {
    let value: Vec<u16> = alloc::vec![1, 2, 3];
    let bytes = value.to_wire_vec().unwrap();

    let err = decode::<Vec<u16>>(&bytes[..bytes.len() - 1]).unwrap_err();
    assert!(matches!(err, WireError::Overflow { .. }));
}

#[test]
fn test_string_roundtrip() {
    let value = String::from("pepito");
    assert_eq!(wire_size(&value), 2 + 6);

    let bytes = value.to_wire_vec().unwrap();
    assert_eq!(&bytes[..2], &[6, 0]);
    assert_eq!(&bytes[2..], b"pepito");

    let (decoded, consumed) = decode::<String>(&bytes).unwrap();
    assert_eq!(decoded, value);
    assert_eq!(consumed, 8);
}

#[test]
fn test_empty_string_roundtrip() {
    let value = String::new();
    let bytes = value.to_wire_vec().unwrap();
    assert_eq!(bytes, [0, 0]);

    let (decoded, _) = decode::<String>(&bytes).unwrap();
    assert_eq!(decoded, "");
}

#[test]
fn test_string_content_is_verbatim() {
    // Multi-byte UTF-8 passes through untranscoded; the prefix counts
    // bytes, not characters.
    let value = String::from("héllo");
    assert_eq!(wire_size(&value), 2 + 6);

    let bytes = value.to_wire_vec().unwrap();
    let (decoded, _) = decode::<String>(&bytes).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_string_too_long_for_prefix() {
    let value: String = core::iter::repeat('x').take(65536).collect();
    let mut buf = alloc::vec![0u8; wire_size(&value)];

    let err = encode(&value, &mut buf).unwrap_err();
    assert_eq!(
        err,
        WireError::SizeExceeded {
            len: 65536,
            max: 65535,
        }
    );
}

#[test]
fn test_string_invalid_utf8() {
    let wire = [2u8, 0, 0xFF, 0xFE];
    let err = decode::<String>(&wire).unwrap_err();
    assert_eq!(
        err,
        WireError::InvalidData {
            message: "text is not valid UTF-8",
        }
    );
}

#[test]
fn test_string_truncated_payload() {
    // Prefix claims 10 bytes, only 3 present.
    let wire = [10u8, 0, b'a', b'b', b'c'];
    let err = decode::<String>(&wire).unwrap_err();
    assert_eq!(
        err,
        WireError::Overflow {
            needed: 10,
            available: 3,
        }
    );
}

#[test]
fn test_to_wire_vec_is_exactly_sized() {
    let value: Vec<u16> = alloc::vec![10, 20, 30];
    let bytes = value.to_wire_vec().unwrap();
    assert_eq!(bytes.len(), wire_size(&value));
}
