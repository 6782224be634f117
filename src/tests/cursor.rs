use crate::{ReadCursor, WireError, WriteCursor};

#[test]
fn test_read_cursor_advances_exactly() {
    let data = [1u8, 2, 3, 4, 5];
    let mut cursor = ReadCursor::new(&data);

    assert_eq!(cursor.remaining(), 5);
    assert_eq!(cursor.read_bytes(2).unwrap(), &[1, 2]);
    assert_eq!(cursor.remaining(), 3);
    assert_eq!(cursor.read_bytes(3).unwrap(), &[3, 4, 5]);
    assert_eq!(cursor.remaining(), 0);
    assert!(cursor.is_empty());
}

#[test]
fn test_read_cursor_overflow() {
    let data = [0u8; 4];
    let mut cursor = ReadCursor::new(&data);

    let err = cursor.read_bytes(5).unwrap_err();
    assert_eq!(
        err,
        WireError::Overflow {
            needed: 5,
            available: 4,
        }
    );
    // A failed read consumes nothing.
    assert_eq!(cursor.remaining(), 4);
}

#[test]
fn test_read_cursor_zero_length_reads() {
    let mut cursor = ReadCursor::new(&[]);
    assert_eq!(cursor.read_bytes(0).unwrap(), &[] as &[u8]);
    assert!(cursor.read_bytes(1).is_err());
}

#[test]
fn test_read_cursor_array() {
    let data = [9u8, 8, 7, 6];
    let mut cursor = ReadCursor::new(&data);

    assert_eq!(cursor.read_array::<2>().unwrap(), [9, 8]);
    assert_eq!(cursor.read_array::<2>().unwrap(), [7, 6]);
    assert!(cursor.read_array::<1>().is_err());
}

#[test]
fn test_write_cursor_advances_exactly() {
    let mut buf = [0u8; 6];
    let mut cursor = WriteCursor::new(&mut buf);

    cursor.write_bytes(&[1, 2, 3]).unwrap();
    assert_eq!(cursor.remaining(), 3);
    cursor.write_bytes(&[4, 5, 6]).unwrap();
    assert_eq!(cursor.remaining(), 0);
    assert!(cursor.is_full());

    assert_eq!(buf, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_write_cursor_overflow_leaves_buffer_untouched() {
    let mut buf = [0xAAu8; 3];
    let mut cursor = WriteCursor::new(&mut buf);

    let err = cursor.write_bytes(&[1, 2, 3, 4]).unwrap_err();
    assert_eq!(
        err,
        WireError::Overflow {
            needed: 4,
            available: 3,
        }
    );
    assert_eq!(cursor.remaining(), 3);
    assert_eq!(buf, [0xAA, 0xAA, 0xAA]);
}

#[test]
fn test_write_cursor_never_grows() {
    let mut buf = [0u8; 2];
    let mut cursor = WriteCursor::new(&mut buf);

    cursor.write_bytes(&[1, 2]).unwrap();
    assert!(cursor.write_bytes(&[3]).is_err());
}
