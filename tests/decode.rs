//! Tests for the wire-format primitives.

use hex_literal::hex;
use ssh_cert::{Error, Reader};

#[test]
fn decode_u32() {
    let mut reader = Reader::new(&hex!("DEADBEEF"));
    let ret = reader.read_u32().unwrap();
    assert_eq!(ret, 0xDEADBEEFu32);
    assert!(reader.is_finished());
}

#[test]
fn decode_u64() {
    let mut reader = Reader::new(&hex!("0000DEADBEEFCAFE"));
    let ret = reader.read_u64().unwrap();
    assert_eq!(ret, 0xDEADBEEFCAFEu64);
    assert!(reader.is_finished());
}

#[test]
fn decode_string() {
    let mut reader = Reader::new(&hex!("000000076578616d706c65"));
    let ret = reader.read_string().unwrap();
    assert_eq!(ret, b"example");
    assert!(reader.is_finished());
}

#[test]
fn decode_empty_string() {
    let mut reader = Reader::new(&hex!("00000000"));
    let ret = reader.read_string().unwrap();
    assert!(ret.is_empty());
    assert!(reader.is_finished());
}

#[test]
fn decoded_string_borrows_from_input() {
    let input = hex!("000000076578616d706c65");
    let mut reader = Reader::new(&input);
    let ret = reader.read_string().unwrap();

    let range = input.as_ptr_range();
    assert!(range.contains(&ret.as_ptr()));
}

#[test]
fn reject_short_u32() {
    let mut reader = Reader::new(&hex!("DEADBE"));
    assert_eq!(reader.read_u32(), Err(Error::MalformedInteger));
}

#[test]
fn reject_short_u64() {
    let mut reader = Reader::new(&hex!("0000DEADBEEFCA"));
    assert_eq!(reader.read_u64(), Err(Error::MalformedInteger));
}

#[test]
fn reject_overlong_string() {
    // Declares 1000 bytes with only 4 available.
    let mut reader = Reader::new(&hex!("000003E8DEADBEEF"));
    assert_eq!(reader.read_string(), Err(Error::MalformedString));
}

#[test]
fn reject_truncated_string_prefix() {
    let mut reader = Reader::new(&hex!("0000"));
    assert_eq!(reader.read_string(), Err(Error::MalformedString));
}

#[test]
fn ensure_finished_rejects_trailing_data() {
    let mut reader = Reader::new(&hex!("0000000100"));
    reader.read_string().unwrap();
    assert!(reader.ensure_finished().is_ok());

    let mut reader = Reader::new(&hex!("000000010042"));
    reader.read_string().unwrap();
    assert_eq!(reader.ensure_finished(), Err(Error::MalformedCertificate));
}

#[test]
fn consumed_tracks_prefix() {
    let input = hex!("00000001AA42");
    let mut reader = Reader::new(&input);
    reader.read_string().unwrap();
    assert_eq!(reader.consumed(), &input[..5]);
    assert_eq!(reader.offset(), 5);
    assert_eq!(reader.remaining_len(), 1);
}
