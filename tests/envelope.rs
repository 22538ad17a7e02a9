//! Tests for the textual envelope decoder.

use base64ct::{Base64, Encoding};
use ssh_cert::{envelope, Certificate, Envelope, Error};

fn put_string(out: &mut Vec<u8>, s: &[u8]) {
    out.extend_from_slice(&(s.len() as u32).to_be_bytes());
    out.extend_from_slice(s);
}

/// Build a minimal Ed25519 certificate blob.
fn ed25519_cert_blob() -> Vec<u8> {
    let mut blob = Vec::new();
    put_string(&mut blob, b"ssh-ed25519-cert-v01@openssh.com");
    put_string(&mut blob, &[0x5a; 32]); // nonce
    put_string(&mut blob, &[0x33; 32]); // public key
    blob.extend_from_slice(&2u64.to_be_bytes()); // serial
    blob.extend_from_slice(&1u32.to_be_bytes()); // cert_type: user
    put_string(&mut blob, b"abc"); // key id
    let mut principals = Vec::new();
    put_string(&mut principals, b"root");
    put_string(&mut blob, &principals);
    blob.extend_from_slice(&0u64.to_be_bytes()); // valid after
    blob.extend_from_slice(&u64::MAX.to_be_bytes()); // valid before
    put_string(&mut blob, &[]); // critical options
    put_string(&mut blob, &[]); // extensions
    put_string(&mut blob, &[]); // reserved
    put_string(&mut blob, b"ca-key-blob");
    put_string(&mut blob, b"ca-signature");
    blob
}

fn ed25519_cert_line(comment: &str) -> String {
    let b64 = Base64::encode_string(&ed25519_cert_blob());
    if comment.is_empty() {
        format!("ssh-ed25519-cert-v01@openssh.com {b64}")
    } else {
        format!("ssh-ed25519-cert-v01@openssh.com {b64} {comment}")
    }
}

#[test]
fn decode_envelope_with_comment() {
    let line = ed25519_cert_line("user@example.com");
    let envelope = Envelope::from_openssh(&line).unwrap();

    assert_eq!(envelope.magic(), "ssh-ed25519-cert-v01@openssh.com");
    assert_eq!(envelope.comment(), Some("user@example.com"));
    assert_eq!(envelope.as_bytes(), ed25519_cert_blob());

    let cert = envelope.certificate().unwrap();
    assert!(matches!(cert, Certificate::Ed25519(_)));
    assert_eq!(cert.serial(), 2);
    assert_eq!(cert.key_id(), b"abc");
}

#[test]
fn decode_envelope_without_comment() {
    let line = ed25519_cert_line("");
    let envelope = Envelope::from_openssh(&line).unwrap();
    assert_eq!(envelope.comment(), None);
    envelope.certificate().unwrap();
}

#[test]
fn tolerate_surrounding_whitespace() {
    let line = format!("  {}\n", ed25519_cert_line("user@example.com"));
    let envelope = Envelope::from_openssh(&line).unwrap();
    assert_eq!(envelope.comment(), Some("user@example.com"));
    envelope.certificate().unwrap();
}

#[test]
fn reject_missing_payload() {
    for input in ["", "ssh-ed25519-cert-v01@openssh.com", "   ", "\n"] {
        assert_eq!(
            Envelope::from_openssh(input).unwrap_err(),
            Error::FailToParse,
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn reject_invalid_base64() {
    let err = Envelope::from_openssh("ssh-ed25519-cert-v01@openssh.com AAA!").unwrap_err();
    assert_eq!(err, Error::FailToParse);
}

#[test]
fn reject_textual_binary_magic_mismatch() {
    // The line claims RSA but the blob is an Ed25519 certificate.
    let b64 = Base64::encode_string(&ed25519_cert_blob());
    let line = format!("ssh-rsa-cert-v01@openssh.com {b64}");

    let envelope = Envelope::from_openssh(&line).unwrap();
    assert_eq!(envelope.certificate().unwrap_err(), Error::InvalidMagicString);
}

#[test]
fn decode_in_place_matches_allocating_path() {
    let line = ed25519_cert_line("user@example.com");
    let mut buf = line.clone().into_bytes();

    let (magic, blob) = envelope::decode_in_place(&mut buf).unwrap();
    assert_eq!(magic, "ssh-ed25519-cert-v01@openssh.com");
    assert_eq!(blob, ed25519_cert_blob());

    let cert = Certificate::from_bytes(blob).unwrap();
    assert_eq!(cert.serial(), 2);
}

#[test]
fn decode_in_place_without_comment() {
    let mut buf = format!("{}\n", ed25519_cert_line("")).into_bytes();
    let (_, blob) = envelope::decode_in_place(&mut buf).unwrap();
    assert_eq!(blob, ed25519_cert_blob());
}

#[test]
fn base64_length_and_decode_contract() {
    let blob = ed25519_cert_blob();
    let b64 = Base64::encode_string(&blob);

    let len = ssh_cert::base64::decoded_len(b64.as_bytes()).unwrap();
    assert_eq!(len, blob.len());

    let mut buf = vec![0u8; len];
    let decoded = ssh_cert::base64::decode(b64.as_bytes(), &mut buf).unwrap();
    assert_eq!(decoded, blob);

    let mut in_place = b64.clone().into_bytes();
    let decoded = ssh_cert::base64::decode_in_place(&mut in_place).unwrap();
    assert_eq!(decoded, blob);
}

#[test]
fn decode_in_place_rejects_single_token() {
    let mut buf = b"ssh-ed25519-cert-v01@openssh.com\n".to_vec();
    assert_eq!(
        envelope::decode_in_place(&mut buf).unwrap_err(),
        Error::FailToParse
    );
}
