//! Property tests for the decode pipeline.

use proptest::prelude::*;
use ssh_cert::{Certificate, Decode, Error, ExtensionFlags, Extensions, Reader};

fn put_u32(out: &mut Vec<u8>, n: u32) {
    out.extend_from_slice(&n.to_be_bytes());
}

fn put_u64(out: &mut Vec<u8>, n: u64) {
    out.extend_from_slice(&n.to_be_bytes());
}

fn put_string(out: &mut Vec<u8>, s: &[u8]) {
    put_u32(out, s.len() as u32);
    out.extend_from_slice(s);
}

/// Field values for a structurally valid Ed25519 certificate.
#[derive(Clone, Debug)]
struct CertFields {
    nonce: Vec<u8>,
    public_key: Vec<u8>,
    serial: u64,
    cert_type: u32,
    key_id: Vec<u8>,
    principals: Vec<Vec<u8>>,
    valid_after: u64,
    valid_before: u64,
    signature_key: Vec<u8>,
    signature: Vec<u8>,
}

impl CertFields {
    fn to_blob(&self) -> Vec<u8> {
        let mut blob = Vec::new();
        put_string(&mut blob, b"ssh-ed25519-cert-v01@openssh.com");
        put_string(&mut blob, &self.nonce);
        put_string(&mut blob, &self.public_key);
        put_u64(&mut blob, self.serial);
        put_u32(&mut blob, self.cert_type);
        put_string(&mut blob, &self.key_id);

        let mut principals = Vec::new();
        for principal in &self.principals {
            put_string(&mut principals, principal);
        }
        put_string(&mut blob, &principals);

        put_u64(&mut blob, self.valid_after);
        put_u64(&mut blob, self.valid_before);
        put_string(&mut blob, &[]); // critical options
        put_string(&mut blob, &[]); // extensions
        put_string(&mut blob, &[]); // reserved
        put_string(&mut blob, &self.signature_key);
        put_string(&mut blob, &self.signature);
        blob
    }
}

fn cert_fields() -> impl Strategy<Value = CertFields> {
    (
        prop::collection::vec(any::<u8>(), 0..64),
        prop::collection::vec(any::<u8>(), 32..=32),
        any::<u64>(),
        1..=2u32,
        prop::collection::vec(any::<u8>(), 0..32),
        prop::collection::vec(prop::collection::vec(any::<u8>(), 0..16), 0..4),
        any::<u64>(),
        any::<u64>(),
        prop::collection::vec(any::<u8>(), 1..64),
        prop::collection::vec(any::<u8>(), 1..80),
    )
        .prop_map(
            |(
                nonce,
                public_key,
                serial,
                cert_type,
                key_id,
                principals,
                valid_after,
                valid_before,
                signature_key,
                signature,
            )| CertFields {
                nonce,
                public_key,
                serial,
                cert_type,
                key_id,
                principals,
                valid_after,
                valid_before,
                signature_key,
                signature,
            },
        )
}

/// The extension names recognized by the bitmask fold.
const EXTENSION_NAMES: &[&str] = &[
    "no-touch-required",
    "permit-X11-forwarding",
    "permit-agent-forwarding",
    "permit-port-forwarding",
    "permit-pty",
    "permit-user-rc",
];

fn extensions_payload(names: &[&str]) -> Vec<u8> {
    let mut seq = Vec::new();
    for name in names {
        put_string(&mut seq, name.as_bytes());
        put_string(&mut seq, &[]);
    }
    seq
}

/// Frame the given names as an extensions payload and run the fold.
fn fold_names(names: &[&str]) -> Result<ExtensionFlags, Error> {
    let mut framed = Vec::new();
    put_string(&mut framed, &extensions_payload(names));

    let mut reader = Reader::new(&framed);
    let extensions = Extensions::decode(&mut reader).unwrap();
    extensions.flags()
}

proptest! {
    /// Parsing a valid blob succeeds, and every borrowed field points into
    /// the blob.
    #[test]
    fn fields_are_subslices(fields in cert_fields()) {
        let blob = fields.to_blob();
        let cert = Certificate::from_bytes(&blob).unwrap();
        let range = blob.as_ptr_range();

        for field in [
            cert.nonce(),
            cert.key_id(),
            cert.valid_principals().as_bytes(),
            cert.signature_key(),
            cert.signed_data(),
            cert.signature(),
        ] {
            if !field.is_empty() {
                prop_assert!(range.contains(&field.as_ptr()));
            }
        }

        // The signed prefix ends at the signature's length prefix.
        prop_assert_eq!(
            cert.signed_data_len(),
            blob.len() - 4 - fields.signature.len()
        );
    }

    /// Repeated parsing of the same input yields identical records.
    #[test]
    fn parse_is_pure(fields in cert_fields()) {
        let blob = fields.to_blob();
        let first = Certificate::from_bytes(&blob).unwrap();
        let second = Certificate::from_bytes(&blob).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Any truncation of a valid blob fails to parse.
    #[test]
    fn truncation_fails(fields in cert_fields(), cut in any::<prop::sample::Index>()) {
        let blob = fields.to_blob();
        let len = cut.index(blob.len());
        let err = Certificate::from_bytes(&blob[..len]).unwrap_err();

        prop_assert!(matches!(
            err,
            Error::MalformedString | Error::MalformedInteger | Error::MalformedCertificate
        ));
    }

    /// Inflating the key_id length prefix beyond the remaining buffer
    /// fails with a string or integer error.
    #[test]
    fn corrupt_length_prefix_fails(fields in cert_fields()) {
        let blob = fields.to_blob();

        // Offset of the key_id length prefix: magic, nonce, and public key
        // strings, then serial and cert_type.
        let offset = (4 + 32) + (4 + fields.nonce.len()) + (4 + 32) + 8 + 4;
        let mut corrupt = blob.clone();
        corrupt[offset..offset + 4].copy_from_slice(&u32::MAX.to_be_bytes());

        let err = Certificate::from_bytes(&corrupt).unwrap_err();
        prop_assert!(matches!(err, Error::MalformedString | Error::MalformedInteger));
    }

    /// The principals iterator exhausts exactly at the end of the payload
    /// and stays exhausted.
    #[test]
    fn principals_iterator_exhaustion(fields in cert_fields()) {
        let blob = fields.to_blob();
        let cert = Certificate::from_bytes(&blob).unwrap();

        let mut iter = cert.valid_principals().iter();
        let mut count = 0usize;
        for principal in &mut iter {
            principal.unwrap();
            count += 1;
        }

        prop_assert_eq!(count, fields.principals.len());
        prop_assert!(iter.is_finished());
        prop_assert!(iter.next().is_none());
        prop_assert!(iter.next().is_none());

        iter.reset();
        prop_assert_eq!(iter.count(), fields.principals.len());
    }

    /// Principals round-trip: iteration yields exactly the encoded names.
    #[test]
    fn principals_round_trip(fields in cert_fields()) {
        let blob = fields.to_blob();
        let cert = Certificate::from_bytes(&blob).unwrap();

        let decoded: Vec<&[u8]> = cert
            .valid_principals()
            .iter()
            .collect::<Result<_, _>>()
            .unwrap();
        prop_assert_eq!(decoded, fields.principals.iter().map(Vec::as_slice).collect::<Vec<_>>());
    }

    /// The extensions fold accepts any duplicate-free subset in any order
    /// and yields the OR of the corresponding bits.
    #[test]
    fn extensions_fold_order_insensitive(
        names in prop::sample::subsequence(EXTENSION_NAMES.to_vec(), 0..=EXTENSION_NAMES.len()),
        shuffle in any::<prop::sample::Index>(),
    ) {
        let mut shuffled = names.clone();
        if !shuffled.is_empty() {
            let len = shuffled.len();
            shuffled.rotate_left(shuffle.index(len));
        }

        let sorted = fold_names(&names).unwrap();
        let rotated = fold_names(&shuffled).unwrap();

        prop_assert_eq!(sorted, rotated);
        prop_assert_eq!(sorted.bits().count_ones() as usize, names.len());
    }

    /// Any duplicated extension name fails the fold.
    #[test]
    fn extensions_fold_rejects_duplicates(
        names in prop::sample::subsequence(EXTENSION_NAMES.to_vec(), 1..=EXTENSION_NAMES.len()),
        dup in any::<prop::sample::Index>(),
    ) {
        let mut with_dup = names.clone();
        with_dup.push(names[dup.index(names.len())]);

        let err = fold_names(&with_dup).unwrap_err();
        prop_assert_eq!(err, Error::RepeatedExtension);
    }
}
