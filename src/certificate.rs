//! OpenSSH certificate support.
//!
//! Decode-only: certificates parsed by this module are zero-copy views
//! borrowing from the binary blob they were decoded from, per the format
//! described in [PROTOCOL.certkeys].
//!
//! [PROTOCOL.certkeys]: https://cvsweb.openbsd.org/src/usr.bin/ssh/PROTOCOL.certkeys?annotate=HEAD

mod dsa;
mod ecdsa;
mod ed25519;
mod extensions;
mod options;
mod principals;
mod rsa;

pub use self::{
    dsa::DsaCertificate,
    ecdsa::EcdsaCertificate,
    ed25519::Ed25519Certificate,
    extensions::{ExtensionFlags, Extensions, ExtensionsIter},
    options::{CriticalOption, CriticalOptionKind, CriticalOptions, CriticalOptionsIter},
    principals::{Principals, PrincipalsIter},
    rsa::RsaCertificate,
};

use crate::{algorithm::Algorithm, decode::Decode, reader::Reader, Error, Result};
use core::fmt;

/// Certificate types.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CertType {
    /// User certificate.
    User = 1,

    /// Host certificate.
    Host = 2,
}

impl CertType {
    /// Is this a user certificate?
    pub fn is_user(self) -> bool {
        self == CertType::User
    }

    /// Is this a host certificate?
    pub fn is_host(self) -> bool {
        self == CertType::Host
    }
}

impl<'a> Decode<'a> for CertType {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        match u32::decode(reader)? {
            1 => Ok(CertType::User),
            2 => Ok(CertType::Host),
            _ => Err(Error::MalformedCertificate),
        }
    }
}

impl From<CertType> for u32 {
    fn from(cert_type: CertType) -> u32 {
        cert_type as u32
    }
}

impl fmt::Display for CertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CertType::User => "user",
            CertType::Host => "host",
        })
    }
}

/// Fields shared by every certificate variant: everything between the
/// variant-specific key material and the end of the blob.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CertificateDetails<'a> {
    /// Serial number.
    serial: u64,

    /// User or host certificate.
    cert_type: CertType,

    /// Key ID: a free-form label set by the CA at issue time.
    key_id: &'a [u8],

    /// Principals this certificate is valid for.
    valid_principals: Principals<'a>,

    /// Start of the validity window (seconds since the Unix epoch).
    valid_after: u64,

    /// End of the validity window (seconds since the Unix epoch).
    valid_before: u64,

    /// Critical options.
    critical_options: CriticalOptions<'a>,

    /// Extensions.
    extensions: Extensions<'a>,

    /// Reserved field, unused by current implementations.
    reserved: &'a [u8],

    /// CA public key in SSH wire format.
    signature_key: &'a [u8],

    /// Blob prefix covered by the signature.
    signed_data: &'a [u8],

    /// CA signature over [`CertificateDetails::signed_data`].
    signature: &'a [u8],
}

impl<'a> CertificateDetails<'a> {
    /// Decode the shared tail fields.
    ///
    /// Must be invoked with a reader positioned immediately after the
    /// variant-specific key material, on the same reader that consumed the
    /// magic: the signed data is the consumed prefix up to the signature's
    /// length prefix.
    pub(crate) fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        let serial = u64::decode(reader)?;
        let cert_type = CertType::decode(reader)?;
        let key_id = <&[u8]>::decode(reader)?;
        let valid_principals = Principals::decode(reader)?;
        let valid_after = u64::decode(reader)?;
        let valid_before = u64::decode(reader)?;
        let critical_options = CriticalOptions::decode(reader)?;
        let extensions = Extensions::decode(reader)?;
        let reserved = <&[u8]>::decode(reader)?;
        let signature_key = <&[u8]>::decode(reader)?;
        let signed_data = reader.consumed();
        let signature = <&[u8]>::decode(reader)?;

        Ok(Self {
            serial,
            cert_type,
            key_id,
            valid_principals,
            valid_after,
            valid_before,
            critical_options,
            extensions,
            reserved,
            signature_key,
            signed_data,
            signature,
        })
    }

    /// Serial number.
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// User or host certificate.
    pub fn cert_type(&self) -> CertType {
        self.cert_type
    }

    /// Key ID set by the CA at issue time.
    pub fn key_id(&self) -> &'a [u8] {
        self.key_id
    }

    /// Principals this certificate is valid for.
    pub fn valid_principals(&self) -> Principals<'a> {
        self.valid_principals
    }

    /// Start of the validity window (seconds since the Unix epoch).
    pub fn valid_after(&self) -> u64 {
        self.valid_after
    }

    /// End of the validity window (seconds since the Unix epoch).
    pub fn valid_before(&self) -> u64 {
        self.valid_before
    }

    /// Is the given Unix time inside the validity window?
    ///
    /// The window is half-open: `valid_after <= time < valid_before`.
    /// Note the parser does not require the window to be well-formed;
    /// an inverted window is simply never valid.
    pub fn valid_at(&self, time: u64) -> bool {
        self.valid_after <= time && time < self.valid_before
    }

    /// Critical options.
    pub fn critical_options(&self) -> CriticalOptions<'a> {
        self.critical_options
    }

    /// Extensions.
    pub fn extensions(&self) -> Extensions<'a> {
        self.extensions
    }

    /// Reserved field.
    pub fn reserved(&self) -> &'a [u8] {
        self.reserved
    }

    /// CA public key, in SSH wire format.
    pub fn signature_key(&self) -> &'a [u8] {
        self.signature_key
    }

    /// The blob prefix covered by the CA signature: everything from the
    /// magic's length prefix up to (but excluding) the signature field's
    /// length prefix.
    pub fn signed_data(&self) -> &'a [u8] {
        self.signed_data
    }

    /// Byte length of [`CertificateDetails::signed_data`].
    pub fn signed_data_len(&self) -> usize {
        self.signed_data.len()
    }

    /// CA signature over [`CertificateDetails::signed_data`], in SSH wire
    /// format.
    pub fn signature(&self) -> &'a [u8] {
        self.signature
    }
}

/// OpenSSH certificate: a zero-copy view of a binary certificate blob.
///
/// One variant per key family; the head fields differ per variant while
/// the tail fields (serial, type, validity, options, signature, ...) are
/// shared and reachable through the dispatching accessors on this type.
///
/// A certificate borrows from the blob it was parsed from and must not
/// outlive it. No cryptography is performed: to verify a certificate,
/// hand [`Certificate::signed_data`], [`Certificate::signature_key`], and
/// [`Certificate::signature`] to an external signature provider.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Certificate<'a> {
    /// RSA certificate.
    Rsa(RsaCertificate<'a>),

    /// DSA certificate.
    Dsa(DsaCertificate<'a>),

    /// ECDSA certificate.
    Ecdsa(EcdsaCertificate<'a>),

    /// Ed25519 certificate.
    Ed25519(Ed25519Certificate<'a>),
}

impl<'a> Certificate<'a> {
    /// Parse a certificate from its binary blob.
    ///
    /// A single top-down pass with no backtracking. The whole blob must
    /// be consumed exactly; trailing bytes are
    /// [`Error::MalformedCertificate`].
    pub fn from_bytes(blob: &'a [u8]) -> Result<Self> {
        let mut reader = Reader::new(blob);
        let magic = <&[u8]>::decode(&mut reader)?;

        let certificate = match Algorithm::from_certificate_magic(magic)? {
            Algorithm::Dsa => Certificate::Dsa(DsaCertificate::decode(&mut reader)?),
            Algorithm::Ecdsa { curve } => {
                Certificate::Ecdsa(EcdsaCertificate::decode(&mut reader, curve)?)
            }
            Algorithm::Ed25519 => Certificate::Ed25519(Ed25519Certificate::decode(&mut reader)?),
            Algorithm::Rsa { hash } => Certificate::Rsa(RsaCertificate::decode(&mut reader, hash)?),
        };

        reader.finish(certificate)
    }

    /// Get the [`Algorithm`] for this certificate.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Certificate::Rsa(cert) => cert.algorithm(),
            Certificate::Dsa(cert) => cert.algorithm(),
            Certificate::Ecdsa(cert) => cert.algorithm(),
            Certificate::Ed25519(cert) => cert.algorithm(),
        }
    }

    /// CA-provided nonce.
    pub fn nonce(&self) -> &'a [u8] {
        match self {
            Certificate::Rsa(cert) => cert.nonce(),
            Certificate::Dsa(cert) => cert.nonce(),
            Certificate::Ecdsa(cert) => cert.nonce(),
            Certificate::Ed25519(cert) => cert.nonce(),
        }
    }

    /// Fields shared by all certificate variants.
    pub fn details(&self) -> &CertificateDetails<'a> {
        match self {
            Certificate::Rsa(cert) => cert.details(),
            Certificate::Dsa(cert) => cert.details(),
            Certificate::Ecdsa(cert) => cert.details(),
            Certificate::Ed25519(cert) => cert.details(),
        }
    }

    /// Serial number.
    pub fn serial(&self) -> u64 {
        self.details().serial()
    }

    /// User or host certificate.
    pub fn cert_type(&self) -> CertType {
        self.details().cert_type()
    }

    /// Key ID set by the CA at issue time.
    pub fn key_id(&self) -> &'a [u8] {
        self.details().key_id()
    }

    /// Principals this certificate is valid for.
    pub fn valid_principals(&self) -> Principals<'a> {
        self.details().valid_principals()
    }

    /// Start of the validity window (seconds since the Unix epoch).
    pub fn valid_after(&self) -> u64 {
        self.details().valid_after()
    }

    /// End of the validity window (seconds since the Unix epoch).
    pub fn valid_before(&self) -> u64 {
        self.details().valid_before()
    }

    /// Is the given Unix time inside the validity window?
    pub fn valid_at(&self, time: u64) -> bool {
        self.details().valid_at(time)
    }

    /// Critical options.
    pub fn critical_options(&self) -> CriticalOptions<'a> {
        self.details().critical_options()
    }

    /// Extensions.
    pub fn extensions(&self) -> Extensions<'a> {
        self.details().extensions()
    }

    /// Fold the extensions into a bitmask.
    pub fn extension_flags(&self) -> Result<ExtensionFlags> {
        self.details().extensions().flags()
    }

    /// Reserved field.
    pub fn reserved(&self) -> &'a [u8] {
        self.details().reserved()
    }

    /// CA public key, in SSH wire format.
    pub fn signature_key(&self) -> &'a [u8] {
        self.details().signature_key()
    }

    /// The blob prefix covered by the CA signature.
    pub fn signed_data(&self) -> &'a [u8] {
        self.details().signed_data()
    }

    /// Byte length of [`Certificate::signed_data`].
    pub fn signed_data_len(&self) -> usize {
        self.details().signed_data_len()
    }

    /// CA signature over [`Certificate::signed_data`], in SSH wire format.
    pub fn signature(&self) -> &'a [u8] {
        self.details().signature()
    }
}
