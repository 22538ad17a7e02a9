//! RSA certificates.

use crate::{
    certificate::CertificateDetails, decode::Decode, reader::Reader, Algorithm, HashAlg, Mpint,
    Result,
};

/// RSA certificate.
///
/// Decoded from the `ssh-rsa-cert-v01@openssh.com` type as well as the
/// RFC8332 `rsa-sha2-256`/`rsa-sha2-512` certificate types, which share
/// the same field layout and differ only in the hash the CA signed with.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RsaCertificate<'a> {
    /// Hash function named by the certificate type string, if any.
    hash: Option<HashAlg>,

    /// CA-provided random nonce.
    nonce: &'a [u8],

    /// RSA public exponent.
    e: Mpint<'a>,

    /// RSA modulus.
    n: Mpint<'a>,

    /// Fields shared by all certificate variants.
    details: CertificateDetails<'a>,
}

impl<'a> RsaCertificate<'a> {
    /// Decode the fields which follow the magic.
    pub(crate) fn decode(reader: &mut Reader<'a>, hash: Option<HashAlg>) -> Result<Self> {
        let nonce = <&[u8]>::decode(reader)?;
        let e = Mpint::decode(reader)?;
        let n = Mpint::decode(reader)?;
        let details = CertificateDetails::decode(reader)?;

        Ok(Self {
            hash,
            nonce,
            e,
            n,
            details,
        })
    }

    /// Get the [`Algorithm`] for this certificate.
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::Rsa { hash: self.hash }
    }

    /// CA-provided nonce.
    pub fn nonce(&self) -> &'a [u8] {
        self.nonce
    }

    /// RSA public exponent.
    pub fn e(&self) -> Mpint<'a> {
        self.e
    }

    /// RSA modulus.
    pub fn n(&self) -> Mpint<'a> {
        self.n
    }

    /// Fields shared by all certificate variants.
    pub fn details(&self) -> &CertificateDetails<'a> {
        &self.details
    }
}
