//! Ed25519 certificates.

use crate::{certificate::CertificateDetails, decode::Decode, reader::Reader, Algorithm, Result};

/// Ed25519 certificate, decoded from the `ssh-ed25519-cert-v01@openssh.com`
/// type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ed25519Certificate<'a> {
    /// CA-provided random nonce.
    nonce: &'a [u8],

    /// Ed25519 public key.
    public_key: &'a [u8],

    /// Fields shared by all certificate variants.
    details: CertificateDetails<'a>,
}

impl<'a> Ed25519Certificate<'a> {
    /// Decode the fields which follow the magic.
    pub(crate) fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        let nonce = <&[u8]>::decode(reader)?;
        let public_key = <&[u8]>::decode(reader)?;
        let details = CertificateDetails::decode(reader)?;

        Ok(Self {
            nonce,
            public_key,
            details,
        })
    }

    /// Get the [`Algorithm`] for this certificate.
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::Ed25519
    }

    /// CA-provided nonce.
    pub fn nonce(&self) -> &'a [u8] {
        self.nonce
    }

    /// Ed25519 public key.
    pub fn public_key(&self) -> &'a [u8] {
        self.public_key
    }

    /// Fields shared by all certificate variants.
    pub fn details(&self) -> &CertificateDetails<'a> {
        &self.details
    }
}
