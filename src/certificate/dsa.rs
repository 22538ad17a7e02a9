//! DSA certificates.

use crate::{certificate::CertificateDetails, decode::Decode, reader::Reader, Algorithm, Mpint, Result};

/// DSA certificate, decoded from the `ssh-dss-cert-v01@openssh.com` type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DsaCertificate<'a> {
    /// CA-provided random nonce.
    nonce: &'a [u8],

    /// Prime modulus.
    p: Mpint<'a>,

    /// Prime divisor.
    q: Mpint<'a>,

    /// Generator.
    g: Mpint<'a>,

    /// Public key.
    y: Mpint<'a>,

    /// Fields shared by all certificate variants.
    details: CertificateDetails<'a>,
}

impl<'a> DsaCertificate<'a> {
    /// Decode the fields which follow the magic.
    pub(crate) fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        let nonce = <&[u8]>::decode(reader)?;
        let p = Mpint::decode(reader)?;
        let q = Mpint::decode(reader)?;
        let g = Mpint::decode(reader)?;
        let y = Mpint::decode(reader)?;
        let details = CertificateDetails::decode(reader)?;

        Ok(Self {
            nonce,
            p,
            q,
            g,
            y,
            details,
        })
    }

    /// Get the [`Algorithm`] for this certificate.
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::Dsa
    }

    /// CA-provided nonce.
    pub fn nonce(&self) -> &'a [u8] {
        self.nonce
    }

    /// Prime modulus `p`.
    pub fn p(&self) -> Mpint<'a> {
        self.p
    }

    /// Prime divisor `q`.
    pub fn q(&self) -> Mpint<'a> {
        self.q
    }

    /// Generator `g`.
    pub fn g(&self) -> Mpint<'a> {
        self.g
    }

    /// Public key `y`.
    pub fn y(&self) -> Mpint<'a> {
        self.y
    }

    /// Fields shared by all certificate variants.
    pub fn details(&self) -> &CertificateDetails<'a> {
        &self.details
    }
}
