//! ECDSA certificates.

use crate::{
    certificate::CertificateDetails, decode::Decode, reader::Reader, Algorithm, EcdsaCurve, Error,
    Result,
};

/// ECDSA certificate, decoded from one of the
/// `ecdsa-sha2-nistp{256,384,521}-cert-v01@openssh.com` types.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EcdsaCertificate<'a> {
    /// Elliptic curve this certificate's key is on.
    curve: EcdsaCurve,

    /// CA-provided random nonce.
    nonce: &'a [u8],

    /// SEC1-encoded public curve point.
    public_key: &'a [u8],

    /// Fields shared by all certificate variants.
    details: CertificateDetails<'a>,
}

impl<'a> EcdsaCertificate<'a> {
    /// Decode the fields which follow the magic.
    ///
    /// The blob embeds the curve name redundantly with the certificate
    /// type string; the two must agree.
    pub(crate) fn decode(reader: &mut Reader<'a>, curve: EcdsaCurve) -> Result<Self> {
        let nonce = <&[u8]>::decode(reader)?;

        let label = <&[u8]>::decode(reader)?;
        if EcdsaCurve::from_label(label)? != curve {
            return Err(Error::MalformedCertificate);
        }

        let public_key = <&[u8]>::decode(reader)?;
        let details = CertificateDetails::decode(reader)?;

        Ok(Self {
            curve,
            nonce,
            public_key,
            details,
        })
    }

    /// Get the [`Algorithm`] for this certificate.
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::Ecdsa { curve: self.curve }
    }

    /// Elliptic curve this certificate's key is on.
    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }

    /// CA-provided nonce.
    pub fn nonce(&self) -> &'a [u8] {
        self.nonce
    }

    /// SEC1-encoded public curve point.
    pub fn public_key(&self) -> &'a [u8] {
        self.public_key
    }

    /// Fields shared by all certificate variants.
    pub fn details(&self) -> &CertificateDetails<'a> {
        &self.details
    }
}
