//! Multiple precision integer views.

use crate::{decode::Decode, reader::Reader, Result};
use core::fmt;

/// Borrowed multiple precision integer, a.k.a. "mpint".
///
/// This type is used for the big integer components of DSA and RSA
/// certificates. It is a zero-copy view into the certificate blob and
/// treats the integer as opaque big endian bytes; canonicality of the
/// encoding is not enforced at parse time.
///
/// Described in [RFC4251 § 5](https://datatracker.ietf.org/doc/html/rfc4251#section-5):
///
/// > Represents multiple precision integers in two's complement format,
/// > stored as a string, 8 bits per byte, MSB first.  Negative numbers
/// > have the value 1 as the most significant bit of the first byte of
/// > the data partition.  If the most significant bit would be set for
/// > a positive number, the number MUST be preceded by a zero byte.
#[derive(Copy, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Mpint<'a> {
    /// Inner big endian-serialized integer value.
    inner: &'a [u8],
}

impl<'a> Mpint<'a> {
    /// Get the big integer data encoded as big endian bytes.
    ///
    /// This slice will contain a leading zero if the value is positive but
    /// the MSB is also set. Use [`Mpint::as_positive_bytes`] to ensure the
    /// number is positive and strip the leading zero byte if it exists.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.inner
    }

    /// Get the bytes of a positive integer.
    ///
    /// # Returns
    /// - `Some(bytes)` if the number is positive. The leading zero byte
    ///   will be stripped.
    /// - `None` if the value is negative.
    pub fn as_positive_bytes(&self) -> Option<&'a [u8]> {
        match self.as_bytes() {
            [0x00, rest @ ..] => Some(rest),
            [byte, ..] if *byte < 0x80 => Some(self.as_bytes()),
            _ => None,
        }
    }
}

impl AsRef<[u8]> for Mpint<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> Decode<'a> for Mpint<'a> {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_string().map(|inner| Self { inner })
    }
}

impl fmt::Debug for Mpint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mpint(0x{self:x})")
    }
}

impl fmt::LowerHex for Mpint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Mpint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
