//! Decoder-side implementation of the SSH protocol's data type
//! representations as described in [RFC4251 § 5], for the subset of types
//! which appear in certificates.
//!
//! [RFC4251 § 5]: https://datatracker.ietf.org/doc/html/rfc4251#section-5

use crate::{reader::Reader, Result};

/// Decoding trait.
///
/// This trait describes how to decode a given type from a [`Reader`]
/// borrowing from a certificate blob with lifetime `'a`. Decoded values may
/// themselves borrow from the blob, which is what distinguishes this trait
/// from a draining decoder: the blob is the lifetime anchor for everything
/// parsed out of it.
pub trait Decode<'a>: Sized {
    /// Attempt to decode a value of this type using the provided [`Reader`].
    fn decode(reader: &mut Reader<'a>) -> Result<Self>;
}

/// Decode a `uint32` as described in [RFC4251 § 5]:
///
/// > Represents a 32-bit unsigned integer.  Stored as four bytes in the
/// > order of decreasing significance (network byte order).
///
/// [RFC4251 § 5]: https://datatracker.ietf.org/doc/html/rfc4251#section-5
impl<'a> Decode<'a> for u32 {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_u32()
    }
}

/// Decode a `uint64` as described in [RFC4251 § 5]:
///
/// > Represents a 64-bit unsigned integer.  Stored as eight bytes in
/// > the order of decreasing significance.
///
/// [RFC4251 § 5]: https://datatracker.ietf.org/doc/html/rfc4251#section-5
impl<'a> Decode<'a> for u64 {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_u64()
    }
}

/// Decode a borrowed `string` as described in [RFC4251 § 5]:
///
/// > Arbitrary length binary string.  Strings are allowed to contain
/// > arbitrary binary data, including null characters and 8-bit
/// > characters.  They are stored as a uint32 containing its length
/// > (number of bytes that follow) and zero (= empty string) or more
/// > bytes that are the value of the string.
///
/// The decoded slice references the original input.
///
/// [RFC4251 § 5]: https://datatracker.ietf.org/doc/html/rfc4251#section-5
impl<'a> Decode<'a> for &'a [u8] {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_string()
    }
}
