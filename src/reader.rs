//! Bounds-checked, zero-copy reader over a certificate blob.

use crate::{Error, Result};

/// Reader which decodes the binary SSH protocol serialization from a
/// borrowed byte slice.
///
/// Unlike a draining reader, this cursor keeps a reference to the full
/// original input: every string it yields is a subslice of that input, and
/// the consumed prefix remains addressable via [`Reader::consumed`] (the
/// certificate's signed data is exactly such a prefix).
///
/// ```
/// use ssh_cert::Reader;
///
/// let mut reader = Reader::new(&[0, 0, 0, 4, 0xde, 0xad, 0xbe, 0xef]);
/// assert_eq!(reader.read_string().unwrap(), &[0xde, 0xad, 0xbe, 0xef]);
/// assert!(reader.is_finished());
/// ```
#[derive(Clone, Debug)]
pub struct Reader<'a> {
    /// Full input being decoded.
    bytes: &'a [u8],

    /// Number of bytes consumed so far.
    offset: usize,
}

impl<'a> Reader<'a> {
    /// Create a new reader over the given input.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the remaining unconsumed data.
    pub fn remaining_len(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Is decoding finished?
    pub fn is_finished(&self) -> bool {
        self.remaining_len() == 0
    }

    /// The already-consumed prefix of the input.
    pub fn consumed(&self) -> &'a [u8] {
        self.bytes.get(..self.offset).unwrap_or_default()
    }

    /// Consume `n` bytes, returning them as a subslice of the input.
    fn take(&mut self, n: usize, overrun: Error) -> Result<&'a [u8]> {
        let end = self.offset.checked_add(n).ok_or(overrun)?;
        let slice = self.bytes.get(self.offset..end).ok_or(overrun)?;
        self.offset = end;
        Ok(slice)
    }

    /// Decode a `uint32` as described in [RFC4251 § 5]: four bytes in the
    /// order of decreasing significance (network byte order).
    ///
    /// [RFC4251 § 5]: https://datatracker.ietf.org/doc/html/rfc4251#section-5
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.take(4, Error::MalformedInteger)?;
        let bytes = bytes.try_into().map_err(|_| Error::MalformedInteger)?;
        Ok(u32::from_be_bytes(bytes))
    }

    /// Decode a `uint64` as described in [RFC4251 § 5]: eight bytes in the
    /// order of decreasing significance.
    ///
    /// [RFC4251 § 5]: https://datatracker.ietf.org/doc/html/rfc4251#section-5
    pub fn read_u64(&mut self) -> Result<u64> {
        let bytes = self.take(8, Error::MalformedInteger)?;
        let bytes = bytes.try_into().map_err(|_| Error::MalformedInteger)?;
        Ok(u64::from_be_bytes(bytes))
    }

    /// Decode a `string` as described in [RFC4251 § 5]: a `uint32` length
    /// followed by that many opaque bytes.
    ///
    /// The returned slice borrows from the original input; nothing is
    /// copied. A declared length of zero yields an empty slice and is
    /// valid. Any overrun, including a truncated length prefix, is
    /// [`Error::MalformedString`].
    ///
    /// [RFC4251 § 5]: https://datatracker.ietf.org/doc/html/rfc4251#section-5
    pub fn read_string(&mut self) -> Result<&'a [u8]> {
        let prefix = self.take(4, Error::MalformedString)?;
        let prefix = prefix.try_into().map_err(|_| Error::MalformedString)?;
        let len = usize::try_from(u32::from_be_bytes(prefix)).map_err(|_| Error::MalformedString)?;
        self.take(len, Error::MalformedString)
    }

    /// Ensure that decoding is finished.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedCertificate`] if unconsumed data remains.
    pub fn ensure_finished(&self) -> Result<()> {
        if self.is_finished() {
            Ok(())
        } else {
            Err(Error::MalformedCertificate)
        }
    }

    /// Finish decoding, returning the given value if there is no remaining
    /// data, or an error otherwise.
    pub fn finish<T>(self, value: T) -> Result<T> {
        self.ensure_finished()?;
        Ok(value)
    }
}
