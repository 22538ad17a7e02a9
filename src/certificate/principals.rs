//! Certificate principals: the usernames or hostnames for which a
//! certificate is valid.

use crate::{decode::Decode, reader::Reader, Result};

/// Zero-copy view of a certificate's `valid principals` field.
///
/// The wrapped payload is a back-to-back sequence of length-prefixed
/// strings with no padding between elements. Iteration is lazy; nothing is
/// decoded until the iterator is driven.
///
/// Per [PROTOCOL.certkeys], an empty sequence means the certificate is
/// valid for any principal of the specified type.
///
/// [PROTOCOL.certkeys]: https://cvsweb.openbsd.org/src/usr.bin/ssh/PROTOCOL.certkeys?annotate=HEAD
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Principals<'a> {
    /// Raw payload of the `valid principals` field.
    blob: &'a [u8],
}

impl<'a> Principals<'a> {
    /// Borrow the raw payload.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.blob
    }

    /// Does this certificate name no principals (i.e. is it valid for any)?
    pub fn is_empty(&self) -> bool {
        self.blob.is_empty()
    }

    /// Iterate over the principal names.
    pub fn iter(&self) -> PrincipalsIter<'a> {
        PrincipalsIter {
            blob: self.blob,
            offset: 0,
        }
    }
}

impl<'a> Decode<'a> for Principals<'a> {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_string().map(|blob| Self { blob })
    }
}

impl<'a> IntoIterator for Principals<'a> {
    type Item = Result<&'a [u8]>;
    type IntoIter = PrincipalsIter<'a>;

    fn into_iter(self) -> PrincipalsIter<'a> {
        self.iter()
    }
}

/// Iterator over the principal names of a certificate.
///
/// Each item is a subslice of the certificate blob. A malformed element
/// yields one `Err` and exhausts the iterator; calling [`Iterator::next`]
/// past exhaustion yields `None` without advancing state.
#[derive(Clone, Debug)]
pub struct PrincipalsIter<'a> {
    /// Raw payload being walked.
    blob: &'a [u8],

    /// Cursor into the payload.
    offset: usize,
}

impl<'a> PrincipalsIter<'a> {
    /// Has the iterator consumed the entire payload?
    pub fn is_finished(&self) -> bool {
        self.offset >= self.blob.len()
    }

    /// Rewind the iterator to the start of the payload.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl<'a> Iterator for PrincipalsIter<'a> {
    type Item = Result<&'a [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        let mut reader = Reader::new(self.blob.get(self.offset..)?);

        match <&[u8]>::decode(&mut reader) {
            Ok(principal) => {
                self.offset = self.offset.saturating_add(reader.offset());
                Some(Ok(principal))
            }
            Err(err) => {
                self.offset = self.blob.len();
                Some(Err(err))
            }
        }
    }
}
