//! Certificate critical options.
//!
//! Critical options are attributes whose semantics a verifier must
//! understand in order to accept the certificate. This module surfaces
//! every option, known or not, and leaves the accept/reject decision to
//! the policy layer.

use crate::{decode::Decode, reader::Reader, Result};
use core::fmt;

/// `force-command` critical option name.
const FORCE_COMMAND: &str = "force-command";

/// `source-address` critical option name.
const SOURCE_ADDRESS: &str = "source-address";

/// `verify-required` critical option name.
const VERIFY_REQUIRED: &str = "verify-required";

/// Critical option names defined by [PROTOCOL.certkeys].
///
/// [PROTOCOL.certkeys]: https://cvsweb.openbsd.org/src/usr.bin/ssh/PROTOCOL.certkeys?annotate=HEAD
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum CriticalOptionKind {
    /// Command to be executed in place of any shell or command specified by
    /// the user.
    ForceCommand,

    /// Comma-separated list of source addresses (CIDR format) from which
    /// the certificate may be used.
    SourceAddress,

    /// The signature must be verified with user presence and verification
    /// (FIDO keys).
    VerifyRequired,
}

impl CriticalOptionKind {
    /// Classify a raw option name.
    pub fn from_name(name: &[u8]) -> Option<Self> {
        if name == FORCE_COMMAND.as_bytes() {
            Some(CriticalOptionKind::ForceCommand)
        } else if name == SOURCE_ADDRESS.as_bytes() {
            Some(CriticalOptionKind::SourceAddress)
        } else if name == VERIFY_REQUIRED.as_bytes() {
            Some(CriticalOptionKind::VerifyRequired)
        } else {
            None
        }
    }

    /// Get the option name string.
    pub fn as_str(self) -> &'static str {
        match self {
            CriticalOptionKind::ForceCommand => FORCE_COMMAND,
            CriticalOptionKind::SourceAddress => SOURCE_ADDRESS,
            CriticalOptionKind::VerifyRequired => VERIFY_REQUIRED,
        }
    }
}

impl fmt::Display for CriticalOptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single critical option: a `(name, data)` pair.
///
/// The data is opaque here; for `force-command` and `source-address` it is
/// itself a length-prefixed string, which the caller interprets.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CriticalOption<'a> {
    /// Raw option name.
    name: &'a [u8],

    /// Raw option data.
    data: &'a [u8],
}

impl<'a> CriticalOption<'a> {
    /// Raw option name.
    pub fn name(&self) -> &'a [u8] {
        self.name
    }

    /// Raw option data.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Classify the name against the known critical options.
    ///
    /// Returns `None` for an unknown name; whether that is fatal is the
    /// caller's policy decision.
    pub fn kind(&self) -> Option<CriticalOptionKind> {
        CriticalOptionKind::from_name(self.name)
    }
}

/// Zero-copy view of a certificate's `critical options` field.
///
/// The wrapped payload is a sequence of `(string name, string data)`
/// pairs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CriticalOptions<'a> {
    /// Raw payload of the `critical options` field.
    blob: &'a [u8],
}

impl<'a> CriticalOptions<'a> {
    /// Borrow the raw payload.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.blob
    }

    /// Does this certificate carry no critical options?
    pub fn is_empty(&self) -> bool {
        self.blob.is_empty()
    }

    /// Iterate over the `(name, data)` pairs.
    pub fn iter(&self) -> CriticalOptionsIter<'a> {
        CriticalOptionsIter {
            blob: self.blob,
            offset: 0,
        }
    }
}

impl<'a> Decode<'a> for CriticalOptions<'a> {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_string().map(|blob| Self { blob })
    }
}

impl<'a> IntoIterator for CriticalOptions<'a> {
    type Item = Result<CriticalOption<'a>>;
    type IntoIter = CriticalOptionsIter<'a>;

    fn into_iter(self) -> CriticalOptionsIter<'a> {
        self.iter()
    }
}

/// Iterator over the critical options of a certificate.
///
/// Consumes two length-prefixed strings per step. A malformed pair yields
/// one `Err` and exhausts the iterator.
#[derive(Clone, Debug)]
pub struct CriticalOptionsIter<'a> {
    /// Raw payload being walked.
    blob: &'a [u8],

    /// Cursor into the payload.
    offset: usize,
}

impl<'a> CriticalOptionsIter<'a> {
    /// Has the iterator consumed the entire payload?
    pub fn is_finished(&self) -> bool {
        self.offset >= self.blob.len()
    }

    /// Rewind the iterator to the start of the payload.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl<'a> Iterator for CriticalOptionsIter<'a> {
    type Item = Result<CriticalOption<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        let mut reader = Reader::new(self.blob.get(self.offset..)?);

        let pair = <&[u8]>::decode(&mut reader)
            .and_then(|name| <&[u8]>::decode(&mut reader).map(|data| CriticalOption { name, data }));

        match pair {
            Ok(option) => {
                self.offset = self.offset.saturating_add(reader.offset());
                Some(Ok(option))
            }
            Err(err) => {
                self.offset = self.blob.len();
                Some(Err(err))
            }
        }
    }
}
