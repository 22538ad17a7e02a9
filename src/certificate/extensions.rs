//! Certificate extensions.
//!
//! Extensions are attributes a verifier may ignore without rejecting the
//! certificate. The recognized set is small and fixed, so this module
//! folds the on-wire `(name, data)` sequence into a compact bitmask
//! rather than exposing a map.

use crate::{decode::Decode, reader::Reader, Error, Result};

/// `no-touch-required` extension name.
const NO_TOUCH_REQUIRED: &str = "no-touch-required";

/// `permit-X11-forwarding` extension name.
const PERMIT_X11_FORWARDING: &str = "permit-X11-forwarding";

/// `permit-agent-forwarding` extension name.
const PERMIT_AGENT_FORWARDING: &str = "permit-agent-forwarding";

/// `permit-port-forwarding` extension name.
const PERMIT_PORT_FORWARDING: &str = "permit-port-forwarding";

/// `permit-pty` extension name.
const PERMIT_PTY: &str = "permit-pty";

/// `permit-user-rc` extension name.
const PERMIT_USER_RC: &str = "permit-user-rc";

/// Bitmask of the extensions enabled in a certificate.
///
/// Produced by [`Extensions::flags`]. Each recognized extension name maps
/// to one bit; the on-wire data half of each pair is always empty and
/// carries no information.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ExtensionFlags(u8);

impl ExtensionFlags {
    /// `no-touch-required` (FIDO keys): the signature does not require
    /// user presence.
    pub const NO_TOUCH_REQUIRED: u8 = 1 << 0;

    /// `permit-X11-forwarding`.
    pub const PERMIT_X11_FORWARDING: u8 = 1 << 1;

    /// `permit-agent-forwarding`.
    pub const PERMIT_AGENT_FORWARDING: u8 = 1 << 2;

    /// `permit-port-forwarding`.
    pub const PERMIT_PORT_FORWARDING: u8 = 1 << 3;

    /// `permit-pty`.
    pub const PERMIT_PTY: u8 = 1 << 4;

    /// `permit-user-rc`.
    pub const PERMIT_USER_RC: u8 = 1 << 5;

    /// Raw bitmask value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Is no extension enabled?
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Are all of the given bits enabled?
    pub const fn contains(self, bits: u8) -> bool {
        self.0 & bits == bits
    }

    /// Is `no-touch-required` enabled?
    pub const fn no_touch_required(self) -> bool {
        self.contains(Self::NO_TOUCH_REQUIRED)
    }

    /// Is `permit-X11-forwarding` enabled?
    pub const fn permit_x11_forwarding(self) -> bool {
        self.contains(Self::PERMIT_X11_FORWARDING)
    }

    /// Is `permit-agent-forwarding` enabled?
    pub const fn permit_agent_forwarding(self) -> bool {
        self.contains(Self::PERMIT_AGENT_FORWARDING)
    }

    /// Is `permit-port-forwarding` enabled?
    pub const fn permit_port_forwarding(self) -> bool {
        self.contains(Self::PERMIT_PORT_FORWARDING)
    }

    /// Is `permit-pty` enabled?
    pub const fn permit_pty(self) -> bool {
        self.contains(Self::PERMIT_PTY)
    }

    /// Is `permit-user-rc` enabled?
    pub const fn permit_user_rc(self) -> bool {
        self.contains(Self::PERMIT_USER_RC)
    }

    /// Map an extension name to its bit.
    fn bit_for(name: &[u8]) -> Option<u8> {
        if name == NO_TOUCH_REQUIRED.as_bytes() {
            Some(Self::NO_TOUCH_REQUIRED)
        } else if name == PERMIT_X11_FORWARDING.as_bytes() {
            Some(Self::PERMIT_X11_FORWARDING)
        } else if name == PERMIT_AGENT_FORWARDING.as_bytes() {
            Some(Self::PERMIT_AGENT_FORWARDING)
        } else if name == PERMIT_PORT_FORWARDING.as_bytes() {
            Some(Self::PERMIT_PORT_FORWARDING)
        } else if name == PERMIT_PTY.as_bytes() {
            Some(Self::PERMIT_PTY)
        } else if name == PERMIT_USER_RC.as_bytes() {
            Some(Self::PERMIT_USER_RC)
        } else {
            None
        }
    }
}

/// Zero-copy view of a certificate's `extensions` field.
///
/// The wrapped payload is a sequence of `(string name, string data)`
/// pairs where the data half is empty for every extension defined by
/// [PROTOCOL.certkeys].
///
/// [PROTOCOL.certkeys]: https://cvsweb.openbsd.org/src/usr.bin/ssh/PROTOCOL.certkeys?annotate=HEAD
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Extensions<'a> {
    /// Raw payload of the `extensions` field.
    blob: &'a [u8],
}

impl<'a> Extensions<'a> {
    /// Borrow the raw payload.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.blob
    }

    /// Does this certificate carry no extensions?
    pub fn is_empty(&self) -> bool {
        self.blob.is_empty()
    }

    /// Iterate over the raw `(name, data)` pairs.
    pub fn iter(&self) -> ExtensionsIter<'a> {
        ExtensionsIter {
            blob: self.blob,
            offset: 0,
        }
    }

    /// Fold the extension sequence into a bitmask.
    ///
    /// Both halves of every pair are consumed. The fold is insensitive to
    /// the order of the names.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownExtension`] for a name outside the recognized set.
    /// - [`Error::RepeatedExtension`] if a name appears twice.
    /// - A decoding error if a pair is malformed.
    pub fn flags(&self) -> Result<ExtensionFlags> {
        let mut bits = 0u8;

        for pair in self.iter() {
            let (name, _data) = pair?;
            let bit = ExtensionFlags::bit_for(name).ok_or(Error::UnknownExtension)?;

            if bits & bit != 0 {
                return Err(Error::RepeatedExtension);
            }

            bits |= bit;
        }

        Ok(ExtensionFlags(bits))
    }
}

impl<'a> Decode<'a> for Extensions<'a> {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_string().map(|blob| Self { blob })
    }
}

impl<'a> IntoIterator for Extensions<'a> {
    type Item = Result<(&'a [u8], &'a [u8])>;
    type IntoIter = ExtensionsIter<'a>;

    fn into_iter(self) -> ExtensionsIter<'a> {
        self.iter()
    }
}

/// Iterator over the raw `(name, data)` extension pairs.
///
/// A malformed pair yields one `Err` and exhausts the iterator.
#[derive(Clone, Debug)]
pub struct ExtensionsIter<'a> {
    /// Raw payload being walked.
    blob: &'a [u8],

    /// Cursor into the payload.
    offset: usize,
}

impl<'a> ExtensionsIter<'a> {
    /// Has the iterator consumed the entire payload?
    pub fn is_finished(&self) -> bool {
        self.offset >= self.blob.len()
    }

    /// Rewind the iterator to the start of the payload.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl<'a> Iterator for ExtensionsIter<'a> {
    type Item = Result<(&'a [u8], &'a [u8])>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        let mut reader = Reader::new(self.blob.get(self.offset..)?);

        let pair = <&[u8]>::decode(&mut reader)
            .and_then(|name| <&[u8]>::decode(&mut reader).map(|data| (name, data)));

        match pair {
            Ok(pair) => {
                self.offset = self.offset.saturating_add(reader.offset());
                Some(Ok(pair))
            }
            Err(err) => {
                self.offset = self.blob.len();
                Some(Err(err))
            }
        }
    }
}
