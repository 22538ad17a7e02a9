//! Textual envelope for OpenSSH certificates.
//!
//! Certificates are distributed as a single line of the form:
//!
//! ```text
//! <type string> <base64 certificate data> <comment>
//! ```
//!
//! ## Example
//!
//! ```text
//! ssh-ed25519-cert-v01@openssh.com AAAAIHNzaC1lZDI1NTE5LWNlcnQt... user@example.com
//! ```
//!
//! The binary blob inside the Base64 payload is the authoritative
//! representation; the leading type string merely repeats the blob's own
//! magic and is cross-checked against it when a certificate is parsed via
//! [`Envelope::certificate`].

use crate::{base64, Error, Result};
use core::str;

#[cfg(feature = "alloc")]
use {crate::Certificate, alloc::vec::Vec};

/// Borrowed view of the space-separated fields of a certificate line.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(not(feature = "alloc"), allow(dead_code))]
struct Fields<'s> {
    /// Certificate type identifier, e.g. `ssh-ed25519-cert-v01@openssh.com`.
    magic: &'s str,

    /// Base64-encoded certificate data.
    base64_data: &'s [u8],

    /// Comment, potentially empty.
    comment: &'s str,
}

#[cfg_attr(not(feature = "alloc"), allow(dead_code))]
impl<'s> Fields<'s> {
    /// Split the given line into its three fields.
    fn decode(bytes: &'s [u8]) -> Result<Self> {
        let mut bytes = bytes.trim_ascii();

        let magic = decode_segment_str(&mut bytes)?;
        let base64_data = decode_segment(&mut bytes)?;
        let comment = str::from_utf8(bytes)
            .map_err(|_| Error::FailToParse)?
            .trim_end();

        if magic.is_empty() || base64_data.is_empty() {
            return Err(Error::FailToParse);
        }

        Ok(Self {
            magic,
            base64_data,
            comment,
        })
    }
}

/// A decoded certificate envelope.
///
/// Owns the binary certificate blob while borrowing the type string and
/// comment from the source text. Certificates parsed from it via
/// [`Envelope::certificate`] borrow from the blob and must not outlive the
/// envelope; dropping the envelope releases the buffer.
#[cfg(feature = "alloc")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Envelope<'s> {
    /// Certificate type identifier from the textual form.
    magic: &'s str,

    /// Comment from the textual form.
    comment: &'s str,

    /// Decoded binary certificate blob.
    blob: Vec<u8>,
}

#[cfg(feature = "alloc")]
impl<'s> Envelope<'s> {
    /// Decode an envelope from its OpenSSH one-line textual form.
    ///
    /// Leading and trailing ASCII whitespace (including a trailing newline)
    /// is tolerated. Allocates exactly once: the output buffer is sized to
    /// the exact decoded length reported by the Base64 decoder.
    pub fn from_openssh(input: &'s str) -> Result<Self> {
        let fields = Fields::decode(input.as_bytes())?;

        Ok(Self {
            magic: fields.magic,
            comment: fields.comment,
            blob: base64::decode_vec(fields.base64_data)?,
        })
    }

    /// The textual certificate type identifier.
    pub fn magic(&self) -> &'s str {
        self.magic
    }

    /// The trailing comment, if one was present.
    pub fn comment(&self) -> Option<&'s str> {
        if self.comment.is_empty() {
            None
        } else {
            Some(self.comment)
        }
    }

    /// The decoded binary certificate blob.
    pub fn as_bytes(&self) -> &[u8] {
        &self.blob
    }

    /// Parse the certificate out of the binary blob.
    ///
    /// In addition to [`Certificate::from_bytes`], this cross-checks that
    /// the textual type string agrees with the magic embedded in the blob;
    /// disagreement is [`Error::InvalidMagicString`].
    pub fn certificate(&self) -> Result<Certificate<'_>> {
        let certificate = Certificate::from_bytes(&self.blob)?;

        if certificate.algorithm().as_certificate_str() != self.magic {
            return Err(Error::InvalidMagicString);
        }

        Ok(certificate)
    }
}

#[cfg(feature = "alloc")]
impl AsRef<[u8]> for Envelope<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Decode a certificate line in place, without allocating.
///
/// Overwrites the Base64 payload region of `line` with the decoded binary
/// blob and returns the textual type string together with the blob
/// subslice. Any comment is ignored. Useful when the caller already owns
/// the line in a writable buffer and no allocator is available.
pub fn decode_in_place(line: &mut [u8]) -> Result<(&str, &[u8])> {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .ok_or(Error::FailToParse)?;
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map(|pos| pos.saturating_add(1))
        .ok_or(Error::FailToParse)?;

    // Locate the payload within the trimmed region.
    let magic_end = line
        .get(start..end)
        .and_then(|trimmed| trimmed.iter().position(|&b| b == b' '))
        .and_then(|pos| start.checked_add(pos))
        .ok_or(Error::FailToParse)?;
    let payload_start = magic_end.saturating_add(1);
    let payload_end = line
        .get(payload_start..end)
        .and_then(|rest| rest.iter().position(|&b| b == b' '))
        .and_then(|pos| payload_start.checked_add(pos))
        .unwrap_or(end);

    if payload_start >= payload_end {
        return Err(Error::FailToParse);
    }

    let (head, tail) = line.split_at_mut(payload_start);
    let magic = head.get(start..magic_end).ok_or(Error::FailToParse)?;
    let magic = str::from_utf8(magic).map_err(|_| Error::FailToParse)?;

    let payload_len = payload_end.saturating_sub(payload_start);
    let payload = tail.get_mut(..payload_len).ok_or(Error::FailToParse)?;
    let blob = base64::decode_in_place(payload)?;

    Ok((magic, blob))
}

/// Parse a segment of the certificate line.
#[cfg_attr(not(feature = "alloc"), allow(dead_code))]
fn decode_segment<'a>(bytes: &mut &'a [u8]) -> Result<&'a [u8]> {
    let start = *bytes;
    let mut len = 0usize;

    loop {
        match *bytes {
            [b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'-' | b'/' | b'=' | b'@' | b'.', rest @ ..] =>
            {
                // Valid character; continue
                *bytes = rest;
                len = len.checked_add(1).ok_or(Error::FailToParse)?;
            }
            [b' ', rest @ ..] => {
                // Encountered space; we're done
                *bytes = rest;
                return start.get(..len).ok_or(Error::FailToParse);
            }
            [_, ..] => {
                // Invalid character
                return Err(Error::FailToParse);
            }
            [] => {
                // End of input, could be truncated or could be no comment
                return start.get(..len).ok_or(Error::FailToParse);
            }
        }
    }
}

/// Parse a segment of the certificate line as a `&str`.
#[cfg_attr(not(feature = "alloc"), allow(dead_code))]
fn decode_segment_str<'a>(bytes: &mut &'a [u8]) -> Result<&'a str> {
    str::from_utf8(decode_segment(bytes)?).map_err(|_| Error::FailToParse)
}
