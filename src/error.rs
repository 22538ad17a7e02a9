//! Error types.

use core::fmt;

/// Result type with the `ssh-cert` crate's [`Error`] as the error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
///
/// Parsing is strictly fail-fast: every fault is reported as one of these
/// values and no partial certificate is ever returned.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Textual envelope is missing its Base64 payload, or the payload is not
    /// valid Base64.
    FailToParse,

    /// The certificate type string ("magic") is not one of the known values,
    /// or the textual and binary type strings disagree.
    InvalidMagicString,

    /// Structural violation after type dispatch succeeded: unknown
    /// certificate type value, or trailing bytes after the final field.
    MalformedCertificate,

    /// A `uint32`/`uint64` read would overrun the buffer.
    MalformedInteger,

    /// A length-prefixed string declares more bytes than its buffer holds.
    MalformedString,

    /// The same extension appeared more than once.
    RepeatedExtension,

    /// Unrecognized extension name.
    UnknownExtension,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FailToParse => write!(f, "certificate envelope could not be parsed"),
            Error::InvalidMagicString => write!(f, "invalid certificate type string"),
            Error::MalformedCertificate => write!(f, "malformed certificate structure"),
            Error::MalformedInteger => write!(f, "integer field overruns its buffer"),
            Error::MalformedString => write!(f, "string field length overruns its buffer"),
            Error::RepeatedExtension => write!(f, "extension appears more than once"),
            Error::UnknownExtension => write!(f, "unrecognized extension name"),
        }
    }
}

impl core::error::Error for Error {}

impl From<base64ct::Error> for Error {
    fn from(_: base64ct::Error) -> Error {
        Error::FailToParse
    }
}

impl From<base64ct::InvalidEncodingError> for Error {
    fn from(_: base64ct::InvalidEncodingError) -> Error {
        Error::FailToParse
    }
}

impl From<base64ct::InvalidLengthError> for Error {
    fn from(_: base64ct::InvalidLengthError) -> Error {
        Error::FailToParse
    }
}
