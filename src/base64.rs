//! Base64 support.
//!
//! Thin wrappers over the constant-time [`base64ct`] decoder which the
//! envelope layer delegates to. The contract is two operations: an exact
//! decoded-length query (used to size the output buffer) and the decode
//! itself, plus an in-place variant for callers which already own a
//! writable buffer and want to avoid the allocation entirely.

pub use base64ct::{Base64, Encoding};

use crate::Result;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Inner constant-time Base64 decoder type from the `base64ct` crate.
type Decoder<'i> = base64ct::Decoder<'i, Base64>;

/// Compute the exact decoded length of the given Base64 input.
pub fn decoded_len(input: &[u8]) -> Result<usize> {
    Ok(Decoder::new(input)?.remaining_len())
}

/// Decode `input` into `dest`, returning the written subslice.
///
/// `dest` must be at least [`decoded_len`] bytes long.
pub fn decode<'o>(input: &[u8], dest: &'o mut [u8]) -> Result<&'o [u8]> {
    Ok(Base64::decode(input, dest)?)
}

/// Decode Base64-encoded `buf` in place, overwriting the input and
/// returning the decoded subslice. No allocation is performed.
pub fn decode_in_place(buf: &mut [u8]) -> Result<&[u8]> {
    Ok(Base64::decode_in_place(buf)?)
}

/// Decode the given Base64 input into a freshly allocated buffer of the
/// exact decoded size.
#[cfg(feature = "alloc")]
pub fn decode_vec(input: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = Decoder::new(input)?;
    let mut out = vec![0u8; decoder.remaining_len()];
    decoder.decode(&mut out)?;
    Ok(out)
}
