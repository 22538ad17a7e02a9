#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::alloc_instead_of_core,
    clippy::arithmetic_side_effects,
    clippy::mod_module_files,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Zero-copy lifecycle
//!
//! The binary certificate blob is the lifetime anchor for everything
//! parsed out of it: every byte-string field of a [`Certificate`] (and of
//! the iterators derived from one) is a subslice of that blob. When the
//! blob was produced by [`Envelope::from_openssh`], the envelope owns it
//! and the certificate must not outlive the envelope. Parsing itself
//! never copies and never allocates; the single allocation in the
//! pipeline is the envelope's Base64 output buffer, and
//! [`envelope::decode_in_place`] elides even that.

#[cfg(feature = "alloc")]
#[macro_use]
extern crate alloc;

mod algorithm;
mod certificate;
mod decode;
mod error;
mod mpint;
mod reader;

pub mod base64;
pub mod envelope;

pub use crate::{
    algorithm::{Algorithm, EcdsaCurve, HashAlg},
    certificate::{
        CertType, Certificate, CertificateDetails, CriticalOption, CriticalOptionKind,
        CriticalOptions, CriticalOptionsIter, DsaCertificate, EcdsaCertificate,
        Ed25519Certificate, ExtensionFlags, Extensions, ExtensionsIter, Principals,
        PrincipalsIter, RsaCertificate,
    },
    decode::Decode,
    error::{Error, Result},
    mpint::Mpint,
    reader::Reader,
};

#[cfg(feature = "alloc")]
pub use crate::envelope::Envelope;
