// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// lanyard-jose — Typed lookup tables for JOSE signature algorithms, key
// management algorithms, and content encryption methods.
//
// The cryptography stays inside `jsonwebtoken`. This crate only maps between
// its constants, the RFC 7518 registered names, and our own enums, and builds
// the header/validation objects a signer or encrypter is configured with.

pub mod encryption;
pub mod signature;

pub use encryption::{
    EncryptionHeader, KeyManagementMode, TokenEncryptionAlgorithm, TokenEncryptionMethod,
};
pub use signature::{SignatureFamily, TokenSignatureAlgorithm};
