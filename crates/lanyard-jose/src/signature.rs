// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JWS signature algorithms (RFC 7518 §3.1) mapped onto `jsonwebtoken`.

use jsonwebtoken::jwk::KeyAlgorithm;
use jsonwebtoken::{Algorithm, Header, Validation};
use lanyard_core::error::{LanyardError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Signature algorithms a token may be signed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenSignatureAlgorithm {
    /// HMAC with SHA-256.
    HS256,
    /// HMAC with SHA-384.
    HS384,
    /// HMAC with SHA-512.
    HS512,
    /// RSASSA-PKCS1-v1_5 with SHA-256.
    RS256,
    RS384,
    RS512,
    /// RSASSA-PSS with SHA-256 and MGF1.
    PS256,
    PS384,
    PS512,
    /// ECDSA on P-256 with SHA-256.
    ES256,
    /// ECDSA on P-384 with SHA-384.
    ES384,
    /// Ed25519.
    EdDSA,
}

/// Broad key type behind a signature algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureFamily {
    Hmac,
    Rsa,
    RsaPss,
    Ecdsa,
    EdDsa,
}

impl TokenSignatureAlgorithm {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::HS256,
        Self::HS384,
        Self::HS512,
        Self::RS256,
        Self::RS384,
        Self::RS512,
        Self::PS256,
        Self::PS384,
        Self::PS512,
        Self::ES256,
        Self::ES384,
        Self::EdDSA,
    ];

    /// The matching `jsonwebtoken` constant.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::HS256 => Algorithm::HS256,
            Self::HS384 => Algorithm::HS384,
            Self::HS512 => Algorithm::HS512,
            Self::RS256 => Algorithm::RS256,
            Self::RS384 => Algorithm::RS384,
            Self::RS512 => Algorithm::RS512,
            Self::PS256 => Algorithm::PS256,
            Self::PS384 => Algorithm::PS384,
            Self::PS512 => Algorithm::PS512,
            Self::ES256 => Algorithm::ES256,
            Self::ES384 => Algorithm::ES384,
            Self::EdDSA => Algorithm::EdDSA,
        }
    }

    /// The matching JWK `alg` constant.
    pub fn key_algorithm(&self) -> KeyAlgorithm {
        match self {
            Self::HS256 => KeyAlgorithm::HS256,
            Self::HS384 => KeyAlgorithm::HS384,
            Self::HS512 => KeyAlgorithm::HS512,
            Self::RS256 => KeyAlgorithm::RS256,
            Self::RS384 => KeyAlgorithm::RS384,
            Self::RS512 => KeyAlgorithm::RS512,
            Self::PS256 => KeyAlgorithm::PS256,
            Self::PS384 => KeyAlgorithm::PS384,
            Self::PS512 => KeyAlgorithm::PS512,
            Self::ES256 => KeyAlgorithm::ES256,
            Self::ES384 => KeyAlgorithm::ES384,
            Self::EdDSA => KeyAlgorithm::EdDSA,
        }
    }

    /// Registered `alg` header value.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
            Self::RS256 => "RS256",
            Self::RS384 => "RS384",
            Self::RS512 => "RS512",
            Self::PS256 => "PS256",
            Self::PS384 => "PS384",
            Self::PS512 => "PS512",
            Self::ES256 => "ES256",
            Self::ES384 => "ES384",
            Self::EdDSA => "EdDSA",
        }
    }

    pub fn family(&self) -> SignatureFamily {
        match self {
            Self::HS256 | Self::HS384 | Self::HS512 => SignatureFamily::Hmac,
            Self::RS256 | Self::RS384 | Self::RS512 => SignatureFamily::Rsa,
            Self::PS256 | Self::PS384 | Self::PS512 => SignatureFamily::RsaPss,
            Self::ES256 | Self::ES384 => SignatureFamily::Ecdsa,
            Self::EdDSA => SignatureFamily::EdDsa,
        }
    }

    /// True for shared-secret (HMAC) algorithms.
    pub fn is_symmetric(&self) -> bool {
        self.family() == SignatureFamily::Hmac
    }

    // -- Reverse lookup ------------------------------------------------------

    /// Find the variant wrapping `algorithm`.
    pub fn from_algorithm(algorithm: Algorithm) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.algorithm() == algorithm)
    }

    /// Find the variant wrapping a JWK `alg`. Encryption-only key algorithms
    /// (`RSA1_5`, `RSA-OAEP`, ...) have no match.
    pub fn from_key_algorithm(key_algorithm: KeyAlgorithm) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key_algorithm() == key_algorithm)
    }

    /// Find the variant with this registered name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        let found = Self::ALL.into_iter().find(|v| v.name() == name);
        if found.is_none() {
            trace!(name, "no signature algorithm with this name");
        }
        found
    }

    /// The algorithm named in an already decoded header.
    pub fn from_header(header: &Header) -> Option<Self> {
        Self::from_algorithm(header.alg)
    }

    /// The algorithm a compact token claims to be signed with.
    ///
    /// Reads the header without verifying the signature, so the answer is
    /// only good for routing to the right key.
    pub fn from_token(token: &str) -> Result<Option<Self>> {
        let header = jsonwebtoken::decode_header(token).map_err(|e| {
            debug!(error = %e, "token header could not be decoded");
            LanyardError::Token(e.to_string())
        })?;
        Ok(Self::from_header(&header))
    }

    // -- Signer / verifier configuration ------------------------------------

    /// A `typ: JWT` header for signing with this algorithm.
    pub fn header(&self) -> Header {
        Header::new(self.algorithm())
    }

    /// Like [`header`](Self::header) but carrying a key id.
    pub fn header_with_kid(&self, kid: impl Into<String>) -> Header {
        let mut header = self.header();
        header.kid = Some(kid.into());
        header
    }

    /// Default validation settings accepting only this algorithm.
    pub fn validation(&self) -> Validation {
        Validation::new(self.algorithm())
    }
}

impl From<TokenSignatureAlgorithm> for Algorithm {
    fn from(value: TokenSignatureAlgorithm) -> Self {
        value.algorithm()
    }
}

impl std::fmt::Display for TokenSignatureAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TokenSignatureAlgorithm {
    type Err = LanyardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| LanyardError::UnknownAlgorithm(s.to_owned()))
    }
}
