// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JWE key management algorithms (RFC 7518 §4.1) and content encryption
// methods (RFC 7518 §5.1).
//
// `jsonwebtoken` models only the RSA key-encryption algorithms as JWK `alg`
// values, so the external mapping is partial; every variant is still
// reachable by its registered name.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::jwk::KeyAlgorithm;
use lanyard_core::error::{LanyardError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

// ---------------------------------------------------------------------------
// Key management algorithm (`alg`)
// ---------------------------------------------------------------------------

/// How the content encryption key is determined or transported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenEncryptionAlgorithm {
    #[serde(rename = "RSA1_5")]
    Rsa1_5,
    #[serde(rename = "RSA-OAEP")]
    RsaOaep,
    #[serde(rename = "RSA-OAEP-256")]
    RsaOaep256,
    #[serde(rename = "A128KW")]
    A128Kw,
    #[serde(rename = "A192KW")]
    A192Kw,
    #[serde(rename = "A256KW")]
    A256Kw,
    #[serde(rename = "dir")]
    Dir,
    #[serde(rename = "ECDH-ES")]
    EcdhEs,
    #[serde(rename = "ECDH-ES+A128KW")]
    EcdhEsA128Kw,
    #[serde(rename = "ECDH-ES+A192KW")]
    EcdhEsA192Kw,
    #[serde(rename = "ECDH-ES+A256KW")]
    EcdhEsA256Kw,
    #[serde(rename = "A128GCMKW")]
    A128GcmKw,
    #[serde(rename = "A192GCMKW")]
    A192GcmKw,
    #[serde(rename = "A256GCMKW")]
    A256GcmKw,
    #[serde(rename = "PBES2-HS256+A128KW")]
    Pbes2Hs256A128Kw,
    #[serde(rename = "PBES2-HS384+A192KW")]
    Pbes2Hs384A192Kw,
    #[serde(rename = "PBES2-HS512+A256KW")]
    Pbes2Hs512A256Kw,
}

/// Key management mode (RFC 7516 §2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyManagementMode {
    /// CEK encrypted to the recipient's public key.
    KeyEncryption,
    /// CEK wrapped with a shared symmetric key.
    KeyWrapping,
    /// CEK agreed directly via ECDH.
    DirectKeyAgreement,
    /// ECDH-agreed key wraps the CEK.
    KeyAgreementWithKeyWrapping,
    /// The shared key is the CEK.
    DirectEncryption,
}

impl TokenEncryptionAlgorithm {
    /// Every variant, in RFC 7518 table order.
    pub const ALL: [Self; 17] = [
        Self::Rsa1_5,
        Self::RsaOaep,
        Self::RsaOaep256,
        Self::A128Kw,
        Self::A192Kw,
        Self::A256Kw,
        Self::Dir,
        Self::EcdhEs,
        Self::EcdhEsA128Kw,
        Self::EcdhEsA192Kw,
        Self::EcdhEsA256Kw,
        Self::A128GcmKw,
        Self::A192GcmKw,
        Self::A256GcmKw,
        Self::Pbes2Hs256A128Kw,
        Self::Pbes2Hs384A192Kw,
        Self::Pbes2Hs512A256Kw,
    ];

    /// Registered `alg` header value.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rsa1_5 => "RSA1_5",
            Self::RsaOaep => "RSA-OAEP",
            Self::RsaOaep256 => "RSA-OAEP-256",
            Self::A128Kw => "A128KW",
            Self::A192Kw => "A192KW",
            Self::A256Kw => "A256KW",
            Self::Dir => "dir",
            Self::EcdhEs => "ECDH-ES",
            Self::EcdhEsA128Kw => "ECDH-ES+A128KW",
            Self::EcdhEsA192Kw => "ECDH-ES+A192KW",
            Self::EcdhEsA256Kw => "ECDH-ES+A256KW",
            Self::A128GcmKw => "A128GCMKW",
            Self::A192GcmKw => "A192GCMKW",
            Self::A256GcmKw => "A256GCMKW",
            Self::Pbes2Hs256A128Kw => "PBES2-HS256+A128KW",
            Self::Pbes2Hs384A192Kw => "PBES2-HS384+A192KW",
            Self::Pbes2Hs512A256Kw => "PBES2-HS512+A256KW",
        }
    }

    /// The matching JWK `alg` constant, for the algorithms `jsonwebtoken`
    /// knows about.
    pub fn key_algorithm(&self) -> Option<KeyAlgorithm> {
        match self {
            Self::Rsa1_5 => Some(KeyAlgorithm::RSA1_5),
            Self::RsaOaep => Some(KeyAlgorithm::RSA_OAEP),
            Self::RsaOaep256 => Some(KeyAlgorithm::RSA_OAEP_256),
            _ => None,
        }
    }

    pub fn mode(&self) -> KeyManagementMode {
        match self {
            Self::Rsa1_5 | Self::RsaOaep | Self::RsaOaep256 => KeyManagementMode::KeyEncryption,
            Self::A128Kw
            | Self::A192Kw
            | Self::A256Kw
            | Self::A128GcmKw
            | Self::A192GcmKw
            | Self::A256GcmKw
            | Self::Pbes2Hs256A128Kw
            | Self::Pbes2Hs384A192Kw
            | Self::Pbes2Hs512A256Kw => KeyManagementMode::KeyWrapping,
            Self::EcdhEs => KeyManagementMode::DirectKeyAgreement,
            Self::EcdhEsA128Kw | Self::EcdhEsA192Kw | Self::EcdhEsA256Kw => {
                KeyManagementMode::KeyAgreementWithKeyWrapping
            }
            Self::Dir => KeyManagementMode::DirectEncryption,
        }
    }

    /// True for `dir`, where no encrypted key is sent.
    pub fn is_direct(&self) -> bool {
        self.mode() == KeyManagementMode::DirectEncryption
    }

    // -- Reverse lookup ------------------------------------------------------

    pub fn from_key_algorithm(key_algorithm: KeyAlgorithm) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.key_algorithm() == Some(key_algorithm))
    }

    /// Find the variant with this registered name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        let found = Self::ALL.into_iter().find(|v| v.name() == name);
        if found.is_none() {
            trace!(name, "no key management algorithm with this name");
        }
        found
    }
}

impl std::fmt::Display for TokenEncryptionAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TokenEncryptionAlgorithm {
    type Err = LanyardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| LanyardError::UnknownAlgorithm(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Content encryption method (`enc`)
// ---------------------------------------------------------------------------

/// Authenticated cipher used on the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenEncryptionMethod {
    #[serde(rename = "A128CBC-HS256")]
    A128CbcHs256,
    #[serde(rename = "A192CBC-HS384")]
    A192CbcHs384,
    #[serde(rename = "A256CBC-HS512")]
    A256CbcHs512,
    #[serde(rename = "A128GCM")]
    A128Gcm,
    #[serde(rename = "A192GCM")]
    A192Gcm,
    #[serde(rename = "A256GCM")]
    A256Gcm,
}

impl TokenEncryptionMethod {
    pub const ALL: [Self; 6] = [
        Self::A128CbcHs256,
        Self::A192CbcHs384,
        Self::A256CbcHs512,
        Self::A128Gcm,
        Self::A192Gcm,
        Self::A256Gcm,
    ];

    /// Registered `enc` header value.
    pub fn name(&self) -> &'static str {
        match self {
            Self::A128CbcHs256 => "A128CBC-HS256",
            Self::A192CbcHs384 => "A192CBC-HS384",
            Self::A256CbcHs512 => "A256CBC-HS512",
            Self::A128Gcm => "A128GCM",
            Self::A192Gcm => "A192GCM",
            Self::A256Gcm => "A256GCM",
        }
    }

    /// Content encryption key size. CBC-HMAC keys hold both the MAC and the
    /// cipher key, hence double the AES size.
    pub fn cek_bit_length(&self) -> u32 {
        match self {
            Self::A128CbcHs256 => 256,
            Self::A192CbcHs384 => 384,
            Self::A256CbcHs512 => 512,
            Self::A128Gcm => 128,
            Self::A192Gcm => 192,
            Self::A256Gcm => 256,
        }
    }

    pub fn is_gcm(&self) -> bool {
        matches!(self, Self::A128Gcm | Self::A192Gcm | Self::A256Gcm)
    }

    /// Find the variant with this registered name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        let found = Self::ALL.into_iter().find(|v| v.name() == name);
        if found.is_none() {
            trace!(name, "no content encryption method with this name");
        }
        found
    }
}

impl std::fmt::Display for TokenEncryptionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TokenEncryptionMethod {
    type Err = LanyardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| LanyardError::UnknownAlgorithm(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Encrypter configuration
// ---------------------------------------------------------------------------

/// JWE protected header: everything an encrypter needs to be configured
/// with, and nothing it computes itself (no `epk`, `iv`, or `tag`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionHeader {
    pub alg: TokenEncryptionAlgorithm,
    pub enc: TokenEncryptionMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cty: Option<String>,
}

impl EncryptionHeader {
    pub fn new(alg: TokenEncryptionAlgorithm, enc: TokenEncryptionMethod) -> Self {
        Self {
            alg,
            enc,
            kid: None,
            typ: Some("JWT".into()),
            cty: None,
        }
    }

    pub fn with_kid(mut self, kid: impl Into<String>) -> Self {
        self.kid = Some(kid.into());
        self
    }

    /// Set `cty`, e.g. `"JWT"` for a nested signed token.
    pub fn with_content_type(mut self, cty: impl Into<String>) -> Self {
        self.cty = Some(cty.into());
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The header as the first segment of a compact JWE.
    pub fn to_base64url(&self) -> Result<String> {
        Ok(URL_SAFE_NO_PAD.encode(self.to_json()?))
    }

    pub fn from_base64url(segment: &str) -> Result<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(segment).map_err(|e| {
            debug!(error = %e, "header segment is not base64url");
            LanyardError::Decode(e.to_string())
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
