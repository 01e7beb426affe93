//! Signed Bearer Tokens
//!
//! Minimal JWT (compact form, HS256 only) built on HMAC-SHA256.
//!
//! The only claim the application relies on is `username`; `iat`/`exp`
//! are standard unix-second timestamps. Verification pins the algorithm
//! to HS256 so an attacker-controlled `alg` header is never honored,
//! and the signature check is constant-time via [`hmac::Mac`].

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// The only algorithm this module will issue or accept
const ALGORITHM: &str = "HS256";

// ============================================================================
// Error Types
// ============================================================================

/// Token issue/verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not three dot-separated base64url segments, or undecodable
    #[error("Token is malformed")]
    Malformed,

    /// Header declares an algorithm other than HS256
    #[error("Token algorithm is not supported")]
    UnsupportedAlgorithm,

    /// Signature does not match
    #[error("Token signature is invalid")]
    InvalidSignature,

    /// `exp` claim is in the past
    #[error("Token is expired")]
    Expired,

    /// Claims segment is not the expected JSON shape
    #[error("Token claims are invalid")]
    InvalidClaims,

    /// Claims could not be serialized at issue time
    #[error("Token signing failed: {0}")]
    SigningFailed(String),
}

// ============================================================================
// Claims
// ============================================================================

/// JOSE header, fixed to `{"alg":"HS256","typ":"JWT"}` on issue
#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

/// Token claims carried by an access token
///
/// `username` is the sole identity claim; everything downstream keys
/// ownership checks off it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Verified identity (the owner of the token)
    pub username: String,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds; absent means no expiry enforced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Claims for `username` issued now, expiring after `ttl_secs` if given
    pub fn for_username(username: impl Into<String>, ttl_secs: Option<i64>) -> Self {
        let iat = Utc::now().timestamp();
        Self {
            username: username.into(),
            iat,
            exp: ttl_secs.map(|ttl| iat + ttl),
        }
    }
}

// ============================================================================
// Issue / Verify
// ============================================================================

fn sign(message: &[u8], secret: &[u8]) -> Vec<u8> {
    // HMAC-SHA256 accepts keys of any length
    let mut mac = HmacSha256::new_from_slice(secret)
        .unwrap_or_else(|_| unreachable!("HMAC-SHA256 accepts any key length"));
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

/// Issue a signed token for the given claims
pub fn issue(claims: &Claims, secret: &[u8]) -> Result<String, TokenError> {
    let header = Header {
        alg: ALGORITHM.to_string(),
        typ: "JWT".to_string(),
    };

    let header_b64 = URL_SAFE_NO_PAD.encode(
        serde_json::to_vec(&header).map_err(|e| TokenError::SigningFailed(e.to_string()))?,
    );
    let claims_b64 = URL_SAFE_NO_PAD.encode(
        serde_json::to_vec(claims).map_err(|e| TokenError::SigningFailed(e.to_string()))?,
    );

    let message = format!("{header_b64}.{claims_b64}");
    let signature_b64 = URL_SAFE_NO_PAD.encode(sign(message.as_bytes(), secret));

    Ok(format!("{message}.{signature_b64}"))
}

/// Verify a token against the current clock
pub fn verify(token: &str, secret: &[u8]) -> Result<Claims, TokenError> {
    verify_at(token, secret, Utc::now().timestamp())
}

/// Verify a token at an explicit point in time (unix seconds)
///
/// Order matters: the signature is checked before the claims are parsed,
/// so unauthenticated input never reaches the JSON layer beyond the header.
pub fn verify_at(token: &str, secret: &[u8], now: i64) -> Result<Claims, TokenError> {
    let mut parts = token.split('.');
    let (header_b64, claims_b64, signature_b64) =
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(c), Some(s), None) => (h, c, s),
            _ => return Err(TokenError::Malformed),
        };

    let header_bytes = URL_SAFE_NO_PAD
        .decode(header_b64)
        .map_err(|_| TokenError::Malformed)?;
    let header: Header =
        serde_json::from_slice(&header_bytes).map_err(|_| TokenError::Malformed)?;

    if header.alg != ALGORITHM {
        return Err(TokenError::UnsupportedAlgorithm);
    }

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| TokenError::Malformed)?;

    let message = format!("{header_b64}.{claims_b64}");
    let mut mac = HmacSha256::new_from_slice(secret)
        .unwrap_or_else(|_| unreachable!("HMAC-SHA256 accepts any key length"));
    mac.update(message.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| TokenError::InvalidSignature)?;

    let claims_bytes = URL_SAFE_NO_PAD
        .decode(claims_b64)
        .map_err(|_| TokenError::Malformed)?;
    let claims: Claims =
        serde_json::from_slice(&claims_bytes).map_err(|_| TokenError::InvalidClaims)?;

    if let Some(exp) = claims.exp {
        if exp <= now {
            return Err(TokenError::Expired);
        }
    }

    Ok(claims)
}
